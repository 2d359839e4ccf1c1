//! Validate TEL expressions

use super::CliError;
use crate::{LiftOptions, Lifter, Node, Parser};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The TEL expression to validate
    pub expression: String,
    /// Only validate syntax, don't lift
    pub syntax_only: bool,
    /// Parse and lift limits
    pub options: LiftOptions,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// The text holds no expression
    Empty,
    /// Syntax validation passed
    SyntaxValid,
    /// The expression lifted successfully
    Valid(Node),
}

/// Execute a tel check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let source = options.expression.as_str();
    let tree = Parser::with_options(source, &options.options)
        .map_err(crate::TelError::from)?
        .parse_program()?;

    let Some(root) = tree.root else {
        return Ok(CheckResult::Empty);
    };

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let node = Lifter::with_options(source, options.options).lift(&root)?;
    Ok(CheckResult::Valid(node))
}
