//! Canonical text and JSON output of lifted expressions

use super::CliError;
use crate::{LiftOptions, Node, lift_program_with, output, render};

fn lift_required(expression: &str, options: &LiftOptions) -> Result<Node, CliError> {
    lift_program_with(expression, options)?.ok_or(CliError::EmptyExpression)
}

/// Lift `expression` and render it back in canonical form.
pub fn execute_format(expression: &str, options: &LiftOptions) -> Result<String, CliError> {
    let node = lift_required(expression, options)?;
    Ok(render(&node))
}

/// Lift `expression` and serialize the AST as JSON.
pub fn execute_ast(
    expression: &str,
    options: &LiftOptions,
    pretty: bool,
) -> Result<String, CliError> {
    let node = lift_required(expression, options)?;
    let json = if pretty {
        output::to_json_pretty(&node)?
    } else {
        output::to_json(&node)?
    };
    Ok(json)
}
