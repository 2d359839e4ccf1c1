//! Error types shared by the lexer, parser and lifter.

use thiserror::Error;

/// An unexpected token or character reported by the grammar component.
///
/// `line` and `column` are 1-based and point at the first character of the
/// offending text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unexpected symbol \"{text}\" on line {line}, position {column}")]
pub struct SyntaxError {
    pub text: String,
    pub line: usize,
    pub column: usize,
}

/// Errors that abort a lift.
///
/// None of these are recovered internally: the first one raised anywhere in
/// the recursion is returned to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TelError {
    /// The grammar component rejected the input text.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A parse-tree node no lifting rule recognizes.
    #[error("Where expression \"{0}\" is not supported yet.")]
    UnsupportedExpression(String),

    /// The right side of a `BETWEEN` is not `low AND high`.
    #[error(
        "Contents of BETWEEN's AND expression - {0} - are not valid. Must be of form `valueA AND valueB`."
    )]
    MalformedBetween(String),

    /// Numeric literal text that is neither an integer nor a float.
    #[error("Could not convert number {0} to native number representation.")]
    LiteralCoercion(String),

    /// Expression nesting went past the configured limit.
    #[error("Expression is nested deeper than the limit of {limit} levels")]
    NestingTooDeep { limit: usize },
}

pub type Result<T> = std::result::Result<T, TelError>;
