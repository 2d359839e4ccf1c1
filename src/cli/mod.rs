//! CLI support for tel-lang
//!
//! The `tel` binary is a thin wrapper around these functions, so the same
//! commands can be embedded in other tools and tested without a process.

mod check;
mod format;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use format::{execute_ast, execute_format};

use std::io;

use thiserror::Error;

use crate::TelError;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Parse or lift error
    #[error("Parse error: {0}")]
    Tel(#[from] TelError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No expression given and nothing piped on stdin
    #[error("No expression provided. Pass it as an argument or pipe it to stdin.")]
    NoInput,

    /// The expression text holds no expression
    #[error("Expression is empty")]
    EmptyExpression,
}
