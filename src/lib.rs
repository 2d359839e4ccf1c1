pub mod ast;
pub mod cli;
pub mod error;
pub mod lexer;
pub mod lift;
pub mod options;
pub mod output;
pub mod parser;
pub mod quote;
pub mod render;
pub mod tree;

pub use ast::{Argument, Expr, Function, Literal, LiteralValue, Node, Operator, Taxon, Token};
pub use error::{SyntaxError, TelError};
pub use lexer::Lexer;
pub use lift::{Lifter, lift_program, lift_program_with};
pub use options::{DEFAULT_MAX_DEPTH, LiftOptions};
pub use output::{to_json, to_json_pretty};
pub use parser::{Parser, parse};
pub use quote::unquote;
pub use render::render;
