//! # TEL - Abstract Syntax Tree
//!
//! This module defines the semantic AST for TEL, a small predicate language
//! for filtering over taxa: tagged, namespaced domain identifiers.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens and source spans produced by the lexer
//! - **[nodes]** - The four AST node kinds (literal, taxon, function, expression)
//! - **[operators]** - The closed operator vocabulary
//!
//! ## Quick Start
//!
//! ```text
//! fb_ads|spend > 100 AND ?country:iso NOT IN ('US', 'CA')
//! ```
//!
//! lifts to
//!
//! ```text
//! AND(>(fb_ads|spend, 100), NOT(IN(?country:iso, 'US', 'CA')))
//! ```
//!
//! ## Core Concepts
//!
//! ### Node Kinds
//!
//! - **Literal** - `null`, booleans, numbers and quoted text, with the exact
//!   source text kept alongside the typed value
//! - **Taxon** - `[?][namespace|]slug[:tag]`
//! - **Function** - `name(arg, name=arg, ...)`
//! - **Expr** - an operator applied to one or more operands
//!
//! ### Canonical Operators
//!
//! The lifter reduces syntactic sugar to a small operator set:
//!
//! - `a BETWEEN b AND c` becomes `(a >= b) AND (a <= c)`
//! - `a NOT BETWEEN b AND c` becomes `(a < b) OR (a > c)`
//! - `a NOT IN (...)`, `a NOT LIKE b`, `a IS NOT b` become `NOT` around the
//!   positive form
//! - unary `+` disappears, and `-`/`NOT` fold into literals they precede
//!
//! Keyword operators are always upper case in the AST, whatever case the
//! source used.
pub mod nodes;
pub mod operators;
pub mod tokens;

pub use nodes::{Argument, Expr, Function, Literal, LiteralValue, Node, Taxon};
pub use operators::Operator;
pub use tokens::{Span, Token, TokenKind};
