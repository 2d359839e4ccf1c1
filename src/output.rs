//! JSON serialization of the AST.
//!
//! Every node becomes an object tagged by `kind`; operators serialize as
//! their canonical text and literal values as plain JSON scalars.
//!
//! # Examples
//!
//! ```
//! use tel_lang::ast::{Node, Taxon};
//! use tel_lang::output::to_json;
//!
//! let node = Node::from(Taxon::new("spend"));
//! assert_eq!(
//!     to_json(&node).unwrap(),
//!     r#"{"kind":"Taxon","slug":"spend","namespace":null,"is_optional":false,"tag":null}"#
//! );
//! ```

use crate::ast::Node;

/// Converts a node to compact JSON.
pub fn to_json(node: &Node) -> Result<String, serde_json::Error> {
    serde_json::to_string(node)
}

/// Converts a node to JSON with 2-space indentation.
pub fn to_json_pretty(node: &Node) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(node)
}
