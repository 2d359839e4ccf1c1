//! Canonical text rendering of the AST.
//!
//! Rendering is deterministic and the output re-parses to an equivalent
//! predicate, but it is not the original source: parentheses are normalized,
//! `BETWEEN` stays desugared and unary `+` is gone.
//!
//! # Examples
//!
//! ```
//! use tel_lang::{lift_program, render};
//!
//! let node = lift_program("?ns|slug:tag").unwrap().unwrap();
//! assert_eq!(render(&node), "?ns|slug:tag");
//! ```

use std::fmt;

use crate::{
    ast::{Expr, Function, Literal, Node, Taxon},
    quote::quote_part,
};

/// Render a node to canonical TEL text.
pub fn render(node: &Node) -> String {
    match node {
        Node::Literal(literal) => render_literal(literal),
        Node::Taxon(taxon) => render_taxon(taxon),
        Node::Function(function) => render_function(function),
        Node::Expr(expr) => render_expr(expr),
    }
}

/// Literals render as their source text, byte for byte.
fn render_literal(literal: &Literal) -> String {
    literal.raw_text.clone()
}

/// `[?][namespace|]slug[:tag]`
fn render_taxon(taxon: &Taxon) -> String {
    let mut out = String::new();
    if taxon.is_optional {
        out.push('?');
    }
    if let Some(namespace) = &taxon.namespace {
        out.push_str(&quote_part(namespace));
        out.push('|');
    }
    out.push_str(&quote_part(&taxon.slug));
    if let Some(tag) = &taxon.tag {
        out.push(':');
        out.push_str(&quote_part(tag));
    }
    out
}

fn render_function(function: &Function) -> String {
    let args: Vec<String> = function
        .args
        .iter()
        .map(|arg| match &arg.name {
            Some(name) => format!("{}={}", name, render(&arg.value)),
            None => render(&arg.value),
        })
        .collect();
    format!("{}({})", function.name, args.join(","))
}

/// Unary forms render as `OP x` (`-x` for signs); everything else as
/// `(left OP right)`.
///
/// Only the first two operands are rendered, so `IN` with more than one
/// listed value loses the rest.
// TODO: render every operand of list operators once the IN output format is settled
fn render_expr(expr: &Expr) -> String {
    let op = expr.operator;
    match expr.args.as_slice() {
        [] => op.to_string(),
        [operand] => {
            let padding = if op.is_sign() { "" } else { " " };
            format!("{}{}{}", op, padding, render(operand))
        }
        [left, right, ..] => format!("({} {} {})", render(left), op, render(right)),
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
