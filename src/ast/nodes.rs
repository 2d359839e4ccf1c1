use serde::Serialize;

use crate::ast::Operator;

/// A node of the semantic AST.
///
/// The tree is strictly owned: every parent owns its children and nodes are
/// never shared or mutated once the lifter has built them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Node {
    /// Literal value
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -5
    /// 'active'
    /// null
    /// ```
    Literal(Literal),

    /// Taxon reference
    ///
    /// # Examples
    /// ```text
    /// spend
    /// fb_ads|spend
    /// ?fb_ads|spend:daily
    /// ```
    Taxon(Taxon),

    /// Function call
    ///
    /// # Examples
    /// ```text
    /// now()
    /// coalesce(spend, 0)
    /// date_trunc(period='day', created_at)
    /// ```
    Function(Function),

    /// Operator applied to one or more operands
    Expr(Expr),
}

/// Typed value of a literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl LiteralValue {
    pub fn is_numeric(&self) -> bool {
        matches!(self, LiteralValue::Integer(_) | LiteralValue::Float(_))
    }

    /// Truthiness used when folding `NOT` over a literal.
    pub fn is_truthy(&self) -> bool {
        match self {
            LiteralValue::Null => false,
            LiteralValue::Boolean(b) => *b,
            LiteralValue::Integer(n) => *n != 0,
            LiteralValue::Float(n) => *n != 0.0,
            LiteralValue::Text(s) => !s.is_empty(),
        }
    }
}

/// A literal together with the exact source text it came from.
///
/// `raw_text` always denotes the same value as `value` and is what the
/// renderer emits, so literals round-trip byte for byte.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Literal {
    pub value: LiteralValue,
    pub raw_text: String,
}

impl Literal {
    pub fn new(value: LiteralValue, raw_text: impl Into<String>) -> Self {
        Literal {
            value,
            raw_text: raw_text.into(),
        }
    }
}

/// A namespaced, optionally tagged domain identifier.
///
/// All parts are stored unquoted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Taxon {
    pub slug: String,
    pub namespace: Option<String>,
    pub is_optional: bool,
    pub tag: Option<String>,
}

impl Taxon {
    pub fn new(slug: impl Into<String>) -> Self {
        Taxon {
            slug: slug.into(),
            namespace: None,
            is_optional: false,
            tag: None,
        }
    }
}

/// Function call with arguments in call-site order.
///
/// Arguments are not checked against any signature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    pub name: String,
    pub args: Vec<Argument>,
}

/// A positional (`expr`) or named (`name=expr`) function argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Argument {
    pub name: Option<String>,
    pub value: Node,
}

impl Argument {
    pub fn positional(value: Node) -> Self {
        Argument { name: None, value }
    }

    pub fn named(name: impl Into<String>, value: Node) -> Self {
        Argument {
            name: Some(name.into()),
            value,
        }
    }
}

/// Operator application.
///
/// Arity is 1 for unary forms, 2 for ordinary binary forms and more than 2
/// only for list operators such as `IN`, where `args[0]` is the left operand
/// and the rest are the listed values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expr {
    pub operator: Operator,
    pub args: Vec<Node>,
}

impl Expr {
    pub fn new(operator: Operator, args: Vec<Node>) -> Self {
        debug_assert!(!args.is_empty(), "{operator} expression without operands");
        Expr { operator, args }
    }

    pub fn unary(operator: Operator, operand: Node) -> Self {
        Expr::new(operator, vec![operand])
    }

    pub fn binary(operator: Operator, left: Node, right: Node) -> Self {
        Expr::new(operator, vec![left, right])
    }
}

impl From<Literal> for Node {
    fn from(literal: Literal) -> Self {
        Node::Literal(literal)
    }
}

impl From<Taxon> for Node {
    fn from(taxon: Taxon) -> Self {
        Node::Taxon(taxon)
    }
}

impl From<Function> for Node {
    fn from(function: Function) -> Self {
        Node::Function(function)
    }
}

impl From<Expr> for Node {
    fn from(expr: Expr) -> Self {
        Node::Expr(expr)
    }
}
