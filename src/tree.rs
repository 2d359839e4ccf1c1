//! Concrete parse tree handed from the grammar component to the lifter.
//!
//! Nodes keep source spans rather than text, so the lifter needs the source
//! the tree was parsed from to recover literal and identifier text.

use crate::ast::{Span, Token, TokenKind};

/// Result of parsing a whole program.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseTree<'a> {
    pub source: &'a str,
    /// The top-level expression, `None` for empty input.
    pub root: Option<ExprNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprNode {
    pub span: Span,
    pub kind: ExprKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// `( expr )`
    Paren(Box<ExprNode>),

    Literal(LiteralNode),

    /// `+ right`, `- right`, `NOT right`
    Unary {
        operator: Token,
        right: Box<ExprNode>,
    },

    /// `left [NOT] OP right` or `left [NOT] IN (item, ...)`
    Infix {
        operator: Token,
        left: Box<ExprNode>,
        right: InfixRight,
        /// `NOT` written between the operands (`NOT IN`, `IS NOT`, ...)
        negated: bool,
    },

    Taxon(TaxonNode),

    Function(FunctionNode),
}

#[derive(Debug, Clone, PartialEq)]
pub enum InfixRight {
    Single(Box<ExprNode>),
    /// Parenthesized value list of `IN`
    List(Vec<ExprNode>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralNode {
    pub token: Token,
}

impl LiteralNode {
    pub fn is_numeric(&self) -> bool {
        self.token.kind == TokenKind::Number
    }

    pub fn is_double_quoted(&self) -> bool {
        self.token.kind == TokenKind::DoubleQuoted
    }

    pub fn is_single_quoted(&self) -> bool {
        self.token.kind == TokenKind::SingleQuoted
    }

    pub fn is_null(&self) -> bool {
        self.token.kind == TokenKind::Null
    }

    pub fn is_true(&self) -> bool {
        self.token.kind == TokenKind::True
    }

    pub fn is_false(&self) -> bool {
        self.token.kind == TokenKind::False
    }
}

/// `[?][namespace|]slug[:tag]`, parts still in source form (maybe quoted).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxonNode {
    pub slug: Token,
    pub namespace: Option<Token>,
    pub is_optional: bool,
    pub tag: Option<Token>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionNode {
    pub name: Token,
    /// `None` when nothing is written between the parentheses.
    pub arguments: Option<Vec<ExprNode>>,
}

impl ExprNode {
    pub fn new(span: Span, kind: ExprKind) -> Self {
        ExprNode { span, kind }
    }

    /// Source text covered by this node.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.text(source)
    }

    /// The node with any number of redundant parentheses stripped.
    pub fn unwrap_parens(&self) -> &ExprNode {
        let mut node = self;
        while let ExprKind::Paren(inner) = &node.kind {
            node = inner.as_ref();
        }
        node
    }
}
