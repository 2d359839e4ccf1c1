use std::fmt;

use serde::{Serialize, Serializer};

/// Operators that may appear in an [`Expr`](crate::ast::Expr) node.
///
/// There is no `BETWEEN`: the lifter rewrites it into comparisons joined by
/// `AND`/`OR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // Logical
    /// Logical AND (`AND`)
    And,
    /// Logical OR (`OR`)
    Or,
    /// Logical negation (`NOT`), always unary
    Not,

    // Predicates
    /// Membership (`IN`), left operand followed by every listed value
    In,
    /// Identity test (`IS`), typically against `NULL`
    Is,
    /// Pattern match (`LIKE`)
    Like,

    // Comparison
    /// Equal (`=`)
    Eq,
    /// Equal (`==`)
    EqEq,
    /// Not equal (`!=`)
    NotEq,
    /// Not equal (`<>`)
    LtGt,
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    LtEq,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    GtEq,

    // Sign
    /// Unary plus (`+`)
    Plus,
    /// Unary minus (`-`)
    Minus,
}

impl Operator {
    /// Canonical upper-case text of the operator.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
            Operator::In => "IN",
            Operator::Is => "IS",
            Operator::Like => "LIKE",
            Operator::Eq => "=",
            Operator::EqEq => "==",
            Operator::NotEq => "!=",
            Operator::LtGt => "<>",
            Operator::Lt => "<",
            Operator::LtEq => "<=",
            Operator::Gt => ">",
            Operator::GtEq => ">=",
            Operator::Plus => "+",
            Operator::Minus => "-",
        }
    }

    /// Operator accepted between a left and a right operand.
    ///
    /// `text` must already be upper-cased.
    pub fn infix(text: &str) -> Option<Operator> {
        let op = match text {
            "AND" => Operator::And,
            "OR" => Operator::Or,
            "IN" => Operator::In,
            "IS" => Operator::Is,
            "LIKE" => Operator::Like,
            "=" => Operator::Eq,
            "==" => Operator::EqEq,
            "!=" => Operator::NotEq,
            "<>" => Operator::LtGt,
            "<" => Operator::Lt,
            "<=" => Operator::LtEq,
            ">" => Operator::Gt,
            ">=" => Operator::GtEq,
            _ => return None,
        };
        Some(op)
    }

    /// Operator accepted in front of a single operand.
    ///
    /// `text` must already be upper-cased.
    pub fn prefix(text: &str) -> Option<Operator> {
        match text {
            "NOT" => Some(Operator::Not),
            "+" => Some(Operator::Plus),
            "-" => Some(Operator::Minus),
            _ => None,
        }
    }

    /// Sign operators are written flush against their operand (`-x`).
    pub fn is_sign(&self) -> bool {
        matches!(self, Operator::Plus | Operator::Minus)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
