//! Lifting of the concrete parse tree into the semantic AST.
//!
//! Besides a one-to-one translation of node shapes, lifting applies a fixed
//! set of rewrites so that consumers only ever see a small operator set:
//!
//! - redundant parentheses vanish
//! - unary `+` is dropped
//! - unary `-` over a number and `NOT` over any literal fold into a literal
//! - `BETWEEN` and `NOT BETWEEN` become comparisons joined by `AND` / `OR`
//! - negated infix forms (`NOT IN`, `NOT LIKE`, `IS NOT`) become `NOT`
//!   around the positive form
//!
//! # Examples
//!
//! ```
//! use tel_lang::{lift_program, render};
//!
//! let node = lift_program("x BETWEEN 1 AND 10").unwrap().unwrap();
//! assert_eq!(render(&node), "((x >= 1) AND (x <= 10))");
//! ```

use tracing::{debug, trace};

use crate::{
    ast::{Argument, Expr, Function, Literal, LiteralValue, Node, Operator, Taxon, Token},
    error::{Result, TelError},
    options::LiftOptions,
    parser::Parser,
    quote::unquote,
    tree::{ExprKind, ExprNode, FunctionNode, InfixRight, LiteralNode, TaxonNode},
};

/// Converts parse-tree nodes of one source text into AST nodes.
///
/// The lifter is stateless apart from the source and its options, so one
/// instance can lift any number of nodes parsed from that source.
pub struct Lifter<'a> {
    source: &'a str,
    options: LiftOptions,
}

impl<'a> Lifter<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, LiftOptions::default())
    }

    pub fn with_options(source: &'a str, options: LiftOptions) -> Self {
        Lifter { source, options }
    }

    fn text(&self, node: &ExprNode) -> &'a str {
        node.span.text(self.source)
    }

    fn token_text(&self, token: Token) -> &'a str {
        token.span.text(self.source)
    }

    fn unquoted(&self, token: Token) -> String {
        unquote(self.token_text(token)).into_owned()
    }

    /// Lift one expression node.
    pub fn lift(&self, node: &ExprNode) -> Result<Node> {
        self.lift_at(node, 1)
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(TelError::NestingTooDeep {
                limit: self.options.max_depth,
            });
        }
        Ok(())
    }

    /// Depth grows where the parser's does: parentheses, prefix operators,
    /// `IN` values and function arguments. Operator chains stay level.
    fn lift_at(&self, node: &ExprNode, depth: usize) -> Result<Node> {
        self.check_depth(depth)?;

        match &node.kind {
            ExprKind::Paren(inner) => self.lift_at(inner, depth + 1),
            ExprKind::Literal(literal) => self.lift_literal(literal).map(Node::Literal),
            ExprKind::Unary { operator, right } => {
                let right = self.lift_at(right, depth + 1)?;
                self.lift_unary(node, *operator, right)
            }
            ExprKind::Infix {
                operator,
                left,
                right,
                negated,
            } => self.lift_infix(node, *operator, left, right, *negated, depth),
            ExprKind::Taxon(taxon) => Ok(Node::Taxon(self.lift_taxon(taxon))),
            ExprKind::Function(function) => {
                self.lift_function(function, depth).map(Node::Function)
            }
        }
    }

    fn lift_literal(&self, literal: &LiteralNode) -> Result<Literal> {
        let raw_text = self.token_text(literal.token);
        Ok(Literal::new(self.literal_value(literal)?, raw_text))
    }

    fn literal_value(&self, literal: &LiteralNode) -> Result<LiteralValue> {
        if literal.is_null() {
            return Ok(LiteralValue::Null);
        }
        if literal.is_true() || literal.is_false() {
            return Ok(LiteralValue::Boolean(literal.is_true()));
        }

        let text = self.token_text(literal.token);

        if literal.is_numeric() {
            return text
                .parse::<i64>()
                .map(LiteralValue::Integer)
                .or_else(|_| text.parse::<f64>().map(LiteralValue::Float))
                .map_err(|_| TelError::LiteralCoercion(text.to_string()));
        }

        if literal.is_double_quoted() || literal.is_single_quoted() {
            return Ok(LiteralValue::Text(unquote(text).into_owned()));
        }

        Ok(LiteralValue::Text(text.to_string()))
    }

    fn lift_unary(&self, node: &ExprNode, operator: Token, right: Node) -> Result<Node> {
        let op_text = self.token_text(operator).to_uppercase();
        let operator = Operator::prefix(&op_text)
            .ok_or_else(|| TelError::UnsupportedExpression(self.text(node).to_string()))?;

        match (operator, right) {
            // Unary plus carries no meaning in a filter language
            (Operator::Plus, right) => {
                trace!("dropped unary plus");
                Ok(right)
            }
            (Operator::Minus, Node::Literal(literal)) if literal.value.is_numeric() => {
                let value = match literal.value {
                    LiteralValue::Integer(n) => n
                        .checked_neg()
                        .map_or(LiteralValue::Float(-(n as f64)), LiteralValue::Integer),
                    // 2^63 only fits in i64 once negated
                    LiteralValue::Float(_)
                        if literal
                            .raw_text
                            .parse::<u64>()
                            .is_ok_and(|n| n == i64::MIN.unsigned_abs()) =>
                    {
                        LiteralValue::Integer(i64::MIN)
                    }
                    LiteralValue::Float(n) => LiteralValue::Float(-n),
                    other => other,
                };
                trace!(raw = self.text(node), "folded unary minus into literal");
                Ok(Node::Literal(Literal::new(value, self.text(node))))
            }
            (Operator::Not, Node::Literal(literal)) => {
                let value = !literal.value.is_truthy();
                trace!(value, "folded NOT into literal");
                Ok(Node::Literal(Literal::new(
                    LiteralValue::Boolean(value),
                    if value { "true" } else { "false" },
                )))
            }
            (operator, right) => Ok(Node::Expr(Expr::unary(operator, right))),
        }
    }

    fn lift_infix(
        &self,
        node: &ExprNode,
        operator: Token,
        left: &ExprNode,
        right: &InfixRight,
        negated: bool,
        depth: usize,
    ) -> Result<Node> {
        let op_text = self.token_text(operator).to_uppercase();

        if op_text == "BETWEEN" {
            return self.lift_between(left, right, negated, depth);
        }

        let operator = Operator::infix(&op_text)
            .ok_or_else(|| TelError::UnsupportedExpression(self.text(node).to_string()))?;

        if !negated
            && matches!(operator, Operator::And | Operator::Or)
            && let InfixRight::Single(right) = right
        {
            return self.lift_chain(operator, left, right, depth);
        }

        let mut args = vec![self.lift_at(left, depth)?];
        match right {
            InfixRight::Single(right) => args.push(self.lift_at(right, depth)?),
            InfixRight::List(items) => {
                for item in items {
                    args.push(self.lift_at(item, depth + 1)?);
                }
            }
        }

        let expr = Node::Expr(Expr::new(operator, args));

        if negated {
            trace!(%operator, "wrapped negated operator in NOT");
            Ok(Node::Expr(Expr::unary(Operator::Not, expr)))
        } else {
            Ok(expr)
        }
    }

    /// `AND` or `OR` of the operator node at the head of a left-nested chain.
    fn connective(&self, node: &ExprNode) -> Option<Operator> {
        match &node.kind {
            ExprKind::Infix {
                operator,
                negated: false,
                ..
            } => match self.token_text(*operator).to_uppercase().as_str() {
                "AND" => Some(Operator::And),
                "OR" => Some(Operator::Or),
                _ => None,
            },
            _ => None,
        }
    }

    /// `AND`/`OR` chains nest to the left; the spine is walked in a loop so
    /// a long flat filter does not recurse once per term.
    fn lift_chain(
        &self,
        operator: Operator,
        left: &ExprNode,
        right: &ExprNode,
        depth: usize,
    ) -> Result<Node> {
        let mut spine = vec![(operator, right)];
        let mut leftmost = left;
        while let Some(operator) = self.connective(leftmost)
            && let ExprKind::Infix {
                left,
                right: InfixRight::Single(right),
                ..
            } = &leftmost.kind
        {
            spine.push((operator, right.as_ref()));
            leftmost = left.as_ref();
        }
        trace!(terms = spine.len() + 1, "lifting operator chain");

        let mut node = self.lift_at(leftmost, depth)?;
        for (operator, right) in spine.into_iter().rev() {
            node = Node::Expr(Expr::binary(operator, node, self.lift_at(right, depth)?));
        }
        Ok(node)
    }

    /// `a BETWEEN b AND c` is `(a >= b) AND (a <= c)`;
    /// `a NOT BETWEEN b AND c` is `(a < b) OR (a > c)`.
    fn lift_between(
        &self,
        left: &ExprNode,
        right: &InfixRight,
        negated: bool,
        depth: usize,
    ) -> Result<Node> {
        let left = self.lift_at(left, depth)?;

        let (bounds, bounds_text) = match right {
            InfixRight::Single(right) => (self.lift_at(right, depth)?, self.text(right)),
            InfixRight::List(items) => {
                let text = match (items.first(), items.last()) {
                    (Some(first), Some(last)) => first.span.to(last.span).text(self.source),
                    _ => "",
                };
                return Err(TelError::MalformedBetween(text.to_string()));
            }
        };

        let (low, high) = match bounds {
            Node::Expr(Expr {
                operator: Operator::And,
                args,
            }) if args.len() == 2 => {
                let mut args = args.into_iter();
                (args.next(), args.next())
            }
            _ => (None, None),
        };
        let (Some(low), Some(high)) = (low, high) else {
            return Err(TelError::MalformedBetween(bounds_text.to_string()));
        };

        let (joiner, low_op, high_op) = if negated {
            (Operator::Or, Operator::Lt, Operator::Gt)
        } else {
            (Operator::And, Operator::GtEq, Operator::LtEq)
        };
        trace!(%joiner, "desugared BETWEEN");

        Ok(Node::Expr(Expr::binary(
            joiner,
            Node::Expr(Expr::binary(low_op, left.clone(), low)),
            Node::Expr(Expr::binary(high_op, left, high)),
        )))
    }

    fn lift_taxon(&self, taxon: &TaxonNode) -> Taxon {
        Taxon {
            slug: self.unquoted(taxon.slug),
            namespace: taxon.namespace.map(|t| self.unquoted(t)),
            is_optional: taxon.is_optional,
            tag: taxon.tag.map(|t| self.unquoted(t)),
        }
    }

    fn lift_function(&self, function: &FunctionNode, depth: usize) -> Result<Function> {
        let args = function
            .arguments
            .iter()
            .flatten()
            .map(|arg| self.lift_argument(arg, depth + 1))
            .collect::<Result<Vec<_>>>()?;

        Ok(Function {
            name: self.token_text(function.name).to_string(),
            args,
        })
    }

    /// `name = expr` is a named argument; anything else is positional.
    fn lift_argument(&self, arg: &ExprNode, depth: usize) -> Result<Argument> {
        let mut inner = arg;
        let mut inner_depth = depth;
        while let ExprKind::Paren(wrapped) = &inner.kind {
            inner = wrapped.as_ref();
            inner_depth += 1;
        }

        if let ExprKind::Infix {
            operator,
            left,
            right: InfixRight::Single(value),
            negated: false,
        } = &inner.kind
            && self.token_text(*operator) == "="
        {
            self.check_depth(inner_depth)?;
            return Ok(Argument::named(
                self.text(left),
                self.lift_at(value, inner_depth)?,
            ));
        }

        Ok(Argument::positional(self.lift_at(arg, depth)?))
    }
}

/// Parse and lift `text`, returning the AST of its expression.
///
/// Returns `Ok(None)` when the text holds no expression at all.
pub fn lift_program(text: &str) -> Result<Option<Node>> {
    lift_program_with(text, &LiftOptions::default())
}

/// Like [`lift_program`], with explicit options.
pub fn lift_program_with(text: &str, options: &LiftOptions) -> Result<Option<Node>> {
    let tree = Parser::with_options(text, options)?.parse_program()?;
    debug!(len = text.len(), empty = tree.root.is_none(), "lifting program");

    let lifter = Lifter::with_options(text, *options);
    tree.root.as_ref().map(|root| lifter.lift(root)).transpose()
}
