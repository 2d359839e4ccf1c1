use crate::{
    ast::{Span, Token, TokenKind},
    error::{Result, SyntaxError, TelError},
    lexer::Lexer,
    options::LiftOptions,
    tree::{ExprKind, ExprNode, FunctionNode, InfixRight, LiteralNode, ParseTree, TaxonNode},
};

/// Recursive-descent parser producing the concrete parse tree.
///
/// Precedence, loosest first: `OR`, `AND`, prefix `NOT`, predicates
/// (comparisons, `IS`, `IN`, `LIKE`, `BETWEEN`), additive, multiplicative,
/// prefix sign (or `NOT` inside an operand), primaries.
pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    position: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> std::result::Result<Self, SyntaxError> {
        Self::with_options(source, &LiftOptions::default())
    }

    pub fn with_options(
        source: &'a str,
        options: &LiftOptions,
    ) -> std::result::Result<Self, SyntaxError> {
        let tokens = Lexer::new(source).tokenize()?;
        Ok(Parser {
            source,
            tokens,
            position: 0,
            depth: 0,
            max_depth: options.max_depth,
        })
    }

    fn current(&self) -> Token {
        self.peek(0)
    }

    fn peek(&self, offset: usize) -> Token {
        let last = self.tokens.len() - 1;
        self.tokens[(self.position + offset).min(last)]
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.position += 1;
        }
        token
    }

    fn unexpected(&self, token: Token) -> TelError {
        let text = match token.kind {
            TokenKind::Eof => "<EOF>",
            _ => token.span.text(self.source),
        };
        SyntaxError {
            text: text.to_string(),
            line: token.span.line,
            column: token.span.column,
        }
        .into()
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(self.current()))
        }
    }

    fn descend(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(TelError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    /// Parse a complete program: an optional expression followed by EOF.
    pub fn parse_program(mut self) -> Result<ParseTree<'a>> {
        let root = if self.check(TokenKind::Eof) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::Eof)?;

        Ok(ParseTree {
            source: self.source,
            root,
        })
    }

    pub fn parse_expression(&mut self) -> Result<ExprNode> {
        self.descend()?;
        let expr = self.parse_or()?;
        self.ascend();
        Ok(expr)
    }

    fn infix(
        operator: Token,
        left: ExprNode,
        right: InfixRight,
        negated: bool,
        end: Span,
    ) -> ExprNode {
        ExprNode::new(
            left.span.to(end),
            ExprKind::Infix {
                operator,
                left: Box::new(left),
                right,
                negated,
            },
        )
    }

    fn binary(operator: Token, left: ExprNode, right: ExprNode) -> ExprNode {
        let end = right.span;
        Self::infix(
            operator,
            left,
            InfixRight::Single(Box::new(right)),
            false,
            end,
        )
    }

    fn parse_or(&mut self) -> Result<ExprNode> {
        let mut left = self.parse_and()?;

        while self.check(TokenKind::Or) {
            let operator = self.advance();
            let right = self.parse_and()?;
            left = Self::binary(operator, left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<ExprNode> {
        let mut left = self.parse_not()?;

        while self.check(TokenKind::And) {
            let operator = self.advance();
            let right = self.parse_not()?;
            left = Self::binary(operator, left, right);
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<ExprNode> {
        if !self.check(TokenKind::Not) {
            return self.parse_predicate();
        }

        let operator = self.advance();
        self.descend()?;
        let right = self.parse_not()?;
        self.ascend();

        Ok(ExprNode::new(
            operator.span.to(right.span),
            ExprKind::Unary {
                operator,
                right: Box::new(right),
            },
        ))
    }

    fn parse_predicate(&mut self) -> Result<ExprNode> {
        let left = self.parse_additive()?;
        let current = self.current();

        if current.kind.is_comparison() {
            let operator = self.advance();
            let right = self.parse_additive()?;
            return Ok(Self::binary(operator, left, right));
        }

        if current.kind == TokenKind::Is {
            let operator = self.advance();
            let negated = self.check(TokenKind::Not);
            if negated {
                self.advance();
            }
            let right = self.parse_additive()?;
            let end = right.span;
            return Ok(Self::infix(
                operator,
                left,
                InfixRight::Single(Box::new(right)),
                negated,
                end,
            ));
        }

        // `NOT` between operands only belongs to IN, LIKE and BETWEEN
        let negated = current.kind == TokenKind::Not
            && matches!(
                self.peek(1).kind,
                TokenKind::In | TokenKind::Like | TokenKind::Between
            );
        if negated {
            self.advance();
        }

        match self.current().kind {
            TokenKind::In => {
                let operator = self.advance();
                let (items, end) = self.parse_value_list()?;
                Ok(Self::infix(operator, left, InfixRight::List(items), negated, end))
            }
            TokenKind::Like => {
                let operator = self.advance();
                let right = self.parse_additive()?;
                let end = right.span;
                Ok(Self::infix(
                    operator,
                    left,
                    InfixRight::Single(Box::new(right)),
                    negated,
                    end,
                ))
            }
            TokenKind::Between => {
                let operator = self.advance();
                let right = self.parse_between_bounds()?;
                let end = right.span;
                Ok(Self::infix(
                    operator,
                    left,
                    InfixRight::Single(Box::new(right)),
                    negated,
                    end,
                ))
            }
            _ => Ok(left),
        }
    }

    /// `low AND high` becomes an `AND` node; a lone bound is left for the
    /// lifter to reject.
    fn parse_between_bounds(&mut self) -> Result<ExprNode> {
        let low = self.parse_additive()?;
        if !self.check(TokenKind::And) {
            return Ok(low);
        }
        let operator = self.advance();
        let high = self.parse_additive()?;
        Ok(Self::binary(operator, low, high))
    }

    /// `( expr, expr, ... )` after `IN`, or a single unparenthesized value.
    fn parse_value_list(&mut self) -> Result<(Vec<ExprNode>, Span)> {
        if !self.check(TokenKind::LParen) {
            self.descend()?;
            let item = self.parse_additive()?;
            self.ascend();
            let end = item.span;
            return Ok((vec![item], end));
        }
        self.advance();
        let mut items = vec![self.parse_expression()?];
        while self.check(TokenKind::Comma) {
            self.advance();
            items.push(self.parse_expression()?);
        }
        let close = self.expect(TokenKind::RParen)?;
        Ok((items, close.span))
    }

    fn parse_additive(&mut self) -> Result<ExprNode> {
        let mut left = self.parse_multiplicative()?;

        while matches!(
            self.current().kind,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Concat
        ) {
            let operator = self.advance();
            let right = self.parse_multiplicative()?;
            left = Self::binary(operator, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<ExprNode> {
        let mut left = self.parse_unary()?;

        while matches!(
            self.current().kind,
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent
        ) {
            let operator = self.advance();
            let right = self.parse_unary()?;
            left = Self::binary(operator, left, right);
        }
        Ok(left)
    }

    /// Prefix signs, and `NOT` where an operand is expected (`a = NOT b`,
    /// `-NOT a`). In operand position `NOT` binds as tightly as a sign.
    fn parse_unary(&mut self) -> Result<ExprNode> {
        if !matches!(
            self.current().kind,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Not
        ) {
            return self.parse_primary();
        }

        let operator = self.advance();
        self.descend()?;
        let right = self.parse_unary()?;
        self.ascend();

        Ok(ExprNode::new(
            operator.span.to(right.span),
            ExprKind::Unary {
                operator,
                right: Box::new(right),
            },
        ))
    }

    /// Parse primary expressions: literals, parenthesized expressions,
    /// function calls and taxa.
    fn parse_primary(&mut self) -> Result<ExprNode> {
        let token = self.current();

        match token.kind {
            TokenKind::Number | TokenKind::Null | TokenKind::True | TokenKind::False => {
                self.advance();
                Ok(ExprNode::new(
                    token.span,
                    ExprKind::Literal(LiteralNode { token }),
                ))
            }

            // Quoted text is a taxon part only when taxon punctuation follows
            TokenKind::DoubleQuoted | TokenKind::SingleQuoted => {
                if matches!(self.peek(1).kind, TokenKind::Pipe | TokenKind::Colon) {
                    self.parse_taxon()
                } else {
                    self.advance();
                    Ok(ExprNode::new(
                        token.span,
                        ExprKind::Literal(LiteralNode { token }),
                    ))
                }
            }

            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                let close = self.expect(TokenKind::RParen)?;
                Ok(ExprNode::new(
                    token.span.to(close.span),
                    ExprKind::Paren(Box::new(inner)),
                ))
            }

            TokenKind::Identifier if self.peek(1).kind == TokenKind::LParen => {
                self.parse_function()
            }

            TokenKind::Identifier | TokenKind::Question => self.parse_taxon(),

            _ => Err(self.unexpected(token)),
        }
    }

    fn parse_function(&mut self) -> Result<ExprNode> {
        let name = self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::LParen)?;

        let arguments = if self.check(TokenKind::RParen) {
            None
        } else {
            let mut args = vec![self.parse_expression()?];
            while self.check(TokenKind::Comma) {
                self.advance();
                args.push(self.parse_expression()?);
            }
            Some(args)
        };

        let close = self.expect(TokenKind::RParen)?;
        Ok(ExprNode::new(
            name.span.to(close.span),
            ExprKind::Function(FunctionNode { name, arguments }),
        ))
    }

    fn parse_taxon_part(&mut self) -> Result<Token> {
        let token = self.current();
        match token.kind {
            TokenKind::Identifier | TokenKind::DoubleQuoted | TokenKind::SingleQuoted => {
                Ok(self.advance())
            }
            _ => Err(self.unexpected(token)),
        }
    }

    fn parse_taxon(&mut self) -> Result<ExprNode> {
        let first = self.current();
        let is_optional = self.check(TokenKind::Question);
        if is_optional {
            self.advance();
        }

        let mut slug = self.parse_taxon_part()?;
        let mut namespace = None;
        if self.check(TokenKind::Pipe) {
            self.advance();
            namespace = Some(slug);
            slug = self.parse_taxon_part()?;
        }

        let mut last = slug;
        let mut tag = None;
        if self.check(TokenKind::Colon) {
            self.advance();
            let part = self.parse_taxon_part()?;
            tag = Some(part);
            last = part;
        }

        Ok(ExprNode::new(
            first.span.to(last.span),
            ExprKind::Taxon(TaxonNode {
                slug,
                namespace,
                is_optional,
                tag,
            }),
        ))
    }
}

/// Parse `source` into a parse tree using default options.
pub fn parse(source: &str) -> Result<ParseTree<'_>> {
    Parser::new(source)?.parse_program()
}
