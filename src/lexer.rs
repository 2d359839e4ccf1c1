use std::sync::LazyLock;

use regex::Regex;

use crate::{
    ast::{Span, Token, TokenKind},
    error::SyntaxError,
};

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").expect("valid regex")
});

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[_\p{Alphabetic}][_\p{Alphabetic}\p{Nd}]*").expect("valid regex")
});

/// True when `text` lexes as a single bare identifier (and not a keyword).
pub fn is_identifier(text: &str) -> bool {
    IDENTIFIER
        .find(text)
        .is_some_and(|m| m.end() == text.len())
        && TokenKind::keyword(text).is_none()
}

pub struct Lexer<'a> {
    source: &'a str,
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.position..]
    }

    fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.rest().chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn advance_to(&mut self, end: usize) {
        while self.position < end {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn error_here(&self, text: impl Into<String>) -> SyntaxError {
        SyntaxError {
            text: text.into(),
            line: self.line,
            column: self.column,
        }
    }

    fn read_identifier(&mut self) -> TokenKind {
        let start = self.position;
        let len = IDENTIFIER.find(self.rest()).map_or(0, |m| m.end());
        self.advance_to(start + len);

        TokenKind::keyword(&self.source[start..self.position]).unwrap_or(TokenKind::Identifier)
    }

    /// Consume quoted text, quotes and escapes included verbatim.
    fn read_quoted(&mut self, quote: char) -> Result<TokenKind, SyntaxError> {
        let (start, line, column) = (self.position, self.line, self.column);
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                c if c == quote => {
                    self.advance();
                    return Ok(if quote == '"' {
                        TokenKind::DoubleQuoted
                    } else {
                        TokenKind::SingleQuoted
                    });
                }
                '\\' => {
                    self.advance(); // Consume backslash
                    self.advance(); // and whatever it escapes
                }
                _ => self.advance(),
            }
        }

        Err(SyntaxError {
            text: self.source[start..].to_string(),
            line,
            column,
        })
    }

    fn read_number(&mut self) -> TokenKind {
        let start = self.position;
        let len = NUMBER.find(self.rest()).map_or(0, |m| m.end());
        self.advance_to(start + len);
        TokenKind::Number
    }

    /// Consume `width` characters and produce `kind`.
    fn symbol(&mut self, kind: TokenKind, width: usize) -> TokenKind {
        for _ in 0..width {
            self.advance();
        }
        kind
    }

    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        self.skip_whitespace();

        let (start, line, column) = (self.position, self.line, self.column);

        let kind = match self.current_char() {
            None => TokenKind::Eof,
            Some('(') => self.symbol(TokenKind::LParen, 1),
            Some(')') => self.symbol(TokenKind::RParen, 1),
            Some(',') => self.symbol(TokenKind::Comma, 1),
            Some('?') => self.symbol(TokenKind::Question, 1),
            Some(':') => self.symbol(TokenKind::Colon, 1),
            Some('+') => self.symbol(TokenKind::Plus, 1),
            Some('-') => self.symbol(TokenKind::Minus, 1),
            Some('*') => self.symbol(TokenKind::Star, 1),
            Some('/') => self.symbol(TokenKind::Slash, 1),
            Some('%') => self.symbol(TokenKind::Percent, 1),
            Some('|') => match self.peek_char(1) {
                Some('|') => self.symbol(TokenKind::Concat, 2),
                _ => self.symbol(TokenKind::Pipe, 1),
            },
            Some('=') => match self.peek_char(1) {
                Some('=') => self.symbol(TokenKind::EqEq, 2),
                _ => self.symbol(TokenKind::Eq, 1),
            },
            Some('!') => match self.peek_char(1) {
                Some('=') => self.symbol(TokenKind::NotEq, 2),
                _ => return Err(self.error_here("!")),
            },
            Some('<') => match self.peek_char(1) {
                Some('=') => self.symbol(TokenKind::LtEq, 2),
                Some('>') => self.symbol(TokenKind::LtGt, 2),
                _ => self.symbol(TokenKind::Lt, 1),
            },
            Some('>') => match self.peek_char(1) {
                Some('=') => self.symbol(TokenKind::GtEq, 2),
                _ => self.symbol(TokenKind::Gt, 1),
            },
            Some(quote @ ('"' | '\'')) => self.read_quoted(quote)?,
            Some(ch) if ch.is_ascii_digit() => self.read_number(),
            Some('.') if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.read_number()
            }
            Some(ch) if ch.is_alphabetic() || ch == '_' => self.read_identifier(),
            Some(ch) => return Err(self.error_here(ch)),
        };

        Ok(Token {
            kind,
            span: Span {
                start,
                end: self.position,
                line,
                column,
            },
        })
    }

    /// Lex the whole input; the last token is always `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<Token>, SyntaxError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            tokens.push(token);
            if token.kind == TokenKind::Eof {
                return Ok(tokens);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("and OR Not in is like between null TRUE false"),
            vec![
                TokenKind::And,
                TokenKind::Or,
                TokenKind::Not,
                TokenKind::In,
                TokenKind::Is,
                TokenKind::Like,
                TokenKind::Between,
                TokenKind::Null,
                TokenKind::True,
                TokenKind::False,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_taxon_punctuation() {
        assert_eq!(
            kinds("?ns|slug:tag"),
            vec![
                TokenKind::Question,
                TokenKind::Identifier,
                TokenKind::Pipe,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("spend_usd"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier("and"));
        assert!(!is_identifier("two words"));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier(""));
    }
}
