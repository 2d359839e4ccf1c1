/// Location of a token or parse-tree node in the source text.
///
/// `start` and `end` are byte offsets (`end` exclusive); `line` and `column`
/// are 1-based and describe `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    /// Span running from the start of `self` to the end of `other`.
    pub fn to(self, other: Span) -> Span {
        Span {
            end: other.end,
            ..self
        }
    }

    /// Slice of `source` covered by this span.
    pub fn text(self, source: &str) -> &str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Literals
    /// Integer or floating-point number
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// .5
    /// 1e-3
    /// ```
    Number,

    /// Text enclosed in double quotes, quotes included
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// "say \"hi\""
    /// ```
    DoubleQuoted,

    /// Text enclosed in single quotes, quotes included
    ///
    /// # Examples
    /// ```text
    /// 'hello'
    /// 'it\'s'
    /// ```
    SingleQuoted,

    /// Bare name of a taxon part or function
    ///
    /// # Examples
    /// ```text
    /// spend
    /// fb_ads
    /// _internal
    /// ```
    Identifier,

    // Keywords (case-insensitive)
    And,
    Or,
    Not,
    In,
    Is,
    Like,
    Between,
    Null,
    True,
    False,

    // Comparison
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<>`
    LtGt,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    /// `||`
    Concat,

    // Taxon punctuation
    /// Optional-taxon marker (`?`)
    Question,
    /// Namespace separator (`|`)
    Pipe,
    /// Tag separator (`:`)
    Colon,

    // Delimiters
    LParen,
    RParen,
    Comma,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Keyword for an identifier, matched case-insensitively.
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        let kind = match ident.to_ascii_uppercase().as_str() {
            "AND" => TokenKind::And,
            "OR" => TokenKind::Or,
            "NOT" => TokenKind::Not,
            "IN" => TokenKind::In,
            "IS" => TokenKind::Is,
            "LIKE" => TokenKind::Like,
            "BETWEEN" => TokenKind::Between,
            "NULL" => TokenKind::Null,
            "TRUE" => TokenKind::True,
            "FALSE" => TokenKind::False,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            TokenKind::Eq
                | TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::LtGt
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
        )
    }
}
