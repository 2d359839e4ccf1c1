// tests/lexer_tests.rs

use rstest::rstest;
use tel_lang::ast::{Token, TokenKind};
use tel_lang::lexer::Lexer;

fn lex(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize().unwrap()
}

fn kinds(input: &str) -> Vec<TokenKind> {
    lex(input).into_iter().map(|t| t.kind).collect()
}

fn texts(input: &str) -> Vec<&str> {
    lex(input)
        .into_iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| t.span.text(input))
        .collect()
}

// ============================================================================
// Symbols
// ============================================================================

#[rstest]
#[case("(", TokenKind::LParen)]
#[case(")", TokenKind::RParen)]
#[case(",", TokenKind::Comma)]
#[case("?", TokenKind::Question)]
#[case("|", TokenKind::Pipe)]
#[case(":", TokenKind::Colon)]
#[case("+", TokenKind::Plus)]
#[case("-", TokenKind::Minus)]
#[case("*", TokenKind::Star)]
#[case("/", TokenKind::Slash)]
#[case("%", TokenKind::Percent)]
#[case("=", TokenKind::Eq)]
#[case("<", TokenKind::Lt)]
#[case(">", TokenKind::Gt)]
#[case("==", TokenKind::EqEq)]
#[case("!=", TokenKind::NotEq)]
#[case("<>", TokenKind::LtGt)]
#[case("<=", TokenKind::LtEq)]
#[case(">=", TokenKind::GtEq)]
#[case("||", TokenKind::Concat)]
fn test_symbol_tokens(#[case] input: &str, #[case] expected: TokenKind) {
    assert_eq!(kinds(input), vec![expected, TokenKind::Eof], "input: {input}");
}

#[test]
fn test_two_char_vs_single_char() {
    assert_eq!(
        kinds("< ="),
        vec![TokenKind::Lt, TokenKind::Eq, TokenKind::Eof]
    );
    assert_eq!(
        kinds("| |"),
        vec![TokenKind::Pipe, TokenKind::Pipe, TokenKind::Eof]
    );
}

#[test]
fn test_bare_exclamation_is_invalid() {
    let err = Lexer::new("a ! b").tokenize().unwrap_err();
    assert_eq!(err.text, "!");
    assert_eq!((err.line, err.column), (1, 3));
}

// ============================================================================
// Keywords and Identifiers
// ============================================================================

#[rstest]
#[case("and", TokenKind::And)]
#[case("AND", TokenKind::And)]
#[case("Or", TokenKind::Or)]
#[case("not", TokenKind::Not)]
#[case("in", TokenKind::In)]
#[case("IS", TokenKind::Is)]
#[case("like", TokenKind::Like)]
#[case("BeTwEeN", TokenKind::Between)]
#[case("null", TokenKind::Null)]
#[case("TRUE", TokenKind::True)]
#[case("false", TokenKind::False)]
fn test_keywords_are_case_insensitive(#[case] input: &str, #[case] expected: TokenKind) {
    assert_eq!(kinds(input), vec![expected, TokenKind::Eof]);
}

#[test]
fn test_keywords_vs_identifiers() {
    assert_eq!(
        kinds("android order nothing"),
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_identifiers() {
    assert_eq!(
        texts("spend _private fb_ads2 café"),
        vec!["spend", "_private", "fb_ads2", "café"]
    );
}

// ============================================================================
// Numbers
// ============================================================================

#[rstest]
#[case("42")]
#[case("3.14")]
#[case("10.")]
#[case(".5")]
#[case("1e10")]
#[case("2.5E-3")]
fn test_numbers(#[case] input: &str) {
    assert_eq!(kinds(input), vec![TokenKind::Number, TokenKind::Eof]);
    assert_eq!(texts(input), vec![input]);
}

#[test]
fn test_minus_is_separate_from_number() {
    assert_eq!(
        kinds("-5"),
        vec![TokenKind::Minus, TokenKind::Number, TokenKind::Eof]
    );
}

#[test]
fn test_lone_dot_is_invalid() {
    let err = Lexer::new("x . y").tokenize().unwrap_err();
    assert_eq!(err.text, ".");
}

// ============================================================================
// Quoted Text
// ============================================================================

#[test]
fn test_quoted_text_keeps_quotes() {
    let input = r#""double" 'single'"#;
    assert_eq!(
        kinds(input),
        vec![
            TokenKind::DoubleQuoted,
            TokenKind::SingleQuoted,
            TokenKind::Eof
        ]
    );
    assert_eq!(texts(input), vec![r#""double""#, "'single'"]);
}

#[test]
fn test_escaped_quotes_do_not_terminate() {
    let input = r#""a\"b" 'it\'s'"#;
    assert_eq!(texts(input), vec![r#""a\"b""#, r"'it\'s'"]);
}

#[test]
fn test_other_quote_inside_text() {
    assert_eq!(texts(r#""it's""#), vec![r#""it's""#]);
}

#[test]
fn test_unterminated_string() {
    let err = Lexer::new("x = 'abc").tokenize().unwrap_err();
    assert_eq!(err.text, "'abc");
    assert_eq!((err.line, err.column), (1, 5));
}

// ============================================================================
// Positions
// ============================================================================

#[test]
fn test_spans_track_lines_and_columns() {
    let input = "a AND\n  b";
    let tokens = lex(input);

    assert_eq!((tokens[0].span.line, tokens[0].span.column), (1, 1));
    assert_eq!((tokens[1].span.line, tokens[1].span.column), (1, 3));
    assert_eq!((tokens[2].span.line, tokens[2].span.column), (2, 3));
    assert_eq!(tokens[2].span.text(input), "b");
}

#[test]
fn test_unexpected_character_position() {
    let err = Lexer::new("a = 1\nAND b # 2").tokenize().unwrap_err();
    assert_eq!(err.text, "#");
    assert_eq!((err.line, err.column), (2, 7));
    assert_eq!(
        err.to_string(),
        "Unexpected symbol \"#\" on line 2, position 7"
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("   \n\t"), vec![TokenKind::Eof]);
}
