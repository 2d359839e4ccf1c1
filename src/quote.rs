//! Quoting helpers for literal text and taxon parts.
//!
//! Only backslash escapes are understood. The ANSI-SQL convention of doubling
//! a quote inside quoted text (`'it''s'`) is not unescaped.

use std::borrow::Cow;

use crate::lexer::is_identifier;

/// Strip one matching pair of outer quotes and unescape `\"` and `\'`.
///
/// Text without a matching `"..."` or `'...'` wrapper is returned unchanged.
///
/// # Examples
///
/// ```
/// use tel_lang::quote::unquote;
///
/// assert_eq!(unquote(r#""a\"b""#), "a\"b");
/// assert_eq!(unquote(r"'it\'s'"), "it's");
/// assert_eq!(unquote("plain"), "plain");
/// ```
pub fn unquote(text: &str) -> Cow<'_, str> {
    let Some(first) = text.chars().next() else {
        return Cow::Borrowed(text);
    };
    if !matches!(first, '"' | '\'') || !text.ends_with(first) {
        return Cow::Borrowed(text);
    }

    // A lone quote character is both the opening and the closing quote
    let inner = text
        .strip_prefix(first)
        .and_then(|rest| rest.strip_suffix(first))
        .unwrap_or("");

    if inner.contains('\\') {
        Cow::Owned(inner.replace("\\\"", "\"").replace("\\'", "'"))
    } else {
        Cow::Borrowed(inner)
    }
}

/// Render a taxon part so that it lexes back to the same text.
///
/// Bare identifiers are emitted as-is; anything else is wrapped in double
/// quotes with embedded double quotes escaped.
pub fn quote_part(part: &str) -> Cow<'_, str> {
    if is_identifier(part) {
        Cow::Borrowed(part)
    } else {
        Cow::Owned(format!("\"{}\"", part.replace('"', "\\\"")))
    }
}
