//! Identifier and literal quoting for generated SQL.

/// Quote an identifier by wrapping it in `quote_char`, doubling any embedded quote.
pub fn quote_identifier_with(s: &str, quote_char: char) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push(quote_char);
    for c in s.chars() {
        if c == quote_char {
            result.push(quote_char);
        }
        result.push(c);
    }
    result.push(quote_char);
    result
}

/// Backtick-quoted identifier (MySQL).
#[inline]
pub fn quote_backtick(s: &str) -> String {
    quote_identifier_with(s, '`')
}

/// Double-quoted identifier (ANSI / PostgreSQL).
#[inline]
pub fn quote_double(s: &str) -> String {
    quote_identifier_with(s, '"')
}

/// Single-quoted string literal.
///
/// Quotes are doubled. With `escape_backslash` set, backslashes and control
/// characters are escaped too, as MySQL interprets them inside literals.
pub fn quote_literal(s: &str, escape_backslash: bool) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('\'');
    for c in s.chars() {
        match c {
            '\'' => result.push_str("''"),
            '\\' if escape_backslash => result.push_str("\\\\"),
            '\n' if escape_backslash => result.push_str("\\n"),
            '\r' if escape_backslash => result.push_str("\\r"),
            '\t' if escape_backslash => result.push_str("\\t"),
            '\0' if escape_backslash => result.push_str("\\0"),
            c => result.push(c),
        }
    }
    result.push('\'');
    result
}

/// Escape `%`, `_` and `\` so `s` matches literally inside a `LIKE` pattern.
pub fn escape_like(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            result.push('\\');
        }
        result.push(c);
    }
    result
}
