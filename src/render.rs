//! Canonical text rendering of identifier parts.
//!
//! Every part is wrapped in double quotes so that delimiters, whitespace and
//! empty parts survive a round trip through the parsers. Quotes inside a part
//! are doubled, although the parsers refuse such parts when reading them
//! back.

use crate::options::DEFAULT_DELIMITER;

/// Quote a single identifier part.
///
/// # Examples
///
/// ```rust
/// use objident::render::quote_part;
///
/// assert_eq!(quote_part("ab.c"), r#""ab.c""#);
/// assert_eq!(quote_part(r#"a"b"#), r#""a""b""#);
/// ```
#[must_use]
pub fn quote_part(part: &str) -> String {
    let mut out = String::with_capacity(part.len() + 2);
    out.push('"');
    for c in part.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Quote every part and join them with the default delimiter.
#[must_use]
pub fn join_parts(parts: &[&str]) -> String {
    let mut out = String::new();
    for (idx, part) in parts.iter().enumerate() {
        if idx > 0 {
            out.push(DEFAULT_DELIMITER);
        }
        out.push_str(&quote_part(part));
    }
    out
}
