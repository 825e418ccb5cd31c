//! Text-to-value coercion helpers shared by the validators.

use std::str::FromStr;

/// Returns the value if it is present and not the empty string.
pub(crate) fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Parses a base-10 integer, ignoring surrounding whitespace.
///
/// Decimal points, exponents, and trailing garbage are all parse failures.
pub(crate) fn integer<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}
