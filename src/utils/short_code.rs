//! Parsing of externally supplied short code tokens.

/// Parses a path token into a short code.
///
/// Accepts ASCII digits only (leading zeros allowed) that fit in an `i64`.
/// Signs, whitespace, decimal points and trailing characters are rejected,
/// so `"12abc"` is not read as `12`.
///
/// Returns `None` for malformed tokens; callers treat that the same as an
/// unknown code.
///
/// # Examples
///
/// ```
/// use shorturl::utils::short_code::parse_short_code;
///
/// assert_eq!(parse_short_code("42"), Some(42));
/// assert_eq!(parse_short_code("007"), Some(7));
/// assert_eq!(parse_short_code("-1"), None);
/// assert_eq!(parse_short_code("abc"), None);
/// ```
pub fn parse_short_code(token: &str) -> Option<i64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    token.parse().ok()
}
