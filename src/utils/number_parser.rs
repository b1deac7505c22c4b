//! Lenient integer parsing for the `number` query parameter.
//!
//! The public API accepts both plain integer syntax and decimal-formatted
//! values like `"4.0"`, which clients generated from float-typed JSON tend to
//! send. Anything else is rejected.

/// Parses a raw query-parameter value into an `i64`.
///
/// # Parsing Rules
///
/// 1. **Strict integer**: `"153"`, `"-7"`, `"+42"` parse directly.
/// 2. **Decimal fallback**: only when the input contains a `.`, it is parsed
///    as `f64` and truncated toward zero, so `"4.9"` → 4 and `"-4.9"` → -4.
///    Non-finite values (`"1.0e999"`) are rejected; finite values beyond the
///    `i64` range saturate at the bounds.
/// 3. Everything else — empty input, words, exponent syntax without a dot —
///    is rejected.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_number("153"), Some(153));
/// assert_eq!(parse_number("4.0"), Some(4));
/// assert_eq!(parse_number("abc"), None);
/// ```
pub fn parse_number(raw: &str) -> Option<i64> {
    if let Ok(n) = raw.parse::<i64>() {
        return Some(n);
    }

    // The decimal path is gated on an explicit dot so that float-only syntax
    // such as "4e3", "inf" or "NaN" stays rejected.
    if raw.contains('.') {
        if let Ok(value) = raw.parse::<f64>() {
            if value.is_finite() {
                return Some(value as i64);
            }
        }
    }

    None
}
