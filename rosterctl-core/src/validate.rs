//! Input validation predicates
//!
//! The console layer loops until these accept; keeping the predicates pure
//! keeps the retry loop at the boundary and the rules testable without I/O.

/// True when the string is non-empty and every character is a decimal digit
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Parse a digits-only string into a positive integer.
///
/// Returns `None` for anything else: empty input, stray characters, zero
/// (digits-only input cannot be negative), or values past `i32::MAX`.
pub fn parse_positive_int(s: &str) -> Option<i32> {
    if !is_digits(s) {
        return None;
    }
    match s.parse::<i32>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}

/// True when the trimmed line has at least one character
pub fn is_non_empty(s: &str) -> bool {
    !s.trim().is_empty()
}
