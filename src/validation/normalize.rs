//! Normalization helpers.
//!
//! Deterministic transformations into canonical form, applied after format
//! validation and before any persistence lookup. Every function here is
//! idempotent: applying it twice yields the same result as applying it once.

use crate::config::PHONE_DIGITS;

/// Trim and collapse internal whitespace runs to single spaces.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonical form for personal names: trimmed, collapsed, uppercased.
pub fn trim_and_uppercase(value: &str) -> String {
    collapse_whitespace(value).to_uppercase()
}

/// Canonical form for email addresses: trimmed, collapsed, lowercased.
pub fn normalize_email(value: &str) -> String {
    collapse_whitespace(value).to_lowercase()
}

/// Canonical form for ISBNs: separators removed.
pub fn normalize_isbn(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

/// Reduced phone number: digits only, country-code prefix stripped.
///
/// "+91-8974569874" reduces to "8974569874"; a bare national number passes
/// through unchanged.
pub fn reduce_phone(value: &str) -> String {
    let digits: Vec<char> = value.chars().filter(char::is_ascii_digit).collect();
    let start = digits.len().saturating_sub(PHONE_DIGITS);
    digits[start..].iter().collect()
}
