//! Pure format validators.
//!
//! Each function checks a single scalar value against its expected shape and
//! returns a boolean. Validators run before normalization, so they tolerate
//! surrounding whitespace but never mutate their input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{
    is_allowed_category, is_allowed_subcategory, ISBN_DIGITS, MAX_BOOK_TITLE_LENGTH,
    MAX_EXCERPT_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, PHONE_DIGITS, PINCODE_DIGITS,
};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+(?: [A-Za-z]+)*$").expect("valid name regex"));

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2,12}\.?$").expect("valid title regex"));

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(\+\d{{1,3}}-?)?\d{{{}}}$", PHONE_DIGITS)).expect("valid phone regex")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

static PINCODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^\d{{{}}}$", PINCODE_DIGITS)).expect("valid pincode regex")
});

static BOOK_TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 &,:.!?'()-]*$").expect("valid book title regex")
});

static RELEASE_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// Honorific title such as "Mr", "Mrs" or "Miss".
pub fn is_valid_title(value: &str) -> bool {
    TITLE_RE.is_match(value.trim())
}

/// Personal name: alphabetic words separated by single spaces.
pub fn is_valid_name(value: &str) -> bool {
    let trimmed = value.trim();
    (2..=80).contains(&trimmed.len()) && NAME_RE.is_match(trimmed)
}

/// Phone number: optional country-code prefix followed by exactly ten digits.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value.trim())
}

/// Standard mailbox shape (`local@domain.tld`).
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Password policy: bounded length, no whitespace, at least one letter and
/// one digit.
pub fn is_valid_password(value: &str) -> bool {
    let trimmed = value.trim();
    (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&trimmed.chars().count())
        && !trimmed.chars().any(char::is_whitespace)
        && trimmed.chars().any(|c| c.is_ascii_alphabetic())
        && trimmed.chars().any(|c| c.is_ascii_digit())
}

/// Street: any non-blank value of reasonable length.
pub fn is_valid_street(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.len() <= 120
}

/// City: alphabetic words separated by single spaces.
pub fn is_valid_city(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.len() <= 60 && NAME_RE.is_match(trimmed)
}

/// Postal pincode: exactly six digits.
pub fn is_valid_pincode(value: &str) -> bool {
    PINCODE_RE.is_match(value.trim())
}

/// Book title: starts alphanumeric, common punctuation allowed.
pub fn is_valid_book_title(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.len() <= MAX_BOOK_TITLE_LENGTH && BOOK_TITLE_RE.is_match(trimmed)
}

/// Excerpt: non-blank, bounded, contains at least one alphanumeric.
pub fn is_valid_excerpt(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed.len() <= MAX_EXCERPT_LENGTH
        && trimmed.chars().any(|c| c.is_ascii_alphanumeric())
}

/// ISBN-13: exactly thirteen digits once hyphens are removed.
pub fn is_valid_isbn(value: &str) -> bool {
    let digits: String = value.trim().chars().filter(|c| *c != '-').collect();
    digits.len() == ISBN_DIGITS && digits.chars().all(|c| c.is_ascii_digit())
}

/// Category: membership in the allowed vocabulary.
pub fn is_valid_category(value: &str) -> bool {
    is_allowed_category(value)
}

/// Subcategory: membership in the allowed vocabulary.
pub fn is_valid_subcategory(value: &str) -> bool {
    is_allowed_subcategory(value)
}

/// Release date: `YYYY-MM-DD` shape and a real calendar date.
pub fn is_valid_release_date(value: &str) -> bool {
    let trimmed = value.trim();
    RELEASE_DATE_RE.is_match(trimmed)
        && chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles() {
        assert!(is_valid_title("Mr"));
        assert!(is_valid_title("Mrs"));
        assert!(is_valid_title("Miss"));
        assert!(is_valid_title(" Dr. "));
        assert!(!is_valid_title("M"));
        assert!(!is_valid_title("Mr123"));
        assert!(!is_valid_title(""));
    }

    #[test]
    fn names() {
        assert!(is_valid_name("John Doe"));
        assert!(is_valid_name("  Ada  "));
        assert!(!is_valid_name("J"));
        assert!(!is_valid_name("John  Doe")); // double space
        assert!(!is_valid_name("John3"));
    }

    #[test]
    fn phones() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("+91-9876543210"));
        assert!(is_valid_phone("+919876543210"));
        assert!(!is_valid_phone("98765"));
        assert!(!is_valid_phone("98765432101"));
        assert!(!is_valid_phone("abcdefghij"));
    }

    #[test]
    fn emails() {
        assert!(is_valid_email("user@example.com"));
        // validators run before normalization, so padding is tolerated
        assert!(is_valid_email("J@X.COM "));
        assert!(!is_valid_email("user.example.com"));
        assert!(!is_valid_email("user@com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn passwords() {
        assert!(is_valid_password("Secret123"));
        assert!(is_valid_password("abcdef12"));
        assert!(!is_valid_password("short1"));
        assert!(!is_valid_password("onlyletters"));
        assert!(!is_valid_password("12345678"));
        assert!(!is_valid_password("has space12"));
        assert!(!is_valid_password("waytoolongpassword1"));
    }

    #[test]
    fn address_parts() {
        assert!(is_valid_street("221B Baker Street"));
        assert!(!is_valid_street("   "));
        assert!(is_valid_city("New Delhi"));
        assert!(!is_valid_city("Delhi-6"));
        assert!(is_valid_pincode("110001"));
        assert!(!is_valid_pincode("1100"));
        assert!(!is_valid_pincode("11000a"));
    }

    #[test]
    fn book_titles_and_excerpts() {
        assert!(is_valid_book_title("The Great Gatsby"));
        assert!(is_valid_book_title("1984"));
        assert!(!is_valid_book_title("  "));
        assert!(!is_valid_book_title("<script>"));
        assert!(is_valid_excerpt("A story of wealth and loss."));
        assert!(!is_valid_excerpt("..."));
    }

    #[test]
    fn isbns() {
        assert!(is_valid_isbn("9780140449136"));
        assert!(is_valid_isbn("978-0-14-044913-6"));
        assert!(!is_valid_isbn("978014044913"));
        assert!(!is_valid_isbn("97801404491367"));
        assert!(!is_valid_isbn("97801404491ab"));
    }

    #[test]
    fn categories() {
        assert!(is_valid_category("fiction"));
        assert!(is_valid_category(" Fiction "));
        assert!(!is_valid_category("cooking"));
        assert!(is_valid_subcategory("novel"));
        assert!(!is_valid_subcategory("fiction"));
    }

    #[test]
    fn release_dates() {
        assert!(is_valid_release_date("2021-09-17"));
        assert!(!is_valid_release_date("2021-13-01"));
        assert!(!is_valid_release_date("2021-02-30"));
        assert!(!is_valid_release_date("17-09-2021"));
        assert!(!is_valid_release_date("2021/09/17"));
    }
}
