use std::sync::LazyLock;

use regex::Regex;

use super::format::{PHONE_DIGITS, digits};

/// Local part, `@`, dotted domain, alphabetic TLD of two or more letters.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern must compile"));

pub fn is_email(text: &str) -> bool {
    EMAIL_REGEX.is_match(text)
}

pub fn is_phone(text: &str) -> bool {
    digits(text).len() == PHONE_DIGITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(is_email("a@b.com"));
        assert!(is_email("first.last+tag@mail.example.org"));
        assert!(!is_email("a@b"));
        assert!(!is_email(""));
        assert!(!is_email("@b.com"));
        assert!(!is_email("a b@c.com"));
        assert!(!is_email("a@b.c"));
    }

    #[test]
    fn phone_validation_counts_digits() {
        assert!(is_phone("123-456-7890"));
        assert!(is_phone("1234567890"));
        assert!(!is_phone("123-456-789"));
        assert!(!is_phone(""));
        assert!(!is_phone("12345678901"));
    }
}
