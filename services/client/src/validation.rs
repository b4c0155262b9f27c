//! Form input validation predicates

use regex::Regex;
use std::sync::OnceLock;

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validate email: something, an `@`, something, a dot, something; no whitespace
pub fn validate_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
    });

    regex.is_match(email)
}

/// Validate password
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Validate phone number: digits, spaces, dashes and parentheses with an optional leading plus
pub fn validate_phone_number(phone: &str) -> bool {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PHONE_REGEX.get_or_init(|| {
        Regex::new(r"^\+?[\d\s\-\(\)]+$").expect("Failed to compile phone regex")
    });

    regex.is_match(phone)
}
