//! Email format validation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::value_objects::ValidationResult;

// Standard email shape: local part, '@', domain labels, and a TLD of at
// least two letters. Not a full RFC 5322 parser.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Validates the shape of an email address
///
/// Rejects empty strings, addresses without `@`, and addresses without a
/// proper domain segment. Accepts `user@example.com`-shaped strings.
pub fn validate_email(email: &str) -> ValidationResult {
    if email.trim().is_empty() {
        return ValidationResult::invalid("Email must not be empty.");
    }
    if !EMAIL_REGEX.is_match(email) {
        return ValidationResult::invalid("Invalid email format.");
    }
    ValidationResult::valid()
}
