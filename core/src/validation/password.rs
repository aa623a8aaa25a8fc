//! Password strength validation.
//!
//! Policy: 8 to 64 characters, at least one ASCII letter and at least one
//! ASCII digit. The temporary-password generator in
//! [`services::password`](crate::services::password) always produces values
//! that satisfy this policy.

use crate::domain::value_objects::ValidationResult;

/// Minimum accepted password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum accepted password length
pub const PASSWORD_MAX_LENGTH: usize = 64;

/// Validates a candidate password against the strength policy
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::invalid("Password must not be empty.");
    }
    let length = password.chars().count();
    if length < PASSWORD_MIN_LENGTH {
        return ValidationResult::invalid(format!(
            "Password must be at least {} characters long.",
            PASSWORD_MIN_LENGTH
        ));
    }
    if length > PASSWORD_MAX_LENGTH {
        return ValidationResult::invalid(format!(
            "Password must be at most {} characters long.",
            PASSWORD_MAX_LENGTH
        ));
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return ValidationResult::invalid("Password must contain at least one letter.");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return ValidationResult::invalid("Password must contain at least one digit.");
    }
    ValidationResult::valid()
}
