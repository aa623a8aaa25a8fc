//! Pure format validators for emails and passwords.
//!
//! Both validators are deterministic, perform no I/O, and return a
//! [`ValidationResult`](crate::domain::value_objects::ValidationResult)
//! per call.

pub mod email;
pub mod password;

pub use email::validate_email;
pub use password::{validate_password, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH};
