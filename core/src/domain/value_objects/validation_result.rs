//! Validation result value object.

use serde::{Deserialize, Serialize};

/// Immutable outcome of a format validation
///
/// Produced by the email and password validators and consumed by the
/// authentication flow to decide accept/reject. Constructed and discarded
/// per validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the candidate value passed validation
    pub valid: bool,

    /// Human-readable explanation (empty on success)
    pub message: String,
}

impl ValidationResult {
    /// A passing result
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// A failing result with an explanation
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    /// Checks if validation passed
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}
