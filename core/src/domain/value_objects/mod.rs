//! Value objects representing immutable domain concepts.

pub mod login_outcome;
pub mod validation_result;

// Re-export commonly used types
pub use login_outcome::{LoginOutcome, LoginSequence};
pub use validation_result::ValidationResult;
