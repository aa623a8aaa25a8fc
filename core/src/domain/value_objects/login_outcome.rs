//! Login outcome value object.

use serde::{Deserialize, Serialize};

/// Which of the three observable login variants applied
///
/// Computed from the user's state *before* the login is recorded. The
/// variant drives onboarding UI on the client; it is a courtesy, not a
/// security boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginSequence {
    /// The user had never authenticated before this call
    First,
    /// Exactly one prior successful login
    Second,
    /// Any later login
    Subsequent,
}

impl LoginSequence {
    /// Classify from the state before the login was recorded
    pub fn from_prior_state(first_login: bool, login_count: i64) -> Self {
        if first_login {
            LoginSequence::First
        } else if login_count == 1 {
            LoginSequence::Second
        } else {
            LoginSequence::Subsequent
        }
    }

    /// The user-facing message for this variant
    pub fn message(&self) -> &'static str {
        match self {
            LoginSequence::First => "First login",
            LoginSequence::Second => "Second login",
            LoginSequence::Subsequent => "Login successful",
        }
    }
}

/// Successful login result: the signed token plus the sequence variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOutcome {
    /// Signed JWT carrying (email, user id)
    pub token: String,

    /// Which login this was, based on prior state
    pub sequence: LoginSequence,
}

impl LoginOutcome {
    /// Creates a new login outcome
    pub fn new(token: String, sequence: LoginSequence) -> Self {
        Self { token, sequence }
    }
}
