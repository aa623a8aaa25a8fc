//! Error type definitions for authentication, token, and validation
//! failures. Presentation-layer HTTP mapping lives in the API crate.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; the two causes are deliberately
    /// not distinguished to prevent user enumeration
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid old password")]
    InvalidOldPassword,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Email not found")]
    EmailNotFound,

    #[error("Account is locked")]
    AccountLocked,

    #[error("Mail delivery failed")]
    MailDeliveryFailure,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{message}")]
    InvalidEmail { message: String },

    #[error("{message}")]
    InvalidPassword { message: String },

    #[error("Required field: {field}")]
    RequiredField { field: String },
}

impl AuthError {
    /// Stable error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::InvalidOldPassword => "INVALID_OLD_PASSWORD",
            AuthError::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            AuthError::EmailNotFound => "EMAIL_NOT_FOUND",
            AuthError::AccountLocked => "ACCOUNT_LOCKED",
            AuthError::MailDeliveryFailure => "MAIL_DELIVERY_FAILURE",
        }
    }
}

impl TokenError {
    /// Stable error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::TokenExpired => "TOKEN_EXPIRED",
            TokenError::TokenNotYetValid => "TOKEN_NOT_YET_VALID",
            TokenError::InvalidToken => "INVALID_TOKEN",
            TokenError::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
        }
    }
}
