//! # Infrastructure Layer
//!
//! Concrete implementations of the abstractions declared in `hl_core`:
//! MySQL persistence via SQLx and outbound email via SMTP (lettre).
//! Nothing in this crate contains business rules; it adapts external
//! systems to the core's traits.

pub mod database;
pub mod mail;

pub use database::connection::DatabasePool;
pub use database::mysql::MySqlUserRepository;
pub use mail::{ConsoleMailService, SmtpMailService};

use hl_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Outbound mail error
    #[error("Mail error: {0}")]
    Mail(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(e) => DomainError::Database {
                message: e.to_string(),
            },
            InfrastructureError::Mail(message) => DomainError::Internal { message },
            InfrastructureError::Config(message) => DomainError::Internal { message },
        }
    }
}
