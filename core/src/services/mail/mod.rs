//! Mail delivery interface.
//!
//! The authentication flow only needs "deliver this subject and body to
//! this address"; transports (SMTP, console mock) live in the
//! infrastructure layer.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Trait for outbound mail delivery
#[async_trait]
pub trait MailService: Send + Sync {
    /// Send a plain-text email
    ///
    /// # Arguments
    /// * `to` - Recipient address
    /// * `subject` - Message subject line
    /// * `body` - Plain-text message body
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), DomainError>;
}
