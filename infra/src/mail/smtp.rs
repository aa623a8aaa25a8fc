//! SMTP implementation of the MailService trait using lettre.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};

use hl_core::errors::DomainError;
use hl_core::services::mail::MailService;
use hl_shared::config::SmtpConfig;

use crate::InfrastructureError;

/// Mail service delivering over an SMTP relay
pub struct SmtpMailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpMailService {
    /// Create a new SMTP mail service from configuration
    ///
    /// Uses STARTTLS on the configured port, the conventional mode for
    /// submission on 587.
    pub fn new(config: SmtpConfig) -> Result<Self, InfrastructureError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| InfrastructureError::Mail(format!("Invalid SMTP relay: {}", e)))?
            .port(config.port)
            .credentials(Credentials::new(config.username, config.password))
            .build();

        Ok(Self {
            transport,
            from_address: config.from_address,
        })
    }
}

#[async_trait]
impl MailService for SmtpMailService {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), DomainError> {
        let message = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|e| DomainError::Internal {
                        message: format!("Invalid from address: {}", e),
                    })?,
            )
            .to(to.parse().map_err(|e| DomainError::Internal {
                message: format!("Invalid recipient address: {}", e),
            })?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to build message: {}", e),
            })?;

        self.transport.send(message).await.map_err(|e| {
            error!(error = %e, "SMTP delivery failed");
            DomainError::Internal {
                message: format!("SMTP delivery failed: {}", e),
            }
        })?;

        info!(subject, "mail delivered via SMTP");
        Ok(())
    }
}
