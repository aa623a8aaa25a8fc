//! Console mail service for development.
//!
//! Prints outgoing mail instead of delivering it, so registration and
//! password-reset flows work locally without an SMTP relay.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use hl_core::errors::DomainError;
use hl_core::services::mail::MailService;

/// Mail service that writes messages to the console
#[derive(Clone)]
pub struct ConsoleMailService {
    message_count: Arc<AtomicU64>,
    console_output: bool,
}

impl ConsoleMailService {
    /// Create a new console mail service
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            console_output: true,
        }
    }

    /// Create a silent variant that only logs
    pub fn silent() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            console_output: false,
        }
    }

    /// Total number of messages "sent"
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for ConsoleMailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailService for ConsoleMailService {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), DomainError> {
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("CONSOLE MAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", to);
            println!("Subject: {}", subject);
            println!("{}", body);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "mail_service",
            provider = "console",
            to,
            subject,
            body_length = body.len(),
            "mail sent (console)"
        );

        Ok(())
    }
}
