//! SMTP mail delivery configuration

use serde::{Deserialize, Serialize};
use std::env;

/// SMTP relay configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmtpConfig {
    /// SMTP relay host
    pub host: String,

    /// SMTP relay port
    #[serde(default = "default_smtp_port")]
    pub port: u16,

    /// SMTP username
    pub username: String,

    /// SMTP password
    pub password: String,

    /// From address used for outgoing mail
    pub from_address: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: String::from("localhost"),
            port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            from_address: String::from("no-reply@heartlink.app"),
        }
    }
}

impl SmtpConfig {
    /// Load configuration from `SMTP_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("SMTP_HOST").unwrap_or(defaults.host),
            port: env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            username: env::var("SMTP_USERNAME").unwrap_or(defaults.username),
            password: env::var("SMTP_PASSWORD").unwrap_or(defaults.password),
            from_address: env::var("SMTP_FROM").unwrap_or(defaults.from_address),
        }
    }
}

fn default_smtp_port() -> u16 {
    587
}
