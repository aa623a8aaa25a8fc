//! Authentication configuration

use serde::{Deserialize, Serialize};
use std::env;

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token expiry time in seconds
    pub token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-me-in-production"),
            token_expiry: 3600, // 1 hour
            issuer: String::from("heartlink"),
            audience: String::from("heartlink-api"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with a secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the token expiry in minutes
    pub fn with_expiry_minutes(mut self, minutes: i64) -> Self {
        self.token_expiry = minutes * 60;
        self
    }

    /// Load configuration from `JWT_SECRET` / `JWT_EXPIRY_SECONDS`
    pub fn from_env() -> Self {
        let mut config = env::var("JWT_SECRET").map(Self::new).unwrap_or_default();
        if let Some(expiry) = env::var("JWT_EXPIRY_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.token_expiry = expiry;
        }
        config
    }
}
