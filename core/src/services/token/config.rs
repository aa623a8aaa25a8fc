//! Token service configuration.

use crate::domain::entities::token::{JWT_AUDIENCE, JWT_ISSUER, TOKEN_EXPIRY_SECONDS};

/// Configuration for [`TokenService`](super::TokenService)
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret used for HS256 signing
    pub jwt_secret: String,

    /// Token lifetime in seconds
    pub token_expiry_seconds: i64,

    /// Issuer claim
    pub issuer: String,

    /// Audience claim
    pub audience: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("change-me-in-production"),
            token_expiry_seconds: TOKEN_EXPIRY_SECONDS,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }
}

impl TokenServiceConfig {
    /// Create a configuration with an explicit secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }
}

impl From<hl_shared::config::JwtConfig> for TokenServiceConfig {
    fn from(config: hl_shared::config::JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret,
            token_expiry_seconds: config.token_expiry,
            issuer: config.issuer,
            audience: config.audience,
        }
    }
}
