//! Token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default token expiration time (1 hour)
pub const TOKEN_EXPIRY_SECONDS: i64 = 3600;

/// JWT issuer
pub const JWT_ISSUER: &str = "heartlink";

/// JWT audience
pub const JWT_AUDIENCE: &str = "heartlink-api";

/// Claims structure for the JWT payload
///
/// The token asserts identity only: the subject is the user id and the
/// email travels alongside it for downstream request handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,

    /// Email address of the authenticated user
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for a user with an explicit expiry
    pub fn new(user_id: i64, email: impl Into<String>, expiry_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);

        Self {
            sub: user_id.to_string(),
            email: email.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Checks if the claims are currently valid (after nbf, before exp)
    pub fn is_valid(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.nbf && now < self.exp
    }

    /// Gets the user id from the claims
    pub fn user_id(&self) -> Result<i64, std::num::ParseIntError> {
        self.sub.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let claims = Claims::new(42, "amy@example.com", TOKEN_EXPIRY_SECONDS);

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "amy@example.com");
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.aud, JWT_AUDIENCE);
        assert!(claims.is_valid());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_user_id_parsing() {
        let claims = Claims::new(7, "amy@example.com", TOKEN_EXPIRY_SECONDS);
        assert_eq!(claims.user_id().unwrap(), 7);
    }

    #[test]
    fn test_claims_expiration() {
        let mut claims = Claims::new(1, "amy@example.com", TOKEN_EXPIRY_SECONDS);
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
        assert!(!claims.is_valid());
    }

    #[test]
    fn test_claims_not_before() {
        let mut claims = Claims::new(1, "amy@example.com", TOKEN_EXPIRY_SECONDS);
        claims.nbf = Utc::now().timestamp() + 3600;

        assert!(!claims.is_valid());
    }

    #[test]
    fn test_claims_unique_jti() {
        let a = Claims::new(1, "amy@example.com", TOKEN_EXPIRY_SECONDS);
        let b = Claims::new(1, "amy@example.com", TOKEN_EXPIRY_SECONDS);

        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims::new(9, "bob@example.com", TOKEN_EXPIRY_SECONDS);

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }
}
