//! One-way password hashing primitive.

use crate::errors::DomainError;

/// Trait for the password-hash primitive
///
/// Implementations must be one-way: the stored value never reveals the
/// plaintext, and verification re-derives rather than decrypts.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into an opaque digest
    fn hash(&self, plaintext: &str) -> Result<String, DomainError>;

    /// Verify a plaintext password against a stored digest
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, DomainError>;
}

/// Bcrypt implementation of [`PasswordHasher`]
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the default bcrypt cost
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit cost (lower costs are for tests)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, DomainError> {
        bcrypt::verify(plaintext, hash).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {}", e),
        })
    }
}
