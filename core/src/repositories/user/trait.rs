//! User repository trait defining the interface for user data persistence.
//!
//! Implementations handle the actual database operations while keeping the
//! abstraction boundary between domain and infrastructure layers. The trait
//! is async-first and uses Result types for error handling.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email (exact match)
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// The store assigns the id; the returned entity carries it.
    /// Fails with a conflict when the email is already registered.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user, matched by id
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Search users by email keyword (case-insensitive substring match)
    ///
    /// An absent or empty keyword returns all users.
    async fn search(&self, keyword: Option<&str>) -> Result<Vec<User>, DomainError>;

    /// Toggle a user's lock status (Active ⇄ Locked)
    ///
    /// # Returns
    /// The number of rows affected: 1 on success, 0 when the id is unknown.
    async fn update_lock_status(&self, id: i64) -> Result<u64, DomainError>;
}
