//! Administrative operations over user accounts: search and lock toggling.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::UserRepository;

/// Service for administrative user management
pub struct AdminUserService<U>
where
    U: UserRepository,
{
    user_repository: Arc<U>,
}

impl<U> AdminUserService<U>
where
    U: UserRepository,
{
    /// Creates a new admin user service
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Searches users by email keyword
    ///
    /// The match is a case-insensitive substring match; an absent or empty
    /// keyword lists every user. Results are ordered by id.
    pub async fn search_users(&self, keyword: Option<&str>) -> Result<Vec<User>, DomainError> {
        let keyword = keyword.map(str::trim).filter(|kw| !kw.is_empty());
        self.user_repository.search(keyword).await
    }

    /// Toggles the lock status of the user with `id`
    ///
    /// Locking an active account prevents further logins; unlocking restores
    /// them. Already-issued tokens are unaffected. Returns the user as it
    /// stands after the toggle.
    pub async fn lock_or_unlock_user(&self, id: i64) -> Result<User, DomainError> {
        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "User".to_string(),
            })?;

        let affected = self.user_repository.update_lock_status(id).await?;
        if affected != 1 {
            return Err(DomainError::Internal {
                message: format!("Lock toggle affected {} rows for user {}", affected, id),
            });
        }

        let toggled = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "User".to_string(),
            })?;

        info!(
            user_id = id,
            from = user.status.as_str(),
            to = toggled.status.as_str(),
            "toggled user lock status"
        );

        Ok(toggled)
    }
}
