//! In-memory implementation of UserRepository for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository backed by a HashMap
///
/// Assigns sequential ids on create, mirroring an auto-increment column.
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: AtomicI64,
}

impl MockUserRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Conflict {
                message: "Email already exists".to_string(),
            });
        }

        user.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn search(&self, keyword: Option<&str>) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        let mut matched: Vec<User> = match keyword {
            Some(kw) if !kw.is_empty() => {
                let needle = kw.to_lowercase();
                users
                    .values()
                    .filter(|u| u.email.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
            _ => users.values().cloned().collect(),
        };
        matched.sort_by_key(|u| u.id);
        Ok(matched)
    }

    async fn update_lock_status(&self, id: i64) -> Result<u64, DomainError> {
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) => {
                user.status = user.status.toggled();
                user.updated_at = chrono::Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
