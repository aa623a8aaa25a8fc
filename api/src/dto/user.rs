//! User summary DTO shared by auth and admin responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hl_core::domain::entities::user::{User, UserStatus};

/// User projection returned to clients
///
/// Mirrors the entity minus the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub email: String,
    pub status: UserStatus,
    pub first_login: bool,
    pub login_count: i64,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            status: user.status,
            first_login: user.first_login,
            login_count: user.login_count,
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}
