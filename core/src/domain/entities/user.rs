//! User entity representing a registered account in the HeartLink system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account status, toggled only by an administrative actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Account can authenticate normally
    Active,
    /// Account is locked and cannot log in
    Locked,
}

impl UserStatus {
    /// The opposite status (lock ⇄ unlock)
    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Locked,
            UserStatus::Locked => UserStatus::Active,
        }
    }

    /// Database/string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Locked => "locked",
        }
    }
}

/// User entity representing a registered account
///
/// The password hash is always the output of the one-way hash primitive;
/// plaintext passwords never reach this type. `login_count` only ever
/// increases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the store (0 until persisted)
    pub id: i64,

    /// Email address, unique across all users, matched exactly
    pub email: String,

    /// One-way hash of the user's password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Account status
    pub status: UserStatus,

    /// Whether the user has never successfully authenticated
    pub first_login: bool,

    /// Number of successful logins, starts at 0 and only increases
    pub login_count: i64,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,

    /// Timestamp of the user's last successful login
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new User as produced by registration
    pub fn new(email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            email,
            password_hash,
            status: UserStatus::Active,
            first_login: true,
            login_count: 0,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Records a successful login: increments the counter, clears the
    /// first-login flag, and stamps the login time
    pub fn record_login(&mut self) {
        self.login_count += 1;
        self.first_login = false;
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Locks the account
    pub fn lock(&mut self) {
        self.status = UserStatus::Locked;
        self.updated_at = Utc::now();
    }

    /// Unlocks the account
    pub fn unlock(&mut self) {
        self.status = UserStatus::Active;
        self.updated_at = Utc::now();
    }

    /// Checks if the account is locked
    pub fn is_locked(&self) -> bool {
        self.status == UserStatus::Locked
    }
}
