//! Shared application state injected into handlers.

use std::sync::Arc;

use hl_core::repositories::UserRepository;
use hl_core::services::admin::AdminUserService;
use hl_core::services::auth::AuthService;
use hl_core::services::mail::MailService;
use hl_core::services::password::PasswordHasher;

/// Application state holding the wired service graph
///
/// Generic over the repository, mail, and hashing implementations so
/// integration tests can run against in-memory doubles.
pub struct AppState<U, M, H>
where
    U: UserRepository + 'static,
    M: MailService + 'static,
    H: PasswordHasher + 'static,
{
    pub auth_service: Arc<AuthService<U, M, H>>,
    pub admin_service: Arc<AdminUserService<U>>,
}

impl<U, M, H> AppState<U, M, H>
where
    U: UserRepository + 'static,
    M: MailService + 'static,
    H: PasswordHasher + 'static,
{
    pub fn new(
        auth_service: Arc<AuthService<U, M, H>>,
        admin_service: Arc<AdminUserService<U>>,
    ) -> Self {
        Self {
            auth_service,
            admin_service,
        }
    }
}
