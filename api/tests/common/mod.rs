//! Shared fixtures for the API integration tests.
//!
//! Tests run against the real route wiring with in-memory doubles: the
//! mock repository from `hl_core` and the silent console mailer from
//! `hl_infra`.

use std::sync::Arc;

use actix_web::web;

use hl_api::state::AppState;
use hl_core::domain::entities::user::User;
use hl_core::repositories::{MockUserRepository, UserRepository};
use hl_core::services::admin::AdminUserService;
use hl_core::services::auth::{AuthService, AuthServiceConfig};
use hl_core::services::password::BcryptPasswordHasher;
use hl_core::services::token::{TokenService, TokenServiceConfig};
use hl_infra::ConsoleMailService;

pub type TestState = AppState<MockUserRepository, ConsoleMailService, BcryptPasswordHasher>;

/// Build application state backed by in-memory doubles
pub fn test_state() -> (web::Data<TestState>, Arc<MockUserRepository>) {
    let users = Arc::new(MockUserRepository::new());
    let mail = Arc::new(ConsoleMailService::silent());
    // Minimum bcrypt cost keeps the test suite fast
    let hasher = Arc::new(BcryptPasswordHasher::with_cost(4));
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new(
        "integration-secret",
    )));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&users),
        mail,
        hasher,
        tokens,
        AuthServiceConfig::default(),
    ));
    let admin_service = Arc::new(AdminUserService::new(Arc::clone(&users)));

    (
        web::Data::new(AppState::new(auth_service, admin_service)),
        users,
    )
}

/// Insert a user with a known password directly into the repository
pub async fn seed_user(users: &MockUserRepository, email: &str, password: &str) -> User {
    let hash = bcrypt::hash(password, 4).unwrap();
    users
        .create(User::new(email.to_string(), hash))
        .await
        .unwrap()
}
