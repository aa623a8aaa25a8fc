//! Behavioral tests for [`AuthService`].

use std::sync::Arc;

use crate::domain::value_objects::LoginSequence;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::password::BcryptPasswordHasher;
use crate::services::token::{TokenService, TokenServiceConfig};

use super::mocks::MockMailService;

type TestAuthService = AuthService<MockUserRepository, MockMailService, BcryptPasswordHasher>;

struct Fixture {
    service: TestAuthService,
    users: Arc<MockUserRepository>,
    mail: Arc<MockMailService>,
    tokens: Arc<TokenService>,
}

fn fixture() -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let mail = Arc::new(MockMailService::new());
    // Minimum bcrypt cost keeps the test suite fast
    let hasher = Arc::new(BcryptPasswordHasher::with_cost(4));
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new("test-secret")));

    let service = AuthService::new(
        Arc::clone(&users),
        Arc::clone(&mail),
        hasher,
        Arc::clone(&tokens),
        AuthServiceConfig::default(),
    );

    Fixture {
        service,
        users,
        mail,
        tokens,
    }
}

/// Register and return the temporary password the mail carried
async fn register_and_grab_password(fx: &Fixture, email: &str) -> String {
    fx.service.register(email).await.unwrap();
    let sent = fx.mail.sent_mail();
    let last = sent.last().unwrap();
    MockMailService::extract_password(&last.body).unwrap()
}

#[tokio::test]
async fn test_register_persists_user_and_mails_temp_password() {
    let fx = fixture();

    let registered = fx.service.register("amy@example.com").await.unwrap();
    assert!(registered.id > 0);
    assert!(registered.first_login);
    assert_eq!(registered.login_count, 0);

    let user = fx
        .users
        .find_by_email("amy@example.com")
        .await
        .unwrap()
        .expect("user persisted");
    assert_eq!(user.id, registered.id);

    let sent = fx.mail.sent_mail();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "amy@example.com");
    assert_eq!(
        sent[0].subject,
        "Your Temporary Password from our dating system"
    );

    let password = MockMailService::extract_password(&sent[0].body).unwrap();
    // The stored value is the hash, never the plaintext
    assert_ne!(user.password_hash, password);
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let fx = fixture();
    fx.service.register("amy@example.com").await.unwrap();

    let result = fx.service.register("amy@example.com").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmailAlreadyExists))
    ));
}

#[tokio::test]
async fn test_register_rejects_malformed_email() {
    let fx = fixture();

    let result = fx.service.register("not-an-email").await;
    assert!(matches!(result, Err(DomainError::ValidationErr(_))));

    let result = fx.service.register("").await;
    assert!(matches!(result, Err(DomainError::ValidationErr(_))));
}

#[tokio::test]
async fn test_register_mail_failure_keeps_user() {
    let fx = fixture();
    fx.mail.set_failing(true);

    let result = fx.service.register("amy@example.com").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::MailDeliveryFailure))
    ));

    // The insert committed before the mail attempt; the account exists
    let user = fx.users.find_by_email("amy@example.com").await.unwrap();
    assert!(user.is_some());
}

#[tokio::test]
async fn test_login_sequence_progression() {
    let fx = fixture();
    let password = register_and_grab_password(&fx, "amy@example.com").await;

    let first = fx.service.login("amy@example.com", &password).await.unwrap();
    assert_eq!(first.sequence, LoginSequence::First);

    let second = fx.service.login("amy@example.com", &password).await.unwrap();
    assert_eq!(second.sequence, LoginSequence::Second);

    let third = fx.service.login("amy@example.com", &password).await.unwrap();
    assert_eq!(third.sequence, LoginSequence::Subsequent);

    let user = fx
        .users
        .find_by_email("amy@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.login_count, 3);
    assert!(!user.first_login);
    assert!(user.last_login_at.is_some());
}

#[tokio::test]
async fn test_login_token_is_verifiable() {
    let fx = fixture();
    let password = register_and_grab_password(&fx, "amy@example.com").await;

    let outcome = fx.service.login("amy@example.com", &password).await.unwrap();
    let claims = fx.tokens.verify(&outcome.token).unwrap();

    let user = fx
        .users
        .find_by_email("amy@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(claims.user_id().unwrap(), user.id);
    assert_eq!(claims.email, "amy@example.com");
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_look_alike() {
    let fx = fixture();
    let _ = register_and_grab_password(&fx, "amy@example.com").await;

    let wrong_password = fx.service.login("amy@example.com", "wrong-pw9").await;
    let unknown_email = fx.service.login("ghost@example.com", "whatever9").await;

    for result in [wrong_password, unknown_email] {
        match result {
            Err(DomainError::Auth(AuthError::InvalidCredentials)) => {}
            other => panic!("expected InvalidCredentials, got {:?}", other.err()),
        }
    }
}

#[tokio::test]
async fn test_login_failure_mutates_nothing() {
    let fx = fixture();
    let _ = register_and_grab_password(&fx, "amy@example.com").await;

    let _ = fx.service.login("amy@example.com", "wrong-pw9").await;

    let user = fx
        .users
        .find_by_email("amy@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(user.first_login);
    assert_eq!(user.login_count, 0);
    assert!(user.last_login_at.is_none());
}

#[tokio::test]
async fn test_login_rejects_blank_input() {
    let fx = fixture();

    assert!(matches!(
        fx.service.login("", "password1").await,
        Err(DomainError::ValidationErr(_))
    ));
    assert!(matches!(
        fx.service.login("amy@example.com", "").await,
        Err(DomainError::ValidationErr(_))
    ));
}

#[tokio::test]
async fn test_login_rejects_locked_account() {
    let fx = fixture();
    let password = register_and_grab_password(&fx, "amy@example.com").await;

    let user = fx
        .users
        .find_by_email("amy@example.com")
        .await
        .unwrap()
        .unwrap();
    fx.users.update_lock_status(user.id).await.unwrap();

    let result = fx.service.login("amy@example.com", &password).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AccountLocked))
    ));

    // The rejected attempt must not count as a login
    let user = fx.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(user.login_count, 0);
}

#[tokio::test]
async fn test_locked_account_with_wrong_password_stays_generic() {
    let fx = fixture();
    let _ = register_and_grab_password(&fx, "amy@example.com").await;

    let user = fx
        .users
        .find_by_email("amy@example.com")
        .await
        .unwrap()
        .unwrap();
    fx.users.update_lock_status(user.id).await.unwrap();

    // Lock status is only disclosed once credentials check out
    let result = fx.service.login("amy@example.com", "wrong-pw9").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_forgot_password_rotates_credential() {
    let fx = fixture();
    let old_password = register_and_grab_password(&fx, "amy@example.com").await;

    let user = fx.service.forgot_password("amy@example.com").await.unwrap();
    assert_eq!(user.email, "amy@example.com");

    let sent = fx.mail.sent_mail();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].subject, "Password Reset");
    let new_password = MockMailService::extract_password(&sent[1].body).unwrap();

    // Old credential is dead, the mailed one works
    assert!(matches!(
        fx.service.login("amy@example.com", &old_password).await,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert!(fx
        .service
        .login("amy@example.com", &new_password)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_forgot_password_unknown_email() {
    let fx = fixture();

    let result = fx.service.forgot_password("ghost@example.com").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmailNotFound))
    ));
}

#[tokio::test]
async fn test_change_password_roundtrip() {
    let fx = fixture();
    let old_password = register_and_grab_password(&fx, "amy@example.com").await;

    let user = fx
        .service
        .change_password("amy@example.com", &old_password, "new-secret9")
        .await
        .unwrap();
    // Changing off the temporary password completes onboarding
    assert!(!user.first_login);

    assert!(matches!(
        fx.service.login("amy@example.com", &old_password).await,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert!(fx
        .service
        .login("amy@example.com", "new-secret9")
        .await
        .is_ok());
}

#[tokio::test]
async fn test_change_password_rejects_wrong_old_password() {
    let fx = fixture();
    let _ = register_and_grab_password(&fx, "amy@example.com").await;

    let result = fx
        .service
        .change_password("amy@example.com", "wrong-old9", "new-secret9")
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidOldPassword))
    ));
}

#[tokio::test]
async fn test_change_password_enforces_strength_policy() {
    let fx = fixture();
    let old_password = register_and_grab_password(&fx, "amy@example.com").await;

    // Too short, no digit, no letter
    for weak in ["ab1", "abcdefgh", "12345678"] {
        let result = fx
            .service
            .change_password("amy@example.com", &old_password, weak)
            .await;
        assert!(
            matches!(result, Err(DomainError::ValidationErr(_))),
            "accepted weak password: {}",
            weak
        );
    }

    // Old password still works since nothing was changed
    assert!(fx
        .service
        .login("amy@example.com", &old_password)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_change_password_unknown_email() {
    let fx = fixture();

    let result = fx
        .service
        .change_password("ghost@example.com", "old-pw9", "new-secret9")
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmailNotFound))
    ));
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let fx = fixture();
    let password = register_and_grab_password(&fx, "amy@example.com").await;
    let outcome = fx.service.login("amy@example.com", &password).await.unwrap();

    let mut expired_config = TokenServiceConfig::new("test-secret");
    expired_config.token_expiry_seconds = -120;
    let expired_issuer = TokenService::new(expired_config);
    let user = fx
        .users
        .find_by_email("amy@example.com")
        .await
        .unwrap()
        .unwrap();
    let stale = expired_issuer.issue(&user).unwrap();

    assert!(fx.tokens.verify(&outcome.token).is_ok());
    assert!(matches!(
        fx.tokens.verify(&stale),
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}
