//! Authentication service orchestrating registration, login, and the
//! password lifecycle.
//!
//! The service owns no state of its own; users live behind the
//! [`UserRepository`] abstraction and outbound mail behind [`MailService`].
//! All plaintext passwords are hashed at this boundary and never stored.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::user::User;
use crate::domain::value_objects::{LoginOutcome, LoginSequence};
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::UserRepository;
use crate::services::mail::MailService;
use crate::services::password::{generate_temporary_password, PasswordHasher};
use crate::services::token::TokenService;
use crate::validation::{validate_email, validate_password};

use super::config::AuthServiceConfig;

/// Authentication service for email/password accounts
pub struct AuthService<U, M, H>
where
    U: UserRepository,
    M: MailService,
    H: PasswordHasher,
{
    user_repository: Arc<U>,
    mail_service: Arc<M>,
    password_hasher: Arc<H>,
    token_service: Arc<TokenService>,
    config: AuthServiceConfig,
}

impl<U, M, H> AuthService<U, M, H>
where
    U: UserRepository,
    M: MailService,
    H: PasswordHasher,
{
    /// Creates a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        mail_service: Arc<M>,
        password_hasher: Arc<H>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            mail_service,
            password_hasher,
            token_service,
            config,
        }
    }

    /// Registers a new account for `email`
    ///
    /// Generates a temporary password, persists the user with its hash, and
    /// emails the plaintext to the registrant. The account exists once the
    /// insert commits: a mail failure after that point is surfaced as
    /// [`AuthError::MailDeliveryFailure`] but does not roll the user back.
    pub async fn register(&self, email: &str) -> Result<User, DomainError> {
        let email = email.trim();
        let format = validate_email(email);
        if !format.is_valid() {
            return Err(ValidationError::InvalidEmail {
                message: format.message,
            }
            .into());
        }

        if self.user_repository.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists.into());
        }

        let temporary_password = generate_temporary_password();
        let password_hash = self.password_hasher.hash(&temporary_password)?;

        let user = User::new(email.to_string(), password_hash);
        // A concurrent registration can still win the insert; the store's
        // unique constraint is the authority.
        let user = match self.user_repository.create(user).await {
            Ok(user) => user,
            Err(DomainError::Conflict { .. }) => {
                return Err(AuthError::EmailAlreadyExists.into());
            }
            Err(e) => return Err(e),
        };

        info!(user_id = user.id, "registered new user");

        let body = format!(
            "Welcome to HeartLink!\n\n\
             Your temporary password is: {}\n\n\
             Please log in and change it as soon as possible.",
            temporary_password
        );
        if let Err(e) = self
            .mail_service
            .send(email, &self.config.registration_mail_subject, &body)
            .await
        {
            warn!(user_id = user.id, error = %e, "registration mail delivery failed");
            return Err(AuthError::MailDeliveryFailure.into());
        }

        Ok(user)
    }

    /// Authenticates `email` with `password` and issues a token
    ///
    /// Unknown email and wrong password both resolve to
    /// [`AuthError::InvalidCredentials`]. A locked account is only reported
    /// as locked after the credentials have been verified, so lock status is
    /// never disclosed to a guesser. Failed attempts mutate nothing.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, DomainError> {
        if email.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            }
            .into());
        }
        if password.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "password".to_string(),
            }
            .into());
        }

        let mut user = self
            .user_repository
            .find_by_email(email.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.password_hasher.verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if user.is_locked() {
            warn!(user_id = user.id, "login attempt on locked account");
            return Err(AuthError::AccountLocked.into());
        }

        let sequence = LoginSequence::from_prior_state(user.first_login, user.login_count);

        user.record_login();
        let user = self.user_repository.update(user).await?;

        let token = self.token_service.issue(&user)?;

        info!(user_id = user.id, login_count = user.login_count, "user logged in");

        Ok(LoginOutcome::new(token, sequence))
    }

    /// Resets a forgotten password
    ///
    /// Replaces the stored hash with a fresh temporary password and mails
    /// the plaintext to the account's email. The old password stops working
    /// the moment the update commits.
    pub async fn forgot_password(&self, email: &str) -> Result<User, DomainError> {
        let email = email.trim();
        let mut user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::EmailNotFound)?;

        let temporary_password = generate_temporary_password();
        let password_hash = self.password_hasher.hash(&temporary_password)?;

        user.set_password_hash(password_hash);
        let user = self.user_repository.update(user).await?;

        info!(user_id = user.id, "password reset issued");

        let body = format!(
            "Your HeartLink password has been reset.\n\n\
             Your new temporary password is: {}\n\n\
             Please log in and change it as soon as possible.",
            temporary_password
        );
        if let Err(e) = self
            .mail_service
            .send(email, &self.config.reset_mail_subject, &body)
            .await
        {
            warn!(user_id = user.id, error = %e, "reset mail delivery failed");
            return Err(AuthError::MailDeliveryFailure.into());
        }

        Ok(user)
    }

    /// Changes a user's password
    ///
    /// The caller proves possession of the current password; the new one
    /// must satisfy the strength policy. Both inputs are validated before
    /// the store is touched. A successful change also clears `first_login`,
    /// since the temporary password from registration is gone for good.
    pub async fn change_password(
        &self,
        email: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<User, DomainError> {
        let email = email.trim();
        let format = validate_email(email);
        if !format.is_valid() {
            return Err(ValidationError::InvalidEmail {
                message: format.message,
            }
            .into());
        }

        let strength = validate_password(new_password);
        if !strength.is_valid() {
            return Err(ValidationError::InvalidPassword {
                message: strength.message,
            }
            .into());
        }

        let mut user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::EmailNotFound)?;

        if !self
            .password_hasher
            .verify(old_password, &user.password_hash)?
        {
            return Err(AuthError::InvalidOldPassword.into());
        }

        let password_hash = self.password_hasher.hash(new_password)?;
        user.set_password_hash(password_hash);
        user.first_login = false;
        let user = self.user_repository.update(user).await?;

        info!(user_id = user.id, "password changed");

        Ok(user)
    }
}
