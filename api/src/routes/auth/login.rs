//! Handler for POST /api/v1/auth/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use hl_core::repositories::UserRepository;
use hl_core::services::mail::MailService;
use hl_core::services::password::PasswordHasher;
use hl_shared::types::response::ApiResponse;

use crate::dto::auth::LoginRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::state::AppState;

/// Authenticates a user and returns a signed token
///
/// The success message tells the client which login this was
/// ("First login", "Second login", or "Login successful") so onboarding
/// screens can react. `data` carries the token string.
///
/// # Responses
/// - 200: authenticated, token in `data`
/// - 400: missing fields or bad credentials
/// - 403: account locked
pub async fn login<U, M, H>(
    state: web::Data<AppState<U, M, H>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MailService + 'static,
    H: PasswordHasher + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(outcome) => {
            HttpResponse::Ok().json(ApiResponse::ok(outcome.sequence.message(), outcome.token))
        }
        Err(error) => handle_domain_error(&error),
    }
}
