//! Handler for POST /api/v1/auth/register

use actix_web::{web, HttpResponse};
use validator::Validate;

use hl_core::repositories::UserRepository;
use hl_core::services::mail::MailService;
use hl_core::services::password::PasswordHasher;
use hl_shared::types::response::ApiResponse;

use crate::dto::auth::RegisterRequest;
use crate::dto::user::UserSummary;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::state::AppState;

/// Registers a new account and mails it a temporary password
///
/// # Responses
/// - 200: account created, temporary password sent, summary in `data`
/// - 400: malformed email
/// - 409: email already registered
/// - 500: database or mail failure
pub async fn register<U, M, H>(
    state: web::Data<AppState<U, M, H>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MailService + 'static,
    H: PasswordHasher + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state.auth_service.register(&request.email).await {
        Ok(user) => HttpResponse::Ok().json(ApiResponse::ok(
            "Registration successful, check your email for the temporary password",
            UserSummary::from(user),
        )),
        Err(error) => handle_domain_error(&error),
    }
}
