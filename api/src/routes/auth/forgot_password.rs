//! Handler for POST /api/v1/auth/forgot-password

use actix_web::{web, HttpResponse};
use validator::Validate;

use hl_core::repositories::UserRepository;
use hl_core::services::mail::MailService;
use hl_core::services::password::PasswordHasher;
use hl_shared::types::response::ApiResponse;

use crate::dto::auth::ForgotPasswordRequest;
use crate::dto::user::UserSummary;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::state::AppState;

/// Resets a forgotten password and mails the replacement
///
/// # Responses
/// - 200: new temporary password sent, summary in `data`
/// - 400: malformed email
/// - 404: email not registered
/// - 500: database or mail failure
pub async fn forgot_password<U, M, H>(
    state: web::Data<AppState<U, M, H>>,
    request: web::Json<ForgotPasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MailService + 'static,
    H: PasswordHasher + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state.auth_service.forgot_password(&request.email).await {
        Ok(user) => HttpResponse::Ok().json(ApiResponse::ok(
            "A new temporary password has been sent to your email",
            UserSummary::from(user),
        )),
        Err(error) => handle_domain_error(&error),
    }
}
