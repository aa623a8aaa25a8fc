//! Handler for POST /api/v1/auth/change-password

use actix_web::{web, HttpResponse};
use validator::Validate;

use hl_core::repositories::UserRepository;
use hl_core::services::mail::MailService;
use hl_core::services::password::PasswordHasher;
use hl_shared::types::response::ApiResponse;

use crate::dto::auth::ChangePasswordRequest;
use crate::dto::user::UserSummary;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::state::AppState;

/// Changes a user's password
///
/// The caller proves possession of the current password; the new one must
/// satisfy the strength policy.
///
/// # Responses
/// - 200: password changed, summary in `data`
/// - 400: wrong old password, weak new password, or malformed email
/// - 404: email not registered
pub async fn change_password<U, M, H>(
    state: web::Data<AppState<U, M, H>>,
    request: web::Json<ChangePasswordRequest>,
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
        .change_password(&request.email, &request.old_password, &request.new_password)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(ApiResponse::ok(
            "Password changed successfully",
            UserSummary::from(user),
        )),
        Err(error) => handle_domain_error(&error),
    }
}
