//! Route wiring shared between the server binary and integration tests.

use actix_web::{web, HttpResponse};

use hl_core::repositories::UserRepository;
use hl_core::services::mail::MailService;
use hl_core::services::password::PasswordHasher;
use hl_shared::types::response::ApiResponse;

use crate::routes::admin::{lock_or_unlock_user, search_users};
use crate::routes::auth::{change_password, forgot_password, login, register};
use crate::routes::health::health_check;

/// Registers every route on the given service config
///
/// The caller provides the `AppState<U, M, H>` via `app_data`; the same
/// wiring serves production (MySQL + SMTP) and tests (in-memory doubles).
pub fn configure_api<U, M, H>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    M: MailService + 'static,
    H: PasswordHasher + 'static,
{
    cfg.route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(register::<U, M, H>))
                        .route("/login", web::post().to(login::<U, M, H>))
                        .route(
                            "/forgot-password",
                            web::post().to(forgot_password::<U, M, H>),
                        )
                        .route(
                            "/change-password",
                            web::post().to(change_password::<U, M, H>),
                        ),
                )
                .service(
                    web::scope("/admin")
                        .route("/user", web::get().to(search_users::<U, M, H>))
                        .route(
                            "/user/{id}/lockOrUnLock",
                            web::put().to(lock_or_unlock_user::<U, M, H>),
                        ),
                ),
        )
        .default_service(web::route().to(not_found));
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error(
        404,
        "The requested resource was not found",
    ))
}
