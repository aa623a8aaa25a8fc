//! Handlers for the admin user endpoints.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use hl_core::repositories::UserRepository;
use hl_core::services::mail::MailService;
use hl_core::services::password::PasswordHasher;
use hl_shared::types::response::ApiResponse;

use crate::dto::user::UserSummary;
use crate::handlers::error::handle_domain_error;
use crate::state::AppState;

/// Query parameters for GET /api/v1/admin/user
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Email substring to match, case-insensitive; absent lists everyone
    pub keyword: Option<String>,
}

/// Handler for GET /api/v1/admin/user
///
/// # Responses
/// - 200: list of user summaries in `data`
pub async fn search_users<U, M, H>(
    state: web::Data<AppState<U, M, H>>,
    query: web::Query<SearchQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MailService + 'static,
    H: PasswordHasher + 'static,
{
    match state
        .admin_service
        .search_users(query.keyword.as_deref())
        .await
    {
        Ok(users) => {
            let summaries: Vec<UserSummary> = users.into_iter().map(UserSummary::from).collect();
            HttpResponse::Ok().json(ApiResponse::ok("Search successful", summaries))
        }
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PUT /api/v1/admin/user/{id}/lockOrUnLock
///
/// Toggles the lock status of the addressed user.
///
/// # Responses
/// - 200: updated summary in `data`
/// - 404: unknown user id
pub async fn lock_or_unlock_user<U, M, H>(
    state: web::Data<AppState<U, M, H>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MailService + 'static,
    H: PasswordHasher + 'static,
{
    let id = path.into_inner();

    match state.admin_service.lock_or_unlock_user(id).await {
        Ok(user) => HttpResponse::Ok().json(ApiResponse::ok(
            "User status updated",
            UserSummary::from(user),
        )),
        Err(error) => handle_domain_error(&error),
    }
}
