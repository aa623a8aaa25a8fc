//! Domain error to HTTP response mapping.
//!
//! Every failure renders the standard envelope with `status` mirroring the
//! HTTP status code. Server-side faults collapse to a generic message so
//! internals never leak to clients.

use actix_web::HttpResponse;

use hl_core::errors::{AuthError, DomainError};
use hl_shared::types::response::ApiResponse;

/// Convert a domain error into the enveloped HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, message) = match error {
        DomainError::Validation { message } => (400, message.clone()),
        DomainError::ValidationErr(e) => (400, e.to_string()),

        DomainError::Auth(auth) => match auth {
            AuthError::InvalidCredentials | AuthError::InvalidOldPassword => {
                (400, auth.to_string())
            }
            AuthError::AccountLocked => (403, auth.to_string()),
            AuthError::EmailNotFound => (404, auth.to_string()),
            AuthError::EmailAlreadyExists => (409, auth.to_string()),
            AuthError::MailDeliveryFailure => internal(error),
        },

        DomainError::Token(token) => (401, token.to_string()),

        DomainError::NotFound { resource } => (404, format!("{} not found", resource)),
        DomainError::Conflict { message } => (409, message.clone()),

        DomainError::Database { .. } | DomainError::Internal { .. } => internal(error),
    };

    error_response(status, message)
}

fn internal(error: &DomainError) -> (u16, String) {
    log::error!("internal error: {}", error);
    (500, "Internal server error".to_string())
}

fn error_response(status: u16, message: String) -> HttpResponse {
    let body = ApiResponse::<()>::error(status, message);
    match status {
        400 => HttpResponse::BadRequest().json(body),
        401 => HttpResponse::Unauthorized().json(body),
        403 => HttpResponse::Forbidden().json(body),
        404 => HttpResponse::NotFound().json(body),
        409 => HttpResponse::Conflict().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}

/// Render validator failures as a 400 with the first message
pub fn handle_validation_errors(errors: &validator::ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request data".to_string());

    error_response(400, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hl_core::errors::TokenError;

    #[test]
    fn test_credential_errors_map_to_400() {
        let response = handle_domain_error(&AuthError::InvalidCredentials.into());
        assert_eq!(response.status().as_u16(), 400);
    }

    #[test]
    fn test_locked_account_maps_to_403() {
        let response = handle_domain_error(&AuthError::AccountLocked.into());
        assert_eq!(response.status().as_u16(), 403);
    }

    #[test]
    fn test_duplicate_email_maps_to_409() {
        let response = handle_domain_error(&AuthError::EmailAlreadyExists.into());
        assert_eq!(response.status().as_u16(), 409);
    }

    #[test]
    fn test_token_errors_map_to_401() {
        let response = handle_domain_error(&TokenError::TokenExpired.into());
        assert_eq!(response.status().as_u16(), 401);
    }

    #[test]
    fn test_database_errors_stay_generic() {
        let error = DomainError::Database {
            message: "connection refused to mysql://user:pass@db".to_string(),
        };
        let response = handle_domain_error(&error);
        assert_eq!(response.status().as_u16(), 500);
    }
}
