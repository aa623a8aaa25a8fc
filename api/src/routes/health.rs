//! Health check endpoint.

use actix_web::HttpResponse;

use hl_shared::types::response::{HealthResponse, HealthStatus};

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: HealthStatus::Healthy,
        service: "heartlink-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn test_health_check_reports_healthy() {
        let response = health_check().await;
        assert_eq!(response.status().as_u16(), 200);
    }
}
