//! Common type definitions
//!
//! - `response` - the API response envelope and health check payloads

pub mod response;

pub use response::{ApiResponse, HealthResponse, HealthStatus};
