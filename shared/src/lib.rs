//! Shared utilities and common types for the HeartLink server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types
//! - The API response envelope
//!
//! It deliberately contains no domain logic and performs no I/O.

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, JwtConfig, ServerConfig, SmtpConfig};
pub use types::response::ApiResponse;
