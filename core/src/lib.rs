//! # HeartLink Core
//!
//! Core business logic and domain layer for the HeartLink backend.
//! This crate contains domain entities, business services, repository
//! interfaces, validators, and error types. It has no knowledge of HTTP
//! or the database engine.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
