//! # HeartLink API
//!
//! HTTP layer for the HeartLink backend: request DTOs, route handlers,
//! error-to-HTTP mapping, and middleware. Business rules live in
//! `hl_core`; this crate only adapts them to actix-web.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use state::AppState;
