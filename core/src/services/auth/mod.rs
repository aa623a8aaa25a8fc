//! Authentication service: registration, login, and password lifecycle.

pub mod config;
pub mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
