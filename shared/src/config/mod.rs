//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT signing configuration
//! - `database` - database connection and pool configuration
//! - `mail` - SMTP delivery configuration
//! - `server` - HTTP server configuration
//!
//! Each configuration type has a `from_env()` constructor so the binary can
//! be driven entirely by environment variables (loaded from `.env` in
//! development).

pub mod auth;
pub mod database;
pub mod mail;
pub mod server;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use mail::SmtpConfig;
pub use server::ServerConfig;
