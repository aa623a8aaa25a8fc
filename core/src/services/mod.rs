//! Business services containing domain logic and use cases.

pub mod admin;
pub mod auth;
pub mod mail;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use admin::AdminUserService;
pub use auth::{AuthService, AuthServiceConfig};
pub use mail::MailService;
pub use password::{generate_temporary_password, BcryptPasswordHasher, PasswordHasher};
pub use token::{TokenService, TokenServiceConfig};
