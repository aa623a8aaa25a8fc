//! Domain entities for the HeartLink system.

pub mod token;
pub mod user;

pub use token::Claims;
pub use user::{User, UserStatus};
