//! Password hashing and temporary-password generation.

pub mod generator;
pub mod hasher;

pub use generator::generate_temporary_password;
pub use hasher::{BcryptPasswordHasher, PasswordHasher};
