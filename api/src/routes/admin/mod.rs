//! Administrative routes.

pub mod users;

pub use users::{lock_or_unlock_user, search_users};
