//! Authentication routes.

pub mod change_password;
pub mod forgot_password;
pub mod login;
pub mod register;

pub use change_password::change_password;
pub use forgot_password::forgot_password;
pub use login::login;
pub use register::register;
