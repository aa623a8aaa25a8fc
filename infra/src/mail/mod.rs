//! Outbound mail delivery.
//!
//! Production uses [`SmtpMailService`] over an SMTP relay; development and
//! tests can swap in [`ConsoleMailService`], which only logs.

pub mod console;
pub mod smtp;

pub use console::ConsoleMailService;
pub use smtp::SmtpMailService;
