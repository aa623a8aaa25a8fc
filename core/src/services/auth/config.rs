//! Authentication service configuration.

/// Configuration for [`AuthService`](super::AuthService)
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Subject line of the registration email carrying the temporary password
    pub registration_mail_subject: String,

    /// Subject line of the forgot-password email
    pub reset_mail_subject: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            registration_mail_subject: String::from(
                "Your Temporary Password from our dating system",
            ),
            reset_mail_subject: String::from("Password Reset"),
        }
    }
}
