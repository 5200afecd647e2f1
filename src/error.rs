use crate::models::events::Notification;
use thiserror::Error;

/// Rejected form input. The shell shows it as a destructive toast and keeps
/// the form as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your email and password")]
    MissingCredentials,

    #[error("Please write a message before sending.")]
    EmptyMessage,

    #[error("Please fill in the {0} field.")]
    MissingField(&'static str),
}

impl ValidationError {
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingCredentials => "Login failed",
            ValidationError::EmptyMessage => "Message not sent",
            ValidationError::MissingField(_) => "Missing information",
        }
    }
}

impl From<&ValidationError> for Notification {
    fn from(error: &ValidationError) -> Self {
        Notification::warning(error.title(), error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_become_destructive_notifications() {
        let notification = Notification::from(&ValidationError::MissingField("title"));
        assert!(notification.is_destructive());
        assert_eq!(notification.title, "Missing information");
        assert_eq!(notification.description, "Please fill in the title field.");
    }
}
