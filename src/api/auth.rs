use crate::error::ValidationError;
use crate::models::auth::LoginRequest;
use crate::models::events::Notification;
use log::{debug, info, warn};

/// Accepts any non-blank email and password. There is no account store.
pub fn login(request: &LoginRequest) -> Result<Notification, ValidationError> {
    debug!("Login attempt for {:?}", request.email);
    if request.email.trim().is_empty() || request.password.is_empty() {
        warn!("Login rejected: missing credentials");
        return Err(ValidationError::MissingCredentials);
    }

    info!("Logged in (remember me: {})", request.remember_me);
    Ok(Notification::info(
        "Login successful",
        "Welcome back to TownSquare!",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
            remember_me: false,
        }
    }

    #[test]
    fn any_filled_in_credentials_are_accepted() {
        let notification = login(&request("resident@example.com", "hunter2")).unwrap();
        assert_eq!(notification.title, "Login successful");
        assert!(!notification.is_destructive());
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert_eq!(login(&request("", "secret")), Err(ValidationError::MissingCredentials));
        assert_eq!(login(&request("   ", "secret")), Err(ValidationError::MissingCredentials));
        assert_eq!(
            login(&request("resident@example.com", "")),
            Err(ValidationError::MissingCredentials)
        );

        let notification = Notification::from(&ValidationError::MissingCredentials);
        assert_eq!(notification.title, "Login failed");
        assert_eq!(notification.description, "Please enter your email and password");
    }
}
