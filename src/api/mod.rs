//! Local stand-ins for the calls a real backend would serve. Every action
//! validates its input and answers with the toast to show; nothing leaves
//! the process.

pub mod auth;
pub mod initiatives;
pub mod issues;
pub mod messages;

use crate::error::ValidationError;
use crate::models::events::Notification;

/// Bell icon in the header.
pub fn notifications() -> Notification {
    Notification::info("Notifications", "You have 3 new neighborhood updates.")
}

pub(crate) fn required(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}
