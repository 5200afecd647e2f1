use crate::error::ValidationError;
use crate::models::events::Notification;
use crate::models::representative::Representative;
use log::info;

pub fn send_message(
    representative: &Representative,
    body: &str,
) -> Result<Notification, ValidationError> {
    if body.trim().is_empty() {
        return Err(ValidationError::EmptyMessage);
    }

    info!(
        "Message for {} ({} characters)",
        representative.contact.email,
        body.trim().chars().count()
    );
    Ok(Notification::info(
        "Message Sent",
        "Your message has been sent to the representative. You'll receive a notification when they respond.",
    ))
}
