use super::required;
use crate::error::ValidationError;
use crate::models::events::Notification;
use crate::models::initiative::{Initiative, InitiativeCategory};
use log::info;
use serde::{Deserialize, Serialize};

/// The "Start an Initiative" form.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct InitiativeDraft {
    pub title: String,
    pub description: String,
    pub neighborhood: Option<String>,
    pub category: Option<InitiativeCategory>,
    pub date: String,
}

pub fn join_initiative(initiative: &Initiative) -> Notification {
    info!("Joined initiative {} ({})", initiative.id, initiative.title);
    Notification::info(
        "Success!",
        "You've joined this initiative. Check your email for details.",
    )
}

pub fn create_initiative(draft: &InitiativeDraft) -> Result<Notification, ValidationError> {
    required(&draft.title, "title")?;
    required(&draft.description, "description")?;
    if draft.neighborhood.is_none() {
        return Err(ValidationError::MissingField("neighborhood"));
    }
    if draft.category.is_none() {
        return Err(ValidationError::MissingField("category"));
    }

    info!("Initiative created: {}", draft.title.trim());
    Ok(Notification::info(
        "Initiative Created",
        "Your community initiative has been created and is now visible to your neighbors.",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> InitiativeDraft {
        InitiativeDraft {
            title: "Tool library".to_owned(),
            description: "Share ladders and drills".to_owned(),
            neighborhood: Some("Eastview".to_owned()),
            category: Some(InitiativeCategory::Community),
            date: "2023-06-01".to_owned(),
        }
    }

    #[test]
    fn complete_draft_is_created() {
        assert_eq!(
            create_initiative(&draft()).map(|n| n.title),
            Ok("Initiative Created".to_owned())
        );
    }

    #[test]
    fn first_missing_field_is_reported() {
        let mut missing_title = draft();
        missing_title.title = "  ".to_owned();
        assert_eq!(
            create_initiative(&missing_title),
            Err(ValidationError::MissingField("title"))
        );

        let mut missing_category = draft();
        missing_category.category = None;
        assert_eq!(
            create_initiative(&missing_category),
            Err(ValidationError::MissingField("category"))
        );
    }
}
