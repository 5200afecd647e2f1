use super::required;
use crate::error::ValidationError;
use crate::models::events::Notification;
use crate::models::issue::IssueCategory;
use crate::models::Facet;
use log::info;
use serde::{Deserialize, Serialize};

/// The "Report Issue" form.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
    pub neighborhood: Option<String>,
    pub category: Option<IssueCategory>,
}

pub fn report_issue(draft: &IssueDraft) -> Result<Notification, ValidationError> {
    required(&draft.title, "title")?;
    required(&draft.description, "description")?;
    let neighborhood = draft
        .neighborhood
        .as_deref()
        .ok_or(ValidationError::MissingField("neighborhood"))?;

    info!(
        "Issue reported in {}: {} ({})",
        neighborhood,
        draft.title.trim(),
        draft.category.unwrap_or(IssueCategory::Other).as_str()
    );
    Ok(Notification::info(
        "Issue Reported",
        "Thanks for letting us know. Your neighbors can now see and upvote this issue.",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_defaults_but_neighborhood_is_required() {
        let mut draft = IssueDraft {
            title: "Flooded underpass".to_owned(),
            description: "Water pools after every storm".to_owned(),
            neighborhood: None,
            category: None,
        };
        assert_eq!(
            report_issue(&draft),
            Err(ValidationError::MissingField("neighborhood"))
        );

        draft.neighborhood = Some("Southbay".to_owned());
        assert!(report_issue(&draft).is_ok());
    }

    #[test]
    fn blank_description_is_rejected() {
        let draft = IssueDraft {
            title: "Flooded underpass".to_owned(),
            neighborhood: Some("Southbay".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            report_issue(&draft),
            Err(ValidationError::MissingField("description"))
        );
    }
}
