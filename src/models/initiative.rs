use super::Facet;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum InitiativeCategory {
    Cleanup,
    Safety,
    Education,
    Community,
    Other,
}

impl Facet for InitiativeCategory {
    const ALL: &'static [Self] = &[
        Self::Cleanup,
        Self::Safety,
        Self::Education,
        Self::Community,
        Self::Other,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Cleanup => "cleanup",
            Self::Safety => "safety",
            Self::Education => "education",
            Self::Community => "community",
            Self::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Cleanup => "Cleanup",
            Self::Safety => "Safety",
            Self::Education => "Education",
            Self::Community => "Community",
            Self::Other => "Other",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Initiative {
    pub id: String,
    pub title: String,
    pub description: String,
    pub neighborhood: String,
    pub organizer: String,
    pub date: String,
    pub participants: u32,
    pub category: InitiativeCategory,
}
