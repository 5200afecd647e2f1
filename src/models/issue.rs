use super::Facet;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    New,
    InProgress,
    Resolved,
}

impl Facet for IssueStatus {
    const ALL: &'static [Self] = &[Self::New, Self::InProgress, Self::Resolved];

    fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum IssueCategory {
    Infrastructure,
    Safety,
    Parks,
    Traffic,
    Other,
}

impl Facet for IssueCategory {
    const ALL: &'static [Self] = &[
        Self::Infrastructure,
        Self::Safety,
        Self::Parks,
        Self::Traffic,
        Self::Other,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Infrastructure => "infrastructure",
            Self::Safety => "safety",
            Self::Parks => "parks",
            Self::Traffic => "traffic",
            Self::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Infrastructure => "Infrastructure",
            Self::Safety => "Safety",
            Self::Parks => "Parks",
            Self::Traffic => "Traffic",
            Self::Other => "Other",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Neighborhood name, not id.
    pub neighborhood: String,
    pub status: IssueStatus,
    pub date: String,
    pub category: IssueCategory,
    pub votes: u32,
    pub comments: u32,
}
