use super::Facet;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LegislationStatus {
    Proposed,
    InCommittee,
    VotingSoon,
    Passed,
    Rejected,
}

impl Facet for LegislationStatus {
    const ALL: &'static [Self] = &[
        Self::Proposed,
        Self::InCommittee,
        Self::VotingSoon,
        Self::Passed,
        Self::Rejected,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Proposed => "proposed",
            Self::InCommittee => "in-committee",
            Self::VotingSoon => "voting-soon",
            Self::Passed => "passed",
            Self::Rejected => "rejected",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Proposed => "Proposed",
            Self::InCommittee => "In Committee",
            Self::VotingSoon => "Voting Soon",
            Self::Passed => "Passed",
            Self::Rejected => "Rejected",
        }
    }
}

/// Council tally. Displayed as-is; residents cannot change it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CouncilVotes {
    pub yes: u32,
    pub no: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LegislationItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    #[serde(rename = "plainLanguageSummary")]
    pub plain_language_summary: String,
    pub status: LegislationStatus,
    pub date: String,
    #[serde(rename = "impactAreas")]
    pub impact_areas: Vec<String>,
    pub votes: CouncilVotes,
}
