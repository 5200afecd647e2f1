//! Reference data provider.
//!
//! The collections ship inside the binary as one JSON document. It is
//! parsed the first time anyone asks for it and never changes afterwards;
//! accessors hand out copies in the order the document lists them.

use crate::models::impact::{ImpactMetric, MonthlyPoint, NeighborhoodParticipation, PolicyImpact};
use crate::models::initiative::Initiative;
use crate::models::issue::Issue;
use crate::models::legislation::LegislationItem;
use crate::models::neighborhood::Neighborhood;
use crate::models::poll::{Poll, Proposal};
use crate::models::representative::Representative;
use anyhow::{Context, Result};
use log::info;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

const EMBEDDED: &str = include_str!("../../assets/data/reference.json");

static REFERENCE_DATA: OnceCell<ReferenceData> = OnceCell::new();

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ReferenceData {
    neighborhoods: Vec<Neighborhood>,
    issues: Vec<Issue>,
    legislation: Vec<LegislationItem>,
    representatives: Vec<Representative>,
    initiatives: Vec<Initiative>,
    #[serde(rename = "impactMetrics")]
    impact_metrics: Vec<ImpactMetric>,
    #[serde(rename = "monthlyTrend")]
    monthly_trend: Vec<MonthlyPoint>,
    #[serde(rename = "policyImpact")]
    policy_impact: Vec<PolicyImpact>,
    #[serde(rename = "neighborhoodParticipation")]
    neighborhood_participation: Vec<NeighborhoodParticipation>,
    polls: Vec<Poll>,
    proposals: Vec<Proposal>,
}

/// Process-wide reference data, parsed on first use.
pub fn reference_data() -> Result<&'static ReferenceData> {
    REFERENCE_DATA.get_or_try_init(|| {
        let data = ReferenceData::from_json(EMBEDDED).context("embedded reference data")?;
        info!(
            "Loaded reference data: {} issues, {} bills, {} representatives, {} initiatives",
            data.issues.len(),
            data.legislation.len(),
            data.representatives.len(),
            data.initiatives.len()
        );
        Ok(data)
    })
}

impl ReferenceData {
    pub fn from_json(json: &str) -> Result<Self> {
        let data: ReferenceData =
            serde_json::from_str(json).context("failed to parse reference data")?;
        data.check_unique_ids()?;
        Ok(data)
    }

    fn check_unique_ids(&self) -> Result<()> {
        fn unique<'a>(name: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
            let mut seen = std::collections::HashSet::new();
            for id in ids {
                if !seen.insert(id) {
                    anyhow::bail!("duplicate id {id:?} in {name}");
                }
            }
            Ok(())
        }

        unique("neighborhoods", self.neighborhoods.iter().map(|n| n.id.as_str()))?;
        unique("issues", self.issues.iter().map(|i| i.id.as_str()))?;
        unique("legislation", self.legislation.iter().map(|l| l.id.as_str()))?;
        unique("representatives", self.representatives.iter().map(|r| r.id.as_str()))?;
        unique("initiatives", self.initiatives.iter().map(|i| i.id.as_str()))?;
        unique("impactMetrics", self.impact_metrics.iter().map(|m| m.id.as_str()))?;
        unique("polls", self.polls.iter().map(|p| p.id.as_str()))?;
        unique("proposals", self.proposals.iter().map(|p| p.id.as_str()))?;
        for poll in &self.polls {
            unique(&poll.question, poll.options.iter().map(|o| o.id.as_str()))?;
        }
        Ok(())
    }

    pub fn neighborhoods(&self) -> Vec<Neighborhood> {
        self.neighborhoods.clone()
    }

    pub fn issues(&self) -> Vec<Issue> {
        self.issues.clone()
    }

    pub fn legislation(&self) -> Vec<LegislationItem> {
        self.legislation.clone()
    }

    pub fn representatives(&self) -> Vec<Representative> {
        self.representatives.clone()
    }

    pub fn initiatives(&self) -> Vec<Initiative> {
        self.initiatives.clone()
    }

    pub fn impact_metrics(&self) -> Vec<ImpactMetric> {
        self.impact_metrics.clone()
    }

    pub fn monthly_trend(&self) -> Vec<MonthlyPoint> {
        self.monthly_trend.clone()
    }

    pub fn policy_impact(&self) -> Vec<PolicyImpact> {
        self.policy_impact.clone()
    }

    pub fn neighborhood_participation(&self) -> Vec<NeighborhoodParticipation> {
        self.neighborhood_participation.clone()
    }

    /// Seed polls; each session votes on its own copy.
    pub fn polls(&self) -> Vec<Poll> {
        self.polls.clone()
    }

    pub fn proposals(&self) -> Vec<Proposal> {
        self.proposals.clone()
    }

    pub fn neighborhood_names(&self) -> Vec<String> {
        self.neighborhoods.iter().map(|n| n.name.clone()).collect()
    }

    pub fn neighborhood_by_id(&self, id: &str) -> Option<&Neighborhood> {
        self.neighborhoods.iter().find(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::issue::IssueStatus;
    use crate::models::legislation::LegislationStatus;

    #[test]
    fn embedded_data_loads_in_source_order() {
        let data = reference_data().unwrap();

        let names = data.neighborhood_names();
        assert_eq!(names, vec!["Downtown", "Westside", "Northpark", "Eastview", "Southbay"]);

        let issues = data.issues();
        assert_eq!(issues.len(), 5);
        assert_eq!(issues[0].title, "Pothole on Main Street");
        assert_eq!(issues[1].status, IssueStatus::InProgress);

        let legislation = data.legislation();
        assert_eq!(legislation[1].status, LegislationStatus::VotingSoon);
        assert_eq!(legislation[2].votes.yes, 7);
        assert!(legislation[0].plain_language_summary.starts_with("This proposal"));

        let representatives = data.representatives();
        assert_eq!(representatives[1].response_rate, 92);
        assert_eq!(representatives[1].upcoming_events.len(), 2);

        assert_eq!(data.impact_metrics()[4].change, -5);
        assert_eq!(data.monthly_trend().len(), 6);
        assert_eq!(data.policy_impact()[1].positive, 78);
        assert_eq!(data.neighborhood_participation()[2].participation, 82);
        assert_eq!(data.proposals()[0].id, "p1");
    }

    #[test]
    fn seed_polls_start_unvoted_with_consistent_totals() {
        let data = reference_data().unwrap();
        for poll in data.polls() {
            assert!(!poll.has_voted);
            assert_eq!(poll.user_vote, None);
            let sum: u32 = poll.options.iter().map(|o| o.votes).sum();
            assert_eq!(sum, poll.total_votes, "{}", poll.question);
        }
    }

    #[test]
    fn accessors_hand_out_copies() {
        let data = reference_data().unwrap();
        let mut issues = data.issues();
        issues[0].votes += 100;
        assert_eq!(data.issues()[0].votes, 45);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED).unwrap();
        value["issues"][1]["id"] = serde_json::json!("1");

        let error = ReferenceData::from_json(&value.to_string()).unwrap_err();
        assert!(error.to_string().contains("duplicate id"));
    }

    #[test]
    fn neighborhood_lookup_by_id() {
        let data = reference_data().unwrap();
        assert_eq!(data.neighborhood_by_id("3").map(|n| n.name.as_str()), Some("Northpark"));
        assert!(data.neighborhood_by_id("9").is_none());
    }
}
