use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImpactMetric {
    pub id: String,
    pub name: String,
    pub value: u32,
    /// Percent change over the previous period; negative means a decline.
    pub change: i32,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MonthlyPoint {
    pub month: String,
    pub issues: u32,
    pub resolved: u32,
    pub participation: u32,
}

impl MonthlyPoint {
    /// Share of the month's issues that were resolved, 0 when none were reported.
    pub fn resolution_rate(&self) -> u32 {
        crate::vote::percentage(self.resolved, self.issues)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PolicyImpact {
    pub policy: String,
    #[serde(rename = "positiveImpact")]
    pub positive: u32,
    #[serde(rename = "negativeImpact")]
    pub negative: u32,
    pub neutral: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NeighborhoodParticipation {
    pub name: String,
    pub participation: u32,
}
