use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub office: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Representative {
    pub id: String,
    pub name: String,
    pub position: String,
    pub district: String,
    pub party: String,
    pub contact: Contact,
    /// Percentage of resident messages answered, 0-100.
    #[serde(rename = "responseRate")]
    pub response_rate: u8,
    #[serde(rename = "upcomingEvents")]
    pub upcoming_events: Vec<String>,
}
