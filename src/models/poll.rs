use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PollOption {
    pub id: String,
    pub text: String,
    pub votes: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    #[serde(rename = "totalVotes")]
    pub total_votes: u32,
    #[serde(rename = "daysLeft")]
    pub days_left: u32,
    #[serde(rename = "hasVoted", default)]
    pub has_voted: bool,
    #[serde(rename = "userVote", default)]
    pub user_vote: Option<String>,
}

impl Poll {
    pub fn option(&self, option_id: &str) -> Option<&PollOption> {
        self.options.iter().find(|option| option.id == option_id)
    }

    pub fn days_left_label(&self) -> String {
        match self.days_left {
            1 => "1 day left".to_owned(),
            n => format!("{} days left", n),
        }
    }
}

/// A resident-submitted idea, voted on with thumbs up / thumbs down.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Relative label such as "2 days ago".
    pub date: String,
    pub upvotes: u32,
    pub downvotes: u32,
}
