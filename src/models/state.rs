use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Up,
    Down,
}

impl VoteChoice {
    pub fn past_tense(&self) -> &'static str {
        match self {
            VoteChoice::Up => "upvoted",
            VoteChoice::Down => "downvoted",
        }
    }
}

/// One resident's standing on a quick-vote item plus the tallies they see.
///
/// `user_vote` is `None` until the first vote and again after a removal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProposalVoteState {
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub upvotes: u32,
    pub downvotes: u32,
    #[serde(rename = "userVote")]
    pub user_vote: Option<VoteChoice>,
}

impl ProposalVoteState {
    pub fn new(item_id: impl Into<String>, upvotes: u32, downvotes: u32) -> Self {
        Self {
            item_id: item_id.into(),
            upvotes,
            downvotes,
            user_vote: None,
        }
    }
}

impl From<&super::poll::Proposal> for ProposalVoteState {
    fn from(proposal: &super::poll::Proposal) -> Self {
        Self::new(proposal.id.clone(), proposal.upvotes, proposal.downvotes)
    }
}
