//! Thumbs up / thumbs down voting on community proposals.

use super::Transition;
use crate::models::events::Notification;
use crate::models::state::{ProposalVoteState, VoteChoice};
use serde::Serialize;

/// Signed change to apply to the up and down tallies.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterDelta {
    pub up: i32,
    pub down: i32,
}

impl CounterDelta {
    fn for_choice(choice: VoteChoice, amount: i32) -> Self {
        match choice {
            VoteChoice::Up => Self { up: amount, down: 0 },
            VoteChoice::Down => Self { up: 0, down: amount },
        }
    }
}

impl std::ops::Add for CounterDelta {
    type Output = CounterDelta;

    fn add(self, other: CounterDelta) -> CounterDelta {
        CounterDelta {
            up: self.up + other.up,
            down: self.down + other.down,
        }
    }
}

/// Next choice and tally change when the user presses `requested` while
/// holding `current`.
///
/// Pressing the held choice again removes it; pressing the other one
/// switches in a single step.
pub fn apply_vote(
    current: Option<VoteChoice>,
    requested: VoteChoice,
) -> (Option<VoteChoice>, CounterDelta) {
    match current {
        Some(held) if held == requested => (None, CounterDelta::for_choice(held, -1)),
        Some(held) => (
            Some(requested),
            CounterDelta::for_choice(held, -1) + CounterDelta::for_choice(requested, 1),
        ),
        None => (Some(requested), CounterDelta::for_choice(requested, 1)),
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuickVoteKind {
    Recorded,
    Changed,
    Removed,
}

/// What the proposal list reports upwards: the item and the user's new
/// choice, `None` once the vote is removed.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct QuickVoteEvent {
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub vote: Option<VoteChoice>,
    pub kind: QuickVoteKind,
}

impl QuickVoteEvent {
    pub fn notification(&self) -> Notification {
        match (self.kind, self.vote) {
            (QuickVoteKind::Removed, _) | (_, None) => {
                Notification::info("Vote removed", "Your vote has been removed.")
            }
            (QuickVoteKind::Changed, Some(choice)) => Notification::info(
                "Vote changed",
                format!("You {} this item.", choice.past_tense()),
            ),
            (QuickVoteKind::Recorded, Some(choice)) => Notification::info(
                "Vote recorded",
                format!("You {} this item.", choice.past_tense()),
            ),
        }
    }
}

pub fn cast(
    state: &ProposalVoteState,
    requested: VoteChoice,
) -> Transition<ProposalVoteState, QuickVoteEvent> {
    let (vote, delta) = apply_vote(state.user_vote, requested);
    let kind = match (state.user_vote, vote) {
        (None, _) => QuickVoteKind::Recorded,
        (Some(_), None) => QuickVoteKind::Removed,
        (Some(_), Some(_)) => QuickVoteKind::Changed,
    };

    Transition {
        state: ProposalVoteState {
            item_id: state.item_id.clone(),
            upvotes: state.upvotes.saturating_add_signed(delta.up),
            downvotes: state.downvotes.saturating_add_signed(delta.down),
            user_vote: vote,
        },
        event: QuickVoteEvent {
            item_id: state.item_id.clone(),
            vote,
            kind,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tallies(state: &ProposalVoteState) -> (Option<VoteChoice>, u32, u32) {
        (state.user_vote, state.upvotes, state.downvotes)
    }

    #[test]
    fn apply_vote_covers_every_transition() {
        use VoteChoice::{Down, Up};

        assert_eq!(apply_vote(None, Up), (Some(Up), CounterDelta { up: 1, down: 0 }));
        assert_eq!(apply_vote(None, Down), (Some(Down), CounterDelta { up: 0, down: 1 }));
        assert_eq!(apply_vote(Some(Up), Up), (None, CounterDelta { up: -1, down: 0 }));
        assert_eq!(apply_vote(Some(Down), Down), (None, CounterDelta { up: 0, down: -1 }));
        assert_eq!(apply_vote(Some(Up), Down), (Some(Down), CounterDelta { up: -1, down: 1 }));
        assert_eq!(apply_vote(Some(Down), Up), (Some(Up), CounterDelta { up: 1, down: -1 }));
    }

    #[test]
    fn record_remove_and_switch() {
        let start = ProposalVoteState::new("p1", 5, 2);

        let recorded = cast(&start, VoteChoice::Up);
        assert_eq!(tallies(&recorded.state), (Some(VoteChoice::Up), 6, 2));
        assert_eq!(recorded.event.kind, QuickVoteKind::Recorded);
        assert_eq!(recorded.event.vote, Some(VoteChoice::Up));

        let removed = cast(&recorded.state, VoteChoice::Up);
        assert_eq!(tallies(&removed.state), (None, 5, 2));
        assert_eq!(removed.event.kind, QuickVoteKind::Removed);
        assert_eq!(removed.event.vote, None);

        let switched = cast(&recorded.state, VoteChoice::Down);
        assert_eq!(tallies(&switched.state), (Some(VoteChoice::Down), 5, 3));
        assert_eq!(switched.event.kind, QuickVoteKind::Changed);
        assert_eq!(switched.event.item_id, "p1");
    }

    #[test]
    fn cast_leaves_the_input_untouched() {
        let start = ProposalVoteState::new("p2", 42, 7);
        let _ = cast(&start, VoteChoice::Down);
        assert_eq!(tallies(&start), (None, 42, 7));
    }

    #[test]
    fn each_outcome_has_its_own_message() {
        let start = ProposalVoteState::new("p3", 0, 0);
        let recorded = cast(&start, VoteChoice::Down);
        let changed = cast(&recorded.state, VoteChoice::Up);
        let removed = cast(&changed.state, VoteChoice::Up);

        let recorded = recorded.event.notification();
        let changed = changed.event.notification();
        let removed = removed.event.notification();

        assert_eq!(recorded.title, "Vote recorded");
        assert_eq!(recorded.description, "You downvoted this item.");
        assert_eq!(changed.title, "Vote changed");
        assert_eq!(changed.description, "You upvoted this item.");
        assert_eq!(removed.title, "Vote removed");
        assert!(!removed.is_destructive());
    }

    #[test]
    fn event_serializes_removal_as_null() {
        let voted = cast(&ProposalVoteState::new("p4", 1, 0), VoteChoice::Up);
        let removed = cast(&voted.state, VoteChoice::Up);

        let json = serde_json::to_value(&removed.event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "itemId": "p4", "vote": null, "kind": "removed" })
        );
    }
}
