//! Single-choice polls. One ballot per resident; it can be moved to another
//! option but never counted twice.

use super::{percentage, Transition, VoteError};
use crate::models::events::Notification;
use crate::models::poll::{Poll, PollOption};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PollVoteKind {
    /// First ballot in this poll.
    Recorded,
    /// Ballot moved from another option.
    Changed,
    /// Same option submitted again.
    Unchanged,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PollVoteEvent {
    #[serde(rename = "pollId")]
    pub poll_id: String,
    #[serde(rename = "optionId")]
    pub option_id: String,
    pub kind: PollVoteKind,
}

impl PollVoteEvent {
    pub fn notification(&self) -> Notification {
        Notification::info("Vote submitted!", "Your opinion has been recorded.")
    }
}

pub fn submit_vote(
    poll: &Poll,
    selected: Option<&str>,
) -> Result<Transition<Poll, PollVoteEvent>, VoteError> {
    let selected = selected.ok_or(VoteError::NoOptionSelected)?;
    if poll.option(selected).is_none() {
        return Err(VoteError::UnknownOption {
            poll_id: poll.id.clone(),
            option_id: selected.to_owned(),
        });
    }

    let previous = if poll.has_voted {
        poll.user_vote.as_deref()
    } else {
        None
    };
    let kind = match previous {
        Some(previous) if previous == selected => PollVoteKind::Unchanged,
        _ if poll.has_voted => PollVoteKind::Changed,
        _ => PollVoteKind::Recorded,
    };

    let mut next = poll.clone();
    match kind {
        PollVoteKind::Recorded => {
            bump(&mut next.options, selected, |votes| votes.saturating_add(1));
            next.total_votes = next.total_votes.saturating_add(1);
        }
        PollVoteKind::Changed => {
            bump(&mut next.options, selected, |votes| votes.saturating_add(1));
            if let Some(previous) = previous {
                bump(&mut next.options, previous, |votes| votes.saturating_sub(1));
            }
        }
        PollVoteKind::Unchanged => {}
    }
    next.has_voted = true;
    next.user_vote = Some(selected.to_owned());

    Ok(Transition {
        event: PollVoteEvent {
            poll_id: poll.id.clone(),
            option_id: selected.to_owned(),
            kind,
        },
        state: next,
    })
}

/// Share of the poll's total held by `option`, for the result bars.
pub fn option_percentage(poll: &Poll, option: &PollOption) -> u32 {
    percentage(option.votes, poll.total_votes)
}

fn bump(options: &mut [PollOption], option_id: &str, f: impl Fn(u32) -> u32) {
    if let Some(option) = options.iter_mut().find(|option| option.id == option_id) {
        option.votes = f(option.votes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn two_options() -> Poll {
        Poll {
            id: "poll".to_owned(),
            question: "A or B?".to_owned(),
            options: vec![
                PollOption {
                    id: "A".to_owned(),
                    text: "A".to_owned(),
                    votes: 10,
                },
                PollOption {
                    id: "B".to_owned(),
                    text: "B".to_owned(),
                    votes: 5,
                },
            ],
            total_votes: 15,
            days_left: 1,
            has_voted: false,
            user_vote: None,
        }
    }

    fn votes(poll: &Poll) -> (u32, u32, u32) {
        (poll.options[0].votes, poll.options[1].votes, poll.total_votes)
    }

    #[test]
    fn first_vote_then_switch_then_resubmit() {
        let first = submit_vote(&two_options(), Some("A")).unwrap();
        assert_eq!(votes(&first.state), (11, 5, 16));
        assert!(first.state.has_voted);
        assert_eq!(first.state.user_vote.as_deref(), Some("A"));
        assert_eq!(first.event.kind, PollVoteKind::Recorded);

        let switched = submit_vote(&first.state, Some("B")).unwrap();
        assert_eq!(votes(&switched.state), (10, 6, 16));
        assert_eq!(switched.state.user_vote.as_deref(), Some("B"));
        assert_eq!(switched.event.kind, PollVoteKind::Changed);

        let again = submit_vote(&switched.state, Some("B")).unwrap();
        assert_eq!(votes(&again.state), (10, 6, 16));
        assert_eq!(again.event.kind, PollVoteKind::Unchanged);
        assert_eq!(again.event.option_id, "B");
        assert_eq!(again.event.poll_id, "poll");
    }

    #[test]
    fn missing_selection_is_rejected() {
        let poll = two_options();
        assert_eq!(submit_vote(&poll, None), Err(VoteError::NoOptionSelected));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let poll = two_options();
        assert_eq!(
            submit_vote(&poll, Some("C")),
            Err(VoteError::UnknownOption {
                poll_id: "poll".to_owned(),
                option_id: "C".to_owned(),
            })
        );
    }

    #[test]
    fn switching_away_from_an_empty_option_floors_at_zero() {
        let mut poll = two_options();
        poll.options[1].votes = 0;
        poll.has_voted = true;
        poll.user_vote = Some("B".to_owned());

        let switched = submit_vote(&poll, Some("A")).unwrap();
        assert_eq!(votes(&switched.state), (11, 0, 15));
    }

    #[test]
    fn full_tallies_saturate_instead_of_overflowing() {
        let mut poll = two_options();
        poll.options[0].votes = u32::MAX;
        poll.total_votes = u32::MAX;

        let first = submit_vote(&poll, Some("A")).unwrap();
        assert_eq!(votes(&first.state), (u32::MAX, 5, u32::MAX));

        let switched = submit_vote(&first.state, Some("B")).unwrap();
        assert_eq!(votes(&switched.state), (u32::MAX - 1, 6, u32::MAX));
    }

    #[test]
    fn every_success_reports_the_same_toast() {
        let first = submit_vote(&two_options(), Some("B")).unwrap();
        let again = submit_vote(&first.state, Some("B")).unwrap();

        assert_eq!(first.event.notification(), again.event.notification());
        assert_eq!(first.event.notification().title, "Vote submitted!");
    }

    #[test]
    fn percentages_follow_the_total() {
        let data = data::reference_data().unwrap();
        let polls = data.polls();
        let bike_lanes = &polls[0];

        let shares: Vec<u32> = bike_lanes
            .options
            .iter()
            .map(|option| option_percentage(bike_lanes, option))
            .collect();
        assert_eq!(shares, vec![67, 33]);

        let mut empty = two_options();
        empty.total_votes = 0;
        assert_eq!(option_percentage(&empty, &empty.options[0]), 0);
    }
}
