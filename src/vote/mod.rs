//! Vote state machines. Transitions are pure: they take the current state,
//! return the next one together with an event describing what happened,
//! and leave toasts and logging to the caller.

pub mod poll;
pub mod quick;

use crate::models::events::Notification;
use serde::Serialize;
use thiserror::Error;

/// Result of a successful transition.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Transition<S, E> {
    pub state: S,
    pub event: E,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoteError {
    #[error("Please select an option to vote.")]
    NoOptionSelected,

    #[error("Option {option_id} is not part of poll {poll_id}.")]
    UnknownOption { poll_id: String, option_id: String },
}

impl From<&VoteError> for Notification {
    fn from(error: &VoteError) -> Self {
        let title = match error {
            VoteError::NoOptionSelected => "No option selected",
            VoteError::UnknownOption { .. } => "Invalid option",
        };
        Notification::warning(title, error.to_string())
    }
}

/// `round(votes / total * 100)`, half rounding up, and 0 for an empty total.
pub fn percentage(votes: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (votes, total) = (u64::from(votes), u64::from(total));
    ((votes * 200 + total) / (total * 2)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_of_empty_total_is_zero() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(7, 0), 0);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(67, 100), 67);
        assert_eq!(percentage(110, 110), 100);
    }

    #[test]
    fn vote_errors_are_destructive() {
        let notification = Notification::from(&VoteError::NoOptionSelected);
        assert!(notification.is_destructive());
        assert_eq!(notification.title, "No option selected");
        assert_eq!(notification.description, "Please select an option to vote.");
    }
}
