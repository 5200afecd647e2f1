use super::Filterable;
use crate::models::initiative::{Initiative, InitiativeCategory};
use crate::models::issue::{Issue, IssueCategory, IssueStatus};
use crate::models::legislation::{LegislationItem, LegislationStatus};
use crate::models::poll::{Poll, Proposal};
use crate::models::representative::Representative;

impl Filterable for Issue {
    type Status = IssueStatus;
    type Category = IssueCategory;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn status(&self) -> Option<IssueStatus> {
        Some(self.status)
    }

    fn category(&self) -> Option<IssueCategory> {
        Some(self.category)
    }

    fn neighborhood(&self) -> Option<&str> {
        Some(self.neighborhood.as_str())
    }
}

impl Filterable for LegislationItem {
    type Status = LegislationStatus;
    type Category = ();

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.summary.as_str(),
            self.plain_language_summary.as_str(),
        ]
    }

    fn status(&self) -> Option<LegislationStatus> {
        Some(self.status)
    }
}

impl Filterable for Initiative {
    type Status = ();
    type Category = InitiativeCategory;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn category(&self) -> Option<InitiativeCategory> {
        Some(self.category)
    }

    fn neighborhood(&self) -> Option<&str> {
        Some(self.neighborhood.as_str())
    }
}

impl Filterable for Representative {
    type Status = ();
    type Category = ();

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.position.as_str(), self.district.as_str()]
    }
}

impl Filterable for Poll {
    type Status = ();
    type Category = ();

    fn search_fields(&self) -> Vec<&str> {
        vec![self.question.as_str()]
    }
}

impl Filterable for Proposal {
    type Status = ();
    type Category = ();

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}
