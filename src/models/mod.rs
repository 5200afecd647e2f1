pub mod auth;
pub mod events;
pub mod impact;
pub mod initiative;
pub mod issue;
pub mod legislation;
pub mod neighborhood;
pub mod poll;
pub mod representative;
pub mod state;

/// A closed set of values an entity can be filtered by.
///
/// `ALL` lists the variants in display order; filters that start out with
/// every value checked are seeded from it.
pub trait Facet: Copy + Ord + std::fmt::Debug + 'static {
    const ALL: &'static [Self];

    /// Kebab-case name as it appears in the reference data.
    fn as_str(&self) -> &'static str;

    /// Human readable name for badges and checkboxes.
    fn label(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::Facet;
    use super::initiative::InitiativeCategory;
    use super::issue::{IssueCategory, IssueStatus};
    use super::legislation::LegislationStatus;

    fn wire_names_match_serde<T: Facet + serde::Serialize>() {
        for value in T::ALL {
            assert_eq!(serde_json::to_value(value).unwrap(), value.as_str());
            assert!(!value.label().is_empty());
        }
    }

    #[test]
    fn facet_names_match_the_reference_spelling() {
        wire_names_match_serde::<IssueStatus>();
        wire_names_match_serde::<IssueCategory>();
        wire_names_match_serde::<LegislationStatus>();
        wire_names_match_serde::<InitiativeCategory>();
    }
}
