//! Multi-criteria filtering shared by the issue, legislation and initiative
//! boards (and the plain text searches elsewhere).
//!
//! An item is visible when the free-text query matches one of its
//! searchable fields and every predicate family allows its value for that
//! field. Families are ANDed together; inside a family the item's single
//! value just has to be a member of the allowed set.

mod entities;

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};

/// Allowed values for one predicate family.
///
/// `Any` is the unconstrained "all" state. `Only` with an empty set is what
/// the user gets after unchecking every box, and it matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Allowed<T: Ord> {
    Any,
    Only(BTreeSet<T>),
}

impl<T: Ord> Default for Allowed<T> {
    fn default() -> Self {
        Allowed::Any
    }
}

impl<T: Ord + Clone> Allowed<T> {
    pub fn only(values: impl IntoIterator<Item = T>) -> Self {
        Allowed::Only(values.into_iter().collect())
    }

    pub fn single(value: T) -> Self {
        Allowed::Only(BTreeSet::from([value]))
    }

    pub fn nothing() -> Self {
        Allowed::Only(BTreeSet::new())
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Allowed::Any)
    }

    pub fn permits<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self {
            Allowed::Any => true,
            Allowed::Only(values) => values.contains(value),
        }
    }

    /// Checkbox semantics: flips membership of `value`. An unconstrained set
    /// is first materialised from `universe`, so unchecking one box from the
    /// "all" state leaves every other value checked.
    pub fn toggle(&mut self, value: T, universe: impl IntoIterator<Item = T>) {
        if let Allowed::Any = self {
            *self = Allowed::only(universe);
        }
        if let Allowed::Only(values) = self {
            if !values.remove(&value) {
                values.insert(value);
            }
        }
    }

    /// The chosen value when the family is driven by a single-select
    /// dropdown, `None` for "all".
    pub fn selected(&self) -> Option<&T> {
        match self {
            Allowed::Only(values) if values.len() == 1 => values.iter().next(),
            _ => None,
        }
    }
}

/// Something a [`Criteria`] can be evaluated against.
///
/// Families that make no sense for a type return `None` and are ignored
/// for it; `()` fills the associated type in that case.
pub trait Filterable {
    type Status: Ord + Copy;
    type Category: Ord + Copy;

    /// Fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    fn status(&self) -> Option<Self::Status> {
        None
    }

    fn category(&self) -> Option<Self::Category> {
        None
    }

    fn neighborhood(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria<S: Ord, C: Ord> {
    pub query: String,
    pub statuses: Allowed<S>,
    pub categories: Allowed<C>,
    pub neighborhoods: Allowed<String>,
}

pub type CriteriaFor<T> = Criteria<<T as Filterable>::Status, <T as Filterable>::Category>;

impl<S: Ord, C: Ord> Default for Criteria<S, C> {
    fn default() -> Self {
        Self {
            query: String::new(),
            statuses: Allowed::Any,
            categories: Allowed::Any,
            neighborhoods: Allowed::Any,
        }
    }
}

impl<S: Ord + Copy, C: Ord + Copy> Criteria<S, C> {
    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: Filterable<Status = S, Category = C>,
    {
        self.matches_ignoring_status(item)
            && item.status().map_or(true, |status| self.statuses.permits(&status))
    }

    fn matches_ignoring_status<T>(&self, item: &T) -> bool
    where
        T: Filterable<Status = S, Category = C>,
    {
        matches_query(item, &self.query)
            && item
                .category()
                .map_or(true, |category| self.categories.permits(&category))
            && item
                .neighborhood()
                .map_or(true, |name| self.neighborhoods.permits(name))
    }
}

/// Case-insensitive substring match over the item's searchable fields. An
/// empty query matches everything.
pub fn matches_query<T: Filterable>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Visible subset of `items`, in their original order.
pub fn apply<'a, T: Filterable>(items: &'a [T], criteria: &CriteriaFor<T>) -> Vec<&'a T> {
    items.iter().filter(|item| criteria.matches(*item)).collect()
}

/// What a status tab lists: the fully filtered items narrowed to `status`.
/// An emptied status family leaves every tab empty.
pub fn apply_in_status<'a, T: Filterable>(
    items: &'a [T],
    criteria: &CriteriaFor<T>,
    status: T::Status,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| criteria.matches(*item) && item.status() == Some(status))
        .collect()
}

/// Per-status badge counts.
///
/// Every predicate except the status family is applied, so a badge shows
/// how many items the user would see by selecting that status. Statuses
/// with no matching item are absent from the map.
pub fn status_counts<T: Filterable>(
    items: &[T],
    criteria: &CriteriaFor<T>,
) -> BTreeMap<T::Status, usize> {
    let mut counts = BTreeMap::new();
    for item in items.iter().filter(|item| criteria.matches_ignoring_status(*item)) {
        if let Some(status) = item.status() {
            *counts.entry(status).or_insert(0) += 1;
        }
    }
    counts
}

/// The first `limit` items located in `neighborhood`, or in any
/// neighborhood when `None`.
pub fn first_in_neighborhood<'a, T: Filterable>(
    items: &'a [T],
    neighborhood: Option<&str>,
    limit: usize,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| match neighborhood {
            Some(name) => item.neighborhood() == Some(name),
            None => true,
        })
        .take(limit)
        .collect()
}
