//! Search-and-filter evaluation over materialized entity lists.
//!
//! A filter map is a flat `field name -> value` mapping. The reserved key
//! [`SEARCH_TERMS_KEY`] holds a comma-separated list of free-text terms that
//! must all appear in the entity's serialized JSON form. Every other key that
//! names a known field is an exact match on that field's string form. Keys
//! that name no field are ignored. All active predicates are ANDed and the
//! input order is preserved.

use serde::Serialize;
use std::collections::HashMap;

pub const SEARCH_TERMS_KEY: &str = "searchTerms";

pub type FilterMap = HashMap<String, String>;

/// Renders one field of `T` as the string used for exact-match filters.
pub type FieldAccessor<T> = fn(&T) -> String;

/// Per-type dispatch table of filterable fields.
pub trait Filterable: Serialize + Sized + 'static {
    const FIELDS: &'static [(&'static str, FieldAccessor<Self>)];

    fn accessor(name: &str) -> Option<FieldAccessor<Self>> {
        Self::FIELDS
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, accessor)| *accessor)
    }

    /// Deterministic text the search clause is matched against.
    fn search_text(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// A filter map resolved against the fields of `T`.
pub struct FilterQuery<'a, T> {
    terms: Vec<&'a str>,
    exact: Vec<(FieldAccessor<T>, &'a str)>,
}

impl<'a, T: Filterable> FilterQuery<'a, T> {
    pub fn new(filters: &'a FilterMap) -> Self {
        let terms = filters
            .get(SEARCH_TERMS_KEY)
            .map(|raw| split_terms(raw))
            .unwrap_or_default();

        let exact = filters
            .iter()
            .filter(|(key, _)| key.as_str() != SEARCH_TERMS_KEY)
            .filter_map(|(key, value)| T::accessor(key).map(|accessor| (accessor, value.as_str())))
            .collect();

        Self { terms, exact }
    }

    pub fn is_identity(&self) -> bool {
        self.terms.is_empty() && self.exact.is_empty()
    }

    pub fn matches_search(&self, entity: &T) -> bool {
        if self.terms.is_empty() {
            return true;
        }
        let text = entity.search_text();
        self.terms.iter().all(|term| text.contains(term))
    }

    pub fn matches_filters(&self, entity: &T) -> bool {
        self.exact
            .iter()
            .all(|(accessor, expected)| accessor(entity) == *expected)
    }

    pub fn matches(&self, entity: &T) -> bool {
        self.matches_filters(entity) && self.matches_search(entity)
    }
}

/// Splits a raw search clause on commas, trimming each term. Blank terms are
/// dropped, so an empty clause has no terms and matches everything.
pub fn split_terms(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .collect()
}

/// Returns the entities matching every predicate in `filters`, in input order.
pub fn apply<T: Filterable>(entities: Vec<T>, filters: &FilterMap) -> Vec<T> {
    let query = FilterQuery::<T>::new(filters);
    if query.is_identity() {
        return entities;
    }
    entities.into_iter().filter(|e| query.matches(e)).collect()
}
