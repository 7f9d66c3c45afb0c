//! Completion results.
//!
//! A [`CqlCompletion`] carries two sets. The full set is everything the
//! editor may insert; the minimal set is the short list shown as a hint
//! (keyspace-qualified names, for example, only appear in the full set).
//! Both are sorted by display string and free of duplicate display
//! strings, so two results for the same cursor position compare equal and
//! the caller can skip redrawing.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::ser::{Serialize, Serializer};

use super::part::CqlPart;
use super::query::CqlQueryName;

/// Ordered, duplicate-free suggestions for one cursor position
///
/// Accessors without a set in their name read the full set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CqlCompletion {
    full: Arc<[CqlPart]>,
    min: Arc<[CqlPart]>,
}

impl CqlCompletion {
    /// The "nothing to suggest" value
    pub fn empty() -> Self {
        Self {
            full: Arc::from(Vec::new()),
            min: Arc::from(Vec::new()),
        }
    }

    pub fn builder() -> CqlCompletionBuilder {
        CqlCompletionBuilder::default()
    }

    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }

    pub fn len(&self) -> usize {
        self.full.len()
    }

    /// Everything the editor may insert
    pub fn full(&self) -> &[CqlPart] {
        &self.full
    }

    /// Short list for hints
    pub fn min(&self) -> &[CqlPart] {
        &self.min
    }

    pub fn parts(&self) -> &[CqlPart] {
        &self.full
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CqlPart> {
        self.full.iter()
    }

    /// Display strings in suggestion order
    pub fn display_strings(&self) -> Vec<&str> {
        self.full.iter().map(CqlPart::to_display_string).collect()
    }

    pub fn min_display_strings(&self) -> Vec<&str> {
        self.min.iter().map(CqlPart::to_display_string).collect()
    }

    pub fn contains_display(&self, text: &str) -> bool {
        self.full.iter().any(|p| p.to_display_string() == text)
    }

    /// True when both values are backed by the same allocation
    pub fn shares_storage_with(&self, other: &CqlCompletion) -> bool {
        Arc::ptr_eq(&self.full, &other.full) && Arc::ptr_eq(&self.min, &other.min)
    }
}

impl Default for CqlCompletion {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<CqlPart> for CqlCompletion {
    fn from_iter<I: IntoIterator<Item = CqlPart>>(iter: I) -> Self {
        Self::builder().all_of(iter).build()
    }
}

impl<'a> IntoIterator for &'a CqlCompletion {
    type Item = &'a CqlPart;
    type IntoIter = std::slice::Iter<'a, CqlPart>;

    fn into_iter(self) -> Self::IntoIter {
        self.full.iter()
    }
}

impl Serialize for CqlCompletion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.full.iter().map(CqlPart::to_display_string))
    }
}

/// Collects parts in natural order and builds a [`CqlCompletion`]
#[derive(Debug, Default)]
pub struct CqlCompletionBuilder {
    full: BTreeSet<CqlPart>,
    min: BTreeSet<CqlPart>,
}

impl CqlCompletionBuilder {
    /// Add to both sets
    pub fn all(mut self, part: CqlPart) -> Self {
        self.min.insert(part.clone());
        self.full.insert(part);
        self
    }

    pub fn all_of<I: IntoIterator<Item = CqlPart>>(self, parts: I) -> Self {
        parts.into_iter().fold(self, Self::all)
    }

    /// Add to the full set only
    pub fn full(mut self, part: CqlPart) -> Self {
        self.full.insert(part);
        self
    }

    pub fn full_of<I: IntoIterator<Item = CqlPart>>(mut self, parts: I) -> Self {
        self.full.extend(parts);
        self
    }

    /// Add to the minimal set only
    pub fn min(mut self, part: CqlPart) -> Self {
        self.min.insert(part);
        self
    }

    pub fn build(self) -> CqlCompletion {
        CqlCompletion {
            full: Self::collapse(self.full),
            min: Self::collapse(self.min),
        }
    }

    /// Parts sharing a display string collapse to the first in natural order.
    fn collapse(parts: BTreeSet<CqlPart>) -> Arc<[CqlPart]> {
        let mut unique: Vec<CqlPart> = Vec::with_capacity(parts.len());
        for part in parts {
            let duplicate = unique
                .last()
                .is_some_and(|last| last.to_display_string() == part.to_display_string());
            if !duplicate {
                unique.push(part);
            }
        }
        Arc::from(unique)
    }
}

/// A completion together with the statement type it was computed for.
///
/// Equality is value based: the editor compares the new value with the
/// previous one and redraws only when they differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextCqlCompletion {
    query_name: CqlQueryName,
    completion: CqlCompletion,
}

impl ContextCqlCompletion {
    pub fn new(query_name: CqlQueryName, completion: CqlCompletion) -> Self {
        Self {
            query_name,
            completion,
        }
    }

    /// Nothing to suggest for an unclassified query
    pub fn unknown() -> Self {
        Self::new(CqlQueryName::Unknown, CqlCompletion::empty())
    }

    pub fn query_name(&self) -> CqlQueryName {
        self.query_name
    }

    pub fn completion(&self) -> &CqlCompletion {
        &self.completion
    }

    /// Syntax help for the classified statement, empty when unknown
    pub fn synopsis(&self) -> &'static str {
        self.query_name.synopsis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sorts_and_dedups() {
        let completion = CqlCompletion::builder()
            .all(CqlPart::keyword("where"))
            .all(CqlPart::column("age"))
            .all(CqlPart::keyword("where"))
            .all(CqlPart::keyword("and"))
            .build();

        assert_eq!(completion.display_strings(), vec!["age", "and", "where"]);
    }

    #[test]
    fn test_full_and_min_sets() {
        let completion = CqlCompletion::builder()
            .all(CqlPart::keyword("where"))
            .full(CqlPart::identifier("shop.users"))
            .all(CqlPart::identifier("users"))
            .min(CqlPart::keyword("limit"))
            .full_of([CqlPart::identifier("shop.orders"), CqlPart::identifier("shop.users")])
            .build();

        assert_eq!(
            completion.display_strings(),
            vec!["shop.orders", "shop.users", "users", "where"]
        );
        assert_eq!(completion.min_display_strings(), vec!["limit", "users", "where"]);
        assert_eq!(completion.full(), completion.parts());
        assert_eq!(completion.len(), 4);
    }

    #[test]
    fn test_min_set_takes_part_in_equality() {
        let base = CqlCompletion::builder().all(CqlPart::keyword("where"));
        let with_hint = CqlCompletion::builder()
            .all(CqlPart::keyword("where"))
            .min(CqlPart::keyword("and"))
            .build();
        assert_ne!(base.build(), with_hint);
    }

    #[test]
    fn test_same_display_different_kind_collapses() {
        let completion: CqlCompletion = vec![
            CqlPart::keyword_value("true"),
            CqlPart::keyword("true"),
            CqlPart::column("true"),
        ]
        .into_iter()
        .collect();

        assert_eq!(completion.len(), 1);
        assert_eq!(completion.parts()[0], CqlPart::keyword("true"));
    }

    #[test]
    fn test_empty_is_distinguished() {
        let empty = CqlCompletion::empty();
        assert!(empty.is_empty());
        assert_eq!(empty, CqlCompletion::default());
        assert_ne!(empty, CqlCompletion::builder().all(CqlPart::keyword("use")).build());
    }

    #[test]
    fn test_context_equality_is_value_based() {
        let a = ContextCqlCompletion::new(
            CqlQueryName::Use,
            CqlCompletion::builder().all(CqlPart::identifier("ks")).build(),
        );
        let b = ContextCqlCompletion::new(
            CqlQueryName::Use,
            CqlCompletion::builder().all(CqlPart::identifier("ks")).build(),
        );
        assert!(!a.completion().shares_storage_with(b.completion()));
        assert_eq!(a, b);
    }

    #[test]
    fn test_serializes_display_strings() {
        let context = ContextCqlCompletion::new(
            CqlQueryName::DropIndex,
            CqlCompletion::builder()
                .all(CqlPart::keyword("if exists"))
                .all(CqlPart::identifier("users_by_email"))
                .build(),
        );
        let json = serde_json::to_value(&context).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "queryName": "DROP_INDEX",
                "completion": ["if exists", "users_by_email"]
            })
        );
    }
}
