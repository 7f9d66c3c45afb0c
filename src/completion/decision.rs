//! Per-statement decision lists
//!
//! A decision list is the grammar of one statement type flattened into
//! positions. The outer vector is the sequence of grammar positions, the
//! inner one the alternative matchers valid at that position.

use crate::model::{CqlPart, CqlQueryName};

use super::matcher::Matcher;

/// Decision list for one statement type
pub struct DecisionListSupport {
    query_name: CqlQueryName,
    supports: &'static CqlPart,
    decision_list: Vec<Vec<Matcher>>,
}

impl DecisionListSupport {
    pub fn new(
        query_name: CqlQueryName,
        supports: &'static CqlPart,
        decision_list: Vec<Vec<Matcher>>,
    ) -> Self {
        Self {
            query_name,
            supports,
            decision_list,
        }
    }

    /// Statement type served by this list
    pub fn query_name(&self) -> CqlQueryName {
        self.query_name
    }

    /// Keyword that starts the statement
    pub fn supports(&self) -> &'static CqlPart {
        self.supports
    }

    pub fn decision_list(&self) -> &[Vec<Matcher>] {
        &self.decision_list
    }

    /// True for a token that is a start marker at any position
    pub fn is_marker(&self, part: &CqlPart) -> bool {
        self.decision_list
            .iter()
            .flatten()
            .any(|matcher| matcher.start_marker() == part)
    }

    /// Index of the alternative at `position` whose marker is `part`
    pub fn alternative_at(&self, position: usize, part: &CqlPart) -> Option<usize> {
        self.decision_list
            .get(position)?
            .iter()
            .position(|matcher| matcher.start_marker() == part)
    }

    pub fn matcher(&self, position: usize, alternative: usize) -> Option<&Matcher> {
        self.decision_list.get(position)?.get(alternative)
    }
}

impl std::fmt::Debug for DecisionListSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let markers: Vec<Vec<&str>> = self
            .decision_list
            .iter()
            .map(|alternatives| {
                alternatives
                    .iter()
                    .map(|m| m.start_marker().to_display_string())
                    .collect()
            })
            .collect();
        f.debug_struct("DecisionListSupport")
            .field("query_name", &self.query_name)
            .field("markers", &markers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::completion::matcher::KeywordCompletion;
    use crate::model::KeywordDef;

    fn keyword(marker: KeywordDef) -> Matcher {
        Arc::new(KeywordCompletion::new(marker.value(), []))
    }

    #[test]
    fn test_marker_lookup() {
        let support = DecisionListSupport::new(
            CqlQueryName::Select,
            KeywordDef::Select.value(),
            vec![
                vec![keyword(KeywordDef::Select)],
                vec![keyword(KeywordDef::Where), keyword(KeywordDef::And)],
            ],
        );

        assert!(support.is_marker(KeywordDef::And.value()));
        assert!(!support.is_marker(KeywordDef::Limit.value()));
        assert_eq!(support.alternative_at(1, KeywordDef::And.value()), Some(1));
        assert_eq!(support.alternative_at(0, KeywordDef::And.value()), None);
        assert_eq!(support.alternative_at(5, KeywordDef::And.value()), None);
        assert!(support.matcher(1, 1).is_some());
        assert!(support.matcher(1, 2).is_none());
    }

    #[test]
    fn test_debug_lists_markers() {
        let support = DecisionListSupport::new(
            CqlQueryName::Truncate,
            KeywordDef::Truncate.value(),
            vec![vec![keyword(KeywordDef::Truncate)]],
        );
        let debug = format!("{support:?}");
        assert!(debug.contains("Truncate"));
        assert!(debug.contains("\"truncate\""));
    }
}
