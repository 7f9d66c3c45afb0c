use crate::model::{CqlCompletion, CqlPart, CqlQuery};

use super::MarkerBasedCompletion;

/// Fixed keyword suggestions, built once
pub struct KeywordCompletion {
    marker: CqlPart,
    completion: CqlCompletion,
}

impl KeywordCompletion {
    pub fn new<'a, I>(marker: &CqlPart, parts: I) -> Self
    where
        I: IntoIterator<Item = &'a CqlPart>,
    {
        Self {
            marker: marker.clone(),
            completion: parts.into_iter().cloned().collect(),
        }
    }
}

impl MarkerBasedCompletion for KeywordCompletion {
    fn start_marker(&self) -> &CqlPart {
        &self.marker
    }

    fn completion(&self, _query: &CqlQuery) -> CqlCompletion {
        self.completion.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::KeywordDef;

    #[test]
    fn test_keywords_are_sorted() {
        let matcher = KeywordCompletion::new(
            KeywordDef::Using.value(),
            [KeywordDef::Ttl.value(), KeywordDef::And.value(), KeywordDef::Timestamp.value()],
        );
        let completion = matcher.completion(&CqlQuery::unknown("using "));
        assert_eq!(completion.display_strings(), vec!["and", "timestamp", "ttl"]);
        assert_eq!(matcher.start_marker(), KeywordDef::Using.value());
    }

    #[test]
    fn test_no_keywords_is_empty() {
        let matcher = KeywordCompletion::new(KeywordDef::AllowFiltering.value(), []);
        assert!(matcher.completion(&CqlQuery::unknown("x")).is_empty());
    }
}
