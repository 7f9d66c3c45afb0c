use crate::model::{CqlCompletion, CqlPart, CqlQuery};

use super::MarkerBasedCompletion;

/// Placeholder for a statement branch without real suggestions.
///
/// Always answers with one informational part. The value is built in the
/// constructor and every call hands out the same instance.
pub struct NotSupportedCompletion {
    marker: CqlPart,
    completion: CqlCompletion,
}

impl NotSupportedCompletion {
    pub fn new(marker: &CqlPart, feature: &str) -> Self {
        let message = format!("'{feature}' is not supported yet.....");
        Self {
            marker: marker.clone(),
            completion: CqlCompletion::builder()
                .all(CqlPart::not_supported(message))
                .build(),
        }
    }
}

impl MarkerBasedCompletion for NotSupportedCompletion {
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
    use crate::model::{CqlQueryName, CqlType, KeywordDef};

    #[test]
    fn test_message_and_kind() {
        let matcher = NotSupportedCompletion::new(KeywordDef::BeginBatch.value(), "BATCH");
        let completion = matcher.completion(&CqlQuery::unknown("begin batch "));

        assert_eq!(completion.len(), 1);
        assert_eq!(
            completion.parts()[0].to_display_string(),
            "'BATCH' is not supported yet....."
        );
        assert_eq!(completion.parts()[0].part_type(), CqlType::NotSupported);
    }

    #[test]
    fn test_same_instance_regardless_of_query() {
        let matcher = NotSupportedCompletion::new(KeywordDef::BeginBatch.value(), "BATCH");
        let first = matcher.completion(&CqlQuery::unknown("begin batch "));
        let second = matcher.completion(&CqlQuery::new(CqlQueryName::Select, "anything at all"));

        assert!(first.shares_storage_with(&second));
        assert_eq!(first, second);
    }
}
