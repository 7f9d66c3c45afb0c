//! Completer for reedline - turns engine completions into suggestions

use std::sync::Arc;

use reedline::{Completer, Span, Suggestion};

use crate::completion::CompletionService;
use crate::model::{CqlPart, CqlQueryName, CqlType};
use crate::parser::{TokenStream, clamp_cursor};

/// Longest multi-word keyword, in words
const MAX_PHRASE_WORDS: usize = 3;

/// CQL completer for reedline
pub struct CqlCompleter {
    service: Arc<CompletionService>,
}

impl CqlCompleter {
    pub fn new(service: Arc<CompletionService>) -> Self {
        Self { service }
    }

    /// Where typing the suggestion `display` would start replacing text.
    ///
    /// Multi-word keywords may already be partly typed (`drop in` for
    /// `drop index`), so trailing words are tried from the earliest one.
    fn replacement_start(line: &str, pos: usize, starts: &[usize], display: &str) -> Option<usize> {
        let display = display.to_lowercase();
        starts
            .iter()
            .copied()
            .find(|&start| display.starts_with(&normalize(&line[start..pos])))
    }

    /// Statement keywords replace everything typed so far
    fn statement_start(stream: &TokenStream) -> usize {
        stream
            .tokens_before_cursor()
            .first()
            .map_or(stream.completion_start(), |token| token.span.start)
    }

    /// Candidate span starts, earliest first
    fn candidate_starts(stream: &TokenStream) -> Vec<usize> {
        let mut starts: Vec<usize> = stream
            .tokens_before_cursor()
            .iter()
            .rev()
            .take_while(|token| token.is_word())
            .take(MAX_PHRASE_WORDS - 1)
            .map(|token| token.span.start)
            .collect();
        starts.reverse();
        starts.push(stream.completion_start());
        starts
    }
}

/// Lower-case and collapse whitespace runs into single spaces
fn normalize(typed: &str) -> String {
    let mut normalized = String::with_capacity(typed.len());
    let mut in_space = false;
    for ch in typed.chars() {
        if ch.is_whitespace() {
            if !in_space {
                normalized.push(' ');
            }
            in_space = true;
        } else {
            normalized.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    normalized
}

fn description(part: &CqlPart) -> &'static str {
    match part.part_type() {
        CqlType::Keyword => "keyword",
        CqlType::KeywordValue => "value",
        CqlType::Identifier => "name",
        CqlType::ColumnName => "column",
        CqlType::Operator => "symbol",
        CqlType::NotSupported => "not supported",
    }
}

impl Completer for CqlCompleter {
    /// Complete the input at the given cursor position
    ///
    /// # Arguments
    /// * `line` - The input line
    /// * `pos` - Cursor position (byte index)
    ///
    /// # Returns
    /// * `Vec<Suggestion>` - Suggestions matching what is already typed
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let pos = clamp_cursor(line, pos);
        let context = self.service.find_completion_for_text(line, pos);
        let stream = TokenStream::new(line, pos);
        let starts = if context.query_name() == CqlQueryName::Unknown {
            vec![Self::statement_start(&stream)]
        } else {
            Self::candidate_starts(&stream)
        };

        context
            .completion()
            .full()
            .iter()
            .filter(|part| part.part_type() != CqlType::NotSupported)
            .filter_map(|part| {
                let display = part.to_display_string();
                let start = Self::replacement_start(line, pos, &starts, display)?;
                Some(Suggestion {
                    value: display.to_string(),
                    description: Some(description(part).to_string()),
                    span: Span::new(start, pos),
                    append_whitespace: part.part_type() != CqlType::Operator,
                    ..Default::default()
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::StaticSchema;
    use crate::config::{KeyspaceConfig, SchemaConfig, TableConfig};

    fn create_test_completer() -> CqlCompleter {
        CqlCompleter::new(Arc::new(CompletionService::with_empty_schema().unwrap()))
    }

    fn values(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.value.as_str()).collect()
    }

    #[test]
    fn test_empty_line_offers_statements() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("", 0);
        assert!(values(&suggestions).contains(&"select"));
        assert!(values(&suggestions).contains(&"drop table"));
    }

    #[test]
    fn test_complete_with_prefix() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("sel", 3);
        assert_eq!(values(&suggestions), vec!["select"]);
        assert_eq!(suggestions[0].span.start, 0);
        assert_eq!(suggestions[0].span.end, 3);
    }

    #[test]
    fn test_partial_phrase_replaces_all_words() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("DROP  in", 8);
        assert_eq!(values(&suggestions), vec!["drop index"]);
        assert_eq!(suggestions[0].span.start, 0);
    }

    #[test]
    fn test_span_position() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("select * fr", 11);
        assert!(values(&suggestions).contains(&"from"));
        for suggestion in suggestions {
            assert_eq!(suggestion.span.start, 9);
            assert_eq!(suggestion.span.end, 11);
        }
    }

    #[test]
    fn test_after_whitespace_inserts_at_cursor() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("drop index ", 11);
        assert_eq!(values(&suggestions), vec!["if exists"]);
        assert_eq!(suggestions[0].span.start, 11);
    }

    #[test]
    fn test_not_supported_is_not_inserted() {
        let mut completer = create_test_completer();
        assert!(completer.complete("begin batch ", 12).is_empty());
    }

    #[test]
    fn test_schema_names() {
        let schema = SchemaConfig {
            keyspaces: vec![KeyspaceConfig {
                name: "shop".to_string(),
                tables: vec![TableConfig {
                    name: "orders".to_string(),
                    ..Default::default()
                }],
            }],
        };
        let service = CompletionService::new(Arc::new(StaticSchema::new(&schema))).unwrap();
        let mut completer = CqlCompleter::new(Arc::new(service));

        let suggestions = completer.complete("truncate or", 11);
        assert_eq!(values(&suggestions), vec!["orders"]);
        assert_eq!(suggestions[0].description.as_deref(), Some("name"));

        // qualified names come from the full set
        let suggestions = completer.complete("truncate sh", 11);
        assert_eq!(values(&suggestions), vec!["shop.orders"]);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("DROP \t In"), "drop in");
        assert_eq!(normalize(""), "");
    }
}
