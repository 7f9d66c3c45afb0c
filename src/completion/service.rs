//! Completion service - orchestrates the completion flow
//!
//! Given raw text and a cursor, the service tokenizes the text left of the
//! cursor, classifies the statement from its leading keyword, walks that
//! statement's decision list and asks the selected matcher for candidates.

use std::sync::Arc;

use tracing::{debug, info, trace};

use super::decision::DecisionListSupport;
use super::grammar;
use super::registry::DecisionListRegistry;
use super::schema::{SchemaProvider, StaticSchema};
use crate::error::Result;
use crate::model::keyword;
use crate::model::{ContextCqlCompletion, CqlCompletion, CqlPart, CqlQuery, CqlQueryName};
use crate::parser::{TokenStream, clamp_cursor};

/// Where the walk ended for one request
#[derive(Debug)]
pub enum Resolution<'a> {
    /// Nothing classifiable typed yet
    Initial,

    /// Leading token starts no known statement
    Unknown,

    /// A marker token was found at no reachable position
    NoMatch(CqlQueryName),

    /// Matcher selected at `position`
    Matcher {
        support: &'a DecisionListSupport,
        position: usize,
        alternative: usize,
    },
}

/// Main completion service
///
/// Built once and shared; every method takes `&self` and the registry is
/// never mutated after construction.
#[derive(Debug)]
pub struct CompletionService {
    registry: DecisionListRegistry,
    initial: ContextCqlCompletion,
}

impl CompletionService {
    /// Build and validate every decision list
    ///
    /// # Arguments
    /// * `schema` - Names for identifier suggestions
    ///
    /// # Returns
    /// * `Result<Self>` - The service, or a registry wiring error
    pub fn new(schema: Arc<dyn SchemaProvider>) -> Result<Self> {
        let registry = DecisionListRegistry::new(grammar::decision_lists(&schema))?;

        let initial = ContextCqlCompletion::new(
            CqlQueryName::Unknown,
            registry.statement_keywords().cloned().collect(),
        );

        info!(
            statements = registry.len(),
            keywords = initial.completion().len(),
            "Completion decision lists registered"
        );

        Ok(Self { registry, initial })
    }

    /// Service without schema names; only keywords are suggested
    pub fn with_empty_schema() -> Result<Self> {
        Self::new(Arc::new(StaticSchema::empty()))
    }

    pub fn registry(&self) -> &DecisionListRegistry {
        &self.registry
    }

    /// Statement-starting keywords, for an empty editor
    pub fn find_initial_completion(&self) -> ContextCqlCompletion {
        self.initial.clone()
    }

    /// Suggestions for `query` with the cursor at byte offset `cursor`.
    ///
    /// The query's own statement type is ignored; the text is always
    /// classified again. Text right of the cursor is never looked at.
    pub fn find_completion(&self, query: &CqlQuery, cursor: usize) -> ContextCqlCompletion {
        let prefix = &query.raw()[..clamp_cursor(query.raw(), cursor)];

        let result = match self.resolve(prefix, prefix.len()) {
            Resolution::Initial => self.find_initial_completion(),
            Resolution::Unknown => ContextCqlCompletion::unknown(),
            Resolution::NoMatch(name) => ContextCqlCompletion::new(name, CqlCompletion::empty()),
            Resolution::Matcher {
                support,
                position,
                alternative,
            } => {
                let classified = CqlQuery::new(support.query_name(), prefix);
                let completion = support
                    .matcher(position, alternative)
                    .map(|matcher| matcher.completion(&classified))
                    .unwrap_or_default();
                debug!(
                    query_name = %support.query_name(),
                    position,
                    "Resolved grammar position"
                );
                ContextCqlCompletion::new(support.query_name(), completion)
            }
        };

        debug!(
            query_name = %result.query_name(),
            suggestions = result.completion().len(),
            "Completion computed"
        );
        result
    }

    /// Same as [`CompletionService::find_completion`] for plain text
    pub fn find_completion_for_text(&self, raw: &str, cursor: usize) -> ContextCqlCompletion {
        self.find_completion(&CqlQuery::unknown(raw), cursor)
    }

    /// Classify `raw` and walk its decision list up to `cursor`
    pub fn resolve(&self, raw: &str, cursor: usize) -> Resolution<'_> {
        if raw.trim().is_empty() {
            return Resolution::Initial;
        }

        let stream = TokenStream::new(raw, cursor);
        let tokens = stream.tokens_before_cursor();
        let Some(first) = tokens.first() else {
            return Resolution::Initial;
        };

        if let Some(words) = stream.completed_words() {
            let words: Vec<&str> = words.iter().map(String::as_str).collect();
            if keyword::is_phrase_prefix(&words, self.registry.statement_keywords()) {
                trace!(?words, "Statement keyword still incomplete");
                return Resolution::Initial;
            }
        }

        let Some(support) = first.keyword().and_then(|part| self.registry.classify(part)) else {
            trace!(token = stream.text_of(first), "Unrecognised leading token");
            return Resolution::Unknown;
        };

        let mut position = 0;
        let mut alternative = support.alternative_at(0, support.supports()).unwrap_or(0);

        for token in &tokens[1..] {
            let Some(part) = token.as_part().filter(|part| support.is_marker(part)) else {
                continue;
            };

            match Self::advance(support, position, &part) {
                Some((next, alt)) => {
                    trace!(marker = %part, from = position, to = next, "Marker matched");
                    position = next;
                    alternative = alt;
                }
                None => {
                    trace!(marker = %part, position, "Marker not reachable");
                    return Resolution::NoMatch(support.query_name());
                }
            }
        }

        Resolution::Matcher {
            support,
            position,
            alternative,
        }
    }

    /// Current position first, then the ones after it. At the last
    /// position only the re-check remains, which clamps the walk.
    fn advance(support: &DecisionListSupport, position: usize, part: &CqlPart) -> Option<(usize, usize)> {
        (position..support.decision_list().len())
            .find_map(|p| support.alternative_at(p, part).map(|alt| (p, alt)))
    }
}
