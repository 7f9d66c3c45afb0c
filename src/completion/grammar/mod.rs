//! Decision lists for every statement type
//!
//! Lists are assembled explicitly here, once, when the service is built.
//! Matchers whose grammar repeats across statements (keyspace replication
//! options, table options) are built once and shared by reference.

mod ddl;
mod dml;

use std::sync::Arc;

use super::decision::DecisionListSupport;
use super::matcher::{IdentifierCompletion, KeywordCompletion, Matcher};
use super::schema::SchemaProvider;
use crate::model::{CqlPart, KeywordDef};

/// Build the decision list of every statement type
pub fn decision_lists(schema: &Arc<dyn SchemaProvider>) -> Vec<DecisionListSupport> {
    let mut lists = dml::decision_lists(schema);
    lists.extend(ddl::decision_lists(schema));
    lists
}

/// Keyword-only matcher
fn keywords(marker: &CqlPart, defs: &[KeywordDef]) -> Matcher {
    Arc::new(KeywordCompletion::new(marker, defs.iter().map(|d| d.value())))
}

/// Schema-aware matcher, sources and keywords added by the caller
fn names(marker: &CqlPart, schema: &Arc<dyn SchemaProvider>) -> IdentifierCompletion {
    IdentifierCompletion::new(marker, Arc::clone(schema))
}

fn values(defs: &[KeywordDef]) -> impl Iterator<Item = &'static CqlPart> + '_ {
    defs.iter().map(|d| d.value())
}
