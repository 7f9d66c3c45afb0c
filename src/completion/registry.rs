//! Decision list registry
//!
//! Maps every statement type to its decision list. Coverage is checked
//! when the registry is built, so a missing entry fails startup instead of
//! degrading completion at request time.

use std::collections::HashMap;

use crate::error::CompletionError;
use crate::model::{CqlPart, CqlQueryName};

use super::decision::DecisionListSupport;

/// Validated statement type to decision list mapping
#[derive(Debug)]
pub struct DecisionListRegistry {
    by_name: HashMap<CqlQueryName, DecisionListSupport>,
}

impl DecisionListRegistry {
    /// Register `supports` and check that together they cover every
    /// statement type exactly once and have no empty positions
    pub fn new(supports: Vec<DecisionListSupport>) -> Result<Self, CompletionError> {
        let mut by_name = HashMap::with_capacity(supports.len());

        for support in supports {
            let name = support.query_name();
            let list = support.decision_list();
            if list.is_empty() || list.iter().any(Vec::is_empty) {
                return Err(CompletionError::EmptyDecisionList(name));
            }
            if by_name.insert(name, support).is_some() {
                return Err(CompletionError::DuplicateDecisionList(name));
            }
        }

        if let Some(missing) = CqlQueryName::ALL
            .iter()
            .find(|name| !by_name.contains_key(*name))
        {
            return Err(CompletionError::MissingDecisionList(*missing));
        }

        Ok(Self { by_name })
    }

    pub fn get(&self, name: CqlQueryName) -> Option<&DecisionListSupport> {
        self.by_name.get(&name)
    }

    /// Decision list whose statement keyword is `part`
    pub fn classify(&self, part: &CqlPart) -> Option<&DecisionListSupport> {
        self.by_name.values().find(|support| support.supports() == part)
    }

    /// Keywords that start a statement
    pub fn statement_keywords(&self) -> impl Iterator<Item = &'static CqlPart> + '_ {
        self.by_name.values().map(DecisionListSupport::supports)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DecisionListSupport> {
        self.by_name.values()
    }
}
