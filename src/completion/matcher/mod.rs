//! Marker-based completion matchers
//!
//! A matcher owns one grammar position of one or more statements. It is
//! keyed by its start marker, the token that moves the walk onto it, and
//! returns the suggestions legal at that position. Locating the marker is
//! the service's job: once selected, a matcher only produces candidates.
//!
//! Matchers are built once and shared by every request, so they hold no
//! mutable state. Anything that never depends on the query is computed in
//! the constructor.

mod drop;
mod identifier;
mod keyword;
mod not_supported;

use std::sync::Arc;

use crate::model::{CqlCompletion, CqlCompletionBuilder, CqlPart, CqlQuery};

pub use drop::{DropCompletion, DropTarget};
pub use identifier::{IdentifierCompletion, IdentifierSource};
pub use keyword::KeywordCompletion;
pub use not_supported::NotSupportedCompletion;

/// Trait for one grammar position's suggestions
pub trait MarkerBasedCompletion: Send + Sync {
    /// Token that selects this matcher
    fn start_marker(&self) -> &CqlPart;

    /// Suggestions for the position, given the query up to the cursor
    fn completion(&self, query: &CqlQuery) -> CqlCompletion;
}

/// Shared matcher handle, the unit stored in decision lists
pub type Matcher = Arc<dyn MarkerBasedCompletion>;

/// Add schema names; keyspace-qualified ones stay out of the minimal set
fn add_names<I>(builder: CqlCompletionBuilder, names: I) -> CqlCompletionBuilder
where
    I: IntoIterator<Item = CqlPart>,
{
    names.into_iter().fold(builder, |builder, name| {
        if name.to_display_string().contains('.') {
            builder.full(name)
        } else {
            builder.all(name)
        }
    })
}
