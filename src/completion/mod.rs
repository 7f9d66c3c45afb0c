//! CQL completion engine
//!
//! This module proposes the next legal keywords and names for a partially
//! typed CQL statement. It is error-tolerant: unknown or malformed input
//! yields an empty completion, never an error.
//!
//! # Architecture
//!
//! - **Matchers**: one grammar position each, keyed by a start marker
//! - **Decision lists**: per statement type, positions of alternative matchers
//! - **Registry**: validated statement type to decision list mapping
//! - **Schema**: keyspace, table, column and index names for identifiers
//! - **Service**: tokenizes, classifies, walks the list, calls the matcher
//!
//! # Examples
//!
//! ```
//! use cyclop::completion::CompletionService;
//! use cyclop::model::CqlQueryName;
//!
//! let service = CompletionService::with_empty_schema().unwrap();
//!
//! let result = service.find_completion_for_text("DROP INDEX ", 11);
//! assert_eq!(result.query_name(), CqlQueryName::DropIndex);
//! assert!(result.completion().contains_display("if exists"));
//! ```

pub mod decision;
mod grammar;
pub mod matcher;
pub mod registry;
pub mod schema;
mod service;

pub use decision::DecisionListSupport;
pub use matcher::{MarkerBasedCompletion, Matcher};
pub use registry::DecisionListRegistry;
pub use schema::{SchemaProvider, StaticSchema};
pub use service::{CompletionService, Resolution};
