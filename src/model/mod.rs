//! Immutable value types shared by the completion engine and its hosts.
//!
//! - `part`: lexical units (`CqlPart`) and their kinds
//! - `keyword`: the closed keyword / keyword-value vocabulary
//! - `query`: statement classification and raw query text
//! - `completion`: sorted suggestion sets and their query context
//! - `row_metadata`: column metadata for result-side consumers

pub mod completion;
pub mod keyword;
pub mod part;
pub mod query;
pub mod row_metadata;

pub use completion::{ContextCqlCompletion, CqlCompletion, CqlCompletionBuilder};
pub use keyword::{KeywordDef, KeywordValueDef};
pub use part::{CqlPart, CqlType};
pub use query::{CqlQuery, CqlQueryName};
pub use row_metadata::{ColumnRole, CqlExtendedColumnName, CqlPartitionKey, CqlRowMetadata};
