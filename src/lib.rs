//! cyclop - incremental CQL completion
//!
//! This library proposes the next legal keywords and schema names for a
//! partially typed CQL statement. It can be embedded in any editor; the
//! `cyclop` binary wraps it in a terminal editor and a one-shot CLI.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `completion`: Decision lists, matchers and the completion service
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `formatter`: Plain and JSON rendering of results
//! - `model`: Parts, keywords, statement types and completions
//! - `parser`: Error-tolerant CQL tokenizer with cursor tracking
//! - `repl`: Interactive editor
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use cyclop::completion::{CompletionService, StaticSchema};
//! use cyclop::config::Config;
//! use cyclop::model::CqlQueryName;
//!
//! let config = Config::default();
//! let schema = Arc::new(StaticSchema::new(&config.schema));
//! let service = CompletionService::new(schema).unwrap();
//!
//! let result = service.find_completion_for_text("SELECT * FROM users ", 20);
//! assert_eq!(result.query_name(), CqlQueryName::Select);
//! assert!(result.completion().contains_display("where"));
//! ```

pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod formatter;
pub mod model;
pub mod parser;
pub mod repl;

// Re-export commonly used types
pub use completion::CompletionService;
pub use config::Config;
pub use error::{CyclopError, Result};
pub use model::{ContextCqlCompletion, CqlCompletion, CqlQuery, CqlQueryName};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
