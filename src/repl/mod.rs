//! Interactive CQL editor
//!
//! This module provides a reedline front end for the completion engine:
//! - Tab completion backed by `CompletionService`
//! - Inline syntax synopsis as a hint
//! - Syntax highlighting from the completion lexer
//! - Multi-line input while quotes or brackets are open
//! - Persistent command history
//!
//! Submitted statements are classified and reported, never executed.

mod completer;
mod engine;
mod highlighter;
mod hinter;
mod prompt;
mod validator;

pub use completer::CqlCompleter;
pub use engine::ReplEngine;
pub use highlighter::CqlHighlighter;
pub use hinter::CqlHinter;
pub use prompt::CqlPrompt;
pub use validator::CqlValidator;
