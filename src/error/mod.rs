//! Error handling module.
//!
//! The completion engine treats unrecognised or partial input as a normal
//! outcome (an empty or informational completion), so the types here only
//! cover configuration loading, registry wiring and I/O.
//!
//! # Example
//!
//! ```rust
//! use cyclop::error::{CyclopError, ConfigError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(ConfigError::FileNotFound("/nope.toml".to_string()).into())
//! }
//!
//! assert!(matches!(load(), Err(CyclopError::Config(_))));
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{CompletionError, ConfigError, CyclopError, Result};
