use std::{fmt, io};

use crate::model::CqlQueryName;

/// Crate-wide `Result` type using [`CyclopError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, CyclopError>;

/// Top-level error type for cyclop operations.
///
/// Partial or malformed user input is never an error: the completion engine
/// answers it with an empty or informational completion. Only configuration
/// problems and I/O failures end up here.
#[derive(Debug)]
pub enum CyclopError {
    /// Configuration errors.
    Config(ConfigError),

    /// Completion engine wiring errors.
    Completion(CompletionError),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// Generic configuration error.
    Generic(String),
}

/// Errors raised while wiring the decision list registry.
///
/// These are detected once when the completion service is built and are
/// never produced while answering a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// A statement type the classifier can produce has no decision list.
    MissingDecisionList(CqlQueryName),

    /// More than one decision list claims the same statement type.
    DuplicateDecisionList(CqlQueryName),

    /// A decision list (or one of its positions) has no matchers.
    EmptyDecisionList(CqlQueryName),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for CyclopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CyclopError::Config(e) => write!(f, "Configuration error: {e}"),
            CyclopError::Completion(e) => write!(f, "Completion error: {e}"),
            CyclopError::Io(e) => write!(f, "I/O error: {e}"),
            CyclopError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionError::MissingDecisionList(name) => {
                write!(f, "No decision list registered for {name}")
            }
            CompletionError::DuplicateDecisionList(name) => {
                write!(f, "More than one decision list registered for {name}")
            }
            CompletionError::EmptyDecisionList(name) => {
                write!(f, "Decision list for {name} has an empty position")
            }
        }
    }
}

impl std::error::Error for CyclopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CyclopError::Io(e) => Some(e),
            _ => None,
        }
    }
}
impl std::error::Error for ConfigError {}
impl std::error::Error for CompletionError {}

/* ========================= Conversions to CyclopError ========================= */

impl From<io::Error> for CyclopError {
    fn from(err: io::Error) -> Self {
        CyclopError::Io(err)
    }
}

impl From<ConfigError> for CyclopError {
    fn from(err: ConfigError) -> Self {
        CyclopError::Config(err)
    }
}

impl From<CompletionError> for CyclopError {
    fn from(err: CompletionError) -> Self {
        CyclopError::Completion(err)
    }
}

impl From<toml::de::Error> for CyclopError {
    fn from(err: toml::de::Error) -> Self {
        CyclopError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}

impl From<toml::ser::Error> for CyclopError {
    fn from(err: toml::ser::Error) -> Self {
        CyclopError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}

impl From<serde_json::Error> for CyclopError {
    fn from(err: serde_json::Error) -> Self {
        CyclopError::Generic(format!("JSON error: {err}"))
    }
}

impl From<String> for CyclopError {
    fn from(msg: String) -> Self {
        CyclopError::Generic(msg)
    }
}

impl From<&str> for CyclopError {
    fn from(msg: &str) -> Self {
        CyclopError::Generic(msg.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_error_display() {
        let err = CompletionError::MissingDecisionList(CqlQueryName::DropIndex);
        assert_eq!(err.to_string(), "No decision list registered for DROP_INDEX");

        let wrapped: CyclopError = err.into();
        assert!(wrapped.to_string().starts_with("Completion error:"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            field: "history.max_size".to_string(),
            value: "0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value '0' for field 'history.max_size'"
        );
    }

    #[test]
    fn test_io_error_has_source() {
        let err: CyclopError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
