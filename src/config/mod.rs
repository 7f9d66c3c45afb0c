//! Configuration management for cyclop
//!
//! Configuration is read from a TOML file and can be partially overridden:
//! - Configuration file (`~/.cyclop/config.toml` or `--config FILE`)
//! - Environment variables (`CYCLOP_LOG_LEVEL`)
//! - Command-line arguments
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values
//!
//! The `[schema]` section describes keyspaces, tables and indexes. It feeds
//! identifier suggestions; an empty schema is valid.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ConfigError, Result};

/// Environment variable overriding `logging.level`
pub const LOG_LEVEL_ENV: &str = "CYCLOP_LOG_LEVEL";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Completion display configuration
    #[serde(default)]
    pub completion: CompletionConfig,

    /// History configuration
    #[serde(default)]
    pub history: HistoryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Known keyspaces, tables and indexes
    #[serde(default)]
    pub schema: SchemaConfig,
}

/// Completion output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Show the statement synopsis as an inline hint
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,

    /// Output format of the `complete` subcommand
    #[serde(default = "default_output")]
    pub output: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One suggestion per line, preceded by the statement type
    Plain,

    /// `{"queryName": ..., "completion": [...]}`
    Json,
}

/// Command history configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of history entries
    #[serde(default = "default_max_history_size")]
    pub max_size: usize,

    /// Path to history file
    #[serde(default = "default_history_file")]
    pub file_path: PathBuf,

    /// Enable history persistence
    #[serde(default = "default_persist_history")]
    pub persist: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Schema known to the completion engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaConfig {
    #[serde(default)]
    pub keyspaces: Vec<KeyspaceConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyspaceConfig {
    pub name: String,

    #[serde(default)]
    pub tables: Vec<TableConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub name: String,

    #[serde(default)]
    pub partition_key: Vec<String>,

    #[serde(default)]
    pub clustering: Vec<String>,

    /// Secondary index names
    #[serde(default)]
    pub indexes: Vec<String>,

    /// Columns in declaration order
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub name: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

// Default value functions
fn default_show_hints() -> bool {
    true
}

fn default_output() -> OutputFormat {
    OutputFormat::Plain
}

fn default_max_history_size() -> usize {
    1000
}

fn default_history_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cyclop_history")
}

fn default_persist_history() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    true
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            show_hints: default_show_hints(),
            output: default_output(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_history_size(),
            file_path: default_history_file(),
            persist: default_persist_history(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cyclop")
            .join("config.toml")
    }

    /// Load configuration from a file, then apply environment overrides
    ///
    /// An explicit `path` must exist. Without one the default path is tried
    /// and a missing file yields the default configuration.
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::load_from_file`] with an injectable environment
    pub fn load_with_env<F>(path: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound(path.display().to_string()).into());
                }
                Self::from_file(path)?
            }
            None => {
                let default = Self::default_path();
                if default.exists() {
                    Self::from_file(&default)?
                } else {
                    debug!("No config file at {}, using defaults", default.display());
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(env);
        Ok(config)
    }

    /// Parse a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Apply `CYCLOP_LOG_LEVEL`; an unparsable value is ignored
    pub fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = env(LOG_LEVEL_ENV) {
            match LogLevel::parse(&value) {
                Some(level) => self.logging.level = level,
                None => warn!("Ignoring {LOG_LEVEL_ENV}={value}: not a log level"),
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.history.max_size == 0 {
            return Err(invalid("history.max_size", "0"));
        }

        let mut keyspaces = HashSet::new();
        for keyspace in &self.schema.keyspaces {
            if keyspace.name.trim().is_empty() {
                return Err(invalid("schema.keyspaces.name", &keyspace.name));
            }
            if !keyspaces.insert(keyspace.name.to_lowercase()) {
                return Err(invalid("schema.keyspaces.name", &keyspace.name));
            }

            let mut tables = HashSet::new();
            for table in &keyspace.tables {
                let qualified = format!("{}.{}", keyspace.name, table.name);
                if table.name.trim().is_empty() || !tables.insert(table.name.to_lowercase()) {
                    return Err(invalid("schema.tables.name", &qualified));
                }
                table.validate_keys(&qualified)?;
            }
        }

        Ok(())
    }
}

impl TableConfig {
    /// Every key column must be a declared column
    fn validate_keys(&self, qualified: &str) -> Result<()> {
        let declared = |name: &str| self.columns.iter().any(|c| c.name.eq_ignore_ascii_case(name));

        for key in &self.partition_key {
            if !declared(key) {
                return Err(invalid(
                    "schema.tables.partition_key",
                    &format!("{qualified}.{key}"),
                ));
            }
        }
        for key in &self.clustering {
            if !declared(key) {
                return Err(invalid(
                    "schema.tables.clustering",
                    &format!("{qualified}.{key}"),
                ));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, value: &str) -> crate::error::CyclopError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
    .into()
}

impl LogLevel {
    /// Parse a level name, ignoring case
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CyclopError;

    const SAMPLE: &str = r#"
[completion]
output = "json"

[logging]
level = "debug"

[[schema.keyspaces]]
name = "shop"

[[schema.keyspaces.tables]]
name = "users"
columns = [
    { name = "id", type = "uuid" },
    { name = "email", type = "text" },
]
partition_key = ["id"]
indexes = ["users_by_email"]
"#;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.completion.show_hints);
        assert_eq!(config.completion.output, OutputFormat::Plain);
        assert_eq!(config.history.max_size, 1000);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.schema.keyspaces.is_empty());
    }

    #[test]
    fn test_parse_sample() {
        let config = Config::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.completion.output, OutputFormat::Json);
        assert!(config.completion.show_hints);
        assert_eq!(config.logging.level, LogLevel::Debug);

        let table = &config.schema.keyspaces[0].tables[0];
        assert_eq!(table.name, "users");
        assert_eq!(table.columns[0].data_type.as_deref(), Some("uuid"));
        assert_eq!(table.indexes, vec!["users_by_email"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_format_error() {
        let err = Config::from_toml_str("[logging\nlevel=").unwrap_err();
        assert!(matches!(err, CyclopError::Config(ConfigError::InvalidFormat(_))));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load_with_env(Some(&path), no_env).unwrap_err();
        assert!(matches!(err, CyclopError::Config(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::from_toml_str(SAMPLE).unwrap();
        config.save(&path).unwrap();

        let loaded = Config::load_with_env(Some(&path), no_env).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_env_overrides_log_level() {
        let mut config = Config::default();
        config.apply_env_overrides(|key| (key == LOG_LEVEL_ENV).then(|| "TRACE".to_string()));
        assert_eq!(config.logging.level, LogLevel::Trace);

        config.apply_env_overrides(|_| Some("loud".to_string()));
        assert_eq!(config.logging.level, LogLevel::Trace);
    }

    #[test]
    fn test_validate_rejects_zero_history() {
        let mut config = Config::default();
        config.history.max_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_tables() {
        let mut config = Config::from_toml_str(SAMPLE).unwrap();
        let table = config.schema.keyspaces[0].tables[0].clone();
        config.schema.keyspaces[0].tables.push(table);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_key_column() {
        let mut config = Config::from_toml_str(SAMPLE).unwrap();
        config.schema.keyspaces[0].tables[0]
            .clustering
            .push("created_at".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("shop.users.created_at"));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::parse("Warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::Info.to_tracing_level(), tracing::Level::INFO);
    }
}
