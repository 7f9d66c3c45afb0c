//! Command-line interface for cyclop
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - One-shot subcommands (`complete`, `keywords`, `describe`, ...)
//! - Mode selection (interactive editor vs subcommand)

mod completion;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::completion::{CompletionService, StaticSchema};
use crate::config::{Config, LogLevel, OutputFormat};
use crate::error::Result;
use crate::formatter::Formatter;
use crate::repl::ReplEngine;

pub use completion::generate_completion;

/// cyclop - CQL completion engine
#[derive(Parser, Debug)]
#[command(
    name = "cyclop",
    version,
    about = "Incremental CQL completion engine",
    long_about = "Suggests the next legal CQL keywords and schema names for a partially
typed statement. Runs as an interactive editor or answers one-shot requests."
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Quiet mode (errors only)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for cyclop
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest completions for a partial statement
    Complete {
        /// Statement text
        #[arg(value_name = "TEXT")]
        text: String,

        /// Cursor byte offset (defaults to the end of the text)
        #[arg(long, value_name = "N")]
        cursor: Option<usize>,

        /// Output format (defaults to the configured one)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the keywords that start a statement
    Keywords {
        /// Output format (defaults to the configured one)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the configured column metadata of a table as JSON
    Describe {
        /// Table name, optionally keyspace-qualified
        #[arg(value_name = "TABLE")]
        table: String,
    },

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish, powershell, elvish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show or validate configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },

    /// Show version information
    Version,
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,

    /// Problems found while loading configuration, reported once logging is up
    config_warnings: Vec<String>,
}

impl CliInterface {
    /// Parse the process arguments and load configuration
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Build from already parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let mut config_warnings = Vec::new();
        let mut config = Config::load_from_file(args.config_file.as_deref())?;

        if let Err(e) = config.validate() {
            config_warnings.push(format!(
                "Configuration validation failed: {e}. Using default configuration instead."
            ));
            config = Config::default();
        }

        Self::apply_logging_args(&mut config, &args);

        Ok(Self {
            args,
            config,
            config_warnings,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Emit configuration problems through the logger
    pub fn report_config_warnings(&self) {
        for warning in &self.config_warnings {
            warn!("{warning}");
        }
    }

    /// Whether `-v` / `--vv` was given; these take precedence over `RUST_LOG`
    pub fn verbosity_forced(&self) -> bool {
        self.args.verbose || self.args.very_verbose
    }

    pub fn color_enabled(&self) -> bool {
        !self.args.no_color
    }

    fn apply_logging_args(config: &mut Config, args: &CliArgs) {
        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Completion engine over the configured schema
    pub fn completion_service(&self) -> Result<Arc<CompletionService>> {
        let schema = StaticSchema::new(&self.config.schema);
        Ok(Arc::new(CompletionService::new(Arc::new(schema))?))
    }

    fn formatter(&self, format: Option<OutputFormat>) -> Formatter {
        Formatter::new(
            format.unwrap_or(self.config.completion.output),
            self.color_enabled(),
        )
    }

    /// Handle subcommands
    ///
    /// # Returns
    /// * `Result<bool>` - True if a subcommand was handled, false to start the editor
    pub fn handle_subcommand(&self) -> Result<bool> {
        let Some(command) = &self.args.command else {
            return Ok(false);
        };

        match command {
            Commands::Completion { shell } => {
                let mut stdout = std::io::stdout();
                generate_completion(shell, &mut stdout)?;
            }
            Commands::Config { validate: true, show } => {
                println!("{}", self.validate_config_file());
                if *show {
                    println!("{}", self.show_config()?);
                }
            }
            other => println!("{}", self.render(other)?),
        }

        Ok(true)
    }

    /// Output of a one-shot subcommand
    pub fn render(&self, command: &Commands) -> Result<String> {
        match command {
            Commands::Complete {
                text,
                cursor,
                format,
            } => {
                let service = self.completion_service()?;
                let cursor = cursor.unwrap_or(text.len());
                let result = service.find_completion_for_text(text, cursor);
                self.formatter(*format).format_completion(&result)
            }
            Commands::Keywords { format } => {
                let service = self.completion_service()?;
                self.formatter(*format)
                    .format_completion(&service.find_initial_completion())
            }
            Commands::Describe { table } => {
                let metadata = StaticSchema::new(&self.config.schema).row_metadata(table);
                if metadata.is_empty() {
                    warn!(table = %table, "Table not found in configured schema");
                }
                self.formatter(None).format_row_metadata(&metadata)
            }
            Commands::Config { validate: true, .. } => Ok(self.validate_config_file()),
            Commands::Config { .. } => self.show_config(),
            Commands::Version => Ok(format!(
                "cyclop version {}\nRust version: {}",
                crate::VERSION,
                env!("CARGO_PKG_RUST_VERSION")
            )),
            Commands::Completion { shell } => {
                let mut buffer = Vec::new();
                generate_completion(shell, &mut buffer)?;
                Ok(String::from_utf8_lossy(&buffer).into_owned())
            }
        }
    }

    /// Start the interactive editor
    pub fn run_interactive(&self) -> Result<()> {
        let service = self.completion_service()?;
        let mut repl = ReplEngine::new(service, &self.config, self.color_enabled())?;
        repl.run()?;
        if !self.args.quiet {
            println!("Goodbye!");
        }
        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self) -> String {
        let path = self.config_path();
        let mut report = format!("Validating configuration file: {}\n", path.display());

        if !path.exists() {
            report.push_str("❌ Configuration file does not exist");
            return report;
        }

        match Config::from_file(&path) {
            Ok(config) => match config.validate() {
                Ok(()) => report.push_str("✅ Configuration is valid"),
                Err(e) => report.push_str(&format!("❌ Configuration validation failed: {e}")),
            },
            Err(e) => report.push_str(&format!("❌ Failed to load configuration: {e}")),
        }

        report
    }

    /// Show effective configuration
    fn show_config(&self) -> Result<String> {
        Ok(format!(
            "# Configuration file: {}\n\n{}",
            self.config_path().display(),
            self.config.to_toml_string()?
        ))
    }

    /// Get configuration file path (from args or default)
    fn config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_path)
    }
}
