//! cyclop - CQL completion engine
//!
//! Suggests the next legal CQL keywords and schema names while a statement
//! is being typed.
//!
//! # Usage
//!
//! ```bash
//! # Interactive editor
//! cyclop
//!
//! # One-shot completion
//! cyclop complete "SELECT * FROM users WH"
//! ```

use tracing_subscriber::EnvFilter;

use cyclop::cli::CliInterface;
use cyclop::error::Result;

/// Application entry point
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Handle subcommands or start the interactive editor
fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);
    cli.report_config_warnings();

    if cli.handle_subcommand()? {
        return Ok(());
    }

    cli.run_interactive()
}

/// Initialize logging
///
/// `-v` / `--vv` win, then `RUST_LOG`, then the configured level (which
/// already reflects `CYCLOP_LOG_LEVEL` and `-q`). Logs go to stderr so
/// command output stays machine readable.
fn initialize_logging(cli: &CliInterface) {
    let configured = cli.config().logging.level.to_tracing_level();
    let fallback = || EnvFilter::new(configured.as_str().to_lowercase());

    let filter = if cli.verbosity_forced() {
        fallback()
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
