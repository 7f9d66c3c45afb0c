//! Shell completion generation for cyclop
//!
//! Generates completion scripts for the cyclop command line itself, for
//! bash, zsh, fish, PowerShell and elvish.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::CliArgs;
use crate::error::{ConfigError, Result};

/// Write the completion script for `shell_name` to `out`
///
/// # Arguments
/// * `shell_name` - Shell type, case-insensitive
/// * `out` - Destination of the script
pub fn generate_completion<W: Write>(shell_name: &str, out: &mut W) -> Result<()> {
    let shell = parse_shell(shell_name)?;
    let mut cmd = CliArgs::command();
    generate(shell, &mut cmd, "cyclop", out);
    Ok(())
}

/// Map a case-insensitive shell name to its generator
fn parse_shell(shell_name: &str) -> Result<Shell> {
    match shell_name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        "powershell" | "pwsh" => Ok(Shell::PowerShell),
        "elvish" => Ok(Shell::Elvish),
        _ => Err(ConfigError::Generic(format!(
            "Unsupported shell: {shell_name}. Supported shells: bash, zsh, fish, powershell, elvish"
        ))
        .into()),
    }
}
