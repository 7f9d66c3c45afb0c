//! Output formatting for completion results
//!
//! This module renders engine results for the CLI and the REPL:
//! - Plain text: statement type, synopsis, then one suggestion per line
//! - JSON: the camelCase wire shape of `ContextCqlCompletion`
//! - Row metadata, always as JSON

mod colorizer;

pub use colorizer::Colorizer;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::model::{ContextCqlCompletion, CqlQueryName, CqlRowMetadata};

/// Main formatter for engine results
pub struct Formatter {
    /// Output format type
    format_type: OutputFormat,

    /// Colorizer for plain output
    colorizer: Colorizer,
}

/// JSON shape of a completion, synopsis included when known
#[derive(Serialize)]
struct CompletionOutput<'a> {
    #[serde(flatten)]
    context: &'a ContextCqlCompletion,
    #[serde(skip_serializing_if = "is_blank")]
    synopsis: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatementOutput {
    query_name: CqlQueryName,
    #[serde(skip_serializing_if = "is_blank")]
    synopsis: &'static str,
}

fn is_blank(text: &&str) -> bool {
    text.is_empty()
}

impl Formatter {
    /// Create a new formatter
    ///
    /// # Arguments
    /// * `format_type` - Output format type
    /// * `use_colors` - Enable colored output (plain format only)
    pub fn new(format_type: OutputFormat, use_colors: bool) -> Self {
        Self {
            format_type,
            colorizer: Colorizer::new(use_colors && format_type == OutputFormat::Plain),
        }
    }

    pub fn format_type(&self) -> OutputFormat {
        self.format_type
    }

    pub fn colorizer(&self) -> &Colorizer {
        &self.colorizer
    }

    /// Format a completion result
    ///
    /// # Arguments
    /// * `context` - Completion and the statement type it belongs to
    ///
    /// # Returns
    /// * `Result<String>` - Rendered output or serialization error
    pub fn format_completion(&self, context: &ContextCqlCompletion) -> Result<String> {
        match self.format_type {
            OutputFormat::Json => {
                let output = CompletionOutput {
                    context,
                    synopsis: context.synopsis(),
                };
                Ok(serde_json::to_string_pretty(&output)?)
            }
            OutputFormat::Plain => {
                let mut lines = vec![self.colorizer.header(context.query_name().as_str())];
                if !context.synopsis().is_empty() {
                    lines.push(self.colorizer.dim(&format!("  {}", context.synopsis())));
                }
                lines.extend(context.completion().iter().map(|part| self.colorizer.part(part)));
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format the statement type a submitted line was classified as
    pub fn format_statement(&self, context: &ContextCqlCompletion) -> Result<String> {
        let name = context.query_name();
        match self.format_type {
            OutputFormat::Json => Ok(serde_json::to_string(&StatementOutput {
                query_name: name,
                synopsis: name.synopsis(),
            })?),
            OutputFormat::Plain if name == CqlQueryName::Unknown => {
                Ok(self.colorizer.warning("statement type not recognised"))
            }
            OutputFormat::Plain => Ok(format!(
                "{} {}",
                self.colorizer.header(name.as_str()),
                self.colorizer.dim(name.synopsis())
            )),
        }
    }

    /// Row metadata is always rendered as pretty JSON
    pub fn format_row_metadata(&self, metadata: &CqlRowMetadata) -> Result<String> {
        Ok(serde_json::to_string_pretty(metadata)?)
    }

    pub fn format_error(&self, message: &str) -> String {
        self.colorizer.error(message)
    }
}
