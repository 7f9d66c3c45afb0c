//! Hinter for reedline - shows the syntax synopsis of the current statement

use std::sync::Arc;

use nu_ansi_term::{Color, Style};
use reedline::{Hinter, History};

use crate::completion::CompletionService;
use crate::model::{ContextCqlCompletion, CqlPart, CqlType};

/// Suggestions listed in a hint before it is cut short
const MAX_HINT_PARTS: usize = 5;

/// Inline syntax help for reedline
pub struct CqlHinter {
    service: Arc<CompletionService>,
    /// Style for hints
    style: Style,
    /// Completion the current hint was rendered from
    last: Option<ContextCqlCompletion>,
    /// Current hint text, unstyled
    current_hint: String,
}

impl CqlHinter {
    pub fn new(service: Arc<CompletionService>) -> Self {
        Self {
            service,
            style: Style::new().italic().fg(Color::DarkGray),
            last: None,
            current_hint: String::new(),
        }
    }

    /// Not-supported message if the completion carries one, else the
    /// synopsis followed by the minimal suggestion set
    fn render(context: &ContextCqlCompletion) -> String {
        let completion = context.completion();
        if let Some(part) = completion
            .iter()
            .find(|part| part.part_type() == CqlType::NotSupported)
        {
            return format!("  -- {part}");
        }

        let mut next: Vec<&str> = completion
            .min()
            .iter()
            .take(MAX_HINT_PARTS)
            .map(CqlPart::to_display_string)
            .collect();
        if completion.min().len() > MAX_HINT_PARTS {
            next.push("...");
        }
        let next = next.join(", ");

        match (context.synopsis(), next.as_str()) {
            ("", "") => String::new(),
            (synopsis, "") => format!("  -- {synopsis}"),
            ("", next) => format!("  -- next: {next}"),
            (synopsis, next) => format!("  -- {synopsis}  next: {next}"),
        }
    }
}

impl Hinter for CqlHinter {
    /// Provide a hint for the current line
    ///
    /// The hint is rebuilt only when the computed completion differs from
    /// the one it was last rendered from.
    fn handle(
        &mut self,
        line: &str,
        pos: usize,
        _history: &dyn History,
        use_ansi_coloring: bool,
        _cwd: &str,
    ) -> String {
        // Only hint with the cursor at the end of a non-empty line
        if pos != line.len() || line.trim().is_empty() {
            self.last = None;
            self.current_hint.clear();
            return String::new();
        }

        let context = self.service.find_completion_for_text(line, pos);
        if self.last.as_ref() != Some(&context) {
            self.current_hint = Self::render(&context);
            self.last = Some(context);
        }

        if use_ansi_coloring && !self.current_hint.is_empty() {
            self.style.paint(self.current_hint.as_str()).to_string()
        } else {
            self.current_hint.clone()
        }
    }

    fn next_hint_token(&self) -> String {
        String::new()
    }

    /// Help text is never inserted into the line
    fn complete_hint(&self) -> String {
        String::new()
    }
}
