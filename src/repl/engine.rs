use std::sync::Arc;

use reedline::{
    ColumnarMenu, Emacs, FileBackedHistory, KeyCode, KeyModifiers, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use tracing::{debug, warn};

use crate::completion::CompletionService;
use crate::config::{Config, HistoryConfig};
use crate::error::{CyclopError, Result};
use crate::formatter::Formatter;
use crate::model::{CqlQueryName, KeywordDef};
use crate::parser::TokenStream;

use super::completer::CqlCompleter;
use super::highlighter::CqlHighlighter;
use super::hinter::CqlHinter;
use super::prompt::CqlPrompt;
use super::validator::CqlValidator;

const COMPLETION_MENU: &str = "completion_menu";

/// REPL engine: reads statements, reports how they classify
///
/// Nothing is executed. Each submitted line is classified with the same
/// engine that drives completion, and `USE` updates the prompt.
pub struct ReplEngine {
    /// Line editor for statement input
    editor: Reedline,

    prompt: CqlPrompt,

    service: Arc<CompletionService>,

    formatter: Formatter,

    /// Whether to continue running
    running: bool,
}

impl ReplEngine {
    /// Create a new REPL engine
    ///
    /// # Arguments
    /// * `service` - Completion engine shared with the editor helpers
    /// * `config` - Loaded configuration
    /// * `color` - Enable highlighting and colored output
    ///
    /// # Returns
    /// * `Result<Self>` - New REPL engine or error
    pub fn new(service: Arc<CompletionService>, config: &Config, color: bool) -> Result<Self> {
        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let menu = ColumnarMenu::default().with_name(COMPLETION_MENU);

        let mut editor = Reedline::create()
            .with_history(Box::new(Self::history(&config.history)?))
            .with_completer(Box::new(CqlCompleter::new(Arc::clone(&service))))
            .with_menu(ReedlineMenu::EngineCompleter(Box::new(menu)))
            .with_edit_mode(Box::new(Emacs::new(keybindings)))
            .with_highlighter(Box::new(CqlHighlighter::new(color)))
            .with_validator(Box::new(CqlValidator::new()))
            .use_bracketed_paste(true);

        if config.completion.show_hints {
            editor = editor.with_hinter(Box::new(CqlHinter::new(Arc::clone(&service))));
        }

        Ok(Self {
            editor,
            prompt: CqlPrompt::default(),
            service,
            formatter: Formatter::new(config.completion.output, color),
            running: true,
        })
    }

    /// File-backed when persistent; an unusable file falls back to memory
    fn history(config: &HistoryConfig) -> Result<FileBackedHistory> {
        if config.persist {
            if let Some(parent) = config.file_path.parent() {
                if let Err(err) = std::fs::create_dir_all(parent) {
                    warn!(path = %parent.display(), %err, "Cannot create history directory");
                }
            }
            match FileBackedHistory::with_file(config.max_size, config.file_path.clone()) {
                Ok(history) => return Ok(history),
                Err(err) => {
                    warn!(path = %config.file_path.display(), %err, "History file unusable, keeping history in memory");
                }
            }
        }

        FileBackedHistory::new(config.max_size)
            .map_err(|err| CyclopError::Generic(format!("History error: {err}")))
    }

    /// Read a single line of input
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Input line, empty on Ctrl-C, `None` on Ctrl-D
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.read_line(&self.prompt)? {
            Signal::Success(line) => Ok(Some(line)),
            Signal::CtrlC => Ok(Some(String::new())),
            Signal::CtrlD => Ok(None),
            #[allow(unreachable_patterns)]
            _ => Ok(None),
        }
    }

    /// Process one submitted line
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Text to print, if any
    pub fn process_input(&mut self, input: &str) -> Result<Option<String>> {
        let trimmed = input.trim();
        match trimmed.to_lowercase().as_str() {
            "" => return Ok(None),
            "exit" | "quit" => {
                self.running = false;
                return Ok(None);
            }
            "help" => return Ok(Some(help_text())),
            _ => {}
        }

        let context = self.service.find_completion_for_text(trimmed, trimmed.len());
        debug!(query_name = %context.query_name(), "Statement classified");

        if context.query_name() == CqlQueryName::Use {
            if let Some(keyspace) = TokenStream::full(trimmed).identifier_after(KeywordDef::Use.value()) {
                self.prompt.set_keyspace(keyspace);
            }
        }

        self.formatter.format_statement(&context).map(Some)
    }

    /// Read, classify and print until `exit` or Ctrl-D
    pub fn run(&mut self) -> Result<()> {
        println!("cyclop {} - type 'help' for statements, 'exit' to quit", crate::VERSION);

        while self.running {
            let Some(line) = self.read_line()? else {
                break;
            };
            match self.process_input(&line) {
                Ok(Some(output)) => println!("{output}"),
                Ok(None) => {}
                Err(err) => eprintln!("{}", self.formatter.format_error(&err.to_string())),
            }
        }

        Ok(())
    }

    /// Check if REPL is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn prompt(&self) -> &CqlPrompt {
        &self.prompt
    }
}

fn help_text() -> String {
    let mut lines = vec!["Statements:".to_string()];
    lines.extend(
        CqlQueryName::ALL
            .iter()
            .map(|name| format!("  {}", name.synopsis())),
    );
    lines.push(String::new());
    lines.push("Press Tab to complete, 'exit' to quit.".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_engine() -> ReplEngine {
        let mut config = Config::default();
        config.history.persist = false;
        let service = Arc::new(CompletionService::with_empty_schema().unwrap());
        ReplEngine::new(service, &config, false).unwrap()
    }

    #[test]
    fn test_classifies_statement() {
        let mut engine = create_test_engine();
        let output = engine.process_input("DROP INDEX idx;").unwrap().unwrap();
        assert!(output.starts_with("DROP_INDEX"));
    }

    #[test]
    fn test_unknown_statement() {
        let mut engine = create_test_engine();
        let output = engine.process_input("foobar baz").unwrap().unwrap();
        assert!(output.contains("not recognised"));
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut engine = create_test_engine();
        assert!(engine.process_input("   ").unwrap().is_none());
        assert!(engine.is_running());
    }

    #[test]
    fn test_use_updates_prompt() {
        let mut engine = create_test_engine();
        engine.process_input("use shop;").unwrap();
        assert_eq!(engine.prompt().keyspace(), Some("shop"));
    }

    #[test]
    fn test_exit_stops() {
        let mut engine = create_test_engine();
        assert!(engine.process_input("EXIT").unwrap().is_none());
        assert!(!engine.is_running());
    }

    #[test]
    fn test_help_lists_every_statement() {
        let mut engine = create_test_engine();
        let help = engine.process_input("help").unwrap().unwrap();
        for name in CqlQueryName::ALL {
            assert!(help.contains(name.synopsis()));
        }
    }
}
