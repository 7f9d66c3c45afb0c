//! Custom prompt implementation for cyclop

use std::borrow::Cow;

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

/// Prompt showing the keyspace picked by the last `USE`
#[derive(Debug, Clone, Default)]
pub struct CqlPrompt {
    keyspace: Option<String>,
}

impl CqlPrompt {
    pub fn new(keyspace: Option<String>) -> Self {
        Self { keyspace }
    }

    pub fn keyspace(&self) -> Option<&str> {
        self.keyspace.as_deref()
    }

    pub fn set_keyspace(&mut self, keyspace: impl Into<String>) {
        self.keyspace = Some(keyspace.into());
    }
}

impl Prompt for CqlPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        match &self.keyspace {
            Some(keyspace) => format!("cql:{keyspace}> ").into(),
            None => "cql> ".into(),
        }
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        "".into()
    }

    /// Indicator is part of the left prompt
    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}
