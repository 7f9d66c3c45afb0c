//! Token stream with cursor awareness for completion
//!
//! Only the text left of the cursor is tokenized. A word token that ends
//! exactly at the cursor is still being typed: it is kept apart from the
//! completed tokens and never moves the grammar position.

use super::cql_lexer::{CqlLexer, Token, TokenKind};
use crate::model::CqlPart;

/// Clamp `cursor` to `text`, then back it off to the nearest char boundary
pub fn clamp_cursor(text: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}

/// Token stream with cursor position tracking
#[derive(Debug, Clone)]
pub struct TokenStream {
    /// Text left of the cursor
    input: String,
    /// Tokens fully typed before the cursor (EOF excluded)
    tokens: Vec<Token>,
    /// Word token touching the cursor, if any
    current: Option<Token>,
}

impl TokenStream {
    /// Tokenize `text` up to `cursor` (clamped)
    pub fn new(text: &str, cursor: usize) -> Self {
        let cursor = clamp_cursor(text, cursor);
        let input = text[..cursor].to_string();

        let mut tokens = CqlLexer::tokenize(&input);
        tokens.retain(|t| !matches!(t.kind, TokenKind::EOF));

        let current = match tokens.last() {
            Some(last) if last.is_word() && last.span.end == cursor => tokens.pop(),
            _ => None,
        };

        Self {
            input,
            tokens,
            current,
        }
    }

    /// Tokenize all of `text` with every token treated as completed
    pub fn full(text: &str) -> Self {
        let mut tokens = CqlLexer::tokenize(text);
        tokens.retain(|t| !matches!(t.kind, TokenKind::EOF));

        Self {
            input: text.to_string(),
            tokens,
            current: None,
        }
    }

    /// Cursor position (byte index, after clamping)
    pub fn cursor(&self) -> usize {
        self.input.len()
    }

    /// Get all tokens completed before the cursor
    pub fn tokens_before_cursor(&self) -> &[Token] {
        &self.tokens
    }

    /// Get the word being typed at the cursor
    pub fn current_token(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Get the current prefix being typed
    pub fn current_prefix(&self) -> &str {
        match &self.current {
            Some(token) => &self.input[token.span.clone()],
            None => "",
        }
    }

    /// Get the completion start position (where to insert the completion)
    pub fn completion_start(&self) -> usize {
        self.current
            .as_ref()
            .map_or(self.cursor(), |token| token.span.start)
    }

    /// True when nothing has been completed yet
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Source text of a token
    pub fn text_of(&self, token: &Token) -> &str {
        &self.input[token.span.clone()]
    }

    /// Lower-cased words of the completed tokens, or `None` if any
    /// completed token is not a word
    pub fn completed_words(&self) -> Option<Vec<String>> {
        self.tokens
            .iter()
            .map(|t| t.is_word().then(|| self.text_of(t).to_lowercase()))
            .collect()
    }

    fn last_index_of(&self, marker: &CqlPart) -> Option<usize> {
        self.tokens
            .iter()
            .rposition(|t| t.as_part().as_ref() == Some(marker))
    }

    /// Keywords typed after the last occurrence of `marker`
    pub fn keywords_after(&self, marker: &CqlPart) -> impl Iterator<Item = &'static CqlPart> + '_ {
        let start = self.last_index_of(marker).map_or(self.tokens.len(), |i| i + 1);
        self.tokens[start..].iter().filter_map(Token::keyword)
    }

    /// Name following the last occurrence of `marker`, `ks.table` joined.
    ///
    /// `if exists` / `if not exists` between marker and name are skipped.
    pub fn identifier_after(&self, marker: &CqlPart) -> Option<String> {
        let start = self.last_index_of(marker)? + 1;
        let mut rest = self.tokens[start..].iter().peekable();

        while let Some(token) = rest.peek() {
            match token.keyword().map(CqlPart::to_display_string) {
                Some("if exists") | Some("if not exists") => {
                    rest.next();
                }
                _ => break,
            }
        }

        let mut name = rest.next()?.ident_value()?.to_string();
        if rest.next().is_some_and(|t| t.kind == TokenKind::Dot) {
            if let Some(table) = rest.next().and_then(Token::ident_value) {
                name.push('.');
                name.push_str(table);
            }
        }
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::KeywordDef;

    #[test]
    fn test_clamp_cursor() {
        assert_eq!(clamp_cursor("abc", 10), 3);
        assert_eq!(clamp_cursor("abc", 1), 1);
        // 'ż' spans bytes 0..2
        assert_eq!(clamp_cursor("żx", 1), 0);
    }

    #[test]
    fn test_word_at_cursor_is_in_progress() {
        let stream = TokenStream::new("select * fr", 11);
        assert_eq!(stream.tokens_before_cursor().len(), 2);
        assert_eq!(stream.current_prefix(), "fr");
        assert_eq!(stream.completion_start(), 9);
    }

    #[test]
    fn test_trailing_space_completes_word() {
        let stream = TokenStream::new("drop index ", 11);
        assert_eq!(stream.tokens_before_cursor().len(), 1);
        assert!(stream.current_token().is_none());
        assert_eq!(stream.current_prefix(), "");
        assert_eq!(stream.completion_start(), 11);
    }

    #[test]
    fn test_text_right_of_cursor_is_ignored() {
        let stream = TokenStream::new("select * from users", 7);
        assert_eq!(stream.tokens_before_cursor().len(), 1);
        assert!(stream.current_token().is_none());
    }

    #[test]
    fn test_symbol_at_cursor_is_completed() {
        let stream = TokenStream::new("insert into t (", 15);
        assert_eq!(stream.tokens_before_cursor().len(), 3);
        assert!(stream.current_token().is_none());
    }

    #[test]
    fn test_completed_words() {
        let stream = TokenStream::new("DROP ", 5);
        assert_eq!(stream.completed_words(), Some(vec!["drop".to_string()]));

        let stream = TokenStream::new("select * ", 9);
        assert_eq!(stream.completed_words(), None);
    }

    #[test]
    fn test_identifier_after_marker() {
        let stream = TokenStream::new("select a from ks.users where ", 29);
        assert_eq!(
            stream.identifier_after(KeywordDef::From.value()),
            Some("ks.users".to_string())
        );

        let stream = TokenStream::new("create index if not exists idx on t (", 37);
        assert_eq!(
            stream.identifier_after(KeywordDef::On.value()),
            Some("t".to_string())
        );
        assert_eq!(
            stream.identifier_after(KeywordDef::CreateIndex.value()),
            Some("idx".to_string())
        );
        assert_eq!(stream.identifier_after(KeywordDef::From.value()), None);
    }

    #[test]
    fn test_keywords_after_marker() {
        let stream = TokenStream::new("drop table if exists ", 21);
        let after: Vec<_> = stream
            .keywords_after(KeywordDef::DropTable.value())
            .collect();
        assert_eq!(after, vec![KeywordDef::IfExists.value()]);
    }

    #[test]
    fn test_full_stream_has_no_prefix() {
        let stream = TokenStream::full("select * from users");
        assert_eq!(stream.tokens_before_cursor().len(), 4);
        assert_eq!(stream.current_prefix(), "");
        assert_eq!(
            stream.identifier_after(KeywordDef::From.value()),
            Some("users".to_string())
        );
    }

    #[test]
    fn test_empty_stream() {
        let stream = TokenStream::new("   ", 3);
        assert!(stream.is_empty());
        assert!(stream.current_token().is_none());
    }
}
