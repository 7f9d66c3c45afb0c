//! Syntax highlighter for CQL input
//!
//! Styling follows the completion lexer, so a multi-word keyword such as
//! `drop index` is painted as one unit exactly when the engine sees it as
//! one. Text between tokens (whitespace and comments) keeps its bytes.

use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

use crate::parser::{CqlLexer, TokenKind};

/// CQL syntax highlighter
pub struct CqlHighlighter {
    enabled: bool,
}

impl CqlHighlighter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn style_for(kind: &TokenKind) -> Style {
        match kind {
            TokenKind::Keyword(_) => Color::Blue.bold(),
            TokenKind::String(_) => Color::Yellow.normal(),
            TokenKind::Number(_) => Color::LightCyan.normal(),
            TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBrace
            | TokenKind::RBrace
            | TokenKind::LBracket
            | TokenKind::RBracket => Color::Cyan.normal(),
            TokenKind::Comma | TokenKind::Dot | TokenKind::Semicolon | TokenKind::Colon => {
                Color::DarkGray.normal()
            }
            TokenKind::Star
            | TokenKind::Eq
            | TokenKind::Ne
            | TokenKind::Gt
            | TokenKind::Lt
            | TokenKind::Ge
            | TokenKind::Le
            | TokenKind::Minus
            | TokenKind::Plus
            | TokenKind::Question => Color::Magenta.normal(),
            TokenKind::Unknown(_) => Color::Red.normal(),
            TokenKind::Ident(_) | TokenKind::EOF => Style::default(),
        }
    }

    /// Whitespace stays unstyled, anything else between tokens is a comment
    fn push_gap(styled: &mut StyledText, gap: &str) {
        if gap.is_empty() {
            return;
        }
        let style = if gap.trim().is_empty() {
            Style::default()
        } else {
            Color::DarkGray.dimmed()
        };
        styled.push((style, gap.to_string()));
    }
}

impl Default for CqlHighlighter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Highlighter for CqlHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();
        if !self.enabled {
            styled.push((Style::default(), line.to_string()));
            return styled;
        }

        let mut last_end = 0;
        for token in CqlLexer::tokenize(line) {
            if matches!(token.kind, TokenKind::EOF) || token.span.start < last_end {
                continue;
            }
            Self::push_gap(&mut styled, &line[last_end..token.span.start]);
            styled.push((
                Self::style_for(&token.kind),
                line[token.span.clone()].to_string(),
            ));
            last_end = token.span.end;
        }
        Self::push_gap(&mut styled, &line[last_end..]);

        styled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(styled: &StyledText) -> String {
        styled.buffer.iter().map(|(_, text)| text.as_str()).collect()
    }

    #[test]
    fn test_text_is_preserved() {
        let highlighter = CqlHighlighter::default();
        let line = "SELECT name, 'it''s' FROM users -- trailing\n WHERE id = 42;";
        assert_eq!(raw(&highlighter.highlight(line, 0)), line);
    }

    #[test]
    fn test_multi_word_keyword_is_one_segment() {
        let highlighter = CqlHighlighter::default();
        let styled = highlighter.highlight("drop   index idx", 0);
        assert_eq!(styled.buffer[0].1, "drop   index");
        assert_eq!(styled.buffer[0].0, Color::Blue.bold());
    }

    #[test]
    fn test_comment_is_dimmed() {
        let highlighter = CqlHighlighter::default();
        let styled = highlighter.highlight("use ks // pick keyspace", 0);
        let comment = styled.buffer.last().unwrap();
        assert_eq!(comment.0, Color::DarkGray.dimmed());
        assert!(comment.1.contains("pick keyspace"));
    }

    #[test]
    fn test_disabled_is_single_segment() {
        let highlighter = CqlHighlighter::new(false);
        let styled = highlighter.highlight("select * from t", 0);
        assert_eq!(styled.buffer.len(), 1);
        assert_eq!(styled.buffer[0].0, Style::default());
    }
}
