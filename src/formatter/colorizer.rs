//! Color output support for terminal formatting
//!
//! Styles follow the part kind so keywords, names and symbols read apart
//! in suggestion lists. Everything is a no-op when colors are disabled.

use nu_ansi_term::{Color, Style};

use crate::model::{CqlPart, CqlType};

/// Color scheme for output highlighting
#[derive(Debug, Clone, Copy)]
pub struct Colorizer {
    enabled: bool,
}

impl Colorizer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Style for a suggestion of the given kind
    pub fn style_for(part_type: CqlType) -> Style {
        match part_type {
            CqlType::Keyword => Color::Blue.bold(),
            CqlType::KeywordValue => Color::Purple.normal(),
            CqlType::Identifier => Color::Green.normal(),
            CqlType::ColumnName => Color::Cyan.normal(),
            CqlType::Operator => Color::Magenta.normal(),
            CqlType::NotSupported => Color::Yellow.italic(),
        }
    }

    /// Colorize a suggestion by its kind
    pub fn part(&self, part: &CqlPart) -> String {
        self.paint(Self::style_for(part.part_type()), part.to_display_string())
    }

    /// Statement type header
    pub fn header(&self, text: &str) -> String {
        self.paint(Style::new().bold(), text)
    }

    /// Secondary text such as the syntax synopsis
    pub fn dim(&self, text: &str) -> String {
        self.paint(Color::DarkGray.normal(), text)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(Color::Red.normal(), &format!("Error: {text}"))
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(Color::Yellow.normal(), &format!("Warning: {text}"))
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.enabled {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_plain() {
        let colorizer = Colorizer::new(false);
        assert_eq!(colorizer.part(&CqlPart::keyword("where")), "where");
        assert_eq!(colorizer.error("boom"), "Error: boom");
    }

    #[test]
    fn test_enabled_adds_escape_codes() {
        let colorizer = Colorizer::new(true);
        let painted = colorizer.part(&CqlPart::column("age"));
        assert!(painted.contains("age"));
        assert!(painted.starts_with('\u{1b}'));
    }

    #[test]
    fn test_kinds_are_styled_apart() {
        assert_ne!(
            Colorizer::style_for(CqlType::Keyword),
            Colorizer::style_for(CqlType::ColumnName)
        );
    }
}
