//! CQL lexer for error-tolerant tokenization
//!
//! This lexer is designed to be extremely forgiving and never panic.
//! It handles incomplete input gracefully, which is essential for
//! completion while the user is still typing.
//!
//! # Design Principles
//!
//! - **Never panic** - always return a valid token stream
//! - **Never reject input** - unknown characters become `Unknown` tokens
//! - **Don't detect syntax errors** - that's the completion engine's job
//! - **Byte spans** - token spans are byte offsets into the input, so they
//!   line up with editor cursor positions

use std::ops::Range;

use crate::model::CqlPart;
use crate::model::keyword;

/// Token type enumeration
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Vocabulary entry, multi-word keywords merged into one token
    Keyword(&'static CqlPart),

    // Identifiers and Literals
    Ident(String),
    Number(String),
    String(String),

    // Operators and Symbols
    Star,
    Comma,
    Dot,
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Colon,
    Minus,
    Plus,
    Question,
    Semicolon,

    // Special tokens
    EOF,
    Unknown(char),
}

/// Token with position information
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// Vocabulary part if this token is a keyword or keyword value
    pub fn keyword(&self) -> Option<&'static CqlPart> {
        match self.kind {
            TokenKind::Keyword(part) => Some(part),
            _ => None,
        }
    }

    /// Symbol tokens as operator parts, so they can act as grammar markers
    pub fn as_part(&self) -> Option<CqlPart> {
        let symbol = match &self.kind {
            TokenKind::Keyword(part) => return Some((*part).clone()),
            TokenKind::Star => "*",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Eq => "=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Semicolon => ";",
            _ => return None,
        };
        Some(CqlPart::operator(symbol))
    }

    /// Keywords, identifiers and numbers: tokens the user may still be typing
    pub fn is_word(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Keyword(_) | TokenKind::Ident(_) | TokenKind::Number(_)
        )
    }

    pub fn ident_value(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(s) => Some(s),
            _ => None,
        }
    }
}

/// CQL Lexer - error-tolerant tokenizer
pub struct CqlLexer {
    input: Vec<(usize, char)>,
    len: usize,
    pos: usize,
}

impl CqlLexer {
    /// Create a new lexer from input string
    pub fn new(input: &str) -> Self {
        Self {
            input: input.char_indices().collect(),
            len: input.len(),
            pos: 0,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(input: &str) -> Vec<Token> {
        let mut lexer = Self::new(input);
        let mut tokens = Vec::new();

        loop {
            let token = lexer.next_token();
            let is_eof = matches!(token.kind, TokenKind::EOF);
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        tokens
    }

    /// Get the next token
    fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        let start = self.offset();

        if self.is_at_end() {
            return Token::new(TokenKind::EOF, start..start);
        }

        let ch = self.current_char();

        match ch {
            // Single-character tokens
            '*' => self.single(TokenKind::Star, start),
            ',' => self.single(TokenKind::Comma, start),
            '.' => self.single(TokenKind::Dot, start),
            '(' => self.single(TokenKind::LParen, start),
            ')' => self.single(TokenKind::RParen, start),
            '{' => self.single(TokenKind::LBrace, start),
            '}' => self.single(TokenKind::RBrace, start),
            '[' => self.single(TokenKind::LBracket, start),
            ']' => self.single(TokenKind::RBracket, start),
            ':' => self.single(TokenKind::Colon, start),
            ';' => self.single(TokenKind::Semicolon, start),
            '=' => self.single(TokenKind::Eq, start),
            '+' => self.single(TokenKind::Plus, start),
            '-' => self.single(TokenKind::Minus, start),
            '?' => self.single(TokenKind::Question, start),

            // Operators (possibly two characters)
            '!' => {
                self.advance();
                if self.current_char() == '=' {
                    self.advance();
                    Token::new(TokenKind::Ne, start..self.offset())
                } else {
                    Token::new(TokenKind::Unknown('!'), start..self.offset())
                }
            }
            '>' => {
                self.advance();
                if self.current_char() == '=' {
                    self.advance();
                    Token::new(TokenKind::Ge, start..self.offset())
                } else {
                    Token::new(TokenKind::Gt, start..self.offset())
                }
            }
            '<' => {
                self.advance();
                if self.current_char() == '=' {
                    self.advance();
                    Token::new(TokenKind::Le, start..self.offset())
                } else {
                    Token::new(TokenKind::Lt, start..self.offset())
                }
            }

            // String literals and quoted identifiers
            '\'' => {
                let value = self.scan_quoted('\'');
                Token::new(TokenKind::String(value), start..self.offset())
            }
            '"' => {
                let value = self.scan_quoted('"');
                Token::new(TokenKind::Ident(value), start..self.offset())
            }

            // Numbers
            '0'..='9' => self.scan_number(start),

            // Identifiers and keywords
            c if c.is_alphabetic() || c == '_' => self.scan_word(start),

            // Unknown character - don't panic, just return it
            _ => {
                self.advance();
                Token::new(TokenKind::Unknown(ch), start..self.offset())
            }
        }
    }

    fn single(&mut self, kind: TokenKind, start: usize) -> Token {
        self.advance();
        Token::new(kind, start..self.offset())
    }

    /// Scan a quoted literal; a doubled quote is an escaped quote
    fn scan_quoted(&mut self, quote: char) -> String {
        self.advance(); // Skip opening quote

        let mut value = String::new();

        while !self.is_at_end() {
            let ch = self.current_char();
            if ch == quote {
                if self.peek_char() == quote {
                    value.push(quote);
                    self.advance();
                    self.advance();
                    continue;
                }
                self.advance(); // Skip closing quote
                break;
            }
            value.push(ch);
            self.advance();
        }

        value
    }

    /// Scan a number (integer or decimal)
    fn scan_number(&mut self, start: usize) -> Token {
        let mut value = String::new();

        while !self.is_at_end() && self.current_char().is_ascii_digit() {
            value.push(self.current_char());
            self.advance();
        }

        // Handle decimal point
        if self.current_char() == '.' && self.peek_char().is_ascii_digit() {
            value.push('.');
            self.advance();
            while !self.is_at_end() && self.current_char().is_ascii_digit() {
                value.push(self.current_char());
                self.advance();
            }
        }

        Token::new(TokenKind::Number(value), start..self.offset())
    }

    /// Scan an identifier or keyword, merging multi-word keywords
    fn scan_word(&mut self, start: usize) -> Token {
        let word = self.peek_word();
        self.skip_word();
        let lower = word.to_lowercase();

        for phrase in keyword::phrases_starting_with(&lower) {
            let saved_pos = self.pos;
            if self.match_following_words(&phrase[1..]) {
                if let Some(part) = keyword::lookup(&phrase.join(" ")) {
                    return Token::new(TokenKind::Keyword(part), start..self.offset());
                }
            }
            self.pos = saved_pos;
        }

        let kind = match keyword::lookup(&lower) {
            Some(part) => TokenKind::Keyword(part),
            None => TokenKind::Ident(word),
        };

        Token::new(kind, start..self.offset())
    }

    /// Consume `words` if they follow, each after at least one whitespace
    fn match_following_words(&mut self, words: &[&str]) -> bool {
        for expected in words {
            let before = self.pos;
            self.skip_whitespace();
            if self.pos == before {
                return false;
            }
            if !self.peek_word().eq_ignore_ascii_case(expected) {
                return false;
            }
            self.skip_word();
        }
        true
    }

    /// Skip whitespace and `--` / `//` line comments
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.skip_whitespace();
            let line_comment = matches!(
                (self.current_char(), self.peek_char()),
                ('-', '-') | ('/', '/')
            );
            if !line_comment {
                break;
            }
            while !self.is_at_end() && self.current_char() != '\n' {
                self.advance();
            }
        }
    }

    /// Skip whitespace characters
    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    /// Peek the next word without consuming it
    fn peek_word(&self) -> String {
        self.input[self.pos..]
            .iter()
            .map(|(_, ch)| *ch)
            .take_while(|ch| ch.is_alphanumeric() || *ch == '_')
            .collect()
    }

    /// Skip the next word
    fn skip_word(&mut self) {
        while !self.is_at_end() {
            let ch = self.current_char();
            if ch.is_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Byte offset of the current position
    fn offset(&self) -> usize {
        self.input.get(self.pos).map_or(self.len, |(offset, _)| *offset)
    }

    /// Get current character
    fn current_char(&self) -> char {
        self.input.get(self.pos).map_or('\0', |(_, ch)| *ch)
    }

    /// Peek at next character
    fn peek_char(&self) -> char {
        self.input.get(self.pos + 1).map_or('\0', |(_, ch)| *ch)
    }

    /// Advance position
    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{KeywordDef, KeywordValueDef};

    fn keyword(def: KeywordDef) -> TokenKind {
        TokenKind::Keyword(def.value())
    }

    #[test]
    fn test_tokenize_simple_select() {
        let tokens = CqlLexer::tokenize("SELECT * FROM users");
        assert_eq!(tokens.len(), 5); // SELECT, *, FROM, users, EOF

        assert_eq!(tokens[0].kind, keyword(KeywordDef::Select));
        assert_eq!(tokens[1].kind, TokenKind::Star);
        assert_eq!(tokens[2].kind, keyword(KeywordDef::From));
        assert!(matches!(tokens[3].kind, TokenKind::Ident(ref s) if s == "users"));
        assert_eq!(tokens[4].kind, TokenKind::EOF);
    }

    #[test]
    fn test_multi_word_keywords_merge() {
        let tokens = CqlLexer::tokenize("DROP   INDEX IF\tEXISTS idx");
        assert_eq!(tokens[0].kind, keyword(KeywordDef::DropIndex));
        assert_eq!(tokens[0].span, 0..12);
        assert_eq!(tokens[1].kind, keyword(KeywordDef::IfExists));
        assert!(matches!(tokens[2].kind, TokenKind::Ident(ref s) if s == "idx"));
    }

    #[test]
    fn test_longest_phrase_wins() {
        let tokens = CqlLexer::tokenize("with clustering order by (ts desc)");
        assert_eq!(tokens[1].kind, keyword(KeywordDef::ClusteringOrderBy));

        let tokens = CqlLexer::tokenize("select * from t order by ts");
        assert!(tokens.iter().any(|t| t.kind == keyword(KeywordDef::OrderBy)));
    }

    #[test]
    fn test_incomplete_phrase_falls_back() {
        let tokens = CqlLexer::tokenize("drop indexes");
        assert_eq!(tokens[0].kind, keyword(KeywordDef::Drop));
        assert!(matches!(tokens[1].kind, TokenKind::Ident(ref s) if s == "indexes"));

        let tokens = CqlLexer::tokenize("drop");
        assert_eq!(tokens[0].kind, keyword(KeywordDef::Drop));
    }

    #[test]
    fn test_phrase_words_need_whitespace() {
        let tokens = CqlLexer::tokenize("foobar ");
        assert!(matches!(tokens[0].kind, TokenKind::Ident(ref s) if s == "foobar"));
    }

    #[test]
    fn test_keyword_values() {
        let tokens = CqlLexer::tokenize("AND durable_writes = true");
        assert_eq!(tokens[0].kind, keyword(KeywordDef::And));
        assert_eq!(
            tokens[1].kind,
            TokenKind::Keyword(KeywordValueDef::DurableWrites.value())
        );
        assert_eq!(tokens[2].kind, TokenKind::Eq);
        assert_eq!(tokens[3].kind, TokenKind::Keyword(KeywordValueDef::True.value()));
    }

    #[test]
    fn test_string_literal_with_escaped_quote() {
        let tokens = CqlLexer::tokenize("where name = 'O''Brien'");
        assert!(matches!(tokens[3].kind, TokenKind::String(ref s) if s == "O'Brien"));
    }

    #[test]
    fn test_quoted_identifier_keeps_case() {
        let tokens = CqlLexer::tokenize("select \"UserName\" from t");
        assert!(matches!(tokens[1].kind, TokenKind::Ident(ref s) if s == "UserName"));
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        let tokens = CqlLexer::tokenize("where a = 'abc");
        assert!(matches!(tokens[3].kind, TokenKind::String(ref s) if s == "abc"));
        assert_eq!(tokens[3].span, 10..14);
        assert_eq!(tokens[4].kind, TokenKind::EOF);
    }

    #[test]
    fn test_line_comments_are_skipped() {
        let tokens = CqlLexer::tokenize("-- pick users\nselect // all\n*");
        assert_eq!(tokens[0].kind, keyword(KeywordDef::Select));
        assert_eq!(tokens[1].kind, TokenKind::Star);
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let tokens = CqlLexer::tokenize("'żółw' x");
        assert_eq!(tokens[0].span, 0..9);
        assert_eq!(tokens[1].span, 10..11);
    }

    #[test]
    fn test_tokenize_operators() {
        let tokens = CqlLexer::tokenize("a = 1 AND b != 2 AND c >= 3 AND d <= 4");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Eq));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Ne));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Ge));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Le));
    }

    #[test]
    fn test_tokenize_empty_input() {
        let tokens = CqlLexer::tokenize("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::EOF);
    }

    #[test]
    fn test_tokenize_unknown_chars() {
        let tokens = CqlLexer::tokenize("SELECT @ FROM users");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Unknown('@')));
    }

    #[test]
    fn test_as_part_for_symbols() {
        let tokens = CqlLexer::tokenize("( x");
        assert_eq!(tokens[0].as_part(), Some(CqlPart::operator("(")));
        assert_eq!(tokens[1].as_part(), None);
    }
}
