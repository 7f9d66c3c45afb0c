//! Lexing for the completion engine
//!
//! Nothing here rejects input. The lexer turns any text into tokens and the
//! token stream splits them at the cursor; deciding what the tokens mean is
//! left to the completion module.
//!
//! - `cql_lexer`: error-tolerant CQL tokenizer with multi-word keyword merging
//! - `token_stream`: cursor-aware view over the tokens
//!
//! # Examples
//!
//! ```
//! use cyclop::parser::TokenStream;
//!
//! let stream = TokenStream::new("select * fr", 11);
//! assert_eq!(stream.tokens_before_cursor().len(), 2);
//! assert_eq!(stream.current_prefix(), "fr");
//! ```

mod cql_lexer;
mod token_stream;

pub use cql_lexer::{CqlLexer, Token, TokenKind};
pub use token_stream::{TokenStream, clamp_cursor};
