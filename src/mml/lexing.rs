//! Lexer
//!
//! This module turns score text into the token stream consumed by the song parser.
//!
//! Structure:
//!     [grammar] holds the ordered lexical rules and the two matchers built from them, and
//!     [scanner] walks the input one physical line at a time, applying the combined matcher to
//!     what is left of the current line. Classification and decoding of captures happen on the
//!     token side, see [token](crate::mml::token).
//!
//! Usage:
//!     Consumers either drive the advance-then-fetch protocol by hand, which is what the song
//!     parser does to look at one token at a time, or iterate over the [Tokenizer]:
//!
//!     ```text
//!     let mut tokenizer = Tokenizer::new(reader);
//!     while tokenizer.advance()? {
//!         let token = tokenizer.fetch();
//!         ...
//!     }
//!     ```

pub mod grammar;
pub mod scanner;

pub use grammar::{classify, GrammarEntry, GRAMMAR};
pub use scanner::{ScanState, Tokenizer};

use crate::mml::error::LexError;
use crate::mml::token::Token;

/// Convenience function to tokenize a whole score held in memory.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::from_source(source).collect()
}
