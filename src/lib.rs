//! # msxmml
//!
//! Tokenizer for the msxmml score language, a macro-style notation for composing multichannel
//! chiptune music.
//!
//! The lexer produces typed, positioned tokens for the song parser. See [mml::lexing] for the
//! scanner and grammar, and [mml::token] for the tokens and their decoders.

pub mod mml;

pub use mml::{tokenize, Token, TokenKind, Tokenizer};
