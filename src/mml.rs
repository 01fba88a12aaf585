//! Main module for msxmml library functionality

pub mod config;
pub mod error;
pub mod lexing;
pub mod music;
pub mod testing;
pub mod token;

pub use error::{ContractViolation, DecodeError, LexError, Severity};
pub use lexing::{tokenize, Tokenizer};
pub use token::{Token, TokenKind};
