//! Test helpers shared by unit and integration tests.

use crate::mml::lexing::{classify, tokenize};
use crate::mml::token::{Token, TokenKind};

/// Build a token the way the scanner would for `text` found at `row`:`col`.
pub fn token_at(text: &str, row: usize, col: usize) -> Token {
    let (kind, captures) = classify(text);
    Token::new(kind, text, captures, row, col)
}

/// Tokenize `source`, panicking on read errors, which can't happen for in-memory input.
pub fn lex_str(source: &str) -> Vec<Token> {
    tokenize(source).expect("in-memory input never fails to read")
}

/// Kinds of every token in `source`.
pub fn kinds(source: &str) -> Vec<TokenKind> {
    lex_str(source).into_iter().map(|t| t.kind).collect()
}

/// One line per token: `row:col Kind text`.
pub fn dump(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{}:{} {} {}", t.row, t.col, t.kind, t.text))
        .collect::<Vec<_>>()
        .join("\n")
}
