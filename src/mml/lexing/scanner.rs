//! Line-buffered Scanner
//!
//!     The scanner pulls one physical line at a time from any [BufRead] and hands out tokens
//!     through an advance-then-fetch protocol:
//!
//!     - [Tokenizer::advance] moves to the next token and reports whether there is one.
//!     - [Tokenizer::fetch] returns the token found by the last successful advance.
//!
//!     Tokens never span lines. Only spaces and tabs separate tokens; line terminators (`\n`,
//!     `\r\n`) are stripped when a line is read, so a last line without one scans the same way.
//!
//! Positions
//!
//!     Rows and columns are 1-based. The row is the physical line number and the column is the
//!     byte offset of the token's first character within that line, plus one. Both are assigned
//!     when the token is matched.
//!
//! States
//!
//!     Scanning: there is a line remainder, or more lines can be read.
//!     Exhausted: the input reached its end (or failed). Terminal, entered exactly once.

use crate::mml::error::LexError;
use crate::mml::lexing::grammar;
use crate::mml::token::Token;
use std::io::{self, BufRead};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Scanning,
    Exhausted,
}

/// Match recorded by the last successful advance.
#[derive(Debug, Clone)]
struct Pending {
    span: Range<usize>,
    col: usize,
}

/// Pull-based tokenizer over a line-oriented reader.
pub struct Tokenizer<R> {
    input: R,
    state: ScanState,
    line: String,
    offset: usize,
    row: usize,
    col: usize,
    pending: Option<Pending>,
}

impl<'a> Tokenizer<io::Cursor<&'a str>> {
    /// Tokenizer over an in-memory score.
    pub fn from_source(source: &'a str) -> Self {
        Tokenizer::new(io::Cursor::new(source))
    }
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            state: ScanState::Scanning,
            line: String::new(),
            offset: 0,
            row: 0,
            col: 1,
            pending: None,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == ScanState::Exhausted
    }

    /// Move to the next token.
    ///
    /// Returns `Ok(false)` once the input is exhausted; every later call returns `Ok(false)`
    /// as well. A failing reader is reported once as [LexError::Read] and exhausts the scanner.
    pub fn advance(&mut self) -> Result<bool, LexError> {
        self.pending = None;
        loop {
            let rest = &self.line[self.offset..];
            let blanks = rest
                .bytes()
                .take_while(|b| *b == b' ' || *b == b'\t')
                .count();
            self.offset += blanks;
            self.col += blanks;

            let rest = &self.line[self.offset..];
            if !rest.is_empty() {
                if let Some(len) = grammar::match_len(rest) {
                    let start = self.offset;
                    self.pending = Some(Pending {
                        span: start..start + len,
                        col: self.col,
                    });
                    self.offset += len;
                    self.col += len;
                    log::trace!(
                        "matched {:?} at {}:{}",
                        &self.line[start..start + len],
                        self.row,
                        self.col - len
                    );
                    return Ok(true);
                }
                log::warn!(
                    "discarding unmatchable remainder {:?} at {}:{}",
                    rest,
                    self.row,
                    self.col
                );
            }

            if !self.read_line()? {
                return Ok(false);
            }
        }
    }

    /// The token found by the last successful [advance](Tokenizer::advance).
    ///
    /// `None` before the first advance, and after an advance that returned `false` or failed.
    pub fn fetch(&self) -> Option<Token> {
        let pending = self.pending.as_ref()?;
        let text = &self.line[pending.span.clone()];
        let (kind, captures) = grammar::classify(text);
        Some(Token::new(kind, text, captures, self.row, pending.col))
    }

    /// Replace the current line with the next one. `Ok(false)` at end of input.
    fn read_line(&mut self) -> Result<bool, LexError> {
        self.line.clear();
        self.offset = 0;
        if self.is_exhausted() {
            return Ok(false);
        }

        match self.input.read_line(&mut self.line) {
            Ok(0) => {
                log::debug!("end of input after {} lines", self.row);
                self.state = ScanState::Exhausted;
                Ok(false)
            }
            Ok(_) => {
                strip_line_terminator(&mut self.line);
                self.row += 1;
                self.col = 1;
                log::debug!("line {}: {:?}", self.row, self.line);
                Ok(true)
            }
            Err(source) => {
                self.line.clear();
                self.state = ScanState::Exhausted;
                Err(LexError::Read {
                    row: self.row + 1,
                    source,
                })
            }
        }
    }
}

impl<R: BufRead> Iterator for Tokenizer<R> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.advance() {
            Ok(true) => self.fetch().map(Ok),
            Ok(false) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

fn strip_line_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
