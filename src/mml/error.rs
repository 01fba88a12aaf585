//! Error types for tokenizing and decoding.
//!
//!     Two severities exist. Fatal errors mean scanning or decoding can't meaningfully go on: the
//!     input stream broke, or a decoder was used against a token it doesn't own (a bug in the
//!     consumer or in the grammar). Recoverable errors are plain invalid user input, such as an
//!     out-of-range note length, and are reported with the token position so the consumer can
//!     keep going.
//!
//!     Unrecognized text is never an error at this level; it becomes an `AnyString` token.

use crate::mml::token::TokenKind;
use std::fmt;
use std::io;

/// How a failure affects the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Fatal,
    Recoverable,
}

/// Failure while pulling lines from the input.
#[derive(Debug)]
pub enum LexError {
    /// The reader failed with something other than end of stream.
    Read { row: usize, source: io::Error },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::Read { row, source } => {
                write!(f, "can't read line {}: {}", row, source)
            }
        }
    }
}

impl std::error::Error for LexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LexError::Read { source, .. } => Some(source),
        }
    }
}

/// A decoder was misused, or a capture the grammar guarantees is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    WrongKind {
        expected: TokenKind,
        found: TokenKind,
        row: usize,
        col: usize,
    },
    MalformedCapture {
        kind: TokenKind,
        capture: String,
        row: usize,
        col: usize,
    },
    /// A digit run too large for the value it encodes.
    NumberOverflow {
        kind: TokenKind,
        capture: String,
        row: usize,
        col: usize,
    },
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::WrongKind {
                expected,
                found,
                row,
                col,
            } => write!(
                f,
                "[{}:{}] bug detected: expected {} token, got {}",
                row, col, expected, found
            ),
            ContractViolation::MalformedCapture {
                kind,
                capture,
                row,
                col,
            } => write!(
                f,
                "[{}:{}] bug detected: malformed {} capture {:?}",
                row, col, kind, capture
            ),
            ContractViolation::NumberOverflow {
                kind,
                capture,
                row,
                col,
            } => write!(
                f,
                "[{}:{}] number too large in {} token: {}",
                row, col, kind, capture
            ),
        }
    }
}

impl std::error::Error for ContractViolation {}

/// Failure while decoding a token into a typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    Contract(ContractViolation),
    LengthOutOfRange {
        length: u32,
        min: u32,
        max: u32,
        row: usize,
        col: usize,
    },
    LevelOutOfRange {
        level: u64,
        max: u64,
        row: usize,
        col: usize,
    },
}

impl DecodeError {
    pub fn severity(&self) -> Severity {
        match self {
            DecodeError::Contract(_) => Severity::Fatal,
            DecodeError::LengthOutOfRange { .. } | DecodeError::LevelOutOfRange { .. } => {
                Severity::Recoverable
            }
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.severity() == Severity::Recoverable
    }
}

impl From<ContractViolation> for DecodeError {
    fn from(violation: ContractViolation) -> Self {
        DecodeError::Contract(violation)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Contract(violation) => write!(f, "{}", violation),
            DecodeError::LengthOutOfRange {
                length,
                min,
                max,
                row,
                col,
            } => write!(
                f,
                "[{}:{}] wrong note length: {}. Must be in range {} to {}",
                row, col, length, min, max
            ),
            DecodeError::LevelOutOfRange {
                level,
                max,
                row,
                col,
            } => write!(
                f,
                "[{}:{}] wrong envelope level: {}. Must be in range 0 to {}",
                row, col, level, max
            ),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Contract(violation) => Some(violation),
            DecodeError::LengthOutOfRange { .. } | DecodeError::LevelOutOfRange { .. } => None,
        }
    }
}
