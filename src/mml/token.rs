//! Token types shared by the tokenizer and its consumers.
//!
//!     A token is the classified, positioned result of one scan step. It keeps the raw matched
//!     text and the capture groups of the grammar entry that classified it, so consumers never
//!     have to re-run any pattern. Turning captures into typed values is done on demand by the
//!     decoders in [decode], each of which only accepts tokens of its own kind.
//!
//! Token Kinds
//!
//!     Structural Kinds:
//!         Comment, LoopTag, OpenKey, CloseKey, CloseTuple, MapEntry, AdsrVector, Separator,
//!         ConstName, Assign, ChannelId, ChannelSync, SendArrow. These shape the song: blocks,
//!         loops, settings and channel routing.
//!
//!     Tablature Kinds:
//!         Note, Silence, Octave, OctaveStep, Number. The note sublanguage. Its patterns are
//!         permissive (a bare letter is a note), which is why they sit at the bottom of the
//!         grammar. See [grammar](crate::mml::lexing::grammar).
//!
//!     Fallback:
//!         AnyString. Any run of non-whitespace nothing else claims. Whether that is an error is
//!         for the consumer to decide.

pub mod decode;

use serde::{Deserialize, Serialize};
use std::fmt;

/// All possible token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Comment,
    SendArrow,
    LoopTag,
    OpenKey,
    CloseTuple,
    CloseKey,
    AdsrVector,
    MapEntry,
    Separator,
    ConstName,
    Assign,
    ChannelId,
    ChannelSync,
    Note,
    Silence,
    Octave,
    OctaveStep,
    Number,
    AnyString,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Comment => "Comment",
            TokenKind::SendArrow => "SendArrow",
            TokenKind::LoopTag => "LoopTag",
            TokenKind::OpenKey => "OpenKey",
            TokenKind::CloseTuple => "CloseTuple",
            TokenKind::CloseKey => "CloseKey",
            TokenKind::AdsrVector => "AdsrVector",
            TokenKind::MapEntry => "MapEntry",
            TokenKind::Separator => "Separator",
            TokenKind::ConstName => "ConstName",
            TokenKind::Assign => "Assign",
            TokenKind::ChannelId => "ChannelId",
            TokenKind::ChannelSync => "ChannelSync",
            TokenKind::Note => "Note",
            TokenKind::Silence => "Silence",
            TokenKind::Octave => "Octave",
            TokenKind::OctaveStep => "OctaveStep",
            TokenKind::Number => "Number",
            TokenKind::AnyString => "AnyString",
        }
    }

    /// Check if this kind belongs to the note sublanguage
    pub fn is_tablature(&self) -> bool {
        matches!(
            self,
            TokenKind::Note
                | TokenKind::Silence
                | TokenKind::Octave
                | TokenKind::OctaveStep
                | TokenKind::Number
        )
    }

    /// Check if this kind is the unrecognized-text fallback
    pub fn is_fallback(&self) -> bool {
        matches!(self, TokenKind::AnyString)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified span of input. Row and column are 1-based and point at the first character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub captures: Vec<String>,
    pub row: usize,
    pub col: usize,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        captures: Vec<String>,
        row: usize,
        col: usize,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            captures,
            row,
            col,
        }
    }

    /// Capture group `index` (0-based), if the grammar entry declares it.
    pub fn capture(&self, index: usize) -> Option<&str> {
        self.captures.get(index).map(String::as_str)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} at {}:{}", self.kind, self.text, self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::ChannelId, "@ch1", vec!["ch1".into()], 1, 1);
        assert_eq!(token.to_string(), "ChannelId \"@ch1\" at 1:1");
    }

    #[test]
    fn test_capture_accessor() {
        let token = Token::new(
            TokenKind::MapEntry,
            "wave:square",
            vec!["wave".into(), "square".into()],
            3,
            5,
        );
        assert_eq!(token.capture(0), Some("wave"));
        assert_eq!(token.capture(1), Some("square"));
        assert_eq!(token.capture(2), None);
    }

    #[test]
    fn test_kind_predicates() {
        assert!(TokenKind::Note.is_tablature());
        assert!(TokenKind::Number.is_tablature());
        assert!(!TokenKind::ChannelId.is_tablature());
        assert!(TokenKind::AnyString.is_fallback());
        assert!(!TokenKind::Comment.is_fallback());
    }
}
