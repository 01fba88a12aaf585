//! Semantic decoders
//!
//!     Each decoder turns the captures of one token kind into a typed value. Decoders first check
//!     the token kind: calling one on a token of another kind is a [ContractViolation], as is a
//!     capture the grammar guarantees to be well formed failing to parse. Those are bugs on the
//!     consumer or grammar side.
//!
//!     Notes and envelopes carry user-facing validation: a note length outside the configured
//!     range is a recoverable [DecodeError::LengthOutOfRange], an envelope level above 100 a
//!     recoverable [DecodeError::LevelOutOfRange]. A digit run too large for its integer type
//!     anywhere else is a [ContractViolation::NumberOverflow].
//!
//!     Decoders are pure; they can be called any number of times on the same token.

use crate::mml::error::{ContractViolation, DecodeError};
use crate::mml::music::{Adsr, Halftone, Note, NoteLengths, Pitch, Rest, TimePoint, MAX_LEVEL};
use crate::mml::token::{Token, TokenKind};
use std::num::IntErrorKind;
use std::str::FromStr;

impl Token {
    /// Name of a `$constant` reference.
    pub fn const_name(&self) -> Result<&str, ContractViolation> {
        self.expect_kind(TokenKind::ConstName)?;
        self.required_capture(0)
    }

    /// Repeat count of a `}N` tuple closer.
    pub fn tuplet_count(&self) -> Result<u32, ContractViolation> {
        self.expect_kind(TokenKind::CloseTuple)?;
        self.parse_capture(0)
    }

    /// `<` lowers the octave by one, `>` raises it.
    pub fn octave_step(&self) -> Result<i32, ContractViolation> {
        self.expect_kind(TokenKind::OctaveStep)?;
        match self.text.as_str() {
            "<" => Ok(-1),
            ">" => Ok(1),
            other => Err(self.malformed(other)),
        }
    }

    /// Decode a note with the built-in length bounds.
    pub fn note(&self) -> Result<Note, DecodeError> {
        self.note_with(&NoteLengths::default())
    }

    /// Decode a note, validating an explicit length against `lengths`.
    pub fn note_with(&self, lengths: &NoteLengths) -> Result<Note, DecodeError> {
        self.expect_kind(TokenKind::Note)?;

        let letter = self.required_capture(0)?;
        let pitch = letter
            .chars()
            .next()
            .and_then(Pitch::from_letter)
            .ok_or_else(|| self.malformed(letter))?;

        let halftone = match self.required_capture(1)? {
            "" => Halftone::Natural,
            "#" | "+" => Halftone::Sharp,
            "-" => Halftone::Flat,
            other => return Err(self.malformed(other).into()),
        };

        let digits = self.required_capture(2)?;
        let length = if digits.is_empty() {
            lengths.default
        } else {
            let length = match digits.parse::<u32>() {
                Ok(length) => length,
                Err(err) if *err.kind() == IntErrorKind::PosOverflow => u32::MAX,
                Err(_) => return Err(self.malformed(digits).into()),
            };
            if !lengths.contains(length) {
                return Err(DecodeError::LengthOutOfRange {
                    length,
                    min: lengths.min,
                    max: lengths.max,
                    row: self.row,
                    col: self.col,
                });
            }
            length
        };

        let dots = self.required_capture(3)?;
        if dots.chars().any(|c| c != '.') {
            return Err(self.malformed(dots).into());
        }

        Ok(Note {
            pitch,
            halftone,
            length,
            dots: dots.len(),
        })
    }

    /// Octave number of an `oN` token.
    pub fn octave(&self) -> Result<u32, ContractViolation> {
        self.expect_kind(TokenKind::Octave)?;
        self.parse_capture(0)
    }

    /// Decode a silence with the built-in default length.
    pub fn silence(&self) -> Result<Rest, ContractViolation> {
        self.silence_with(&NoteLengths::default())
    }

    /// Decode a silence. Its length is not range checked.
    pub fn silence_with(&self, lengths: &NoteLengths) -> Result<Rest, ContractViolation> {
        self.expect_kind(TokenKind::Silence)?;
        let length = if self.required_capture(0)?.is_empty() {
            lengths.default
        } else {
            self.parse_capture(0)?
        };
        Ok(Rest { length })
    }

    /// Envelope breakpoints of `adsr: t1->l1, t2->l2, t3, t4`.
    ///
    /// Times are milliseconds and levels percentages, at most [MAX_LEVEL]. The sustain plateau
    /// keeps the decay level and the release always ends in silence.
    pub fn adsr(&self) -> Result<Adsr, DecodeError> {
        self.expect_kind(TokenKind::AdsrVector)?;
        let attack_time: u64 = self.parse_capture(0)?;
        let attack_level = self.level_capture(1)?;
        let decay_time: u64 = self.parse_capture(2)?;
        let decay_level = self.level_capture(3)?;
        let sustain_time: u64 = self.parse_capture(4)?;
        let release_time: u64 = self.parse_capture(5)?;

        Ok([
            TimePoint::from_millis(attack_time, attack_level),
            TimePoint::from_millis(decay_time, decay_level),
            TimePoint::from_millis(sustain_time, decay_level),
            TimePoint::from_millis(release_time, 0.0),
        ])
    }

    /// Key of a `key: value` entry.
    pub fn map_key(&self) -> Result<&str, ContractViolation> {
        self.expect_kind(TokenKind::MapEntry)?;
        self.required_capture(0)
    }

    /// Value of a `key: value` entry, such as the waveform in `wave: square`.
    pub fn map_value(&self) -> Result<&str, ContractViolation> {
        self.expect_kind(TokenKind::MapEntry)?;
        self.required_capture(1)
    }

    /// Identifier of an `@channel` token.
    pub fn channel_id(&self) -> Result<&str, ContractViolation> {
        self.expect_kind(TokenKind::ChannelId)?;
        self.required_capture(0)
    }

    pub fn number(&self) -> Result<u32, ContractViolation> {
        self.expect_kind(TokenKind::Number)?;
        self.parse_capture(0)
    }

    fn expect_kind(&self, expected: TokenKind) -> Result<(), ContractViolation> {
        if self.kind != expected {
            return Err(ContractViolation::WrongKind {
                expected,
                found: self.kind,
                row: self.row,
                col: self.col,
            });
        }
        Ok(())
    }

    fn malformed(&self, capture: &str) -> ContractViolation {
        ContractViolation::MalformedCapture {
            kind: self.kind,
            capture: capture.to_string(),
            row: self.row,
            col: self.col,
        }
    }

    fn required_capture(&self, index: usize) -> Result<&str, ContractViolation> {
        self.capture(index).ok_or_else(|| self.malformed(""))
    }

    fn parse_capture<T: FromStr>(&self, index: usize) -> Result<T, ContractViolation> {
        let capture = self.required_capture(index)?;
        capture.parse().map_err(|_| {
            if !capture.is_empty() && capture.bytes().all(|b| b.is_ascii_digit()) {
                ContractViolation::NumberOverflow {
                    kind: self.kind,
                    capture: capture.to_string(),
                    row: self.row,
                    col: self.col,
                }
            } else {
                self.malformed(capture)
            }
        })
    }

    /// Percentage capture as a level in `0.0..=1.0`.
    fn level_capture(&self, index: usize) -> Result<f64, DecodeError> {
        let digits = self.required_capture(index)?;
        let level = match digits.parse::<u64>() {
            Ok(level) => level,
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => u64::MAX,
            Err(_) => return Err(self.malformed(digits).into()),
        };
        if level > MAX_LEVEL {
            return Err(DecodeError::LevelOutOfRange {
                level,
                max: MAX_LEVEL,
                row: self.row,
                col: self.col,
            });
        }
        Ok(level as f64 / 100.0)
    }
}
