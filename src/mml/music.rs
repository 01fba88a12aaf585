//! Music Values
//!
//!     The typed values produced by the token decoders. These are deliberately small: the
//!     song model (channels, loops, instruments) lives downstream and only needs to know what a
//!     single token means in isolation.
//!
//! Note Lengths
//!
//!     Lengths follow the classic MML convention where the number is the fraction of a whole
//!     note (`4` is a quarter, `8` an eighth). The default and the accepted range are part of the
//!     language and shared with every consumer, so they are exposed as constants here and as the
//!     built-in configuration defaults (see [config](crate::mml::config)).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Length used by notes and silences that don't carry an explicit one.
pub const DEFAULT_LENGTH: u32 = 4;
/// Shortest accepted note length (a whole note).
pub const MIN_LENGTH: u32 = 1;
/// Longest accepted note length.
pub const MAX_LENGTH: u32 = 64;

/// Highest envelope level, in percent.
pub const MAX_LEVEL: u64 = 100;

/// Default and accepted range for note lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteLengths {
    pub default: u32,
    pub min: u32,
    pub max: u32,
}

impl NoteLengths {
    pub fn contains(&self, length: u32) -> bool {
        (self.min..=self.max).contains(&length)
    }
}

impl Default for NoteLengths {
    fn default() -> Self {
        Self {
            default: DEFAULT_LENGTH,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        }
    }
}

/// The seven natural pitches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pitch {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

/// Letter to pitch lookup, indexed by `letter - 'A'`.
pub const PITCH_TABLE: [Pitch; 7] = [
    Pitch::A,
    Pitch::B,
    Pitch::C,
    Pitch::D,
    Pitch::E,
    Pitch::F,
    Pitch::G,
];

impl Pitch {
    /// Look up a pitch letter, ignoring case.
    pub fn from_letter(letter: char) -> Option<Pitch> {
        let upper = letter.to_ascii_uppercase();
        if !('A'..='G').contains(&upper) {
            return None;
        }
        Some(PITCH_TABLE[(upper as u8 - b'A') as usize])
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Semitone modifier applied to a pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Halftone {
    #[default]
    Natural,
    Sharp,
    Flat,
}

/// A decoded note. Dots are only counted; lengthening is up to the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub pitch: Pitch,
    pub halftone: Halftone,
    pub length: u32,
    pub dots: usize,
}

/// A decoded silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rest {
    pub length: u32,
}

/// One envelope breakpoint: the level (`0.0..=1.0`) reached after `time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub time: Duration,
    pub value: f64,
}

impl TimePoint {
    pub fn from_millis(millis: u64, value: f64) -> Self {
        Self {
            time: Duration::from_millis(millis),
            value,
        }
    }
}

/// Attack, decay, sustain plateau and release-to-silence breakpoints.
pub type Adsr = [TimePoint; 4];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_from_letter_is_case_insensitive() {
        assert_eq!(Pitch::from_letter('c'), Some(Pitch::C));
        assert_eq!(Pitch::from_letter('C'), Some(Pitch::C));
        assert_eq!(Pitch::from_letter('g'), Some(Pitch::G));
        assert_eq!(Pitch::from_letter('A'), Some(Pitch::A));
    }

    #[test]
    fn test_pitch_from_letter_rejects_non_pitches() {
        assert_eq!(Pitch::from_letter('h'), None);
        assert_eq!(Pitch::from_letter('r'), None);
        assert_eq!(Pitch::from_letter('1'), None);
        assert_eq!(Pitch::from_letter('@'), None);
    }

    #[test]
    fn test_pitch_table_order() {
        let letters: String = PITCH_TABLE.iter().map(|p| p.to_string()).collect();
        assert_eq!(letters, "ABCDEFG");
    }

    #[test]
    fn test_default_lengths() {
        let lengths = NoteLengths::default();
        assert_eq!((lengths.default, lengths.min, lengths.max), (4, 1, 64));
        assert!(lengths.contains(lengths.default));
        assert!(lengths.contains(1));
        assert!(lengths.contains(64));
        assert!(!lengths.contains(0));
        assert!(!lengths.contains(65));
    }
}
