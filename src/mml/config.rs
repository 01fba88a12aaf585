//! Tokenizer configuration.
//!
//! `defaults/mml.default.toml` is embedded so the built-in values and the documented ones stay
//! in sync. Applications layer their own files or overrides on top of those defaults via
//! [`Loader`] before deserializing into [`MmlConfig`].

use crate::mml::music::NoteLengths;
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/mml.default.toml");

/// Top-level configuration consumed by the decoders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MmlConfig {
    pub note_length: NoteLengths,
}

impl MmlConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let lengths = &self.note_length;
        if lengths.min == 0 || lengths.min > lengths.max {
            return Err(ConfigError::Message(format!(
                "note_length: invalid range {} to {}",
                lengths.min, lengths.max
            )));
        }
        if !lengths.contains(lengths.default) {
            return Err(ConfigError::Message(format!(
                "note_length: default {} outside range {} to {}",
                lengths.default, lengths.min, lengths.max
            )));
        }
        Ok(())
    }
}

/// Builds an [MmlConfig] from the embedded note length bounds plus score-level files and
/// overrides, later layers winning.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Seeded with `defaults/mml.default.toml` (lengths 4, 1 to 64).
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a TOML file with `[note_length]` settings. `build` fails if it is missing.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), true)
    }

    /// Like [with_file](Loader::with_file), but a missing file is skipped.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), false)
    }

    /// Override one setting by dotted key, such as `note_length.max`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Override all three note length bounds at once.
    pub fn with_note_lengths(self, lengths: NoteLengths) -> Result<Self, ConfigError> {
        self.set_override("note_length.default", i64::from(lengths.default))?
            .set_override("note_length.min", i64::from(lengths.min))?
            .set_override("note_length.max", i64::from(lengths.max))
    }

    /// Merge the layers and check that the default length lies within the bounds.
    pub fn build(self) -> Result<MmlConfig, ConfigError> {
        let config: MmlConfig = self.builder.build()?.try_deserialize()?;
        config.validate()?;
        log::debug!("note lengths: {:?}", config.note_length);
        Ok(config)
    }

    fn layer_file(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in note length bounds, without any user layer.
pub fn load_defaults() -> Result<MmlConfig, ConfigError> {
    Loader::new().build()
}
