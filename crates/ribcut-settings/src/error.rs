//! Settings errors
//!
//! [`SettingsError`] covers reading and writing configuration files,
//! [`ConfigError`] covers values that parse but cannot be used.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    /// No platform config or home directory
    #[error("Cannot locate config directory: {0}")]
    ConfigDirectory(String),

    #[error("Config file I/O failed: {0}")]
    IoError(#[from] io::Error),

    #[error("Invalid JSON config: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid TOML config: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Cannot write TOML config: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A configuration that loaded but is unusable
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// File extension other than `.json` or `.toml`
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange { key: String, value: String },

    /// A stringer, spar or build tab entry with unusable sizes
    #[error("Invalid feature '{key}': {reason}")]
    InvalidFeature { key: String, reason: String },
}

impl ConfigError {
    pub(crate) fn out_of_range(key: impl Into<String>, value: impl ToString) -> Self {
        ConfigError::ValueOutOfRange {
            key: key.into(),
            value: value.to_string(),
        }
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;

pub type ConfigResult<T> = Result<T, ConfigError>;
