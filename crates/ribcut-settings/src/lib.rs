//! Ribcut Settings Crate
//!
//! Handles configuration files, defaults, and validation.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, BuildTabSettings, Config, ConfigFormat, ContourSettings, LengthUnit,
    SweepSettings, WingSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
