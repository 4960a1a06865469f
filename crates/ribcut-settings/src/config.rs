//! Configuration and settings management for Ribcut
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats; the default location is in the platform config
//! directory.
//!
//! Configuration is organized into logical sections:
//! - Contour settings (simplification, hole resolution)
//! - Wing settings (planform, sections, structure)

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use ribcut_core::units::LengthUnit;
use ribcut_contour::{CutPosition, FeatureSpec, Side};
use ribcut_core::Point;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Contour engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourSettings {
    /// Point budget per curve when simplifying
    pub max_points: usize,
    /// Allowed vertical deviation when simplifying
    pub max_error: f64,
    /// Segments used to approximate round holes
    pub hole_segments: usize,
}

impl Default for ContourSettings {
    fn default() -> Self {
        Self {
            max_points: 500,
            max_error: 0.002,
            hole_segments: 32,
        }
    }
}

/// Spanwise sweep of the rib stations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SweepSettings {
    #[default]
    None,
    /// Straight leading edge swept back by `degrees`
    Angle { degrees: f64 },
    /// Sweep offset as a function of lateral distance, (lateral, offset) pairs
    Curve { points: Vec<Point> },
}

/// A build tab that reaches `yextra` past the extreme edge of the rib
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildTabSettings {
    pub side: Side,
    pub position: CutPosition,
    pub xsize: f64,
    #[serde(default)]
    pub yextra: f64,
}

/// Wing planform and structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WingSettings {
    /// NACA 4-digit designation of the root section
    pub root_airfoil: String,
    /// Tip section, root section when absent
    pub tip_airfoil: Option<String>,
    /// Samples per surface when generating sections
    pub airfoil_samples: usize,
    pub root_chord: f64,
    /// Tip chord, below 0.01 means constant chord
    pub tip_chord: f64,
    pub root_yscale: f64,
    pub tip_yscale: f64,
    /// Length of one wing half
    pub span: f64,
    /// Tip twist in degrees
    pub twist: f64,
    pub sweep: SweepSettings,
    /// Number of bays per half; ribs = steps + 1
    pub steps: usize,
    /// Fraction of chord moved ahead of the origin
    pub chord_offset: f64,
    /// Leading edge stock size, 0 for none
    pub leading_edge_diamond: f64,
    pub trailing_edge_width: f64,
    pub trailing_edge_height: f64,
    /// Cut before twist
    pub stringers: Vec<FeatureSpec>,
    /// Cut after twist
    pub spars: Vec<FeatureSpec>,
    pub build_tabs: Vec<BuildTabSettings>,
    pub rib_thickness: f64,
    pub rib_material: String,
}

impl Default for WingSettings {
    fn default() -> Self {
        Self {
            root_airfoil: "2412".to_string(),
            tip_airfoil: None,
            airfoil_samples: 100,
            root_chord: 8.0,
            tip_chord: 0.0,
            root_yscale: 1.0,
            tip_yscale: 1.0,
            span: 24.0,
            twist: 0.0,
            sweep: SweepSettings::None,
            steps: 10,
            chord_offset: 0.30,
            leading_edge_diamond: 0.0,
            trailing_edge_width: 0.0,
            trailing_edge_height: 0.0,
            stringers: Vec::new(),
            spars: Vec::new(),
            build_tabs: Vec::new(),
            rib_thickness: 0.0625,
            rib_material: "balsa".to_string(),
        }
    }
}

/// Complete configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Units the dimensions are written in
    pub units: LengthUnit,
    pub contour: ContourSettings,
    pub wing: WingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Load `path` if given, else the default config file if it exists, else defaults
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match default_config_path() {
            Ok(path) if path.exists() => Self::load_from_file(&path),
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        // Validate contour settings
        if self.contour.max_points < 2 {
            return Err(ConfigError::out_of_range("contour.max_points", self.contour.max_points));
        }
        if !(self.contour.max_error > 0.0) {
            return Err(ConfigError::out_of_range("contour.max_error", self.contour.max_error));
        }
        if self.contour.hole_segments < 3 {
            return Err(ConfigError::out_of_range(
                "contour.hole_segments",
                self.contour.hole_segments,
            ));
        }

        self.validate_wing()
    }

    fn validate_wing(&self) -> ConfigResult<()> {
        let wing = &self.wing;

        if wing.steps == 0 {
            return Err(ConfigError::out_of_range("wing.steps", wing.steps));
        }
        if wing.airfoil_samples < 4 {
            return Err(ConfigError::out_of_range("wing.airfoil_samples", wing.airfoil_samples));
        }

        let positive = [
            ("wing.root_chord", wing.root_chord),
            ("wing.span", wing.span),
            ("wing.root_yscale", wing.root_yscale),
            ("wing.tip_yscale", wing.tip_yscale),
            ("wing.rib_thickness", wing.rib_thickness),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }

        let non_negative = [
            ("wing.tip_chord", wing.tip_chord),
            ("wing.leading_edge_diamond", wing.leading_edge_diamond),
            ("wing.trailing_edge_width", wing.trailing_edge_width),
            ("wing.trailing_edge_height", wing.trailing_edge_height),
        ];
        for (key, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }

        if !wing.chord_offset.is_finite() {
            return Err(ConfigError::out_of_range("wing.chord_offset", wing.chord_offset));
        }

        for (group, specs) in [("wing.stringers", &wing.stringers), ("wing.spars", &wing.spars)] {
            for (i, spec) in specs.iter().enumerate() {
                spec.validate().map_err(|e| ConfigError::InvalidFeature {
                    key: format!("{group}[{i}]"),
                    reason: e.to_string(),
                })?;
            }
        }

        for (i, tab) in wing.build_tabs.iter().enumerate() {
            if !(tab.xsize > 0.0) || !(tab.yextra >= 0.0) {
                return Err(ConfigError::InvalidFeature {
                    key: format!("wing.build_tabs[{i}]"),
                    reason: "xsize must be > 0 and yextra >= 0".to_string(),
                });
            }
        }

        if let SweepSettings::Curve { points } = &wing.sweep {
            if points.len() < 2 || points.windows(2).any(|w| w[1].x <= w[0].x) {
                return Err(ConfigError::InvalidFeature {
                    key: "wing.sweep".to_string(),
                    reason: "sweep curve needs two or more points with increasing lateral distance"
                        .to_string(),
                });
            }
        }

        Ok(())
    }
}

/// File formats understood by [`Config`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Platform config file location, `<config dir>/ribcut/config.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    let mut path = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| SettingsError::ConfigDirectory("no config or home directory".to_string()))?;
    path.push("ribcut");
    path.push("config.toml");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ribcut_contour::Orientation;

    #[test]
    fn test_defaults_validate() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.contour.max_points, 500);
        assert_eq!(config.contour.max_error, 0.002);
        assert_eq!(config.contour.hole_segments, 32);
        assert_eq!(config.wing.chord_offset, 0.30);
    }

    #[test]
    fn test_validate_rejects_zero_steps() {
        let mut config = Config::new();
        config.wing.steps = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange {
                key: "wing.steps".to_string(),
                value: "0".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rejects_bad_stringer() {
        let mut config = Config::new();
        config.wing.stringers.push(FeatureSpec::new(
            Side::Top,
            Orientation::Tangent,
            CutPosition::percent(0.25),
            -0.1,
            0.1,
        ));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFeature { key, .. }) if key == "wing.stringers[0]"
        ));
    }

    #[test]
    fn test_validate_rejects_unsorted_sweep_curve() {
        let mut config = Config::new();
        config.wing.sweep = SweepSettings::Curve {
            points: vec![Point::new(5.0, 1.0), Point::new(1.0, 0.0)],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")), Ok(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), Ok(ConfigFormat::Toml));
        assert_eq!(
            ConfigFormat::from_path(Path::new("a.yaml")),
            Err(ConfigError::UnsupportedFormat("yaml".to_string()))
        );
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            units = "mm"

            [wing]
            root_chord = 200.0
            span = 600.0

            [wing.sweep]
            kind = "angle"
            degrees = 5.0
            "#,
        )
        .unwrap();
        assert_eq!(config.units, LengthUnit::Mm);
        assert_eq!(config.wing.root_chord, 200.0);
        assert_eq!(config.wing.steps, 10);
        assert_eq!(config.wing.sweep, SweepSettings::Angle { degrees: 5.0 });
        assert_eq!(config.contour, ContourSettings::default());
    }

    #[test]
    fn test_stringer_without_position_fails_to_parse() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [[wing.stringers]]
            side = "top"
            orientation = "tangent"
            position = { slope = 0.1 }
            xsize = 0.25
            ysize = 0.25
            "#,
        );
        assert!(result.is_err());
    }
}
