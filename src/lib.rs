//! # Ribcut
//!
//! Airfoil rib contour engine for laser and CNC cut wing parts:
//! - Simplify densely sampled airfoil sections to a point budget
//! - Resolve cut positions against a part's original (pre-cut) envelope
//! - Compose spar/stringer slots, build tabs and holes into the rib outline
//! - Sweep, twist and taper ribs along a wing half
//!
//! ## Architecture
//!
//! Ribcut is organized as a workspace with multiple crates:
//!
//! 1. **ribcut-core** - Shared geometry types, errors, diagnostics, units
//! 2. **ribcut-contour** - Contour geometry engine and its math/polygon providers
//! 3. **ribcut-wing** - Airfoil sections and the per-rib wing pipeline
//! 4. **ribcut-settings** - JSON/TOML configuration and validation
//! 5. **ribcut** - Library re-exports and the batch binary

pub use ribcut_contour::{
    Contour, CsgPolygon, CurveMath, CutPosition, Discard, FeatureSpec, Intersection,
    NaturalSpline, Orientation, Outline, PolygonAlgebra, Side, Transform,
};
pub use ribcut_core::{
    format_length, Bounds, ContourError, Diagnostic, DiagnosticKind, Diagnostics, Error, Label,
    LengthUnit, Point, Result, WingError,
};
pub use ribcut_settings::{Config, ContourSettings, SettingsError, SweepSettings, WingSettings};
pub use ribcut_wing::{Airfoil, Rib, RibSet, Wing};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Cargo profile the binary was built with
pub const BUILD_PROFILE: &str = env!("BUILD_PROFILE");

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable multi-line output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr
/// - RUST_LOG environment variable support (defaults to `info`)
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::Pretty)
}

/// Initialize logging with an explicit output format
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .pretty();
            registry.with(fmt_layer).try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .json();
            registry.with(fmt_layer).try_init()?;
        }
    }

    Ok(())
}
