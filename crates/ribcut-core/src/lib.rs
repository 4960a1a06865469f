//! # Ribcut Core
//!
//! Core types and utilities for Ribcut.
//! Provides the shared geometry value types, the error hierarchy, the
//! structured diagnostics channel, and length units.

pub mod diagnostics;
pub mod error;
pub mod types;
pub mod units;

pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticLevel, Diagnostics};
pub use error::{ContourError, Error, Result, WingError};
pub use types::{Bounds, Label, Point};
pub use units::{format_length, LengthUnit};
