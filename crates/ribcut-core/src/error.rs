//! Error handling for Ribcut
//!
//! Provides error types for the layers of the rib pipeline:
//! - Contour errors (curve shape, position descriptors, feature specs)
//! - Wing errors (station assembly)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Contour error type
///
/// Represents usage errors raised by the contour geometry engine. Geometric
/// "no answer" outcomes (for example an intersect that finds nothing) are not
/// errors and are reported through return values instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContourError {
    /// A curve has fewer points than the operation needs
    #[error("{curve} curve needs at least {required} points, found {found}")]
    TooFewPoints {
        /// Which curve ("top" or "bottom").
        curve: String,
        /// The minimum number of points required.
        required: usize,
        /// The number of points present.
        found: usize,
    },

    /// A curve is not strictly increasing in x
    #[error("{curve} curve is not x-monotone at index {index}")]
    NotMonotonic {
        /// Which curve ("top" or "bottom").
        curve: String,
        /// Index of the first point that does not increase in x.
        index: usize,
    },

    /// A position descriptor has no anchor set
    #[error("Cut position has no percent, front, rear, or xpos value")]
    NoPosition,

    /// A position descriptor has more than one anchor set
    #[error("Cut position sets more than one of percent, front, rear, xpos: {fields}")]
    AmbiguousPosition {
        /// The anchor fields that were set.
        fields: String,
    },

    /// Feature dimensions are unusable
    #[error("Invalid feature: {reason}")]
    InvalidFeature {
        /// Why the feature was rejected.
        reason: String,
    },

    /// The requested orientation is not supported by the operation
    #[error("Orientation {orientation} not supported for {operation}")]
    UnsupportedOrientation {
        /// The rejected orientation.
        orientation: String,
        /// The operation that rejected it.
        operation: String,
    },
}

/// Wing assembly error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WingError {
    /// NACA designation could not be parsed
    #[error("Invalid NACA 4-digit designation: {code}")]
    InvalidAirfoilCode {
        /// The rejected designation.
        code: String,
    },

    /// Wing geometry parameters are unusable
    #[error("Invalid wing geometry: {reason}")]
    InvalidGeometry {
        /// Why the geometry was rejected.
        reason: String,
    },
}

/// Main error type for Ribcut
///
/// Unifies the contour and wing layers for the pipeline API.
#[derive(Error, Debug)]
pub enum Error {
    /// Contour error
    #[error(transparent)]
    Contour(#[from] ContourError),

    /// Wing error
    #[error(transparent)]
    Wing(#[from] WingError),
}

impl Error {
    /// Check if this is a contour error
    pub fn is_contour_error(&self) -> bool {
        matches!(self, Error::Contour(_))
    }

    /// Check if this is a wing error
    pub fn is_wing_error(&self) -> bool {
        matches!(self, Error::Wing(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
