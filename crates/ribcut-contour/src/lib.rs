//! # Ribcut Contour
//!
//! Contour geometry engine for cuttable rib outlines.
//!
//! ## Operations
//!
//! - **Simplify**: greedy vertical-error reduction of x-monotone curves
//! - **Reference bounds**: saved pre-cut envelope used to resolve every position
//! - **Segment ops**: interpolate, trim and line intersection on one curve
//! - **Feature placement**: slot cutouts, build tabs and round holes composed
//!   into a polygon representation
//! - **Sweep cutouts**: inward projection of a stretch of surface
//! - **Transforms**: rotate, scale and move applied to curves, labels and polygon together
//!
//! ## Providers
//!
//! - [`CurveMath`]: locate, derivatives and natural spline ([`NaturalSpline`])
//! - [`PolygonAlgebra`]: boolean set operations ([`CsgPolygon`], backed by `csgrs`)

pub mod contour;
pub mod curve_math;
pub mod feature;
pub mod polygon;
pub mod position;
pub mod segment;
pub mod simplify;
pub mod sweep;
pub mod transform;

/// Tolerance for near-vertical and parallel segment tests
pub const EPSILON: f64 = 1e-4;

pub use contour::{Contour, DEFAULT_HOLE_SEGMENTS};
pub use curve_math::{CurveMath, NaturalSpline};
pub use feature::{FeatureSpec, Orientation};
pub use polygon::{CsgPolygon, Outline, PolygonAlgebra};
pub use position::{Anchor, CutPosition, RawCutPosition, StationSlope};
pub use segment::{Degeneracy, DegenerateSegment, Discard, Intersection, SegmentHit, Side};
pub use simplify::{curve_fit, max_vertical_error, simple_interp, Simplified};
pub use sweep::{cutout_sweep, project_point, Swept};
pub use transform::Transform;
