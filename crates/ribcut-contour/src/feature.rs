//! Feature specifications and their outline geometry
//!
//! Cutouts (spar and stringer slots) and build tabs are described by a
//! [`FeatureSpec`]. The functions here only build the feature polygon loops;
//! composing them into the part outline happens in [`crate::Contour`].

use crate::position::CutPosition;
use crate::segment::Side;
use ribcut_core::{ContourError, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a feature is aligned to the surface it sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Follows the local surface slope
    Tangent,
    /// Aligned with the y axis regardless of surface slope
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tangent => write!(f, "tangent"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// A cutout or build tab attached to one surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureSpec {
    pub side: Side,
    pub orientation: Orientation,
    pub position: CutPosition,
    /// Size along the surface
    pub xsize: f64,
    /// Depth for cutouts, height for tabs
    pub ysize: f64,
}

impl FeatureSpec {
    pub fn new(
        side: Side,
        orientation: Orientation,
        position: CutPosition,
        xsize: f64,
        ysize: f64,
    ) -> Self {
        Self {
            side,
            orientation,
            position,
            xsize,
            ysize,
        }
    }

    /// Reject non-finite or non-positive sizes
    pub fn validate(&self) -> Result<(), ContourError> {
        if !(self.xsize.is_finite() && self.xsize > 0.0) {
            return Err(ContourError::InvalidFeature {
                reason: format!("xsize must be > 0, got {}", self.xsize),
            });
        }
        if !(self.ysize.is_finite() && self.ysize > 0.0) {
            return Err(ContourError::InvalidFeature {
                reason: format!("ysize must be > 0, got {}", self.ysize),
            });
        }
        Ok(())
    }
}

/// Orientation angle in degrees, normalised to [0, 360)
///
/// `slope` is the local surface slope and is ignored for vertical features.
/// Bottom-side features are mirrored by a half turn so their depth points up
/// into the part.
pub fn feature_angle(side: Side, orientation: Orientation, slope: f64) -> f64 {
    let mut angle = match orientation {
        Orientation::Tangent => slope.atan2(1.0).to_degrees(),
        Orientation::Vertical => 0.0,
    };
    if side == Side::Bottom {
        angle += 180.0;
    }
    angle.rem_euclid(360.0)
}

/// Slot rectangle centred on `anchor`, `ysize` deep and reaching `ysize / 2` past the surface
///
/// The outward overhang keeps the boolean difference from leaving a sliver on
/// the surface edge.
pub fn cutout_loop(anchor: Point, angle: f64, xsize: f64, ysize: f64) -> [Point; 4] {
    let xhalf = xsize * 0.5;
    let yhalf = ysize * 0.5;
    [
        Point::new(-xhalf, yhalf),
        Point::new(-xhalf, -ysize),
        Point::new(xhalf, -ysize),
        Point::new(xhalf, yhalf),
    ]
    .map(|p| {
        let r = p.rotated(angle);
        r.translated(anchor.x, anchor.y)
    })
}

/// Build tab quadrilateral
///
/// `base` is the attachment level (already the lower sample for top tabs, the
/// higher for bottom tabs) and `reach` the y of the tab's far edge.
pub fn tab_loop(x1: f64, x2: f64, base: f64, reach: f64) -> [Point; 4] {
    [
        Point::new(x1, base),
        Point::new(x1, reach),
        Point::new(x2, reach),
        Point::new(x2, base),
    ]
}

/// Square stock notch with its diagonal along the chord, centred on `nose`
pub fn diamond_loop(nose: Point, size: f64) -> [Point; 4] {
    let half = size * std::f64::consts::SQRT_2 * 0.5;
    [
        Point::new(nose.x - half, nose.y),
        Point::new(nose.x, nose.y - half),
        Point::new(nose.x + half, nose.y),
        Point::new(nose.x, nose.y + half),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn test_feature_angle_normalised() {
        assert_eq!(feature_angle(Side::Top, Orientation::Vertical, 3.0), 0.0);
        assert_eq!(feature_angle(Side::Bottom, Orientation::Vertical, 3.0), 180.0);
        assert!((feature_angle(Side::Top, Orientation::Tangent, 1.0) - 45.0).abs() < 1e-12);
        // -45 deg on the bottom becomes 135, never negative or >= 360
        assert!((feature_angle(Side::Bottom, Orientation::Tangent, -1.0) - 135.0).abs() < 1e-12);
        assert!((feature_angle(Side::Top, Orientation::Tangent, -1.0) - 315.0).abs() < 1e-12);
        assert!((feature_angle(Side::Bottom, Orientation::Tangent, 1.0) - 225.0).abs() < 1e-12);
    }

    #[test]
    fn test_cutout_loop_top_vertical() {
        let pts = cutout_loop(Point::new(2.0, 1.0), 0.0, 0.5, 0.2);
        assert!(close(pts[0], Point::new(1.75, 1.1)));
        assert!(close(pts[1], Point::new(1.75, 0.8)));
        assert!(close(pts[2], Point::new(2.25, 0.8)));
        assert!(close(pts[3], Point::new(2.25, 1.1)));
    }

    #[test]
    fn test_cutout_loop_bottom_points_up() {
        let pts = cutout_loop(Point::new(0.0, -1.0), 180.0, 0.5, 0.2);
        // depth goes up into the part, overhang goes down below the surface
        let max_y = pts.iter().map(|p| p.y).fold(f64::MIN, f64::max);
        let min_y = pts.iter().map(|p| p.y).fold(f64::MAX, f64::min);
        assert!((max_y - -0.8).abs() < 1e-9);
        assert!((min_y - -1.1).abs() < 1e-9);
    }

    #[test]
    fn test_validate_rejects_zero_size() {
        let spec = FeatureSpec::new(
            Side::Top,
            Orientation::Vertical,
            CutPosition::percent(0.3),
            0.0,
            0.1,
        );
        assert!(matches!(
            spec.validate(),
            Err(ContourError::InvalidFeature { .. })
        ));
    }

    #[test]
    fn test_diamond_loop_extent() {
        let pts = diamond_loop(Point::new(0.0, 0.0), 1.0);
        let width = pts[2].x - pts[0].x;
        assert!((width - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_feature_spec_json_shape() {
        let json = r#"{
            "side": "bottom",
            "orientation": "tangent",
            "position": { "percent": 0.25 },
            "xsize": 0.125,
            "ysize": 0.0625
        }"#;
        let spec: FeatureSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.side, Side::Bottom);
        assert_eq!(spec.orientation, Orientation::Tangent);
        assert_eq!(spec.position, CutPosition::percent(0.25));
    }
}
