//! Rigid and similarity transforms

use crate::polygon::PolygonAlgebra;
use ribcut_core::{Label, Point};
use serde::{Deserialize, Serialize};

/// A transform applied to every geometric element of a contour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Transform {
    /// Rotate about the origin, degrees counter-clockwise
    Rotate { degrees: f64 },
    /// Independent x/y scale about the origin
    Scale { h: f64, v: f64 },
    Translate { dx: f64, dy: f64 },
}

impl Transform {
    pub fn apply_point(&self, p: Point) -> Point {
        match *self {
            Transform::Rotate { degrees } => p.rotated(degrees),
            Transform::Scale { h, v } => Point::new(p.x * h, p.y * v),
            Transform::Translate { dx, dy } => p.translated(dx, dy),
        }
    }

    pub fn apply_points(&self, points: &mut [Point]) {
        for p in points.iter_mut() {
            *p = self.apply_point(*p);
        }
    }

    /// Labels move with their anchor; only rotation changes their own rotation
    pub fn apply_label(&self, label: &mut Label) {
        label.position = self.apply_point(label.position);
        if let Transform::Rotate { degrees } = *self {
            label.rotation += degrees;
        }
    }

    pub fn apply_polygon<P: PolygonAlgebra>(&self, polygon: &mut P) {
        match *self {
            Transform::Rotate { degrees } => polygon.rotate(degrees.to_radians(), Point::default()),
            Transform::Scale { h, v } => polygon.scale(h, v),
            Transform::Translate { dx, dy } => polygon.translate(dx, dy),
        }
    }

    /// The transform that undoes this one
    ///
    /// Returns `None` for a scale with a zero factor.
    pub fn inverse(&self) -> Option<Transform> {
        match *self {
            Transform::Rotate { degrees } => Some(Transform::Rotate { degrees: -degrees }),
            Transform::Scale { h, v } if h != 0.0 && v != 0.0 => Some(Transform::Scale {
                h: 1.0 / h,
                v: 1.0 / v,
            }),
            Transform::Scale { .. } => None,
            Transform::Translate { dx, dy } => Some(Transform::Translate { dx: -dx, dy: -dy }),
        }
    }

    /// A negative scale factor flips the x order of a curve
    pub fn reverses_x(&self) -> bool {
        matches!(*self, Transform::Scale { h, .. } if h < 0.0)
    }
}
