//! Spanwise sweep offsets

use ribcut_contour::CurveMath;
use ribcut_core::Point;
use ribcut_settings::SweepSettings;

/// Chordwise offset of a rib station as a function of lateral distance
#[derive(Debug, Clone, PartialEq)]
pub enum Sweep {
    None,
    /// Straight sweep line at this many degrees
    Angle(f64),
    /// Natural cubic spline through (lateral, offset) knots
    Curve {
        points: Vec<Point>,
        coefficients: Vec<f64>,
    },
}

impl Sweep {
    pub fn from_settings<M: CurveMath + ?Sized>(math: &M, settings: &SweepSettings) -> Self {
        match settings {
            SweepSettings::None => Sweep::None,
            SweepSettings::Angle { degrees } => Sweep::Angle(*degrees),
            SweepSettings::Curve { points } => Sweep::Curve {
                coefficients: math.second_derivative(points),
                points: points.clone(),
            },
        }
    }

    /// Offset at `lateral` (distance from the root, always >= 0)
    pub fn offset<M: CurveMath + ?Sized>(&self, math: &M, lateral: f64) -> f64 {
        match self {
            Sweep::None => 0.0,
            Sweep::Angle(degrees) => lateral * degrees.to_radians().tan(),
            Sweep::Curve {
                points,
                coefficients,
            } => {
                if points.is_empty() {
                    return 0.0;
                }
                let index = math.locate(points, lateral);
                math.spline_evaluate(points, coefficients, index, lateral)
            }
        }
    }
}
