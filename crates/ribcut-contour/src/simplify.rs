//! Curve simplification
//!
//! Greedy error-bounded reduction of an x-monotone polyline. Starting from
//! the two endpoints, the original interior point with the largest *vertical*
//! deviation from the working polyline is inserted until every omitted point
//! is within `max_error` or the point budget is used up. Deviation is
//! measured vertically, not perpendicular to the polyline.

use crate::curve_math::CurveMath;
use crate::EPSILON;
use ribcut_core::Point;

/// Linear interpolation of `points` at `x`
///
/// Segments narrower than [`EPSILON`] return the lower point's y. At or past
/// the last point the last y is returned; before the first point the first
/// segment is extrapolated.
pub fn simple_interp<M: CurveMath + ?Sized>(math: &M, points: &[Point], x: f64) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let index = math.locate(points, x);
    if index + 1 < points.len() {
        let lo = points[index];
        let hi = points[index + 1];
        let xrange = hi.x - lo.x;
        if xrange > EPSILON {
            let fraction = (x - lo.x) / xrange;
            return lo.y + fraction * (hi.y - lo.y);
        }
    }
    points[index].y
}

/// Result of [`curve_fit`]
#[derive(Debug, Clone, PartialEq)]
pub struct Simplified {
    pub points: Vec<Point>,
    /// The point budget stopped the fit while some omitted point still exceeded the error bound
    pub budget_exhausted: bool,
}

/// Reduce `curve` to at most `max_points` points within `max_error` vertical deviation
///
/// The first and last points are always kept, so a budget below 2 is treated as 2.
pub fn curve_fit<M: CurveMath + ?Sized>(
    math: &M,
    curve: &[Point],
    max_points: usize,
    max_error: f64,
) -> Simplified {
    if curve.len() <= 2 {
        return Simplified {
            points: curve.to_vec(),
            budget_exhausted: false,
        };
    }
    let max_points = max_points.max(2);
    let interior = &curve[1..curve.len() - 1];

    let mut wip = vec![curve[0], curve[curve.len() - 1]];
    loop {
        let worst = worst_point(math, &wip, interior, max_error);
        let Some(pt) = worst else {
            return Simplified {
                points: wip,
                budget_exhausted: false,
            };
        };
        if wip.len() >= max_points {
            tracing::debug!(max_points, max_error, "curve fit stopped on point budget");
            return Simplified {
                points: wip,
                budget_exhausted: true,
            };
        }
        let pos = wip.partition_point(|p| p.x < pt.x);
        wip.insert(pos, pt);
    }
}

/// Largest vertical deviation from `wip` among `candidates`, if it exceeds `max_error`
fn worst_point<M: CurveMath + ?Sized>(
    math: &M,
    wip: &[Point],
    candidates: &[Point],
    max_error: f64,
) -> Option<Point> {
    let mut worst = None;
    let mut max_diff = 0.0;
    for pt in candidates {
        let diff = (pt.y - simple_interp(math, wip, pt.x)).abs();
        if diff > max_diff && diff > max_error {
            max_diff = diff;
            worst = Some(*pt);
        }
    }
    worst
}

/// Largest vertical deviation of `original` from the polyline `fitted`
pub fn max_vertical_error<M: CurveMath + ?Sized>(
    math: &M,
    original: &[Point],
    fitted: &[Point],
) -> f64 {
    original
        .iter()
        .map(|p| (p.y - simple_interp(math, fitted, p.x)).abs())
        .fold(0.0, f64::max)
}
