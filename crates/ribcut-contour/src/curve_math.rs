//! Curve math provider
//!
//! The contour engine only needs four operations over an x-monotone point
//! sequence: locate a bracketing index, sample first derivatives, build
//! natural cubic spline coefficients, and evaluate that spline. They are
//! behind the [`CurveMath`] trait so callers can swap in their own numerics.

use ribcut_core::Point;

/// Operations over x-monotone point sequences used by the contour engine
pub trait CurveMath {
    /// Largest index `i` with `points[i].x <= x`, clamped to 0 when `x` lies
    /// before the first point. `points` must be non-empty.
    fn locate(&self, points: &[Point], x: f64) -> usize;

    /// One slope per input point, aligned by index
    fn first_derivative(&self, points: &[Point]) -> Vec<f64>;

    /// Per-point second-derivative coefficients for [`CurveMath::spline_evaluate`]
    fn second_derivative(&self, points: &[Point]) -> Vec<f64>;

    /// Evaluate the cubic spline on the segment starting at `index`
    fn spline_evaluate(&self, points: &[Point], coefficients: &[f64], index: usize, x: f64)
        -> f64;
}

/// Finite-difference slopes and a natural cubic spline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalSpline;

impl CurveMath for NaturalSpline {
    fn locate(&self, points: &[Point], x: f64) -> usize {
        points.partition_point(|p| p.x <= x).saturating_sub(1)
    }

    fn first_derivative(&self, points: &[Point]) -> Vec<f64> {
        let n = points.len();
        if n < 2 {
            return vec![0.0; n];
        }
        (0..n)
            .map(|i| {
                let (a, b) = match i {
                    0 => (points[0], points[1]),
                    i if i == n - 1 => (points[n - 2], points[n - 1]),
                    i => (points[i - 1], points[i + 1]),
                };
                slope(a, b)
            })
            .collect()
    }

    fn second_derivative(&self, points: &[Point]) -> Vec<f64> {
        let n = points.len();
        let mut y2 = vec![0.0; n];
        if n < 3 {
            return y2;
        }

        // Tridiagonal decomposition with natural end conditions (y2 = 0 at both ends)
        let mut u = vec![0.0; n];
        for i in 1..n - 1 {
            let span = points[i + 1].x - points[i - 1].x;
            let h_lo = points[i].x - points[i - 1].x;
            let h_hi = points[i + 1].x - points[i].x;
            if [span, h_lo, h_hi].iter().any(|h| h.abs() <= f64::EPSILON) {
                y2[i] = 0.0;
                u[i] = 0.0;
                continue;
            }
            let sig = h_lo / span;
            let p = sig * y2[i - 1] + 2.0;
            y2[i] = (sig - 1.0) / p;
            let d = (points[i + 1].y - points[i].y) / h_hi - (points[i].y - points[i - 1].y) / h_lo;
            u[i] = (6.0 * d / span - sig * u[i - 1]) / p;
        }

        y2[n - 1] = 0.0;
        for k in (0..n - 1).rev() {
            y2[k] = y2[k] * y2[k + 1] + u[k];
        }
        y2
    }

    fn spline_evaluate(
        &self,
        points: &[Point],
        coefficients: &[f64],
        index: usize,
        x: f64,
    ) -> f64 {
        match points.len() {
            0 => return 0.0,
            1 => return points[0].y,
            _ => {}
        }
        let lo = index.min(points.len() - 2);
        let hi = lo + 1;
        let h = points[hi].x - points[lo].x;
        if h.abs() < crate::EPSILON {
            return points[lo].y;
        }
        let a = (points[hi].x - x) / h;
        let b = (x - points[lo].x) / h;
        let y2_lo = coefficients.get(lo).copied().unwrap_or(0.0);
        let y2_hi = coefficients.get(hi).copied().unwrap_or(0.0);
        a * points[lo].y
            + b * points[hi].y
            + ((a * a * a - a) * y2_lo + (b * b * b - b) * y2_hi) * (h * h) / 6.0
    }
}

fn slope(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    if dx.abs() <= f64::EPSILON {
        0.0
    } else {
        (b.y - a.y) / dx
    }
}
