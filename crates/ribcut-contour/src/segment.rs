//! Curve-local segment operations: trim and line intersection

use crate::curve_math::CurveMath;
use crate::simplify::simple_interp;
use crate::EPSILON;
use ribcut_core::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which surface curve of the contour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}

/// Which part of a curve a trim throws away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discard {
    Front,
    Rear,
}

/// Cut `curve` at `cut_x`, keeping one side and closing it with the interpolated cut point
pub fn trim_curve<M: CurveMath + ?Sized>(
    math: &M,
    curve: &[Point],
    discard: Discard,
    cut_x: f64,
) -> Vec<Point> {
    let cut = Point::new(cut_x, simple_interp(math, curve, cut_x));
    match discard {
        Discard::Rear => {
            let keep = curve.partition_point(|p| p.x <= cut_x);
            let mut out = curve[..keep].to_vec();
            // a kept point already sitting on the cut closes the curve by itself
            if keep < curve.len() && out.last().map_or(true, |p| p.x < cut_x) {
                out.push(cut);
            }
            out
        }
        Discard::Front => {
            let skip = curve.partition_point(|p| p.x < cut_x);
            let mut out = Vec::with_capacity(curve.len() - skip + 1);
            if skip > 0 && curve.get(skip).map_or(true, |p| p.x > cut_x) {
                out.push(cut);
            }
            out.extend_from_slice(&curve[skip..]);
            out
        }
    }
}

/// Why a curve segment was passed over during an intersect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// Segment x-span below [`EPSILON`]
    Vertical,
    /// Segment slope equals the query slope within [`EPSILON`]
    Parallel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegenerateSegment {
    /// Index of the segment's first point
    pub index: usize,
    pub reason: Degeneracy,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    pub x: f64,
    /// Index of the segment's first point
    pub segment: usize,
}

/// Outcome of intersecting a line with a curve
///
/// Not finding a crossing is a normal outcome; segments skipped on the way
/// are listed so callers can tell "no crossing" from "degenerate input".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Intersection {
    pub hit: Option<SegmentHit>,
    pub degenerate: Vec<DegenerateSegment>,
}

impl Intersection {
    pub fn x(&self) -> Option<f64> {
        self.hit.map(|h| h.x)
    }

    pub fn is_found(&self) -> bool {
        self.hit.is_some()
    }
}

/// First crossing of the line through `point` with `slope` along `curve`
///
/// Segment x-ranges are inclusive at both ends. Vertical query lines are not
/// supported.
pub fn intersect_curve(curve: &[Point], point: Point, slope: f64) -> Intersection {
    let m1 = slope;
    let b1 = point.y - m1 * point.x;
    let mut result = Intersection::default();

    for (index, seg) in curve.windows(2).enumerate() {
        let (p1, p2) = (seg[0], seg[1]);
        let dx = p2.x - p1.x;
        if dx.abs() <= EPSILON {
            result.degenerate.push(DegenerateSegment {
                index,
                reason: Degeneracy::Vertical,
            });
            continue;
        }
        let m2 = (p2.y - p1.y) / dx;
        let b2 = p1.y - m2 * p1.x;
        if (m1 - m2).abs() <= EPSILON {
            result.degenerate.push(DegenerateSegment {
                index,
                reason: Degeneracy::Parallel,
            });
            continue;
        }
        let x = (b2 - b1) / (m1 - m2);
        if x >= p1.x && x <= p2.x {
            result.hit = Some(SegmentHit { x, segment: index });
            break;
        }
    }
    result
}
