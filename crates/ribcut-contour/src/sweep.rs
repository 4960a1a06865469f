//! Sweep cutout projection
//!
//! A sweep cut replaces a stretch of surface with a copy pushed inward by a
//! fixed depth along the local normal. It is used for bevel relief where a
//! leading or trailing edge strip sits at an angle to the rib.

use crate::curve_math::CurveMath;
use crate::segment::Side;
use crate::simplify::simple_interp;
use ribcut_core::Point;

/// Push `origin` inward by `depth` along the normal of a surface with `slope`
///
/// A top-side projection is clamped so it never drops below y = 0, a bottom
/// side projection so it never rises above it.
pub fn project_point(side: Side, slope: f64, origin: Point, depth: f64) -> Point {
    let mut angle = slope.atan2(1.0).to_degrees();
    if side == Side::Bottom {
        angle = (angle + 180.0).rem_euclid(360.0);
    }
    let offset = Point::new(0.0, -depth).rotated(angle);
    let mut pt = origin.translated(offset.x, offset.y);
    match side {
        Side::Top if pt.y < 0.0 => pt.y = 0.0,
        Side::Bottom if pt.y > 0.0 => pt.y = 0.0,
        _ => {}
    }
    pt
}

/// Result of [`cutout_sweep`]
#[derive(Debug, Clone, PartialEq)]
pub struct Swept {
    pub points: Vec<Point>,
    /// The walk ran out of curve before covering the requested length
    pub reached_end: bool,
}

/// Replace `curve` from `xstart` for a walked length of `length` with a copy sunk `depth` inward
pub fn cutout_sweep<M: CurveMath + ?Sized>(
    math: &M,
    curve: &[Point],
    side: Side,
    xstart: f64,
    length: f64,
    depth: f64,
) -> Swept {
    let n = curve.len();
    if n == 0 {
        return Swept {
            points: Vec::new(),
            reached_end: true,
        };
    }

    let nose = curve.partition_point(|p| p.x < xstart);
    let mut out: Vec<Point> = curve[..nose].to_vec();
    out.push(Point::new(xstart, simple_interp(math, curve, xstart)));

    let slopes = math.first_derivative(curve);
    let mut dist = 0.0;
    let mut next_dist = 0.0;
    let mut xpos = xstart;
    let mut index = math.locate(curve, xpos);
    // last visited (x, sample index)
    let mut last = (xpos, index);

    while index < n && dist + next_dist <= length {
        dist += next_dist;
        let here = Point::new(xpos, simple_interp(math, curve, xpos));
        out.push(project_point(side, slopes[index], here, depth));
        last = (xpos, index);
        if index + 1 < n {
            let next = curve[index + 1];
            next_dist = here.distance_to(&next);
            xpos = next.x;
        }
        index += 1;
    }

    let reached_end = index >= n;
    if !reached_end {
        // the loop only stops short when the next step overshoots, so next_dist > 0
        let fraction = (length - dist) / next_dist;
        let (last_x, last_index) = last;
        let x = last_x + (curve[index].x - last_x) * fraction;
        let surface = Point::new(x, simple_interp(math, curve, x));
        out.push(project_point(side, slopes[last_index], surface, depth));
        out.push(surface);
        out.extend_from_slice(&curve[index..]);
    } else {
        tracing::debug!(%side, xstart, length, "sweep reached end of curve");
    }

    Swept {
        points: out,
        reached_end,
    }
}
