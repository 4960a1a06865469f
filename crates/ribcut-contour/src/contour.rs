//! The contour of one part
//!
//! A [`Contour`] owns a top and bottom surface curve (both x-monotone, front
//! to rear), an optional polygon representation that cutouts and tabs are
//! composed into, the part's labels, its saved reference bounds and the
//! diagnostics recorded while it was built.
//!
//! Positions are always resolved against the saved bounds, never the live
//! curves, so a slot placed at 25% chord lands in the same place whether it
//! is cut first or after the leading edge has been trimmed away.

use crate::curve_math::{CurveMath, NaturalSpline};
use crate::feature::{
    cutout_loop, diamond_loop, feature_angle, tab_loop, FeatureSpec, Orientation,
};
use crate::polygon::{CsgPolygon, Outline, PolygonAlgebra};
use crate::position::CutPosition;
use crate::segment::{intersect_curve, trim_curve, Degeneracy, Discard, Intersection, Side};
use crate::simplify::{curve_fit, simple_interp};
use crate::sweep::cutout_sweep;
use crate::transform::Transform;
use crate::EPSILON;
use ribcut_core::{Bounds, ContourError, DiagnosticKind, Diagnostics, Label, Point};

/// Default segment count for round holes
pub const DEFAULT_HOLE_SEGMENTS: usize = 32;

/// Top/bottom curve pair of one part plus its derived geometry
#[derive(Debug, Clone)]
pub struct Contour<P: PolygonAlgebra = CsgPolygon, M: CurveMath = NaturalSpline> {
    top: Vec<Point>,
    bottom: Vec<Point>,
    polygon: Option<P>,
    labels: Vec<Label>,
    saved_bounds: Option<Bounds>,
    diagnostics: Diagnostics,
    hole_segments: usize,
    math: M,
}

impl Contour<CsgPolygon, NaturalSpline> {
    /// Create a contour with the default providers
    pub fn new(top: Vec<Point>, bottom: Vec<Point>) -> Result<Self, ContourError> {
        Self::with_math(top, bottom, NaturalSpline)
    }
}

impl<P: PolygonAlgebra, M: CurveMath> Contour<P, M> {
    /// Create a contour with an explicit curve-math provider
    ///
    /// Both curves need at least two points with strictly increasing x.
    pub fn with_math(top: Vec<Point>, bottom: Vec<Point>, math: M) -> Result<Self, ContourError> {
        check_curve(Side::Top, &top)?;
        check_curve(Side::Bottom, &bottom)?;
        Ok(Self {
            top,
            bottom,
            polygon: None,
            labels: Vec::new(),
            saved_bounds: None,
            diagnostics: Diagnostics::new(),
            hole_segments: DEFAULT_HOLE_SEGMENTS,
            math,
        })
    }

    /// Segment count used by [`Contour::cut_hole`]
    pub fn with_hole_segments(mut self, segments: usize) -> Self {
        self.hole_segments = segments.max(3);
        self
    }

    pub fn top(&self) -> &[Point] {
        &self.top
    }

    pub fn bottom(&self) -> &[Point] {
        &self.bottom
    }

    pub fn curve(&self, side: Side) -> &[Point] {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
        }
    }

    fn curve_mut(&mut self, side: Side) -> &mut Vec<Point> {
        match side {
            Side::Top => &mut self.top,
            Side::Bottom => &mut self.bottom,
        }
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn polygon(&self) -> Option<&P> {
        self.polygon.as_ref()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Diagnostics {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn math(&self) -> &M {
        &self.math
    }

    /// Simplify both curves to at most `max_points` within `max_error` vertical deviation
    ///
    /// Meant to run right after creation; an existing polygon representation
    /// is not rebuilt.
    pub fn simplify(&mut self, max_points: usize, max_error: f64) {
        for side in [Side::Top, Side::Bottom] {
            let fit = curve_fit(&self.math, self.curve(side), max_points, max_error);
            tracing::debug!(
                %side,
                before = self.curve(side).len(),
                after = fit.points.len(),
                "simplified curve"
            );
            if fit.budget_exhausted {
                self.diagnostics.note(
                    DiagnosticKind::PointBudgetExhausted,
                    format!(
                        "{side} curve kept {} points with error above {max_error}",
                        fit.points.len()
                    ),
                );
            }
            *self.curve_mut(side) = fit.points;
        }
    }

    /// Envelope of the curves as they are now
    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(self.top.iter().chain(self.bottom.iter())).unwrap_or_default()
    }

    /// Freeze the current envelope as the reference for position resolution
    pub fn save_bounds(&mut self) -> Bounds {
        let bounds = self.bounds();
        tracing::debug!(%bounds, "saved bounds");
        self.saved_bounds = Some(bounds);
        bounds
    }

    pub fn saved_bounds(&self) -> Option<Bounds> {
        self.saved_bounds
    }

    /// Saved bounds, saving them now (with a warning) if that never happened
    pub fn reference_bounds(&mut self) -> Bounds {
        if let Some(bounds) = self.saved_bounds {
            return bounds;
        }
        self.diagnostics.warn(
            DiagnosticKind::BoundsAutoSaved,
            "bounds resolved before save_bounds(); saving current bounds",
        );
        self.save_bounds()
    }

    /// Absolute x of `position` against the saved bounds
    pub fn resolve(&mut self, position: &CutPosition, lateral: Option<f64>) -> f64 {
        let bounds = self.reference_bounds();
        position.resolve(&bounds, lateral)
    }

    /// Linear interpolation of one curve at `x`
    pub fn interpolate(&self, side: Side, x: f64) -> f64 {
        simple_interp(&self.math, self.curve(side), x)
    }

    /// Cut one curve at a resolved position, discarding the front or rear part
    ///
    /// The curve is left untouched if fewer than two points would remain.
    pub fn trim(
        &mut self,
        side: Side,
        discard: Discard,
        position: &CutPosition,
        lateral: Option<f64>,
    ) -> Result<(), ContourError> {
        let cut_x = self.resolve(position, lateral);
        let trimmed = trim_curve(&self.math, self.curve(side), discard, cut_x);
        if trimmed.len() < 2 {
            return Err(ContourError::TooFewPoints {
                curve: side.to_string(),
                required: 2,
                found: trimmed.len(),
            });
        }
        tracing::debug!(%side, ?discard, cut_x, points = trimmed.len(), "trimmed curve");
        *self.curve_mut(side) = trimmed;
        Ok(())
    }

    /// First crossing of a line with one curve
    ///
    /// Skipped degenerate segments are recorded in the diagnostics as well as
    /// returned.
    pub fn intersect(&mut self, side: Side, point: Point, slope: f64) -> Intersection {
        let result = intersect_curve(self.curve(side), point, slope);
        for seg in &result.degenerate {
            let kind = match seg.reason {
                Degeneracy::Vertical => DiagnosticKind::VerticalSegment,
                Degeneracy::Parallel => DiagnosticKind::ParallelSegment,
            };
            self.diagnostics.note(
                kind,
                format!("{side} segment {} skipped during intersect", seg.index),
            );
        }
        result
    }

    /// Build the polygon representation from the curves if it does not exist yet
    pub fn make_polygon(&mut self) -> &P {
        let (top, bottom) = (&self.top, &self.bottom);
        self.polygon.get_or_insert_with(|| {
            let ring = curve_loop(top, bottom);
            tracing::debug!(points = ring.len(), "built polygon representation");
            P::from_loop(&ring)
        })
    }

    fn compose(&mut self, feature: &P, subtract: bool) {
        self.make_polygon();
        if let Some(poly) = self.polygon.as_mut() {
            *poly = if subtract {
                poly.difference(feature)
            } else {
                poly.union(feature)
            };
        }
    }

    /// Cut a slot into the polygon representation
    ///
    /// The surface curves are not modified.
    pub fn cutout(&mut self, spec: &FeatureSpec, lateral: Option<f64>) -> Result<(), ContourError> {
        spec.validate()?;
        let x = self.resolve(&spec.position, lateral);
        let curve = self.curve(spec.side);
        let y = simple_interp(&self.math, curve, x);
        let slope = match spec.orientation {
            Orientation::Tangent => {
                let index = self.math.locate(curve, x);
                self.math
                    .first_derivative(curve)
                    .get(index)
                    .copied()
                    .unwrap_or(0.0)
            }
            Orientation::Vertical => 0.0,
        };
        let angle = feature_angle(spec.side, spec.orientation, slope);
        let ring = cutout_loop(Point::new(x, y), angle, spec.xsize, spec.ysize);
        tracing::debug!(side = %spec.side, x, y, angle, "cutout");
        self.compose(&P::from_loop(&ring), true);
        Ok(())
    }

    /// Add a build tab to the polygon representation
    ///
    /// Only vertical tabs are supported.
    pub fn build_tab(
        &mut self,
        spec: &FeatureSpec,
        lateral: Option<f64>,
    ) -> Result<(), ContourError> {
        if spec.orientation != Orientation::Vertical {
            return Err(ContourError::UnsupportedOrientation {
                orientation: spec.orientation.to_string(),
                operation: "build tab".to_string(),
            });
        }
        spec.validate()?;
        self.union_tab(spec.side, &spec.position, spec.xsize, spec.ysize, lateral);
        Ok(())
    }

    /// Add a vertical build tab reaching `yextra` past the current extreme of the part
    ///
    /// With `yextra = 0` at the extreme itself the tab is flush and adds no
    /// material above the surface.
    pub fn add_build_tab(
        &mut self,
        side: Side,
        position: CutPosition,
        xsize: f64,
        yextra: f64,
        lateral: Option<f64>,
    ) -> Result<(), ContourError> {
        if !(xsize.is_finite() && xsize > 0.0) {
            return Err(ContourError::InvalidFeature {
                reason: format!("xsize must be > 0, got {xsize}"),
            });
        }
        if !(yextra.is_finite() && yextra >= 0.0) {
            return Err(ContourError::InvalidFeature {
                reason: format!("build tab margin must be >= 0, got {yextra}"),
            });
        }
        let x = self.resolve(&position, lateral);
        let bounds = self.bounds();
        let y = self.interpolate(side, x);
        let ysize = match side {
            Side::Top => bounds.max.y - y + yextra,
            Side::Bottom => y - bounds.min.y + yextra,
        };
        self.union_tab(side, &position, xsize, ysize.max(0.0), lateral);
        Ok(())
    }

    fn union_tab(
        &mut self,
        side: Side,
        position: &CutPosition,
        xsize: f64,
        ysize: f64,
        lateral: Option<f64>,
    ) {
        let x = self.resolve(position, lateral);
        let xhalf = xsize * 0.5;
        let (x1, x2) = (x - xhalf, x + xhalf);
        let y = self.interpolate(side, x);
        let y1 = self.interpolate(side, x1);
        let y2 = self.interpolate(side, x2);
        let (base, reach) = match side {
            Side::Top => (y1.min(y2), y + ysize),
            Side::Bottom => (y1.max(y2), y - ysize),
        };
        tracing::debug!(%side, x, base, reach, "build tab");
        if (reach - base).abs() <= EPSILON {
            // zero height tab
            self.make_polygon();
            return;
        }
        self.compose(&P::from_loop(&tab_loop(x1, x2, base, reach)), false);
    }

    /// Cut a round hole into the polygon representation
    pub fn cut_hole(&mut self, center: Point, radius: f64) -> Result<(), ContourError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ContourError::InvalidFeature {
                reason: format!("hole radius must be > 0, got {radius}"),
            });
        }
        let hole = P::circle(radius, center, self.hole_segments);
        self.compose(&hole, true);
        Ok(())
    }

    /// Sink one curve by `depth` from `xstart` for a walked length of `length`
    pub fn cutout_sweep(
        &mut self,
        side: Side,
        xstart: f64,
        length: f64,
        depth: f64,
    ) -> Result<(), ContourError> {
        if !(length.is_finite() && length > 0.0 && depth.is_finite() && depth > 0.0) {
            return Err(ContourError::InvalidFeature {
                reason: format!("sweep length and depth must be > 0, got {length} and {depth}"),
            });
        }
        let swept = cutout_sweep(&self.math, self.curve(side), side, xstart, length, depth);
        if swept.reached_end {
            self.diagnostics.warn(
                DiagnosticKind::SweepPastEnd,
                format!("{side} sweep from x = {xstart} ran past the end of the curve"),
            );
        }
        *self.curve_mut(side) = swept.points;
        Ok(())
    }

    /// Square notch for leading edge stock, diagonal along the chord at the saved nose
    pub fn cutout_leading_edge_diamond(&mut self, size: f64) -> Result<(), ContourError> {
        if !(size.is_finite() && size > 0.0) {
            return Err(ContourError::InvalidFeature {
                reason: format!("diamond size must be > 0, got {size}"),
            });
        }
        let nose_x = self.reference_bounds().min.x;
        let top = self.interpolate(Side::Top, nose_x);
        let bottom = self.interpolate(Side::Bottom, nose_x);
        let nose = Point::new(nose_x, (top + bottom) * 0.5);
        self.compose(&P::from_loop(&diamond_loop(nose, size)), true);
        Ok(())
    }

    /// Trim both curves `width` ahead of the saved rear to leave room for trailing edge stock
    pub fn cutout_trailing_edge(&mut self, width: f64) -> Result<(), ContourError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(ContourError::InvalidFeature {
                reason: format!("trailing edge width must be > 0, got {width}"),
            });
        }
        let position = CutPosition::rear(width);
        let cut_x = self.resolve(&position, None);
        let top = trim_curve(&self.math, &self.top, Discard::Rear, cut_x);
        let bottom = trim_curve(&self.math, &self.bottom, Discard::Rear, cut_x);
        for (side, trimmed) in [(Side::Top, &top), (Side::Bottom, &bottom)] {
            if trimmed.len() < 2 {
                return Err(ContourError::TooFewPoints {
                    curve: side.to_string(),
                    required: 2,
                    found: trimmed.len(),
                });
            }
        }
        tracing::debug!(cut_x, "trimmed trailing edge");
        self.top = top;
        self.bottom = bottom;

        // an existing polygon loses the same strip
        if self.polygon.is_some() {
            let saved = self.reference_bounds();
            let margin = saved.height().max(width);
            let strip = [
                Point::new(cut_x, saved.min.y - margin),
                Point::new(saved.max.x + margin, saved.min.y - margin),
                Point::new(saved.max.x + margin, saved.max.y + margin),
                Point::new(cut_x, saved.max.y + margin),
            ];
            self.compose(&P::from_loop(&strip), true);
        }
        Ok(())
    }

    /// Apply one transform to curves, labels and the polygon representation together
    ///
    /// Saved bounds stay in the frame they were taken in. A negative
    /// horizontal scale reverses the curves so they stay front to rear.
    pub fn apply(&mut self, transform: Transform) {
        transform.apply_points(&mut self.top);
        transform.apply_points(&mut self.bottom);
        if transform.reverses_x() {
            self.top.reverse();
            self.bottom.reverse();
        }
        for label in &mut self.labels {
            transform.apply_label(label);
        }
        if let Some(poly) = self.polygon.as_mut() {
            transform.apply_polygon(poly);
        }
    }

    /// Rotate about the origin by `degrees`
    pub fn rotate(&mut self, degrees: f64) {
        self.apply(Transform::Rotate { degrees });
    }

    pub fn scale(&mut self, h: f64, v: f64) {
        self.apply(Transform::Scale { h, v });
    }

    /// Move the part by (`dx`, `dy`)
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.apply(Transform::Translate { dx, dy });
    }

    pub fn add_label(
        &mut self,
        position: Point,
        size: f64,
        rotation: f64,
        text: impl Into<String>,
    ) {
        self.labels.push(Label::new(position, size, rotation, text));
    }

    /// Closed outline rings of the part
    ///
    /// Taken from the polygon representation when it exists, otherwise
    /// built from the curves.
    pub fn outline(&self) -> Vec<Outline> {
        match &self.polygon {
            Some(poly) => poly.outlines(),
            None => vec![Outline {
                exterior: curve_loop(&self.top, &self.bottom),
                holes: Vec::new(),
            }],
        }
    }
}

/// Closed outline loop of the curves: top rear to front, then bottom front to rear
fn curve_loop(top: &[Point], bottom: &[Point]) -> Vec<Point> {
    let mut ring: Vec<Point> = Vec::with_capacity(top.len() + bottom.len());
    for p in top.iter().rev().chain(bottom.iter()) {
        if ring.last() != Some(p) {
            ring.push(*p);
        }
    }
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

fn check_curve(side: Side, curve: &[Point]) -> Result<(), ContourError> {
    if curve.len() < 2 {
        return Err(ContourError::TooFewPoints {
            curve: side.to_string(),
            required: 2,
            found: curve.len(),
        });
    }
    if let Some(index) = curve.windows(2).position(|w| w[1].x <= w[0].x) {
        return Err(ContourError::NotMonotonic {
            curve: side.to_string(),
            index: index + 1,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lens() -> Contour {
        let top = (0..=10)
            .map(|i| {
                let x = i as f64;
                Point::new(x, 0.1 * x * (10.0 - x))
            })
            .collect();
        let bottom = (0..=10)
            .map(|i| {
                let x = i as f64;
                Point::new(x, -0.05 * x * (10.0 - x))
            })
            .collect();
        Contour::new(top, bottom).unwrap()
    }

    #[test]
    fn test_new_rejects_short_curve() {
        let top = vec![Point::new(0.0, 0.0)];
        let bottom = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let err = Contour::new(top, bottom).unwrap_err();
        assert_eq!(
            err,
            ContourError::TooFewPoints {
                curve: "top".to_string(),
                required: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_new_rejects_non_monotone_curve() {
        let bottom = vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 0.0)];
        let top = vec![Point::new(0.0, 0.0), Point::new(2.0, 1.0)];
        assert!(matches!(
            Contour::new(top, bottom),
            Err(ContourError::NotMonotonic { index: 2, .. })
        ));
    }

    #[test]
    fn test_resolve_auto_saves_with_warning() {
        let mut c = lens();
        let x = c.resolve(&CutPosition::percent(0.5), None);
        assert_eq!(x, 5.0);
        assert!(c.saved_bounds().is_some());
        assert!(c.diagnostics().contains(DiagnosticKind::BoundsAutoSaved));
        assert_eq!(c.diagnostics().warnings().count(), 1);

        // second resolution does not warn again
        c.resolve(&CutPosition::percent(0.25), None);
        assert_eq!(c.diagnostics().warnings().count(), 1);
    }

    #[test]
    fn test_trim_rejects_collapsing_cut() {
        let mut c = lens();
        c.save_bounds();
        let err = c
            .trim(Side::Top, Discard::Rear, &CutPosition::xpos(-1.0), None)
            .unwrap_err();
        assert!(matches!(err, ContourError::TooFewPoints { .. }));
        assert_eq!(c.top().len(), 11);
    }

    #[test]
    fn test_build_tab_rejects_tangent() {
        let mut c = lens();
        c.save_bounds();
        let spec = FeatureSpec::new(
            Side::Bottom,
            Orientation::Tangent,
            CutPosition::percent(0.5),
            1.0,
            1.0,
        );
        assert!(matches!(
            c.build_tab(&spec, None),
            Err(ContourError::UnsupportedOrientation { .. })
        ));
        assert!(c.polygon().is_none());
    }

    /// Wedge opening toward the rear: both surfaces slope away from y = 0
    fn wedge() -> Contour {
        let top = vec![Point::new(0.0, 1.0), Point::new(10.0, 2.0)];
        let bottom = vec![Point::new(0.0, -1.0), Point::new(10.0, -2.0)];
        let mut c = Contour::new(top, bottom).unwrap();
        c.save_bounds();
        c
    }

    fn has_vertex(c: &Contour, x: f64, y: f64) -> bool {
        c.outline()
            .iter()
            .flat_map(|o| o.exterior.iter())
            .any(|p| (p.x - x).abs() < 1e-6 && (p.y - y).abs() < 1e-6)
    }

    #[test]
    fn test_top_tab_sits_on_lower_sample() {
        let mut c = wedge();
        let body = c.make_polygon().area();
        let spec = FeatureSpec::new(
            Side::Top,
            Orientation::Vertical,
            CutPosition::xpos(5.0),
            2.0,
            1.0,
        );
        c.build_tab(&spec, None).unwrap();

        // surface is 1.4 at x = 4 and 1.6 at x = 6; far edge at 1.5 + 1.0
        let bounds = c.polygon().unwrap().bounds().unwrap();
        assert!((bounds.max.y - 2.5).abs() < 1e-6);
        assert!(has_vertex(&c, 4.0, 2.5));
        assert!(has_vertex(&c, 6.0, 2.5));
        assert!(!has_vertex(&c, 4.0, 1.6));
        // tab fills everything between the surface and its far edge
        let added = c.polygon().unwrap().area() - body;
        assert!((added - 2.0).abs() < 1e-6, "added {added}");
    }

    #[test]
    fn test_bottom_tab_sits_on_higher_sample() {
        let mut c = wedge();
        let body = c.make_polygon().area();
        let spec = FeatureSpec::new(
            Side::Bottom,
            Orientation::Vertical,
            CutPosition::xpos(5.0),
            2.0,
            1.0,
        );
        c.build_tab(&spec, None).unwrap();

        // surface is -1.4 at x = 4 and -1.6 at x = 6; far edge at -1.5 - 1.0
        let bounds = c.polygon().unwrap().bounds().unwrap();
        assert!((bounds.min.y + 2.5).abs() < 1e-6);
        assert!(has_vertex(&c, 4.0, -2.5));
        assert!(has_vertex(&c, 6.0, -2.5));
        assert!(!has_vertex(&c, 4.0, -1.6));
        let added = c.polygon().unwrap().area() - body;
        assert!((added - 2.0).abs() < 1e-6, "added {added}");
    }

    #[test]
    fn test_flush_build_tab_with_zero_margin() {
        let top = vec![Point::new(0.0, 1.0), Point::new(5.0, 1.0), Point::new(10.0, 1.0)];
        let bottom = vec![Point::new(0.0, -1.0), Point::new(10.0, -1.0)];
        let mut c = Contour::new(top, bottom).unwrap();
        c.save_bounds();

        c.add_build_tab(Side::Top, CutPosition::percent(0.5), 1.0, 0.0, None)
            .unwrap();
        let poly = c.polygon().unwrap();
        assert!((poly.area() - 20.0).abs() < 1e-6);
        assert!((poly.bounds().unwrap().max.y - 1.0).abs() < 1e-6);

        c.add_build_tab(Side::Top, CutPosition::percent(0.5), 1.0, 0.5, None)
            .unwrap();
        let poly = c.polygon().unwrap();
        assert!((poly.bounds().unwrap().max.y - 1.5).abs() < 1e-6);
        assert!((poly.area() - 20.5).abs() < 1e-6);
    }

    #[test]
    fn test_add_build_tab_rejects_negative_margin() {
        let mut c = wedge();
        let err = c
            .add_build_tab(Side::Top, CutPosition::percent(0.5), 1.0, -0.5, None)
            .unwrap_err();
        assert!(matches!(err, ContourError::InvalidFeature { .. }));
    }

    #[test]
    fn test_trailing_edge_trim_is_all_or_nothing() {
        let top: Vec<Point> = (0..=10).map(|i| Point::new(i as f64, 1.0)).collect();
        let bottom = vec![Point::new(8.0, 0.0), Point::new(10.0, 0.0)];
        let mut c = Contour::new(top.clone(), bottom.clone()).unwrap();
        c.save_bounds();

        let err = c.cutout_trailing_edge(3.0).unwrap_err();
        assert!(matches!(err, ContourError::TooFewPoints { ref curve, .. } if curve == "bottom"));
        assert_eq!(c.top(), top.as_slice());
        assert_eq!(c.bottom(), bottom.as_slice());
    }

    #[test]
    fn test_cutout_leaves_curves_alone() {
        let mut c = lens();
        c.save_bounds();
        let before = c.top().to_vec();
        let area = c.make_polygon().area();
        let spec = FeatureSpec::new(
            Side::Top,
            Orientation::Vertical,
            CutPosition::percent(0.5),
            1.0,
            0.5,
        );
        c.cutout(&spec, None).unwrap();
        assert_eq!(c.top(), before.as_slice());
        let cut = c.polygon().unwrap().area();
        assert!(cut < area);
    }

    #[test]
    fn test_curve_loop_drops_shared_endpoints() {
        let c = lens();
        let ring = curve_loop(c.top(), c.bottom());
        // top and bottom share both end points
        assert_eq!(ring.len(), 20);
    }

    #[test]
    fn test_intersect_records_degenerate_notes() {
        let top = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        let bottom = vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0)];
        let mut c = Contour::new(top, bottom).unwrap();
        let result = c.intersect(Side::Top, Point::new(0.0, 1.0), 1.0);
        assert!(!result.is_found());
        assert_eq!(result.degenerate.len(), 2);
        assert!(c.diagnostics().contains(DiagnosticKind::ParallelSegment));
        assert_eq!(c.diagnostics().warnings().count(), 0);
    }

    #[test]
    fn test_negative_scale_keeps_front_to_rear() {
        let mut c = lens();
        c.scale(-1.0, 1.0);
        assert!(c.top().windows(2).all(|w| w[0].x < w[1].x));
        assert_eq!(c.top()[0].x, -10.0);
    }
}
