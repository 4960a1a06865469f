//! Polygon algebra provider
//!
//! Feature placement composes cutouts and tabs into the part outline with
//! boolean set operations. [`PolygonAlgebra`] is the seam; [`CsgPolygon`] is
//! the default implementation on top of `csgrs` sketches.

use csgrs::sketch::Sketch;
use csgrs::traits::CSG;
use nalgebra::{Matrix4, Vector3};
use ribcut_core::{Bounds, Point};

/// One closed region of a polygon: an exterior ring and its holes
///
/// Rings are stored open (the closing point is not repeated).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    pub exterior: Vec<Point>,
    pub holes: Vec<Vec<Point>>,
}

impl Outline {
    /// Enclosed area (exterior minus holes)
    pub fn area(&self) -> f64 {
        ring_area(&self.exterior) - self.holes.iter().map(|h| ring_area(h)).sum::<f64>()
    }
}

/// Boolean polygon operations required by feature placement
pub trait PolygonAlgebra: Clone + std::fmt::Debug {
    /// Simple polygon from an ordered closed loop (first point not repeated)
    fn from_loop(points: &[Point]) -> Self;

    /// Regular polygon approximating a circle
    fn circle(radius: f64, center: Point, segments: usize) -> Self;

    fn union(&self, other: &Self) -> Self;

    fn difference(&self, other: &Self) -> Self;

    /// Rotate in place by `radians` about `pivot`
    fn rotate(&mut self, radians: f64, pivot: Point);

    /// Scale in place about the origin
    fn scale(&mut self, sx: f64, sy: f64);

    fn translate(&mut self, dx: f64, dy: f64);

    fn outlines(&self) -> Vec<Outline>;

    fn area(&self) -> f64 {
        self.outlines().iter().map(Outline::area).sum()
    }

    fn bounds(&self) -> Option<Bounds> {
        let outlines = self.outlines();
        Bounds::from_points(outlines.iter().flat_map(|o| o.exterior.iter()))
    }
}

/// `csgrs` sketch backed polygon
#[derive(Debug, Clone)]
pub struct CsgPolygon {
    sketch: Sketch<()>,
}

impl CsgPolygon {
    pub fn from_sketch(sketch: Sketch<()>) -> Self {
        Self { sketch }
    }

    pub fn sketch(&self) -> &Sketch<()> {
        &self.sketch
    }

    fn apply(&mut self, matrix: &Matrix4<f64>) {
        self.sketch = self.sketch.transform(matrix);
    }
}

impl PolygonAlgebra for CsgPolygon {
    fn from_loop(points: &[Point]) -> Self {
        let pts: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
        Self {
            sketch: Sketch::polygon(&pts, None),
        }
    }

    fn circle(radius: f64, center: Point, segments: usize) -> Self {
        let sketch: Sketch<()> = Sketch::circle(radius, segments.max(3), None);
        let translation = Matrix4::new_translation(&Vector3::new(center.x, center.y, 0.0));
        Self {
            sketch: sketch.transform(&translation),
        }
    }

    fn union(&self, other: &Self) -> Self {
        Self {
            sketch: self.sketch.union(&other.sketch),
        }
    }

    fn difference(&self, other: &Self) -> Self {
        Self {
            sketch: self.sketch.difference(&other.sketch),
        }
    }

    fn rotate(&mut self, radians: f64, pivot: Point) {
        let rotation = Matrix4::new_rotation(Vector3::new(0.0, 0.0, radians));
        let to_pivot = Matrix4::new_translation(&Vector3::new(pivot.x, pivot.y, 0.0));
        let from_pivot = Matrix4::new_translation(&Vector3::new(-pivot.x, -pivot.y, 0.0));
        self.apply(&(to_pivot * rotation * from_pivot));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.apply(&Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, 1.0)));
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.apply(&Matrix4::new_translation(&Vector3::new(dx, dy, 0.0)));
    }

    fn outlines(&self) -> Vec<Outline> {
        let mp = self.sketch.to_multipolygon();
        mp.0.iter()
            .map(|poly| Outline {
                exterior: open_ring(poly.exterior().0.iter().map(|c| Point::new(c.x, c.y))),
                holes: poly
                    .interiors()
                    .iter()
                    .map(|ring| open_ring(ring.0.iter().map(|c| Point::new(c.x, c.y))))
                    .collect(),
            })
            .collect()
    }
}

fn open_ring(coords: impl Iterator<Item = Point>) -> Vec<Point> {
    let mut ring: Vec<Point> = coords.collect();
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

/// Unsigned shoelace area of an open ring
pub fn ring_area(ring: &[Point]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let twice: f64 = ring
        .iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    (twice * 0.5).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, size: f64) -> Vec<Point> {
        vec![
            Point::new(x0, y0),
            Point::new(x0 + size, y0),
            Point::new(x0 + size, y0 + size),
            Point::new(x0, y0 + size),
        ]
    }

    #[test]
    fn test_ring_area() {
        assert!((ring_area(&square(0.0, 0.0, 2.0)) - 4.0).abs() < 1e-12);
        assert_eq!(ring_area(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]), 0.0);
    }

    #[test]
    fn test_difference_removes_area() {
        let a = CsgPolygon::from_loop(&square(0.0, 0.0, 10.0));
        let b = CsgPolygon::from_loop(&square(8.0, 8.0, 4.0));
        let result = a.difference(&b);
        assert!((result.area() - 96.0).abs() < 1e-6);
    }

    #[test]
    fn test_union_adds_area() {
        let a = CsgPolygon::from_loop(&square(0.0, 0.0, 10.0));
        let b = CsgPolygon::from_loop(&square(9.0, 0.0, 2.0));
        let result = a.union(&b);
        assert!((result.area() - 102.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_about_origin() {
        let mut a = CsgPolygon::from_loop(&square(1.0, 0.0, 1.0));
        a.rotate(std::f64::consts::FRAC_PI_2, Point::default());
        let b = a.bounds().unwrap();
        assert!((b.min.x + 1.0).abs() < 1e-9);
        assert!((b.max.x - 0.0).abs() < 1e-9);
        assert!((b.min.y - 1.0).abs() < 1e-9);
        assert!((b.max.y - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_and_translate() {
        let mut a = CsgPolygon::from_loop(&square(0.0, 0.0, 1.0));
        a.scale(2.0, 3.0);
        a.translate(1.0, -1.0);
        let b = a.bounds().unwrap();
        assert!((b.min.x - 1.0).abs() < 1e-9);
        assert!((b.max.x - 3.0).abs() < 1e-9);
        assert!((b.min.y + 1.0).abs() < 1e-9);
        assert!((b.max.y - 2.0).abs() < 1e-9);
        assert!((a.area() - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_circle_hole() {
        let plate = CsgPolygon::from_loop(&square(-5.0, -5.0, 10.0));
        let hole = CsgPolygon::circle(1.0, Point::new(0.0, 0.0), 32);
        let result = plate.difference(&hole);
        let outlines = result.outlines();
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].holes.len(), 1);
        // 32-gon inscribed in the unit circle
        let expected = 100.0 - 16.0 * (2.0 * std::f64::consts::PI / 32.0).sin();
        assert!((result.area() - expected).abs() < 1e-6);
    }
}
