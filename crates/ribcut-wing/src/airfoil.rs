//! Airfoil sections at unit chord
//!
//! Sections are stored as two x-monotone surfaces running from the nose at
//! x = 0 to the trailing edge at x = 1, ready to be turned into a
//! [`Contour`].

use ribcut_contour::{simple_interp, Contour, CurveMath};
use ribcut_core::{ContourError, Point, WingError};
use std::f64::consts::PI;

#[derive(Debug, Clone, PartialEq)]
pub struct Airfoil {
    pub name: String,
    pub top: Vec<Point>,
    pub bottom: Vec<Point>,
}

/// Parsed NACA 4-digit designation
#[derive(Debug, Clone, Copy, PartialEq)]
struct Naca4 {
    camber: f64,
    camber_pos: f64,
    thickness: f64,
}

impl Naca4 {
    fn parse(code: &str) -> Result<Self, WingError> {
        let invalid = || WingError::InvalidAirfoilCode {
            code: code.to_string(),
        };
        let trimmed = code.trim();
        let digits = trimmed
            .strip_prefix("NACA")
            .or_else(|| trimmed.strip_prefix("naca"))
            .unwrap_or(trimmed)
            .trim();
        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let d: Vec<f64> = digits.bytes().map(|b| f64::from(b - b'0')).collect();
        let thickness = (d[2] * 10.0 + d[3]) / 100.0;
        if thickness <= 0.0 {
            return Err(invalid());
        }
        Ok(Self {
            camber: d[0] / 100.0,
            camber_pos: d[1] / 10.0,
            thickness,
        })
    }

    /// Half thickness, closed trailing edge form
    fn half_thickness(&self, x: f64) -> f64 {
        5.0 * self.thickness
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
                - 0.1036 * x.powi(4))
    }

    fn camber_line(&self, x: f64) -> f64 {
        let (m, p) = (self.camber, self.camber_pos);
        if m == 0.0 || p == 0.0 {
            return 0.0;
        }
        if x < p {
            m / (p * p) * (2.0 * p * x - x * x)
        } else {
            m / ((1.0 - p) * (1.0 - p)) * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x)
        }
    }
}

impl Airfoil {
    /// Section from explicit surfaces
    pub fn from_points(name: impl Into<String>, top: Vec<Point>, bottom: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            top,
            bottom,
        }
    }

    /// Classic NACA 4-digit section with `samples` cosine-spaced stations per surface
    ///
    /// Thickness is added vertically to the camber line so both surfaces stay
    /// functions of x.
    pub fn naca4(code: &str, samples: usize) -> Result<Self, WingError> {
        let naca = Naca4::parse(code)?;
        let samples = samples.max(2);
        let mut top = Vec::with_capacity(samples + 1);
        let mut bottom = Vec::with_capacity(samples + 1);
        for i in 0..=samples {
            let beta = PI * i as f64 / samples as f64;
            let x = 0.5 * (1.0 - beta.cos());
            let yc = naca.camber_line(x);
            let yt = naca.half_thickness(x).max(0.0);
            top.push(Point::new(x, yc + yt));
            bottom.push(Point::new(x, yc - yt));
        }
        Ok(Self {
            name: format!("NACA {}", code.trim().trim_start_matches("NACA").trim()),
            top,
            bottom,
        })
    }

    /// Linear blend from `root` (t = 0) to `tip` (t = 1) on the root's x stations
    pub fn blend<M: CurveMath + ?Sized>(
        math: &M,
        root: &Airfoil,
        tip: &Airfoil,
        t: f64,
    ) -> Airfoil {
        let mix = |curve: &[Point], other: &[Point]| -> Vec<Point> {
            curve
                .iter()
                .map(|p| {
                    let y = simple_interp(math, other, p.x);
                    Point::new(p.x, p.y * (1.0 - t) + y * t)
                })
                .collect()
        };
        Airfoil {
            name: format!("{} / {} @ {:.2}", root.name, tip.name, t),
            top: mix(&root.top, &tip.top),
            bottom: mix(&root.bottom, &tip.bottom),
        }
    }

    /// Maximum thickness as a fraction of chord, measured vertically
    pub fn thickness(&self) -> f64 {
        self.top
            .iter()
            .map(|p| p.y - simple_interp(&ribcut_contour::NaturalSpline, &self.bottom, p.x))
            .fold(0.0, f64::max)
    }

    pub fn to_contour(&self) -> Result<Contour, ContourError> {
        Contour::new(self.top.clone(), self.bottom.clone())
    }
}
