//! Chordwise position descriptors
//!
//! A [`CutPosition`] says where along the chord a feature sits. It is always
//! resolved against a part's saved (pre-cut) bounds, so percent, front and
//! rear positions stay put while cutouts and trims shrink the live curve.

use ribcut_core::{Bounds, ContourError};
use serde::{Deserialize, Serialize};

/// The single active way a position is measured
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Fraction of chord from the front (0.25 = quarter chord)
    Percent(f64),
    /// Distance back from the front of the chord
    Front(f64),
    /// Distance forward from the rear of the chord
    Rear(f64),
    /// Absolute x coordinate
    Absolute(f64),
}

impl Anchor {
    fn name(&self) -> &'static str {
        match self {
            Anchor::Percent(_) => "percent",
            Anchor::Front(_) => "front",
            Anchor::Rear(_) => "rear",
            Anchor::Absolute(_) => "xpos",
        }
    }
}

/// Reference station and chordwise slope for features that cross the span at an angle
///
/// At `station` the position is exactly the anchor; at any other lateral
/// distance it is pushed back by `slope * (|lateral| - station)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationSlope {
    pub station: f64,
    #[serde(default)]
    pub slope: f64,
}

/// Where along the chord a feature sits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCutPosition", into = "RawCutPosition")]
pub struct CutPosition {
    pub anchor: Anchor,
    pub station: Option<StationSlope>,
}

impl CutPosition {
    pub fn new(anchor: Anchor) -> Self {
        Self {
            anchor,
            station: None,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self::new(Anchor::Percent(value))
    }

    pub fn front(distance: f64) -> Self {
        Self::new(Anchor::Front(distance))
    }

    pub fn rear(distance: f64) -> Self {
        Self::new(Anchor::Rear(distance))
    }

    pub fn xpos(x: f64) -> Self {
        Self::new(Anchor::Absolute(x))
    }

    /// Attach a reference station and slope
    pub fn with_station(mut self, station: f64, slope: f64) -> Self {
        self.station = Some(StationSlope { station, slope });
        self
    }

    /// Shift the active anchor value by `delta`
    pub fn shift(&mut self, delta: f64) {
        match &mut self.anchor {
            Anchor::Percent(v) | Anchor::Front(v) | Anchor::Rear(v) | Anchor::Absolute(v) => {
                *v += delta
            }
        }
    }

    /// Resolve to an absolute x against `bounds`
    ///
    /// `lateral` is the spanwise distance of the station being cut; it only
    /// matters when the position carries a [`StationSlope`].
    pub fn resolve(&self, bounds: &Bounds, lateral: Option<f64>) -> f64 {
        let chord = bounds.chord();
        let mut x = match self.anchor {
            Anchor::Percent(p) => bounds.min.x + chord * p,
            Anchor::Front(d) => bounds.min.x + d,
            Anchor::Rear(d) => bounds.max.x - d,
            Anchor::Absolute(x) => x,
        };
        if let (Some(ref_station), Some(lateral)) = (self.station, lateral) {
            x += ref_station.slope * (lateral.abs() - ref_station.station);
        }
        x
    }
}

/// Flat record form used by configuration files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCutPosition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rear: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xpos: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_station: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope: Option<f64>,
}

impl TryFrom<RawCutPosition> for CutPosition {
    type Error = ContourError;

    fn try_from(raw: RawCutPosition) -> Result<Self, Self::Error> {
        let candidates = [
            raw.percent.map(Anchor::Percent),
            raw.front.map(Anchor::Front),
            raw.rear.map(Anchor::Rear),
            raw.xpos.map(Anchor::Absolute),
        ];
        let mut set = candidates.into_iter().flatten();
        let anchor = set.next().ok_or(ContourError::NoPosition)?;
        let extra: Vec<&str> = set.map(|a| a.name()).collect();
        if !extra.is_empty() {
            let mut fields = vec![anchor.name()];
            fields.extend(extra);
            return Err(ContourError::AmbiguousPosition {
                fields: fields.join(", "),
            });
        }
        let station = raw.at_station.map(|station| StationSlope {
            station,
            slope: raw.slope.unwrap_or(0.0),
        });
        Ok(CutPosition { anchor, station })
    }
}

impl From<CutPosition> for RawCutPosition {
    fn from(pos: CutPosition) -> Self {
        let mut raw = RawCutPosition::default();
        match pos.anchor {
            Anchor::Percent(v) => raw.percent = Some(v),
            Anchor::Front(v) => raw.front = Some(v),
            Anchor::Rear(v) => raw.rear = Some(v),
            Anchor::Absolute(v) => raw.xpos = Some(v),
        }
        if let Some(s) = pos.station {
            raw.at_station = Some(s.station);
            raw.slope = Some(s.slope);
        }
        raw
    }
}
