//! Wing assembly
//!
//! A [`Wing`] turns the planform settings into one rib per station and
//! side. Each rib owns its own [`Contour`] and is cut through the same fixed
//! pipeline, so ribs never share state.

use crate::airfoil::Airfoil;
use crate::sweep::Sweep;
use ribcut_contour::{Contour, NaturalSpline, Side};
use ribcut_core::{Point, Result, WingError};
use ribcut_settings::{Config, ContourSettings, WingSettings};

/// Label text size for rib numbers
pub const LABEL_SIZE: f64 = 14.0;

/// Diamond, trailing edge and chord sizes below this are treated as absent
const MIN_FEATURE: f64 = 0.01;

/// One cut rib and where it sits in the wing
#[derive(Debug, Clone)]
pub struct Rib {
    pub label: String,
    pub contour: Contour,
    /// Plan position: (lateral distance, sweep offset, 0)
    pub pos: [f64; 3],
    pub thickness: f64,
    pub material: String,
}

/// Right and left ribs, root first
#[derive(Debug, Clone, Default)]
pub struct RibSet {
    pub right: Vec<Rib>,
    pub left: Vec<Rib>,
}

impl RibSet {
    pub fn len(&self) -> usize {
        self.right.len() + self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.right.is_empty() && self.left.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rib> {
        self.right.iter().chain(self.left.iter())
    }
}

/// Parameters of one station
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    pub index: usize,
    /// Fraction of span, 0 at the root
    pub t: f64,
    pub chord: f64,
    pub yscale: f64,
    pub lateral: f64,
    pub twist: f64,
    pub sweep: f64,
}

#[derive(Debug, Clone)]
pub struct Wing {
    settings: WingSettings,
    contour: ContourSettings,
    root: Airfoil,
    tip: Option<Airfoil>,
    sweep: Sweep,
    math: NaturalSpline,
}

impl Wing {
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.wing.clone(), config.contour.clone())
    }

    pub fn new(settings: WingSettings, contour: ContourSettings) -> Result<Self> {
        if settings.steps == 0 {
            return Err(WingError::InvalidGeometry {
                reason: "at least one step is needed".to_string(),
            }
            .into());
        }
        if !(settings.root_chord > MIN_FEATURE) {
            return Err(WingError::InvalidGeometry {
                reason: format!("root chord {} is too small", settings.root_chord),
            }
            .into());
        }
        let root = Airfoil::naca4(&settings.root_airfoil, settings.airfoil_samples)?;
        let tip = settings
            .tip_airfoil
            .as_deref()
            .map(|code| Airfoil::naca4(code, settings.airfoil_samples))
            .transpose()?;
        let math = NaturalSpline;
        let sweep = Sweep::from_settings(&math, &settings.sweep);
        Ok(Self {
            settings,
            contour,
            root,
            tip,
            sweep,
            math,
        })
    }

    pub fn settings(&self) -> &WingSettings {
        &self.settings
    }

    /// Station parameters for every rib position, root first
    pub fn stations(&self) -> Vec<Station> {
        let s = &self.settings;
        (0..=s.steps)
            .map(|index| {
                let t = index as f64 / s.steps as f64;
                let chord = if s.tip_chord < MIN_FEATURE {
                    s.root_chord
                } else {
                    s.root_chord * (1.0 - t) + s.tip_chord * t
                };
                let lateral = s.span * t;
                Station {
                    index,
                    t,
                    chord,
                    yscale: s.root_yscale * (1.0 - t) + s.tip_yscale * t,
                    lateral,
                    twist: s.twist * t,
                    sweep: self.sweep.offset(&self.math, lateral),
                }
            })
            .collect()
    }

    /// Section at fraction `t` of the span
    pub fn section(&self, t: f64) -> Airfoil {
        match &self.tip {
            Some(tip) => Airfoil::blend(&self.math, &self.root, tip, t),
            None => self.root.clone(),
        }
    }

    /// Build a right and a left rib at every station
    pub fn build(&self) -> Result<RibSet> {
        let mut ribs = RibSet::default();
        for station in self.stations() {
            let airfoil = self.section(station.t);
            tracing::debug!(
                station = station.index,
                chord = station.chord,
                lateral = station.lateral,
                twist = station.twist,
                sweep = station.sweep,
                "building station"
            );
            let n = station.index + 1;
            ribs.right
                .push(self.make_rib(&airfoil, &station, station.lateral, format!("WR{n}"))?);
            ribs.left
                .push(self.make_rib(&airfoil, &station, -station.lateral, format!("WL{n}"))?);
        }
        tracing::info!(ribs = ribs.len(), "wing built");
        Ok(ribs)
    }

    /// Cut one rib through the fixed pipeline
    ///
    /// `lateral` is signed: positive for right ribs, negative for left ribs.
    pub fn make_rib(
        &self,
        airfoil: &Airfoil,
        station: &Station,
        lateral: f64,
        label: String,
    ) -> Result<Rib> {
        let s = &self.settings;
        let chord = station.chord;
        let mut contour = airfoil
            .to_contour()?
            .with_hole_segments(self.contour.hole_segments);

        // scale and position
        contour.scale(chord, chord * station.yscale);
        contour.simplify(self.contour.max_points, self.contour.max_error);
        contour.translate(-s.chord_offset * chord, 0.0);
        contour.save_bounds();

        // label (before rotate)
        let top = contour.interpolate(Side::Top, 0.0);
        let bottom = contour.interpolate(Side::Bottom, 0.0);
        contour.add_label(
            Point::new(0.0, bottom + (top - bottom) * 0.5),
            LABEL_SIZE,
            0.0,
            label.clone(),
        );

        if s.leading_edge_diamond > MIN_FEATURE {
            contour.cutout_leading_edge_diamond(s.leading_edge_diamond)?;
        }

        // stringers are cut before twist
        for stringer in &s.stringers {
            contour.cutout(stringer, Some(lateral))?;
        }

        if s.trailing_edge_width > MIN_FEATURE && s.trailing_edge_height > MIN_FEATURE {
            contour.cutout_trailing_edge(s.trailing_edge_width)?;
        }

        contour.rotate(station.twist);

        // spars are cut after twist
        for spar in &s.spars {
            contour.cutout(spar, Some(lateral))?;
        }

        for tab in &s.build_tabs {
            contour.add_build_tab(tab.side, tab.position, tab.xsize, tab.yextra, Some(lateral))?;
        }

        Ok(Rib {
            label,
            contour,
            pos: [lateral, station.sweep, 0.0],
            thickness: s.rib_thickness,
            material: s.rib_material.clone(),
        })
    }
}
