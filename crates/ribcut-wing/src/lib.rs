//! # Ribcut Wing
//!
//! Wing station assembly on top of the contour engine.
//!
//! - **Airfoils**: NACA 4-digit generation and root/tip blending
//! - **Sweep**: straight or spline sweep offsets along the span
//! - **Ribs**: per-station scale, simplify, label, cut, twist and tab pipeline

pub mod airfoil;
pub mod sweep;
pub mod wing;

pub use airfoil::Airfoil;
pub use sweep::Sweep;
pub use wing::{Rib, RibSet, Station, Wing, LABEL_SIZE};
