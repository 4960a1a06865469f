//! Unit conversion utilities
//!
//! Handles conversion between inch and millimetre part dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length unit for part dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Inches
    In,
    /// Millimetres
    Mm,
}

impl Default for LengthUnit {
    fn default() -> Self {
        Self::In
    }
}

impl LengthUnit {
    /// Millimetres per one of this unit
    pub fn mm_per_unit(&self) -> f64 {
        match self {
            Self::In => 25.4,
            Self::Mm => 1.0,
        }
    }

    /// Convert a length expressed in `self` into `target`
    pub fn convert(&self, value: f64, target: LengthUnit) -> f64 {
        value * self.mm_per_unit() / target.mm_per_unit()
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In => write!(f, "in"),
            Self::Mm => write!(f, "mm"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in" | "inch" | "inches" | "imperial" => Ok(Self::In),
            "mm" | "millimeter" | "millimetre" | "metric" => Ok(Self::Mm),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

/// Format a length for display, 4 decimals for inches and 2 for mm
pub fn format_length(value: f64, unit: LengthUnit) -> String {
    match unit {
        LengthUnit::In => format!("{:.4} {}", value, unit),
        LengthUnit::Mm => format!("{:.2} {}", value, unit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_inch_to_mm() {
        assert!((LengthUnit::In.convert(1.0, LengthUnit::Mm) - 25.4).abs() < 1e-12);
        assert!((LengthUnit::Mm.convert(50.8, LengthUnit::In) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_unit() {
        assert_eq!("inch".parse::<LengthUnit>(), Ok(LengthUnit::In));
        assert_eq!("MM".parse::<LengthUnit>(), Ok(LengthUnit::Mm));
        assert!("furlong".parse::<LengthUnit>().is_err());
    }

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(1.5, LengthUnit::In), "1.5000 in");
        assert_eq!(format_length(12.345, LengthUnit::Mm), "12.35 mm");
    }
}
