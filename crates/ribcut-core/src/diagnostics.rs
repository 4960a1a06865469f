//! Structured diagnostics channel
//!
//! Geometry operations that recover from a usage problem, or skip degenerate
//! input, record a [`Diagnostic`] instead of printing. Every diagnostic is also
//! emitted through `tracing` so interactive runs still see it in the log.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Debug,
    Warning,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// What a diagnostic is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Position resolution ran before bounds were saved; bounds were saved on the spot
    BoundsAutoSaved,
    /// A curve segment was skipped because it is (near) vertical
    VerticalSegment,
    /// A curve segment was skipped because it is parallel to the query line
    ParallelSegment,
    /// Curve simplification stopped on the point budget before meeting the error bound
    PointBudgetExhausted,
    /// A sweep cutout reached the end of its curve before covering its length
    SweepPastEnd,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsAutoSaved => write!(f, "bounds auto-saved"),
            Self::VerticalSegment => write!(f, "vertical segment"),
            Self::ParallelSegment => write!(f, "parallel segment"),
            Self::PointBudgetExhausted => write!(f, "point budget exhausted"),
            Self::SweepPastEnd => write!(f, "sweep past end"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.kind, self.message)
    }
}

/// Ordered collection of diagnostics owned by one part
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and log it
    pub fn warn(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%kind, "{}", message);
        self.entries.push(Diagnostic {
            level: DiagnosticLevel::Warning,
            kind,
            message,
        });
    }

    /// Record a low-severity note and log it
    pub fn note(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%kind, "{}", message);
        self.entries.push(Diagnostic {
            level: DiagnosticLevel::Debug,
            kind,
            message,
        });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, kind: DiagnosticKind) -> bool {
        self.entries.iter().any(|d| d.kind == kind)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Warning)
    }

    /// Drain all recorded diagnostics
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.entries)
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }
}
