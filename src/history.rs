//! Capture history: the serializable record of every completed stroke.
//!
//! Only raw points are persisted — curves and widths are recomputed from
//! them on every replay — so the history is small, portable, and stable
//! across surface resolutions. Strokes are append-only during capture and
//! sealed afterwards; the history itself is append-only at the stroke level.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// One continuous pointer-down-to-up gesture, as an ordered point list.
///
/// A stroke with exactly one point is a tap and renders as a dot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stroke {
    pub points: Vec<Point>,
}

impl Stroke {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The pointer-down sample, where taps render their dot.
    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }
}

/// The ordered collection of sealed strokes — the complete, portable state
/// of the drawing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    strokes: Vec<Stroke>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new stroke at the end of the history.
    pub fn begin_stroke(&mut self) {
        self.strokes.push(Stroke::new());
    }

    /// The stroke currently being captured, if any.
    pub fn active_stroke(&mut self) -> Option<&mut Stroke> {
        self.strokes.last_mut()
    }

    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// True when the history holds no points at all — either no strokes, or
    /// only empty ones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.iter().all(Stroke::is_empty)
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Encode as JSON for application-level persistence.
    ///
    /// # Errors
    ///
    /// Returns any `serde_json` encoding error.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a history previously produced by [`History::to_json`].
    ///
    /// # Errors
    ///
    /// Returns any `serde_json` decoding error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
