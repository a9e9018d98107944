//! Sketch document: the ordered list of committed strokes.

use kurbo::Rect;
use serde::{Deserialize, Serialize};

use crate::stroke::Stroke;

/// A sketch document containing all visible strokes.
///
/// Insertion order is z-order: later strokes draw over (or, for erasers,
/// cut into) earlier ones. The sketchpad owns the single live instance and
/// replaces the stroke list wholesale on undo/redo/clear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sketch {
    /// All strokes, back to front.
    pub strokes: Vec<Stroke>,
}

impl Sketch {
    /// Create a new empty sketch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sketch from an existing stroke list.
    pub fn from_strokes(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    /// Append a stroke at the top of the z-order.
    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Remove all strokes.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Number of strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Check if the sketch has no strokes.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Bounding box of all stroke points, ignoring widths.
    pub fn bounds(&self) -> Rect {
        let mut iter = self.strokes.iter().filter(|s| !s.is_empty());
        let Some(first) = iter.next() else {
            return Rect::ZERO;
        };

        iter.fold(first.bounds(), |acc, stroke| acc.union(stroke.bounds()))
    }

    /// Serialize the sketch to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a sketch from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
