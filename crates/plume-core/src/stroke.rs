//! Stroke model: the vector data captured from a single drawing gesture.
//!
//! A stroke records the tool kind it was drawn with, its color and width,
//! and the ordered list of logical-space points the pointer visited. Points
//! are only ever appended, and only while the gesture that owns the stroke
//! is still live; once the gesture ends the stroke is frozen. Strokes are
//! never deleted individually; removal happens at whole-canvas granularity
//! through the history timeline.

use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a stroke.
pub type StrokeId = Uuid;

/// Which tool produced a stroke.
///
/// The renderer selects its composite mode from this: pencil strokes paint
/// over what is beneath them, eraser strokes cut it away. Panning never
/// produces a stroke, so it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeKind {
    /// Visible ink in the stroke's color.
    Pencil,
    /// Cut-out: removes the ink of strokes beneath it.
    Eraser,
}

impl StrokeKind {
    /// Whether this stroke erases rather than paints.
    pub fn is_eraser(&self) -> bool {
        matches!(self, StrokeKind::Eraser)
    }
}

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Charcoal ink, the default pencil color.
    pub const INK: Color = Color::from_rgb8(0x2B, 0x2B, 0x2B);
    /// Palette pink.
    pub const PINK: Color = Color::from_rgb8(0xFF, 0x3B, 0x7B);
    /// Palette blue.
    pub const BLUE: Color = Color::from_rgb8(0x00, 0xC2, 0xFF);
    /// Palette yellow.
    pub const YELLOW: Color = Color::from_rgb8(0xFF, 0xD6, 0x00);
    /// Palette green.
    pub const GREEN: Color = Color::from_rgb8(0x4A, 0xDE, 0x80);
    /// Neutral gray carried by eraser strokes. Never rendered as ink; it
    /// exists so UI affordances (the eraser cursor ring) have a color.
    pub const ERASER_MARKER: Color = Color::from_rgb8(0x66, 0x66, 0x66);

    /// Create an opaque color from RGB channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from RGBA channels.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#rgb`, `#rrggbb`, or `#rrggbbaa` hex string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        // The length match below counts bytes and the slices are byte
        // offsets, so multi-byte input must be rejected up front.
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::from_rgb8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::from_rgb8(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::from_rgba8(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// A single freehand stroke (series of points).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Unique id, assigned at creation and never reused.
    pub id: StrokeId,
    /// Tool kind captured when the stroke was opened.
    pub kind: StrokeKind,
    /// Ink color; meaningful for pencil strokes only.
    pub color: Color,
    /// Stroke width in logical units. Always positive.
    pub width: f64,
    /// Points in logical coordinates, insertion order = drawing order.
    /// May contain duplicate consecutive points; holds at least one point
    /// for any stroke produced by a gesture.
    pub points: Vec<Point>,
}

impl Stroke {
    /// Open a new stroke at its first point.
    pub fn begin(kind: StrokeKind, color: Color, width: f64, first_point: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            color,
            width,
            points: vec![first_point],
        }
    }

    /// Append a point to the stroke.
    pub fn push_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point list is empty. Gesture-produced strokes never
    /// are; a deserialized document could carry an empty one.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounding box of the point list (ignores width).
    pub fn bounds(&self) -> Rect {
        if self.points.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for point in &self.points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        Rect::new(min_x, min_y, max_x, max_y)
    }

    /// Build the raw polyline path through the points.
    ///
    /// Smoothing is the renderer's concern; the model keeps the points it
    /// was given.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();

        if self.points.is_empty() {
            return path;
        }

        path.move_to(self.points[0]);
        for point in self.points.iter().skip(1) {
            path.line_to(*point);
        }

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_has_one_point() {
        let stroke = Stroke::begin(StrokeKind::Pencil, Color::INK, 4.0, Point::new(1.0, 2.0));
        assert_eq!(stroke.len(), 1);
        assert_eq!(stroke.points[0], Point::new(1.0, 2.0));
        assert_eq!(stroke.kind, StrokeKind::Pencil);
    }

    #[test]
    fn test_push_preserves_order_and_duplicates() {
        let mut stroke = Stroke::begin(StrokeKind::Pencil, Color::BLUE, 2.0, Point::new(0.0, 0.0));
        stroke.push_point(Point::new(1.0, 0.0));
        stroke.push_point(Point::new(1.0, 0.0));
        stroke.push_point(Point::new(2.0, 3.0));

        let expected = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 3.0),
        ];
        assert_eq!(stroke.points, expected);
    }

    #[test]
    fn test_unique_ids() {
        let a = Stroke::begin(StrokeKind::Pencil, Color::INK, 2.0, Point::ZERO);
        let b = Stroke::begin(StrokeKind::Pencil, Color::INK, 2.0, Point::ZERO);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_bounds() {
        let mut stroke = Stroke::begin(StrokeKind::Pencil, Color::INK, 2.0, Point::new(10.0, 20.0));
        stroke.push_point(Point::new(-5.0, 8.0));
        stroke.push_point(Point::new(3.0, 40.0));

        let bounds = stroke.bounds();
        assert_eq!(bounds, Rect::new(-5.0, 8.0, 10.0, 40.0));
    }

    #[test]
    fn test_single_point_bounds() {
        let stroke = Stroke::begin(StrokeKind::Eraser, Color::ERASER_MARKER, 8.0, Point::new(4.0, 4.0));
        let bounds = stroke.bounds();
        assert_eq!(bounds, Rect::new(4.0, 4.0, 4.0, 4.0));
    }

    #[test]
    fn test_to_path_polyline() {
        let mut stroke = Stroke::begin(StrokeKind::Pencil, Color::INK, 2.0, Point::new(0.0, 0.0));
        stroke.push_point(Point::new(10.0, 0.0));
        stroke.push_point(Point::new(10.0, 10.0));

        // One MoveTo plus two LineTo elements.
        assert_eq!(stroke.to_path().elements().len(), 3);
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Color::from_hex("#2B2B2B"), Some(Color::INK));
        assert_eq!(Color::from_hex("#ff3b7b"), Some(Color::PINK));
        assert_eq!(Color::from_hex("#fff"), Some(Color::from_rgb8(255, 255, 255)));
        assert_eq!(
            Color::from_hex("#00c2ff80"),
            Some(Color::from_rgba8(0x00, 0xC2, 0xFF, 0x80))
        );
        assert_eq!(Color::from_hex("2B2B2B"), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gggggg"), None);
    }

    #[test]
    fn test_hex_parsing_rejects_non_ascii() {
        // Multi-byte input can land on a matching byte length ("€" is
        // three bytes); it must come back None, not slice mid-character.
        assert_eq!(Color::from_hex("#€"), None);
        assert_eq!(Color::from_hex("#€€"), None);
        assert_eq!(Color::from_hex("#€€ab"), None);
        assert_eq!(Color::from_hex("#ﬀ3b7b"), None);
    }

    #[test]
    fn test_hex_roundtrip() {
        let color = Color::from_rgba8(18, 52, 86, 120);
        assert_eq!(Color::from_hex(&color.to_hex()), Some(color));
        assert_eq!(Color::INK.to_hex(), "#2b2b2b");
    }
}
