//! Camera module for pan/zoom transforms.
//!
//! The camera maps between screen coordinates (pixels, as delivered by
//! pointer events) and logical drawing coordinates (the space strokes are
//! stored in). The forward transform is `screen = logical * zoom + offset`;
//! everything else here is its exact algebraic inverse, so a logical point
//! placed on screen stays under the same pixel across pan/zoom cycles.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Zoom factor applied by the zoom-in/zoom-out buttons.
///
/// One step in followed by one step out must return the camera to its
/// starting zoom (up to floating-point error), so the out step is the exact
/// reciprocal of this value.
pub const ZOOM_STEP: f64 = 1.2;

/// Zoom factor applied per wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Camera manages the view transform for the sketch surface.
///
/// It handles panning (translation) and zooming (scaling) operations,
/// converting between screen coordinates and logical coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Current translation offset (pan), in screen pixels
    pub offset: Vec2,
    /// Current zoom level (1.0 = identity)
    pub zoom: f64,
    /// Minimum allowed zoom level; keeps the scale away from zero
    pub min_zoom: f64,
    /// Maximum allowed zoom level
    pub max_zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
            min_zoom: 0.1,
            max_zoom: 10.0,
        }
    }
}

impl Camera {
    /// Create a new camera at identity (no pan, zoom 1.0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the affine transform for rendering.
    ///
    /// This transform converts logical coordinates to screen coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Get the inverse transform for input handling.
    ///
    /// This transform converts screen coordinates to logical coordinates.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.offset)
    }

    /// Convert a screen point to logical coordinates.
    pub fn screen_to_logical(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    /// Convert a logical point to screen coordinates.
    pub fn logical_to_screen(&self, logical_point: Point) -> Point {
        self.transform() * logical_point
    }

    /// Pan the camera by a delta in screen coordinates.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Zoom the camera by `factor`, keeping the given screen point fixed.
    ///
    /// The logical point currently under `focus` is still under `focus`
    /// afterwards. Returns `false` without touching the camera when the
    /// factor is degenerate (non-finite or `<= 0`) or when the zoom is
    /// already pinned at the relevant clamp, so callers can disable their
    /// zoom controls at the limits.
    pub fn zoom_at(&mut self, focus: Point, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }

        let new_zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return false;
        }

        // Resolve the focus in logical space before changing the scale.
        let logical_focus = self.screen_to_logical(focus);

        self.zoom = new_zoom;

        // Adjust offset so logical_focus maps back onto focus.
        let new_screen = self.logical_to_screen(logical_focus);
        self.offset += Vec2::new(focus.x - new_screen.x, focus.y - new_screen.y);
        true
    }

    /// Zoom in by one button step, keeping `focus` fixed.
    pub fn zoom_in(&mut self, focus: Point) -> bool {
        self.zoom_at(focus, ZOOM_STEP)
    }

    /// Zoom out by one button step, keeping `focus` fixed.
    pub fn zoom_out(&mut self, focus: Point) -> bool {
        self.zoom_at(focus, 1.0 / ZOOM_STEP)
    }
}
