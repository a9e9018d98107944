//! Tool selection state: which tool is active, with what color and widths.
//!
//! Pure configuration. The toolbar mutates it through plain setters and the
//! drawing engine reads it once when a stroke opens; nothing here has a
//! state machine or failure mode. The constant sets are what the toolbar
//! offers, not a validation gate (widths are valid by construction
//! upstream).

use serde::{Deserialize, Serialize};

use crate::stroke::{Color, StrokeKind};

/// Pencil widths offered by the toolbar, in screen pixels.
pub const PENCIL_WIDTHS: [f64; 5] = [2.0, 4.0, 6.0, 8.0, 12.0];

/// Eraser widths offered by the toolbar, in screen pixels.
pub const ERASER_WIDTHS: [f64; 12] = [
    2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0,
];

/// The drawing palette offered by the toolbar.
pub const PALETTE: [Color; 5] = [
    Color::INK,
    Color::PINK,
    Color::BLUE,
    Color::YELLOW,
    Color::GREEN,
];

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tool {
    #[default]
    Pencil,
    Eraser,
    Pan,
}

impl Tool {
    /// The stroke kind this tool produces, if any. Panning moves the
    /// viewport and records nothing.
    pub fn stroke_kind(&self) -> Option<StrokeKind> {
        match self {
            Tool::Pencil => Some(StrokeKind::Pencil),
            Tool::Eraser => Some(StrokeKind::Eraser),
            Tool::Pan => None,
        }
    }
}

/// Current tool selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toolbox {
    /// Currently selected tool.
    pub tool: Tool,
    /// Ink color for new pencil strokes.
    pub color: Color,
    /// Pencil width in screen pixels, as picked from [`PENCIL_WIDTHS`].
    pub pencil_width: f64,
    /// Eraser width in screen pixels, as picked from [`ERASER_WIDTHS`].
    pub eraser_width: f64,
}

impl Default for Toolbox {
    fn default() -> Self {
        Self {
            tool: Tool::Pencil,
            color: Color::INK,
            pencil_width: 2.0,
            eraser_width: 2.0,
        }
    }
}

impl Toolbox {
    /// Create a toolbox with the default pencil selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a tool.
    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Select the ink color for new pencil strokes.
    pub fn select_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Select the pencil width (screen pixels).
    pub fn select_pencil_width(&mut self, width: f64) {
        self.pencil_width = width;
    }

    /// Select the eraser width (screen pixels).
    pub fn select_eraser_width(&mut self, width: f64) {
        self.eraser_width = width;
    }

    /// The width the active tool would draw with, in screen pixels.
    pub fn active_width(&self) -> f64 {
        match self.tool {
            Tool::Eraser => self.eraser_width,
            _ => self.pencil_width,
        }
    }
}
