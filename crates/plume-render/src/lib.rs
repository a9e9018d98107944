//! Plume Render Library
//!
//! Software rasterizer for Plume sketches. Strokes are smoothed into
//! cardinal splines and rendered with tiny-skia; finished frames can be
//! encoded as PNG for export.

mod export;
mod path;
mod renderer;

pub use export::encode_png;
pub use path::{SMOOTHING_TENSION, smooth_path};
pub use renderer::{RenderError, RenderParams, RenderResult, SketchRenderer};
