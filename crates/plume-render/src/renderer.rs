//! Software raster renderer for sketches.
//!
//! Strokes are resolved to screen space through the camera, smoothed, and
//! rasterized in z-order onto a transparent ink layer: pencil strokes
//! paint with `SourceOver`, eraser strokes cut with `DestinationOut` so
//! they remove ink without depositing any. The finished layer is then
//! composited over the opaque paper color, which is what makes erased
//! areas read as paper instead of holes in the image.
//!
//! Only the strokes in the given sketch are drawn. While a gesture is
//! live the engine's open stroke is not in the sketch yet; hosts draw it
//! on top (or include it in the sketch they pass) so the line shows
//! before it commits.

use kurbo::PathEl;
use plume_core::camera::Camera;
use plume_core::sketch::Sketch;
use plume_core::stroke::{Color, Stroke, StrokeKind};
use thiserror::Error;
use tiny_skia::{
    BlendMode, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint,
    Stroke as StrokeStyle, Transform,
};

use crate::path::{SMOOTHING_TENSION, smooth_path};

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render target size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("PNG encoding failed: {0}")]
    PngEncode(#[from] png::EncodingError),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Parameters for a render pass.
#[derive(Debug, Clone)]
pub struct RenderParams {
    /// Target width in physical pixels.
    pub width: u32,
    /// Target height in physical pixels.
    pub height: u32,
    /// Opaque paper color behind the ink; erasers expose it.
    pub background: Color,
}

impl RenderParams {
    /// Create parameters for a target size with the default paper color.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Color::from_rgb8(0xFA, 0xFA, 0xFA),
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }
}

/// Software renderer turning a sketch plus a camera into pixels.
pub struct SketchRenderer {
    params: RenderParams,
}

impl SketchRenderer {
    /// Create a renderer for the given target parameters.
    pub fn new(params: RenderParams) -> Self {
        Self { params }
    }

    /// The parameters this renderer was created with.
    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    /// Render the sketch as seen through `camera`.
    pub fn render(&self, sketch: &Sketch, camera: &Camera) -> RenderResult<Pixmap> {
        let RenderParams {
            width,
            height,
            background,
        } = self.params;

        let mut ink = Pixmap::new(width, height)
            .ok_or(RenderError::InvalidSize { width, height })?;
        for stroke in &sketch.strokes {
            draw_stroke(&mut ink, stroke, camera);
        }

        let mut surface = Pixmap::new(width, height)
            .ok_or(RenderError::InvalidSize { width, height })?;
        surface.fill(to_skia_color(background));
        surface.draw_pixmap(
            0,
            0,
            ink.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );

        Ok(surface)
    }
}

/// Rasterize one stroke onto the ink layer.
fn draw_stroke(layer: &mut Pixmap, stroke: &Stroke, camera: &Camera) {
    if stroke.points.is_empty() {
        return;
    }

    // Resolve geometry to screen space up front; the on-screen width is
    // the logical width scaled by the zoom.
    let screen: Vec<kurbo::Point> = stroke
        .points
        .iter()
        .map(|p| camera.logical_to_screen(*p))
        .collect();
    let width = (stroke.width * camera.zoom) as f32;

    let mut paint = Paint::default();
    paint.set_color_rgba8(stroke.color.r, stroke.color.g, stroke.color.b, stroke.color.a);
    paint.anti_alias = true;
    paint.blend_mode = match stroke.kind {
        StrokeKind::Pencil => BlendMode::SourceOver,
        StrokeKind::Eraser => BlendMode::DestinationOut,
    };

    if screen.len() == 1 {
        // A zero-length gesture leaves a round dot of the brush footprint.
        let center = screen[0];
        let mut builder = PathBuilder::new();
        builder.push_circle(center.x as f32, center.y as f32, (width / 2.0).max(0.5));
        if let Some(circle) = builder.finish() {
            layer.fill_path(&circle, &paint, FillRule::Winding, Transform::identity(), None);
        }
        return;
    }

    let Some(path) = to_skia_path(&smooth_path(&screen, SMOOTHING_TENSION)) else {
        return;
    };
    let style = StrokeStyle {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..StrokeStyle::default()
    };
    layer.stroke_path(&path, &paint, &style, Transform::identity(), None);
}

fn to_skia_path(path: &kurbo::BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => {
                builder.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32)
            }
            PathEl::CurveTo(c1, c2, p) => builder.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

fn to_skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use plume_core::stroke::Color;

    fn two_point_stroke(kind: StrokeKind, color: Color, width: f64, from: Point, to: Point) -> Stroke {
        let mut stroke = Stroke::begin(kind, color, width, from);
        stroke.push_point(to);
        stroke
    }

    fn pixel_rgba(pixmap: &Pixmap, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let p = pixmap.pixel(x, y).unwrap().demultiply();
        (p.red(), p.green(), p.blue(), p.alpha())
    }

    #[test]
    fn test_empty_sketch_renders_paper() {
        let renderer = SketchRenderer::new(RenderParams::new(20, 20));
        let pixmap = renderer.render(&Sketch::new(), &Camera::new()).unwrap();

        assert_eq!(pixel_rgba(&pixmap, 0, 0), (0xFA, 0xFA, 0xFA, 255));
        assert_eq!(pixel_rgba(&pixmap, 19, 19), (0xFA, 0xFA, 0xFA, 255));
    }

    #[test]
    fn test_zero_sized_target_is_an_error() {
        let renderer = SketchRenderer::new(RenderParams::new(0, 10));
        let result = renderer.render(&Sketch::new(), &Camera::new());
        assert!(matches!(
            result,
            Err(RenderError::InvalidSize { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_pencil_stroke_paints_its_color() {
        let mut sketch = Sketch::new();
        sketch.push(two_point_stroke(
            StrokeKind::Pencil,
            Color::PINK,
            4.0,
            Point::new(2.0, 10.0),
            Point::new(18.0, 10.0),
        ));

        let renderer = SketchRenderer::new(RenderParams::new(20, 20));
        let pixmap = renderer.render(&sketch, &Camera::new()).unwrap();

        // Center of a 4px-wide line is fully covered.
        assert_eq!(pixel_rgba(&pixmap, 10, 10), (0xFF, 0x3B, 0x7B, 255));
        // Far from the line it is still paper.
        assert_eq!(pixel_rgba(&pixmap, 10, 2), (0xFA, 0xFA, 0xFA, 255));
    }

    #[test]
    fn test_eraser_cuts_back_to_paper() {
        let mut sketch = Sketch::new();
        sketch.push(two_point_stroke(
            StrokeKind::Pencil,
            Color::INK,
            6.0,
            Point::new(2.0, 10.0),
            Point::new(18.0, 10.0),
        ));
        sketch.push(two_point_stroke(
            StrokeKind::Eraser,
            Color::ERASER_MARKER,
            6.0,
            Point::new(10.0, 2.0),
            Point::new(10.0, 18.0),
        ));

        let renderer = SketchRenderer::new(RenderParams::new(20, 20));
        let pixmap = renderer.render(&sketch, &Camera::new()).unwrap();

        // Where the eraser crossed the line, the paper shows through; the
        // eraser never deposits its own marker color.
        assert_eq!(pixel_rgba(&pixmap, 10, 10), (0xFA, 0xFA, 0xFA, 255));
        // Ink away from the crossing is untouched.
        assert_eq!(pixel_rgba(&pixmap, 4, 10), (0x2B, 0x2B, 0x2B, 255));
    }

    #[test]
    fn test_single_point_stroke_draws_a_dot() {
        let mut sketch = Sketch::new();
        sketch.push(Stroke::begin(
            StrokeKind::Pencil,
            Color::BLUE,
            8.0,
            Point::new(10.0, 10.0),
        ));

        let renderer = SketchRenderer::new(RenderParams::new(20, 20));
        let pixmap = renderer.render(&sketch, &Camera::new()).unwrap();

        assert_eq!(pixel_rgba(&pixmap, 10, 10), (0x00, 0xC2, 0xFF, 255));
        assert_eq!(pixel_rgba(&pixmap, 18, 18), (0xFA, 0xFA, 0xFA, 255));
    }

    #[test]
    fn test_camera_transform_places_and_scales_strokes() {
        let mut sketch = Sketch::new();
        // Logical y = 5, width 3; at zoom 2 this lands at screen y = 10
        // with an on-screen width of 6.
        sketch.push(two_point_stroke(
            StrokeKind::Pencil,
            Color::GREEN,
            3.0,
            Point::new(1.0, 5.0),
            Point::new(9.0, 5.0),
        ));

        let mut camera = Camera::new();
        camera.zoom = 2.0;

        let renderer = SketchRenderer::new(RenderParams::new(20, 20));
        let pixmap = renderer.render(&sketch, &camera).unwrap();

        assert_eq!(pixel_rgba(&pixmap, 10, 10), (0x4A, 0xDE, 0x80, 255));
        // At zoom 1 the same logical line would sit at y = 5; after the
        // zoom nothing covers that row's far edge.
        assert_eq!(pixel_rgba(&pixmap, 10, 2), (0xFA, 0xFA, 0xFA, 255));
    }

    #[test]
    fn test_z_order_later_stroke_wins() {
        let mut sketch = Sketch::new();
        sketch.push(two_point_stroke(
            StrokeKind::Pencil,
            Color::INK,
            6.0,
            Point::new(2.0, 10.0),
            Point::new(18.0, 10.0),
        ));
        sketch.push(two_point_stroke(
            StrokeKind::Pencil,
            Color::YELLOW,
            6.0,
            Point::new(2.0, 10.0),
            Point::new(18.0, 10.0),
        ));

        let renderer = SketchRenderer::new(RenderParams::new(20, 20));
        let pixmap = renderer.render(&sketch, &Camera::new()).unwrap();

        assert_eq!(pixel_rgba(&pixmap, 10, 10), (0xFF, 0xD6, 0x00, 255));
    }
}
