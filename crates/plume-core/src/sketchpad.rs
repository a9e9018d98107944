//! The sketchpad: the drawing engine tying everything together.
//!
//! Owns the live sketch, the camera, the toolbox, the history timeline,
//! and the in-progress gesture. Pointer events come in as screen
//! coordinates; the sketchpad resolves them to logical space, feeds the
//! open stroke, and commits a whole-canvas snapshot when the gesture ends.
//! Undo, redo, and clear replace the stroke list wholesale from history.
//!
//! Everything here is synchronous and infallible. Boundary conditions
//! (undo at the oldest entry, clear during a live gesture) are reported as
//! `bool` so toolbar controls can disable themselves; nothing raises.

use kurbo::{Point, Vec2};

use crate::camera::{Camera, WHEEL_ZOOM_STEP};
use crate::history::History;
use crate::input::PointerEvent;
use crate::sketch::Sketch;
use crate::stroke::{Color, Stroke};
use crate::toolbox::{Tool, Toolbox};

/// State of the current pointer gesture.
#[derive(Debug, Clone, Default)]
pub enum Gesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A stroke is being captured. The open stroke lives here, exclusively
    /// owned; it reaches the sketch (and history) only when the gesture
    /// ends, so no committed snapshot can alias it.
    Drawing {
        /// The stroke under construction.
        stroke: Stroke,
    },
    /// The canvas is being dragged.
    Panning {
        /// Screen position of the previous pointer event.
        last: Point,
    },
}

/// The drawing engine.
pub struct Sketchpad {
    /// View transform, shared with the host for rendering and zoom buttons.
    pub camera: Camera,
    /// Tool selection, mutated by the toolbar through its setters.
    pub toolbox: Toolbox,
    sketch: Sketch,
    history: History,
    gesture: Gesture,
    /// Last known pointer position in screen coordinates, for the eraser
    /// cursor ring. `None` once the pointer leaves the surface.
    hover: Option<Point>,
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketchpad {
    /// Create a sketchpad over an empty canvas.
    ///
    /// The empty canvas is itself the history origin entry, so the
    /// timeline is valid from the start.
    pub fn new() -> Self {
        Self {
            camera: Camera::new(),
            toolbox: Toolbox::new(),
            sketch: Sketch::new(),
            history: History::new(&[]),
            gesture: Gesture::Idle,
            hover: None,
        }
    }

    /// The live document.
    pub fn sketch(&self) -> &Sketch {
        &self.sketch
    }

    /// Whether a stroke is currently being captured.
    pub fn is_drawing(&self) -> bool {
        matches!(self.gesture, Gesture::Drawing { .. })
    }

    /// The stroke currently being captured, while a drawing gesture is
    /// live. It is not part of [`sketch`](Self::sketch) until the gesture
    /// ends, so hosts render it on top of the committed strokes to show
    /// the line as it is drawn.
    pub fn open_stroke(&self) -> Option<&Stroke> {
        match &self.gesture {
            Gesture::Drawing { stroke } => Some(stroke),
            Gesture::Panning { .. } | Gesture::Idle => None,
        }
    }

    /// Dispatch a raw pointer event.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position } => self.pointer_up(position),
            PointerEvent::Leave => self.pointer_leave(),
            PointerEvent::Scroll { position, delta } => {
                // Scrolling up zooms in at the pointer, down zooms out.
                if delta.y < 0.0 {
                    self.camera.zoom_at(position, WHEEL_ZOOM_STEP);
                } else if delta.y > 0.0 {
                    self.camera.zoom_at(position, 1.0 / WHEEL_ZOOM_STEP);
                }
            }
        }
    }

    /// Begin a gesture at a screen position.
    ///
    /// With a drawing tool this opens a stroke, capturing the toolbox
    /// selection as it stands right now; later toolbox changes do not
    /// touch the open stroke. With the pan tool it starts dragging the
    /// camera. A `Down` while a gesture is already live is dropped.
    pub fn pointer_down(&mut self, position: Point) {
        self.hover = Some(position);

        if !matches!(self.gesture, Gesture::Idle) {
            return;
        }

        match self.toolbox.tool.stroke_kind() {
            Some(kind) => {
                let color = if kind.is_eraser() {
                    Color::ERASER_MARKER
                } else {
                    self.toolbox.color
                };
                // Selected widths are screen pixels; dividing by the zoom
                // keeps the on-screen brush size constant at the zoom
                // level the stroke is drawn at.
                let width = self.toolbox.active_width() / self.camera.zoom;
                let first = self.camera.screen_to_logical(position);

                let stroke = Stroke::begin(kind, color, width, first);
                log::debug!("stroke {} opened ({:?})", stroke.id, kind);
                self.gesture = Gesture::Drawing { stroke };
            }
            None => {
                self.gesture = Gesture::Panning { last: position };
            }
        }
    }

    /// Continue the current gesture at a screen position.
    pub fn pointer_move(&mut self, position: Point) {
        self.hover = Some(position);

        match &mut self.gesture {
            Gesture::Drawing { stroke } => {
                stroke.push_point(self.camera.screen_to_logical(position));
            }
            Gesture::Panning { last } => {
                let delta = Vec2::new(position.x - last.x, position.y - last.y);
                self.camera.pan(delta);
                *last = position;
            }
            Gesture::Idle => {}
        }
    }

    /// End the current gesture.
    ///
    /// A drawing gesture freezes its stroke, appends it to the sketch, and
    /// commits the whole canvas to history. This holds even for a
    /// zero-length click: the one-point stroke is committed (it renders as
    /// a dot or nothing, but the down/up pair stays undoable). A pan ends
    /// with no commit.
    pub fn pointer_up(&mut self, position: Point) {
        self.hover = Some(position);
        self.finish_gesture();
    }

    /// Handle the pointer leaving the surface: ends a live gesture exactly
    /// like `pointer_up` at the last known position, then drops hover
    /// tracking.
    pub fn pointer_leave(&mut self) {
        self.finish_gesture();
        self.hover = None;
    }

    fn finish_gesture(&mut self) {
        match std::mem::take(&mut self.gesture) {
            Gesture::Drawing { stroke } => {
                log::debug!("stroke {} committed with {} points", stroke.id, stroke.len());
                self.sketch.push(stroke);
                self.history.commit(&self.sketch.strokes);
            }
            Gesture::Panning { .. } | Gesture::Idle => {}
        }
    }

    /// Discard the current gesture without committing anything.
    ///
    /// For blur/interrupt events. Returns `true` if a gesture was live.
    pub fn cancel_gesture(&mut self) -> bool {
        match std::mem::take(&mut self.gesture) {
            Gesture::Drawing { stroke } => {
                log::debug!("stroke {} cancelled", stroke.id);
                true
            }
            Gesture::Panning { .. } => true,
            Gesture::Idle => false,
        }
    }

    /// Step back one history entry. Returns `false` at the oldest entry.
    ///
    /// Legal while a gesture is live: only committed snapshots move, the
    /// open stroke stays open on top of the restored canvas and will be
    /// committed with it.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(entry) => {
                self.sketch.strokes = entry.to_vec();
                true
            }
            None => false,
        }
    }

    /// Step forward one history entry. Returns `false` at the newest.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(entry) => {
                self.sketch.strokes = entry.to_vec();
                true
            }
            None => false,
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Empty the canvas as an undoable action.
    ///
    /// Clearing commits an empty snapshot rather than resetting the
    /// timeline, so an undo brings the pre-clear canvas back. Refused
    /// (returns `false`) while a gesture is live.
    pub fn clear(&mut self) -> bool {
        if !matches!(self.gesture, Gesture::Idle) {
            log::warn!("clear refused while a gesture is live");
            return false;
        }

        self.sketch.clear();
        self.history.commit(&self.sketch.strokes);
        true
    }

    /// Append pre-built strokes (the decorative starter scene) as one
    /// undoable commit, through the same path a finished gesture takes.
    /// Refused while a gesture is live.
    pub fn seed_starter(&mut self, strokes: Vec<Stroke>) -> bool {
        if !matches!(self.gesture, Gesture::Idle) {
            return false;
        }

        log::info!("seeding {} starter strokes", strokes.len());
        for stroke in strokes {
            self.sketch.push(stroke);
        }
        self.history.commit(&self.sketch.strokes);
        true
    }

    /// Geometry for the eraser cursor ring: screen center and radius,
    /// while the eraser tool is selected and the pointer is on the
    /// surface. The ring mirrors the on-screen footprint of the eraser,
    /// so the radius is half the selected width, in screen pixels.
    pub fn eraser_cursor(&self) -> Option<(Point, f64)> {
        if self.toolbox.tool != Tool::Eraser {
            return None;
        }
        self.hover.map(|center| (center, self.toolbox.eraser_width / 2.0))
    }

    /// Number of entries in the history timeline.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
