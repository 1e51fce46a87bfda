//! The stroke capture engine: lifecycle state machine, configuration, and
//! export entry points.
//!
//! All capture and render work happens synchronously on the host's event
//! thread, in response to the three pointer handlers. The engine exclusively
//! owns the per-stroke state (curve fitter, width model, throttle — all
//! reset at each begin), the pixel surface, and the capture history; the
//! host layer only forwards input samples and processes the returned
//! [`Action`]s.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::color::Color;
use crate::consts::{
    DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH, DEFAULT_THROTTLE_INTERVAL_MS,
    DEFAULT_VELOCITY_FILTER_WEIGHT,
};
use crate::curve::{CurveFitter, CurveSegment};
use crate::history::History;
use crate::point::Point;
use crate::render;
use crate::surface::{EncodeError, RasterFormat, Surface};
use crate::svg;
use crate::throttle::Throttle;
use crate::width::{WidthModel, WidthPair};

/// Engine configuration. All fields have sensible defaults; hosts override
/// what they need and pass the result to [`Engine::new`].
#[derive(Debug, Clone)]
pub struct Options {
    /// Weight of the newest velocity sample in the width filter's EMA.
    pub velocity_filter_weight: f64,
    /// Thinnest rendered half-width.
    pub min_width: f64,
    /// Thickest rendered half-width.
    pub max_width: f64,
    /// Minimum milliseconds between fitted move samples; 0 disables.
    pub throttle_interval_ms: i64,
    /// Ink color.
    pub pen_color: Color,
    /// Surface clear color; may be fully transparent.
    pub background_color: Color,
    /// Dot radius for taps; `None` uses the midpoint of the width bounds.
    pub dot_size: Option<f64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            velocity_filter_weight: DEFAULT_VELOCITY_FILTER_WEIGHT,
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            throttle_interval_ms: DEFAULT_THROTTLE_INTERVAL_MS,
            pen_color: Color::BLACK,
            background_color: Color::TRANSPARENT,
            dot_size: None,
        }
    }
}

impl Options {
    /// Effective dot radius: the configured size, or the width midpoint.
    #[must_use]
    pub fn dot_radius(&self) -> f64 {
        self.dot_size
            .unwrap_or((self.min_width + self.max_width) / 2.0)
    }
}

/// Notifications returned from the pointer handlers for the host to process
/// (its equivalent of stroke begin/end callbacks).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A new stroke was opened.
    StrokeBegan,
    /// The active stroke was sealed into the history.
    StrokeEnded,
}

/// Pointer button identifier. Only [`Button::Primary`] (or a single-finger
/// touch) begins a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button or single-finger touch.
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button or secondary touch.
    Secondary,
}

/// Capture lifecycle: one stroke at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureState {
    Idle,
    Drawing,
}

/// One drawable operation produced by replaying a history.
#[derive(Debug, Clone, Copy)]
pub(crate) enum InkOp {
    Segment { segment: CurveSegment, widths: WidthPair },
    Dot { point: Point, radius: f64 },
}

/// Replay a history through a fresh fitter and width model per stroke.
///
/// This is the single source of truth for how persisted points become ink:
/// live capture, raster repaint, and vector export all agree because they
/// all reduce to these operations. Strokes of one or two points never fit a
/// curve and replay as a dot at their first point, matching live capture.
pub(crate) fn replay_ops(history: &History, options: &Options) -> Vec<InkOp> {
    let mut ops = Vec::new();

    for stroke in history.strokes() {
        if stroke.len() > 2 {
            let mut fitter = CurveFitter::new();
            let mut widths = WidthModel::new(
                options.velocity_filter_weight,
                options.min_width,
                options.max_width,
            );
            for &point in &stroke.points {
                if let Some(segment) = fitter.add_point(point) {
                    let pair = widths.width_for(segment.end, segment.start);
                    ops.push(InkOp::Segment { segment, widths: pair });
                }
            }
        } else if let Some(first) = stroke.first() {
            ops.push(InkOp::Dot { point: first, radius: options.dot_radius() });
        }
    }

    ops
}

/// The freehand ink capture engine.
pub struct Engine {
    options: Options,
    surface: Surface,
    history: History,
    fitter: CurveFitter,
    width_model: WidthModel,
    throttle: Throttle,
    state: CaptureState,
}

impl Engine {
    /// Create an engine with a surface of the given pixel dimensions,
    /// cleared to the configured background color.
    #[must_use]
    pub fn new(width: u32, height: u32, options: Options) -> Self {
        let mut surface = Surface::new(width, height);
        surface.clear(options.background_color);

        let width_model = WidthModel::new(
            options.velocity_filter_weight,
            options.min_width,
            options.max_width,
        );
        let throttle = Throttle::new(options.throttle_interval_ms);

        Self {
            options,
            surface,
            history: History::new(),
            fitter: CurveFitter::new(),
            width_model,
            throttle,
            state: CaptureState::Idle,
        }
    }

    // --- Input events ---

    /// Begin a stroke. Ignored unless Idle and the button is primary — a
    /// second concurrent pointer-down while drawing is an expected device
    /// race, not an error, and must not disturb the active stroke.
    pub fn on_pointer_down(&mut self, point: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || self.state == CaptureState::Drawing {
            return Vec::new();
        }

        tracing::debug!(x = point.x, y = point.y, t = point.t, "stroke began");
        self.state = CaptureState::Drawing;
        self.width_model.reset();
        self.fitter.reset();
        self.throttle.reset();
        self.history.begin_stroke();

        // First sample of the stroke fires through the throttle's leading
        // edge, so it is never deferred.
        for sample in self.throttle.submit(point) {
            self.process_point(sample);
        }

        vec![Action::StrokeBegan]
    }

    /// Feed a move sample into the active stroke. No-op while Idle.
    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        if self.state != CaptureState::Drawing {
            return Vec::new();
        }

        for sample in self.throttle.submit(point) {
            self.process_point(sample);
        }

        Vec::new()
    }

    /// Seal the active stroke. No-op while Idle.
    ///
    /// The pending throttled sample (if any) and the final up-position
    /// sample are both processed first — losing the last sample would leave
    /// a visible gap before the stroke end. A stroke that accumulated two
    /// points or fewer drew no curve and is rendered as a dot at its first
    /// point instead (the tap case).
    pub fn on_pointer_up(&mut self, point: Option<Point>) -> Vec<Action> {
        if self.state != CaptureState::Drawing {
            return Vec::new();
        }

        if let Some(pending) = self.throttle.flush() {
            self.process_point(pending);
        }
        if let Some(final_sample) = point {
            self.process_point(final_sample);
        }

        if let Some(stroke) = self.history.active_stroke() {
            let points = stroke.len();
            if points <= 2
                && let Some(first) = stroke.first()
            {
                render::draw_dot(
                    &mut self.surface,
                    first,
                    self.options.dot_radius(),
                    self.options.pen_color,
                );
            }
            tracing::debug!(points, "stroke ended");
        }

        self.state = CaptureState::Idle;
        vec![Action::StrokeEnded]
    }

    // --- Surface / history ---

    /// Clear the surface to the background color and discard all strokes.
    pub fn clear(&mut self) {
        tracing::debug!("surface cleared");
        self.surface.clear(self.options.background_color);
        self.history.clear();
        self.fitter.reset();
        self.width_model.reset();
        self.throttle.reset();
        self.state = CaptureState::Idle;
    }

    /// True until the first disc is painted (and again after [`Engine::clear`]).
    /// Hosts use this to reject empty submissions before exporting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surface.is_empty()
    }

    /// The exportable capture history: the raw, replayable point data.
    /// O(1) — a reference, no recomputation.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Replace the capture with `history` and repaint the surface by
    /// deterministic replay, exactly as live capture would have drawn it.
    pub fn import_history(&mut self, history: History) {
        tracing::debug!(strokes = history.len(), "history imported");
        self.history = history;
        self.state = CaptureState::Idle;
        self.repaint();
    }

    /// Repaint the surface from the engine's own history (e.g. after the
    /// host resizes or migrates the surface).
    pub fn redraw(&mut self) {
        self.repaint();
    }

    /// Read-only view of the pixel surface, for host blitting.
    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Current configuration.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    // --- Export ---

    /// Encode the surface in the requested raster format. An empty capture
    /// yields a valid, blank image.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if the underlying encoder fails.
    pub fn export_raster(&self, format: RasterFormat) -> Result<Vec<u8>, EncodeError> {
        tracing::debug!(?format, "raster export");
        self.surface.encode(format)
    }

    /// Export the capture as an SVG document, base64-encoded as a data URI.
    /// An empty capture yields a valid document with no drawable elements.
    #[must_use]
    pub fn export_vector(&self) -> String {
        tracing::debug!(strokes = self.history.len(), "vector export");
        svg::data_uri(
            &self.history,
            &self.options,
            self.surface.width(),
            self.surface.height(),
        )
    }

    // --- Internals ---

    /// Append a raw point to the active stroke, feed the fitter, and paint
    /// the emitted segment, if any.
    fn process_point(&mut self, point: Point) {
        if let Some(stroke) = self.history.active_stroke() {
            stroke.push(point);
        }

        if let Some(segment) = self.fitter.add_point(point) {
            // The segment's endpoints are the velocity-defining pair.
            let widths = self.width_model.width_for(segment.end, segment.start);
            render::draw_segment(&mut self.surface, &segment, widths, self.options.pen_color);
        }
    }

    /// Clear and redraw everything from the raw point history.
    fn repaint(&mut self) {
        self.surface.clear(self.options.background_color);
        for op in replay_ops(&self.history, &self.options) {
            match op {
                InkOp::Segment { segment, widths } => {
                    render::draw_segment(&mut self.surface, &segment, widths, self.options.pen_color);
                }
                InkOp::Dot { point, radius } => {
                    render::draw_dot(&mut self.surface, point, radius, self.options.pen_color);
                }
            }
        }
    }
}
