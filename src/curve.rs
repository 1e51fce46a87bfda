//! Cubic Bézier segments and the sliding-window curve fitter.
//!
//! The fitter consumes the raw points of one stroke, one at a time, and
//! emits smooth cubic segments using a Catmull-Rom-style midpoint
//! construction over a window of the four most recent points. Curves are
//! never persisted — only raw points are — so fitting must be fully
//! deterministic: replaying the same point sequence through a fresh fitter
//! reproduces the same segments, which is what makes vector re-export and
//! resize-safe redraw possible.

#[cfg(test)]
#[path = "curve_test.rs"]
mod curve_test;

use crate::point::Point;

/// A position or displacement in surface coordinates, without a timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One cubic Bézier patch of a stroke: two on-curve endpoints (raw samples)
/// and two derived control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment {
    pub start: Point,
    pub c1: Vec2,
    pub c2: Vec2,
    pub end: Point,
}

impl CurveSegment {
    /// Position at parameter `t` in `[0, 1]` via the cubic Bernstein form.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Vec2 {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Vec2::new(
            b0 * self.start.x + b1 * self.c1.x + b2 * self.c2.x + b3 * self.end.x,
            b0 * self.start.y + b1 * self.c1.y + b2 * self.c2.y + b3 * self.end.y,
        )
    }

    /// Cheap arc-length estimate: chord length plus control-polygon length.
    ///
    /// Over-estimates the true length (roughly 2x for gentle curves), which
    /// the renderer relies on for its disc-step count — the oversampling is
    /// what keeps adjacent discs overlapping.
    #[must_use]
    pub fn approx_length(&self) -> f64 {
        let chord = self.start.pos().distance_to(self.end.pos());
        let polygon = self.start.pos().distance_to(self.c1)
            + self.c1.distance_to(self.c2)
            + self.c2.distance_to(self.end.pos());
        chord + polygon
    }

    /// Whether all four control points are finite. Discontinuous or
    /// degenerate input (coincident samples) can produce NaN control
    /// points; such segments have no visual meaning and are skipped by the
    /// vector exporter.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.start.pos().is_finite()
            && self.c1.is_finite()
            && self.c2.is_finite()
            && self.end.pos().is_finite()
    }
}

/// Catmull-Rom-style control points for the middle point of a triple.
///
/// Midpoints of the two chords are blended by relative chord length, then
/// translated so the blend lands on `s2`; the translated midpoints become
/// the incoming (`c1`) and outgoing (`c2`) control points at `s2`.
fn control_points(s1: Vec2, s2: Vec2, s3: Vec2) -> (Vec2, Vec2) {
    let m1 = s1.midpoint(s2);
    let m2 = s2.midpoint(s3);
    let l1 = s1.distance_to(s2);
    let l2 = s2.distance_to(s3);

    // NaN when all three points coincide; callers skip non-finite segments.
    let k = l2 / (l1 + l2);
    let cm = Vec2::new(m2.x + (m1.x - m2.x) * k, m2.y + (m1.y - m2.y) * k);

    let tx = s2.x - cm.x;
    let ty = s2.y - cm.y;
    (
        Vec2::new(m1.x + tx, m1.y + ty),
        Vec2::new(m2.x + tx, m2.y + ty),
    )
}

/// Sliding-window fitter for the points of one active stroke.
#[derive(Debug, Clone, Default)]
pub struct CurveFitter {
    /// Up to four most recent raw points of the current stroke.
    window: Vec<Point>,
    /// Raw points seen since the last reset, before any duplication.
    seen: usize,
}

impl CurveFitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the window at the start of a new stroke.
    pub fn reset(&mut self) {
        self.window.clear();
        self.seen = 0;
    }

    /// Feed the next raw point; returns the newly drawable segment, if any.
    ///
    /// On the third point ever seen the first point is duplicated to the
    /// front of the window, so short strokes start emitting one point
    /// earlier than the four-point window would otherwise allow (avoids a
    /// visible initial lag, and makes three-point strokes drawable at all).
    pub fn add_point(&mut self, point: Point) -> Option<CurveSegment> {
        self.window.push(point);
        self.seen += 1;

        if self.seen == 3 {
            self.window.insert(0, self.window[0]);
        }
        if self.window.len() < 4 {
            return None;
        }

        // Outgoing control at window[1] and incoming control at window[2]:
        // the segment spans the middle two points of the window.
        let (_, outgoing) = control_points(
            self.window[0].pos(),
            self.window[1].pos(),
            self.window[2].pos(),
        );
        let (incoming, _) = control_points(
            self.window[1].pos(),
            self.window[2].pos(),
            self.window[3].pos(),
        );
        let segment = CurveSegment {
            start: self.window[1],
            c1: outgoing,
            c2: incoming,
            end: self.window[2],
        };

        // Keep the window at four points for the next call.
        self.window.remove(0);
        Some(segment)
    }
}
