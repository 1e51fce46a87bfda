//! Rasterization: turns curve segments and dots into painted discs.
//!
//! The variable-width ink effect is an accumulation of filled discs along
//! the Bézier path, with the disc radius interpolated between the segment's
//! start and end half-widths. Functions here receive read-only geometry and
//! a mutable surface — they never touch engine state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::color::Color;
use crate::curve::CurveSegment;
use crate::point::Point;
use crate::surface::Surface;
use crate::width::WidthPair;

/// Paint one curve segment as a run of overlapping discs.
///
/// Steps parametrically in `floor(approx_length)` increments; the length
/// heuristic over-estimates arc length, so consecutive discs overlap and
/// the run reads as a single solid ribbon. Degenerate segments (non-finite
/// control points, zero length) paint nothing.
pub fn draw_segment(surface: &mut Surface, segment: &CurveSegment, widths: WidthPair, color: Color) {
    let length = segment.approx_length();
    if !length.is_finite() {
        return;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = length.floor() as usize;

    for i in 0..steps {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f64 / steps as f64;
        let pos = segment.point_at(t);
        surface.fill_disc(pos.x, pos.y, widths.at(t), color);
    }
}

/// Paint an isolated dot (a tap or a stroke too short to fit a curve).
pub fn draw_dot(surface: &mut Surface, point: Point, radius: f64, color: Color) {
    surface.fill_disc(point.x, point.y, radius, color);
}
