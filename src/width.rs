//! Velocity-to-stroke-width model.
//!
//! Maps instantaneous pointer velocity to a rendered half-width: faster
//! motion draws a thinner line. Velocity is smoothed with an exponential
//! moving average so per-sample jitter does not show up as width flicker.
//! The model carries two scalars (`last_velocity`, `last_width`) across
//! calls and is reset at the start of every stroke.

#[cfg(test)]
#[path = "width_test.rs"]
mod width_test;

use crate::point::Point;

/// The two end half-widths of ink rendered along one curve segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthPair {
    pub start: f64,
    pub end: f64,
}

impl WidthPair {
    /// Interpolated half-width at parameter `t` in `[0, 1]` along a segment.
    ///
    /// Deliberately cubic in `t`, not linear: the width change is biased
    /// toward the segment's end point. Calibration behavior preserved from
    /// the raster renderer; do not linearize.
    #[must_use]
    pub fn at(self, t: f64) -> f64 {
        self.start + t.powi(3) * (self.end - self.start)
    }
}

/// Stateful velocity filter producing one [`WidthPair`] per curve segment.
#[derive(Debug, Clone)]
pub struct WidthModel {
    velocity_filter_weight: f64,
    min_width: f64,
    max_width: f64,
    last_velocity: f64,
    last_width: f64,
}

impl WidthModel {
    #[must_use]
    pub fn new(velocity_filter_weight: f64, min_width: f64, max_width: f64) -> Self {
        let mut model = Self {
            velocity_filter_weight,
            min_width,
            max_width,
            last_velocity: 0.0,
            last_width: 0.0,
        };
        model.reset();
        model
    }

    /// Restore the carried state for a new stroke: zero velocity, width at
    /// the midpoint of the configured bounds.
    pub fn reset(&mut self) {
        self.last_velocity = 0.0;
        self.last_width = (self.min_width + self.max_width) / 2.0;
    }

    /// Half-width when velocity plays no part (taps and single-point strokes).
    #[must_use]
    pub fn midpoint_width(&self) -> f64 {
        (self.min_width + self.max_width) / 2.0
    }

    /// Compute the width pair for a segment ending at `new_point`, having
    /// started at `prior_point`, then advance the carried state.
    pub fn width_for(&mut self, new_point: Point, prior_point: Point) -> WidthPair {
        let velocity = self.velocity_filter_weight * new_point.velocity_from(prior_point)
            + (1.0 - self.velocity_filter_weight) * self.last_velocity;

        // The +1 bounds the width at max_width when the pointer is still.
        let new_width = (self.max_width / (velocity + 1.0)).max(self.min_width);

        let pair = WidthPair { start: self.last_width, end: new_width };
        self.last_velocity = velocity;
        self.last_width = new_width;
        pair
    }
}
