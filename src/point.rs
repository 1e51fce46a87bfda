//! Timestamped 2D pointer samples.
//!
//! A [`Point`] is one raw sample delivered by the host's pointer source,
//! already translated into surface-local coordinates. Points are immutable
//! value types; they are never compared by identity, only through derived
//! distance and velocity.

#[cfg(test)]
#[path = "point_test.rs"]
mod point_test;

use serde::{Deserialize, Serialize};

use crate::curve::Vec2;

/// One pointer sample: surface-local position plus a millisecond timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Sample timestamp in milliseconds (host clock).
    pub t: i64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64, t: i64) -> Self {
        Self { x, y, t }
    }

    /// Position without the timestamp.
    #[must_use]
    pub fn pos(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Euclidean distance to another sample.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Speed of travel from `other` to `self`, in pixels per millisecond.
    ///
    /// When both samples carry the same timestamp the velocity degenerates
    /// to exactly `1.0`. This guards the division, not physical accuracy:
    /// coalesced events with equal timestamps are expected from real
    /// pointer sources and must not poison the width filter.
    #[must_use]
    pub fn velocity_from(self, other: Self) -> f64 {
        if self.t == other.t {
            1.0
        } else {
            self.distance_to(other) / (self.t - other.t) as f64
        }
    }
}
