//! Trailing-edge rate limiter for high-frequency move samples.
//!
//! Pointer sources can deliver hundreds of samples per second; fitting and
//! rasterizing every one is wasted work. The throttle caps processing at one
//! sample per configured interval while preserving the two samples that
//! matter visually: the first of a burst (fires immediately, so ink appears
//! with no lag) and the last before pointer-up (released by [`Throttle::flush`],
//! so the stroke never ends short of the pointer).
//!
//! The engine is synchronous and event-driven with no background timers, so
//! the throttle is clocked by the timestamps the samples themselves carry:
//! a coalesced sample is released by the next arriving event or by the
//! end-of-stroke flush, never by a timer.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

use crate::point::Point;

/// Explicit throttle state: the last fire time and a single pending slot.
///
/// At most one deferred sample is ever outstanding; newer samples inside
/// the interval replace it (trailing-edge coalescing).
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: i64,
    last_fire_t: Option<i64>,
    pending: Option<Point>,
}

impl Throttle {
    /// An interval of zero (or less) disables throttling entirely.
    #[must_use]
    pub fn new(interval_ms: i64) -> Self {
        Self { interval_ms, last_fire_t: None, pending: None }
    }

    /// Forget all timing state at the start of a new stroke.
    pub fn reset(&mut self) {
        self.last_fire_t = None;
        self.pending = None;
    }

    /// Offer a sample; returns the samples to process now, oldest first.
    ///
    /// Returns the coalesced pending sample (if its interval has elapsed)
    /// followed by `point`, just `point` (leading edge or disabled), or
    /// nothing when `point` was deferred into the pending slot.
    pub fn submit(&mut self, point: Point) -> Vec<Point> {
        if self.interval_ms <= 0 {
            return vec![point];
        }

        match self.last_fire_t {
            Some(last) if point.t - last < self.interval_ms => {
                self.pending = Some(point);
                Vec::new()
            }
            _ => {
                let mut released: Vec<Point> = self.pending.take().into_iter().collect();
                released.push(point);
                self.last_fire_t = Some(point.t);
                released
            }
        }
    }

    /// Release the pending sample, if any. Called at stroke end so the
    /// final pre-up sample is never dropped.
    pub fn flush(&mut self) -> Option<Point> {
        self.pending.take()
    }
}
