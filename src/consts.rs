//! Shared defaults and calibration constants for the ink engine.

// ── Width model ─────────────────────────────────────────────────

/// Weight of the newest velocity sample in the exponential moving average.
pub const DEFAULT_VELOCITY_FILTER_WEIGHT: f64 = 0.7;

/// Thinnest rendered half-width, reached at high pointer velocity.
pub const DEFAULT_MIN_WIDTH: f64 = 0.5;

/// Thickest rendered half-width, reached when the pointer is stationary.
pub const DEFAULT_MAX_WIDTH: f64 = 2.5;

// ── Throttle ────────────────────────────────────────────────────

/// Default move-sample throttle interval in milliseconds. Zero disables
/// throttling: every sample reaches the curve fitter.
pub const DEFAULT_THROTTLE_INTERVAL_MS: i64 = 0;

// ── Vector export ───────────────────────────────────────────────

/// Multiplier from a segment's end half-width to the SVG `stroke-width`.
///
/// Empirical calibration reconciling the filled-disc raster rendering with a
/// stroked-path vector equivalent. Do not assume it generalizes to other
/// width ranges.
pub const SVG_WIDTH_SCALE: f64 = 2.25;
