//! Freehand ink capture and rendering engine.
//!
//! This crate turns a stream of timestamped pointer samples into smooth,
//! variable-width ink strokes. The host layer is responsible only for wiring
//! its input source (mouse, touch, replayed traces) to the engine and for
//! deciding what to do with the [`engine::Action`]s the handlers return; the
//! engine owns everything in between: the begin/move/end stroke lifecycle,
//! velocity-based width modulation, cubic-curve fitting over a sliding
//! window of raw points, rasterization onto an in-process pixel surface, and
//! export of the capture as raster bytes, an SVG data URI, or the raw point
//! history for application-level persistence.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Stroke capture state machine, [`engine::Options`], export entry points |
//! | [`point`] | Timestamped 2D samples with distance/velocity |
//! | [`width`] | Velocity-to-stroke-width model (exponential smoothing) |
//! | [`curve`] | Cubic Bézier segments and the 4-point curve fitter |
//! | [`throttle`] | Trailing-edge rate limiter for move samples |
//! | [`history`] | Per-stroke point lists and the serializable capture history |
//! | [`surface`] | Software RGBA pixel surface and raster encoding |
//! | [`render`] | Segment/dot rasterization onto a surface |
//! | [`svg`] | Vector re-export of the capture history |
//! | [`color`] | RGBA color values |
//! | [`consts`] | Shared defaults and calibration constants |

pub mod color;
pub mod consts;
pub mod curve;
pub mod engine;
pub mod history;
pub mod point;
pub mod render;
pub mod surface;
pub mod svg;
pub mod throttle;
pub mod width;
