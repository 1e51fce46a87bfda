//! Vector re-export of the capture history.
//!
//! Replays the raw point history through the same fitter and width model as
//! live capture, but emits one SVG `<path>` per curve segment and one
//! `<circle>` per dot instead of painting pixels. Segments with non-finite
//! control points (degenerate or discontinuous input) have no visual
//! meaning and are skipped silently.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::consts::SVG_WIDTH_SCALE;
use crate::engine::{InkOp, Options, replay_ops};
use crate::history::History;

/// Build the SVG document for `history` on a `width` x `height` viewbox.
///
/// An empty history yields a valid document with zero drawable elements.
#[must_use]
pub fn document(history: &History, options: &Options, width: u32, height: u32) -> String {
    let mut body = String::new();
    let pen = options.pen_color.to_css();

    for op in replay_ops(history, options) {
        match op {
            InkOp::Segment { segment, widths } => {
                if !segment.is_finite() {
                    continue;
                }
                // A filled disc of half-width w reads like a stroked path
                // of width 2.25*w; calibration constant preserved exactly.
                let stroke_width = SVG_WIDTH_SCALE * widths.end;
                body.push_str(&format!(
                    concat!(
                        "<path d=\"M {},{} C {},{} {},{} {},{}\" ",
                        "stroke-width=\"{}\" stroke=\"{}\" fill=\"none\" ",
                        "stroke-linecap=\"round\"></path>"
                    ),
                    segment.start.x,
                    segment.start.y,
                    segment.c1.x,
                    segment.c1.y,
                    segment.c2.x,
                    segment.c2.y,
                    segment.end.x,
                    segment.end.y,
                    stroke_width,
                    pen,
                ));
            }
            InkOp::Dot { point, radius } => {
                body.push_str(&format!(
                    "<circle r=\"{}\" cx=\"{}\" cy=\"{}\" fill=\"{}\"></circle>",
                    radius, point.x, point.y, pen,
                ));
            }
        }
    }

    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" ",
            "viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\">{body}</svg>"
        ),
        w = width,
        h = height,
        body = body,
    )
}

/// The document from [`document`], base64-encoded as an SVG data URI.
#[must_use]
pub fn data_uri(history: &History, options: &Options, width: u32, height: u32) -> String {
    let doc = document(history, options, width, height);
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(doc))
}
