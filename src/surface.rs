//! Software pixel surface: the raster target for ink rendering.
//!
//! This module is the only place that touches pixels. The surface is a
//! plain RGBA8 buffer of host-chosen dimensions (device-pixel-ratio scaling
//! is the host's job), offering clear-to-color, anti-aliased disc fill, and
//! raster encoding. It also carries the drawing's emptiness flag: blank
//! until the first disc is painted, blank again after a clear.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::color::Color;

/// Raster encodings the surface can produce.
///
/// A closed enum rather than a MIME string: there is no meaningful recovery
/// from asking for a format the surface cannot encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    /// Lossless, alpha preserved.
    Png,
    /// Lossy, no alpha channel — transparency is flattened to black.
    Jpeg,
}

/// Raster encoding failure.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

/// An addressable RGBA8 pixel canvas.
pub struct Surface {
    pixels: RgbaImage,
    non_empty: bool,
}

impl Surface {
    /// Create a fully transparent surface of the given pixel dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            non_empty: false,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// True until the first disc is painted; reset by [`Surface::clear`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.non_empty
    }

    /// Fill the whole surface with `color` (which may be fully transparent)
    /// and mark it empty again.
    pub fn clear(&mut self, color: Color) {
        let px = Rgba([color.r, color.g, color.b, color.a]);
        for pixel in self.pixels.pixels_mut() {
            *pixel = px;
        }
        self.non_empty = false;
    }

    /// Color of the pixel at `(x, y)`.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let Rgba([r, g, b, a]) = *self.pixels.get_pixel(x, y);
        Color::rgba(r, g, b, a)
    }

    /// Raw RGBA byte view, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Paint an anti-aliased filled disc of radius `r` centered at
    /// `(cx, cy)`, source-over composited.
    ///
    /// Non-finite or non-positive inputs and fully off-surface discs paint
    /// nothing; degenerate geometry must never panic or corrupt the buffer.
    pub fn fill_disc(&mut self, cx: f64, cy: f64, r: f64, color: Color) {
        if !cx.is_finite() || !cy.is_finite() || !r.is_finite() || r <= 0.0 {
            return;
        }

        let (w, h) = (f64::from(self.width()), f64::from(self.height()));
        let x0 = (cx - r - 1.0).floor().max(0.0);
        let y0 = (cy - r - 1.0).floor().max(0.0);
        let x1 = (cx + r + 1.0).ceil().min(w);
        let y1 = (cy + r + 1.0).ceil().min(h);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (x0, y0, x1, y1) = (x0 as u32, y0 as u32, x1 as u32, y1 as u32);

        for y in y0..y1 {
            for x in x0..x1 {
                let dist = (f64::from(x) + 0.5 - cx).hypot(f64::from(y) + 0.5 - cy);
                // One-pixel smoothed edge centered on the disc boundary.
                let coverage = (r - dist + 0.5).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }
                self.blend_pixel(x, y, color, coverage);
                self.non_empty = true;
            }
        }
    }

    /// Encode the surface contents in the requested raster format.
    ///
    /// An empty surface encodes successfully to a valid, blank image; the
    /// host gates empty submissions via [`Surface::is_empty`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if the underlying encoder fails.
    pub fn encode(&self, format: RasterFormat) -> Result<Vec<u8>, EncodeError> {
        let mut bytes = Vec::new();
        match format {
            RasterFormat::Png => {
                self.pixels
                    .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
            }
            RasterFormat::Jpeg => {
                // JPEG has no alpha channel; flatten to RGB first.
                let rgb = DynamicImage::ImageRgba8(self.pixels.clone()).to_rgb8();
                rgb.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)?;
            }
        }
        Ok(bytes)
    }

    /// Source-over blend of `color` at `alpha = color.a * coverage`.
    fn blend_pixel(&mut self, x: u32, y: u32, color: Color, coverage: f64) {
        let Rgba([dr, dg, db, da]) = *self.pixels.get_pixel(x, y);

        let sa = color.alpha_fraction() * coverage;
        let da = f64::from(da) / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return;
        }

        let blend = |src: u8, dst: u8| -> u8 {
            let s = f64::from(src) * sa;
            let d = f64::from(dst) * da * (1.0 - sa);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let out = ((s + d) / out_a).round().clamp(0.0, 255.0) as u8;
            out
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let out_alpha = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;

        let px = Rgba([
            blend(color.r, dr),
            blend(color.g, dg),
            blend(color.b, db),
            out_alpha,
        ]);
        self.pixels.put_pixel(x, y, px);
    }
}
