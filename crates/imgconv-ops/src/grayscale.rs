//! Grayscale conversion.
//!
//! Each source color is reduced to a single 16-bit luminance value with the
//! conventional perceptual weights (0.299 R + 0.587 G + 0.114 B), evaluated
//! in 16.16 fixed point on alpha-premultiplied 16-bit channels:
//!
//! ```text
//! Y = (19595 R + 38470 G + 7471 B + 2^15) >> 16
//! ```
//!
//! The weights sum to exactly 2^16, so pure grays map to themselves. Alpha
//! is carried over at 16 bits; no gamma handling is applied.
//!
//! # Example
//!
//! ```rust
//! use imgconv_core::{Color, PixelSource, Rect, Rgba8Raster};
//! use imgconv_ops::to_grayscale;
//!
//! let src = Rgba8Raster::from_fn(Rect::from_size(2, 2), |_, _| [255, 0, 0, 255]);
//! let gray = to_grayscale(&src);
//!
//! assert_eq!(gray.bounds(), src.bounds());
//! let [r, g, b, a] = gray.color_at(0, 0).to_rgba16();
//! assert!(r == g && g == b);
//! assert_eq!(a, u16::MAX);
//! ```

use crate::iter::fill_raster;
use crate::ConvertedImage;
use imgconv_core::{Color, PixelSource};
use tracing::{debug, trace};

/// Fixed-point luminance weights for R, G and B (sum = 65536).
pub const LUMA_WEIGHTS: [u32; 3] = [19595, 38470, 7471];

/// Luminance of `color` as a 16-bit gray value.
///
/// Channels are premultiplied by alpha first, so translucent colors are
/// darker than their opaque counterparts.
#[inline]
pub fn gray16(color: Color) -> u16 {
    let [r, g, b, _] = color.premultiplied16();
    let [wr, wg, wb] = LUMA_WEIGHTS;
    ((wr * r as u32 + wg * g as u32 + wb * b as u32 + (1 << 15)) >> 16) as u16
}

/// Converts `source` to a 16-bit gray + alpha raster.
///
/// The result covers exactly the source bounds. An empty source yields an
/// empty raster.
pub fn to_grayscale<S: PixelSource + ?Sized>(source: &S) -> ConvertedImage {
    let bounds = source.bounds();
    trace!(%bounds, "grayscale::to_grayscale");
    debug!(width = bounds.width, height = bounds.height, "Converting to grayscale");

    let raster = fill_raster(bounds, |x, y| {
        let color = source.color_at(x, y);
        [gray16(color), color.alpha16()]
    });

    ConvertedImage::Grayscale(raster)
}
