//! Binary (black/white) thresholding.
//!
//! A pixel is **dark** when any of its R, G or B channels, premultiplied by
//! alpha and reduced to 8 bits, is strictly below the threshold. Dark pixels
//! become black and the rest white; `reverse` swaps the two. Alpha is
//! copied at 8 bits.
//!
//! | dark | reverse | output |
//! |------|---------|--------|
//! | no   | false   | 255 |
//! | yes  | false   | 0   |
//! | no   | true    | 0   |
//! | yes  | true    | 255 |
//!
//! # Example
//!
//! ```rust
//! use imgconv_core::{Rect, Rgba8Raster};
//! use imgconv_ops::to_binary;
//!
//! let src = Rgba8Raster::from_data(
//!     Rect::from_size(2, 1),
//!     vec![200, 200, 200, 255, 50, 50, 50, 255],
//! )
//! .unwrap();
//!
//! let out = to_binary(&src, 127, false);
//! let raster = out.as_binary().unwrap();
//! assert_eq!(raster.pixel(0, 0), Some([255, 255, 255, 255]));
//! assert_eq!(raster.pixel(1, 0), Some([0, 0, 0, 255]));
//! ```

use crate::iter::fill_raster;
use crate::ConvertedImage;
use imgconv_core::{PixelSource, Sample};
use tracing::{debug, trace};

/// Output value for pixels at or above the threshold.
pub const WHITE: u8 = u8::MAX;

/// Output value for pixels below the threshold.
pub const BLACK: u8 = 0;

/// Thresholding parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinaryOptions {
    /// Decision boundary; a channel strictly below it is dark.
    pub threshold: u8,
    /// Swap black and white.
    pub reverse: bool,
}

impl Default for BinaryOptions {
    fn default() -> Self {
        Self {
            threshold: 127,
            reverse: false,
        }
    }
}

impl BinaryOptions {
    /// Creates options with the given threshold and polarity.
    pub const fn new(threshold: u8, reverse: bool) -> Self {
        Self { threshold, reverse }
    }

    /// Sets the threshold.
    pub const fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the polarity.
    pub const fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

/// Returns `true` if any of R, G, B is strictly below `threshold`.
#[inline]
pub fn is_dark(rgb: [u8; 3], threshold: u8) -> bool {
    rgb.iter().any(|&c| c < threshold)
}

/// Black or white output value for one pixel.
#[inline]
pub fn binary_value(rgb: [u8; 3], threshold: u8, reverse: bool) -> u8 {
    if is_dark(rgb, threshold) != reverse {
        BLACK
    } else {
        WHITE
    }
}

/// Converts `source` to an 8-bit RGBA raster holding only black and white.
pub fn to_binary<S: PixelSource + ?Sized>(
    source: &S,
    threshold: u8,
    reverse: bool,
) -> ConvertedImage {
    to_binary_with(source, &BinaryOptions::new(threshold, reverse))
}

/// Same as [`to_binary`], taking the parameters as [`BinaryOptions`].
pub fn to_binary_with<S: PixelSource + ?Sized>(
    source: &S,
    options: &BinaryOptions,
) -> ConvertedImage {
    let bounds = source.bounds();
    let BinaryOptions { threshold, reverse } = *options;
    trace!(%bounds, threshold, reverse, "binary::to_binary");
    debug!(
        width = bounds.width,
        height = bounds.height,
        threshold,
        reverse,
        "Converting to binary"
    );

    let raster = fill_raster(bounds, |x, y| {
        let [r, g, b, a] = source.color_at(x, y).premultiplied16();
        let v = binary_value([r.to_u8(), g.to_u8(), b.to_u8()], threshold, reverse);
        [v, v, v, a.to_u8()]
    });

    ConvertedImage::Binary(raster)
}
