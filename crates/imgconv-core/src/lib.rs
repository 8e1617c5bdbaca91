//! # imgconv-core
//!
//! Core raster types for grayscale and binary image conversion.
//!
//! - [`Rect`] - Half-open bounding rectangle, origin may be negative
//! - [`Sample`], [`Color`] - 8/16-bit channel samples and source colors
//! - [`PixelSource`] - Read-only pixel grid consumed by every conversion
//! - [`Raster`] - Owned, fully materialized pixel buffer
//!
//! ## Crate Structure
//!
//! ```text
//! imgconv-core (this crate)
//!    ^
//!    |
//!    +-- imgconv-io  (PNG / BMP codecs)
//!    +-- imgconv-ops (grayscale, binary, ConvertedImage)
//! ```
//!
//! ## Example
//!
//! ```
//! use imgconv_core::prelude::*;
//!
//! let src = Rgba8Raster::from_data(
//!     Rect::from_size(2, 1),
//!     vec![200, 200, 200, 255, 50, 50, 50, 255],
//! )?;
//! assert_eq!(src.color_at(1, 0), Color::rgb8(50, 50, 50));
//! # Ok::<(), imgconv_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pixel;
pub mod raster;
pub mod rect;
pub mod source;

pub use error::{Error, Result};
pub use pixel::{Color, Sample};
pub use raster::{Gray8Raster, GrayAlpha16Raster, Raster, Rgb8Raster, Rgba16Raster, Rgba8Raster};
pub use rect::Rect;
pub use source::PixelSource;

/// Prelude module for convenient imports.
///
/// ```
/// use imgconv_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{Color, Sample};
    pub use crate::raster::{
        Gray8Raster, GrayAlpha16Raster, Raster, Rgb8Raster, Rgba16Raster, Rgba8Raster,
    };
    pub use crate::rect::Rect;
    pub use crate::source::PixelSource;
}
