//! # imgconv-ops
//!
//! Grayscale and binary conversion of raster images.
//!
//! # Modules
//!
//! - [`grayscale`] - 16-bit luminance conversion
//! - [`binary`] - Black/white thresholding with polarity
//! - [`converted`] - Conversion results and PNG/BMP output
//! - [`iter`] - Per-coordinate raster construction
//! - [`fail_fast`] - Opt-in exit-on-error for top-level callers
//!
//! # Pipeline
//!
//! ```text
//! PixelSource ──► to_grayscale / to_binary ──► ConvertedImage ──► save_as_png / save_as_bmp
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use imgconv_ops::{to_binary, to_grayscale};
//!
//! let src = imgconv_io::read("input.png")?;
//!
//! to_grayscale(&src).save_as_png("gray.png")?;
//! to_binary(&src, 127, false).save_as_bmp("binary.bmp")?;
//! to_binary(&src, 127, true).save_as_bmp("binary_reversed.bmp")?;
//! # Ok::<(), imgconv_io::IoError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - Fill raster rows on the Rayon thread pool (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod binary;
pub mod converted;
pub mod fail_fast;
pub mod grayscale;
pub mod iter;

pub use binary::{to_binary, to_binary_with, BinaryOptions};
pub use converted::{ConversionKind, ConvertedImage};
pub use fail_fast::FailFast;
pub use grayscale::to_grayscale;
