//! Error types for imgconv-core operations.
//!
//! Covers the few ways a raster buffer can be misused: addressing a
//! coordinate outside its bounds, or building it from a sample buffer
//! whose length does not match the bounding rectangle.
//!
//! # Usage
//!
//! ```rust
//! use imgconv_core::{Error, Result};
//!
//! fn check(x: i32, y: i32, width: u32, height: u32) -> Result<()> {
//!     if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
//!         return Err(Error::out_of_bounds(x, y, width, height));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(3, 2, 4, 4).is_ok());
//! assert!(check(4, 0, 4, 4).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by raster construction and pixel access.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinates are outside the raster bounds.
    #[error("pixel ({x}, {y}) out of bounds for raster {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: i32,
        /// Y coordinate that was out of bounds
        y: i32,
        /// Raster width
        width: u32,
        /// Raster height
        height: u32,
    },

    /// Sample buffer does not fit the requested dimensions.
    ///
    /// Returned when the data length differs from `width * height * N`,
    /// or when that product overflows `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
