//! Owned raster buffers.
//!
//! [`Raster<T, N>`] stores `N` interleaved channels of sample type `T` for
//! every coordinate of its bounding [`Rect`], row-major, top to bottom:
//!
//! ```text
//! Memory: [G A G A G A ...]  ← Row y
//!         [G A G A G A ...]  ← Row y + 1
//! ```
//!
//! Channel layouts by `N`:
//!
//! | N | Layout | Alias |
//! |---|--------|-------|
//! | 1 | gray | [`Gray8Raster`] |
//! | 2 | gray + alpha | [`GrayAlpha16Raster`] |
//! | 3 | RGB | [`Rgb8Raster`] |
//! | 4 | RGBA | [`Rgba8Raster`], [`Rgba16Raster`] |
//!
//! Every layout implements [`PixelSource`], so a raster can be fed straight
//! back into another conversion.
//!
//! # Usage
//!
//! ```rust
//! use imgconv_core::{Color, PixelSource, Rect, Rgba8Raster};
//!
//! let mut raster = Rgba8Raster::new(Rect::from_size(2, 1));
//! raster.set_pixel(1, 0, [50, 50, 50, 255]).unwrap();
//!
//! assert_eq!(raster.pixel(1, 0), Some([50, 50, 50, 255]));
//! assert_eq!(raster.color_at(1, 0), Color::rgb8(50, 50, 50));
//! ```

use crate::{Color, Error, PixelSource, Rect, Result, Sample};

/// 8-bit single-channel gray raster.
pub type Gray8Raster = Raster<u8, 1>;

/// 16-bit gray + alpha raster, the result of grayscale conversion.
pub type GrayAlpha16Raster = Raster<u16, 2>;

/// 8-bit RGB raster.
pub type Rgb8Raster = Raster<u8, 3>;

/// 8-bit RGBA raster, the result of binary conversion.
pub type Rgba8Raster = Raster<u8, 4>;

/// 16-bit RGBA raster.
pub type Rgba16Raster = Raster<u16, 4>;

/// Owned pixel buffer covering a bounding rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster<T: Sample, const N: usize> {
    bounds: Rect,
    data: Vec<T>,
}

impl<T: Sample, const N: usize> Raster<T, N> {
    /// Creates a zero-filled raster (transparent black where alpha exists).
    pub fn new(bounds: Rect) -> Self {
        let len = bounds.area() as usize * N;
        Self {
            bounds,
            data: vec![T::zero(); len],
        }
    }

    /// Creates a raster from existing interleaved samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height * N`.
    pub fn from_data(bounds: Rect, data: Vec<T>) -> Result<Self> {
        let expected = (bounds.width as usize)
            .checked_mul(bounds.height as usize)
            .and_then(|v| v.checked_mul(N))
            .ok_or_else(|| {
                Error::invalid_dimensions(bounds.width, bounds.height, "sample count overflows")
            })?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                bounds.width,
                bounds.height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self { bounds, data })
    }

    /// Creates a raster by evaluating `f` at every coordinate, rows first.
    pub fn from_fn(bounds: Rect, mut f: impl FnMut(i32, i32) -> [T; N]) -> Self {
        let mut data = Vec::with_capacity(bounds.area() as usize * N);
        for y in bounds.y_range() {
            for x in bounds.x_range() {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self { bounds, data }
    }

    /// Bounding rectangle.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.bounds.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.bounds.height
    }

    /// Number of interleaved channels.
    #[inline]
    pub const fn channels(&self) -> usize {
        N
    }

    /// Samples per row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.bounds.width as usize * N
    }

    /// Pixel at (x, y), or `None` outside the bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<[T; N]> {
        let i = self.bounds.index_of(x, y)? * N;
        self.data.get(i..i + N)?.try_into().ok()
    }

    /// Overwrites the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] outside the bounds.
    pub fn set_pixel(&mut self, x: i32, y: i32, px: [T; N]) -> Result<()> {
        let i = self
            .bounds
            .index_of(x, y)
            .ok_or_else(|| Error::out_of_bounds(x, y, self.bounds.width, self.bounds.height))?
            * N;
        self.data[i..i + N].copy_from_slice(&px);
        Ok(())
    }

    /// Interleaved samples.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable interleaved samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the raster, returning its samples.
    #[inline]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Iterates rows top to bottom. A zero-width raster yields no rows.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.row_len().max(1))
    }

    /// Iterates `(x, y, pixel)` for every coordinate, rows first.
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32, [T; N])> + '_ {
        let bounds = self.bounds;
        self.data.chunks_exact(N).enumerate().map(move |(i, px)| {
            let w = bounds.width as usize;
            let x = bounds.x + (i % w) as i32;
            let y = bounds.y + (i / w) as i32;
            let mut out = [T::zero(); N];
            out.copy_from_slice(px);
            (x, y, out)
        })
    }

    /// Returns `true` when no pixel is translucent.
    ///
    /// Layouts without alpha (N = 1 or 3) are always opaque.
    pub fn is_opaque(&self) -> bool {
        if N == 2 || N == 4 {
            self.data.chunks_exact(N).all(|px| px[N - 1] == T::MAX)
        } else {
            true
        }
    }
}

macro_rules! impl_pixel_source {
    ($n:literal, |$px:ident| $expand:expr) => {
        impl<T: Sample> PixelSource for Raster<T, $n> {
            #[inline]
            fn bounds(&self) -> Rect {
                self.bounds
            }

            #[inline]
            fn color_at(&self, x: i32, y: i32) -> Color {
                match self.pixel(x, y) {
                    Some($px) => T::color($expand),
                    None => T::color([T::zero(); 4]),
                }
            }
        }
    };
}

impl_pixel_source!(1, |p| [p[0], p[0], p[0], T::MAX]);
impl_pixel_source!(2, |p| [p[0], p[0], p[0], p[1]]);
impl_pixel_source!(3, |p| [p[0], p[1], p[2], T::MAX]);
impl_pixel_source!(4, |p| p);
