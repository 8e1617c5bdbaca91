//! The read-only pixel grid every conversion consumes.

use crate::{Color, Rect};

/// Addressable 2D grid of pixel colors with a bounding rectangle.
///
/// Decoders and rasters implement this trait; the conversions in
/// `imgconv-ops` accept any implementor. Sources must be [`Sync`] so that
/// rows can be read from several threads at once.
///
/// # Example
///
/// ```
/// use imgconv_core::{Color, PixelSource, Rect};
///
/// /// Horizontal ramp, dark on the left.
/// struct Ramp;
///
/// impl PixelSource for Ramp {
///     fn bounds(&self) -> Rect {
///         Rect::from_size(256, 1)
///     }
///
///     fn color_at(&self, x: i32, _y: i32) -> Color {
///         Color::gray8(x.clamp(0, 255) as u8)
///     }
/// }
///
/// assert_eq!(Ramp.color_at(10, 0), Color::gray8(10));
/// ```
pub trait PixelSource: Sync {
    /// Coordinate domain of the source.
    fn bounds(&self) -> Rect;

    /// Color at (x, y).
    ///
    /// Coordinates outside [`bounds`](Self::bounds) yield transparent black.
    fn color_at(&self, x: i32, y: i32) -> Color;
}

impl<S: PixelSource + ?Sized> PixelSource for &S {
    #[inline]
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    #[inline]
    fn color_at(&self, x: i32, y: i32) -> Color {
        (**self).color_at(x, y)
    }
}

impl<S: PixelSource + ?Sized> PixelSource for Box<S> {
    #[inline]
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    #[inline]
    fn color_at(&self, x: i32, y: i32) -> Color {
        (**self).color_at(x, y)
    }
}
