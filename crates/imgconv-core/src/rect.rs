//! Bounding rectangles for rasters and pixel sources.
//!
//! A [`Rect`] describes the half-open coordinate domain
//! `[x, x + width) × [y, y + height)`. The origin may be negative: a pixel
//! source is free to place its grid anywhere, and every conversion keeps the
//! source rectangle unchanged.
//!
//! # Coordinate System
//!
//! ```text
//! (x,y) ────────► X
//!   │
//!   │   ┌──────────┐
//!   │   │  Raster  │
//!   │   └──────────┘
//!   ▼            (right, bottom) exclusive
//!   Y
//! ```
//!
//! # Usage
//!
//! ```rust
//! use imgconv_core::Rect;
//!
//! let rect = Rect::new(-2, 0, 4, 3);
//! assert!(rect.contains(-2, 0));
//! assert!(!rect.contains(2, 0));
//! assert_eq!(rect.index_of(-1, 1), Some(5));
//! ```

use crate::{Error, Result};
use std::ops::Range;

/// A rectangle defined by origin (x, y) and dimensions (width, height).
///
/// # Invariants
///
/// - A rectangle with zero width or height is empty and contains no pixel
/// - `x + width` and `y + height` must fit in `i32`; [`Rect::try_new`]
///   checks this, [`right`](Rect::right) and [`bottom`](Rect::bottom)
///   saturate otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: i32,
    /// Y coordinate of the top edge (inclusive)
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle, checking that its far edges fit in `i32`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when `x + width` or
    /// `y + height` overflows.
    ///
    /// ```rust
    /// use imgconv_core::Rect;
    ///
    /// assert!(Rect::try_new(-4, 0, 8, 8).is_ok());
    /// assert!(Rect::try_new(i32::MAX, 0, 1, 1).is_err());
    /// ```
    pub fn try_new(x: i32, y: i32, width: u32, height: u32) -> Result<Self> {
        if x.checked_add_unsigned(width).is_none() || y.checked_add_unsigned(height).is_none() {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("extent overflows i32 at origin ({}, {})", x, y),
            ));
        }
        Ok(Self::new(x, y, width, height))
    }

    /// Creates a rectangle from origin (0, 0) with given dimensions.
    ///
    /// ```rust
    /// use imgconv_core::Rect;
    ///
    /// let rect = Rect::from_size(640, 480);
    /// assert_eq!((rect.x, rect.y), (0, 0));
    /// ```
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Creates a rectangle from its min (inclusive) and max (exclusive) corners.
    ///
    /// Swapped coordinates are normalized.
    ///
    /// ```rust
    /// use imgconv_core::Rect;
    ///
    /// let rect = Rect::from_corners(10, 20, -10, 70);
    /// assert_eq!(rect, Rect::new(-10, 20, 20, 50));
    /// ```
    #[inline]
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (min_x, max_x) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (min_y, max_y) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        Self::new(
            min_x,
            min_y,
            max_x.abs_diff(min_x),
            max_y.abs_diff(min_y),
        )
    }

    /// Returns the X coordinate of the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add_unsigned(self.width)
    }

    /// Returns the Y coordinate of the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add_unsigned(self.height)
    }

    /// Returns the area of the rectangle in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the columns covered by this rectangle.
    #[inline]
    pub fn x_range(&self) -> Range<i32> {
        self.x..self.right()
    }

    /// Returns the rows covered by this rectangle.
    #[inline]
    pub fn y_range(&self) -> Range<i32> {
        self.y..self.bottom()
    }

    /// Returns `true` if the point (px, py) is inside this rectangle.
    ///
    /// Inclusive on the left/top edges, exclusive on the right/bottom edges.
    #[inline]
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns the row-major pixel index of (px, py) relative to the origin.
    ///
    /// Returns `None` when the point lies outside the rectangle.
    #[inline]
    pub fn index_of(&self, px: i32, py: i32) -> Option<usize> {
        if !self.contains(px, py) {
            return None;
        }
        let col = px.abs_diff(self.x) as usize;
        let row = py.abs_diff(self.y) as usize;
        Some(row * self.width as usize + col)
    }

    /// Returns the intersection of this rectangle with another.
    ///
    /// Returns `None` if the rectangles don't overlap.
    ///
    /// ```rust
    /// use imgconv_core::Rect;
    ///
    /// let a = Rect::new(0, 0, 100, 100);
    /// let b = Rect::new(50, -50, 100, 100);
    /// assert_eq!(a.intersect(&b), Some(Rect::new(50, 0, 50, 50)));
    /// ```
    #[inline]
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::from_corners(x, y, right, bottom))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}) x [{}, {})",
            self.x,
            self.right(),
            self.y,
            self.bottom()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(-5, 3, 10, 2);
        assert_eq!(rect.right(), 5);
        assert_eq!(rect.bottom(), 5);
        assert_eq!(rect.area(), 20);
        assert_eq!(rect.x_range(), -5..5);
        assert_eq!(rect.y_range(), 3..5);
    }

    #[test]
    fn test_empty() {
        assert!(Rect::from_size(0, 10).is_empty());
        assert!(Rect::from_size(10, 0).is_empty());
        assert!(!Rect::from_size(1, 1).is_empty());
        assert!(!Rect::from_size(0, 0).contains(0, 0));
        assert_eq!(Rect::from_size(0, 5).x_range().count(), 0);
    }

    #[test]
    fn test_contains_half_open() {
        let rect = Rect::from_size(2, 1);
        assert!(rect.contains(0, 0));
        assert!(rect.contains(1, 0));
        assert!(!rect.contains(2, 0));
        assert!(!rect.contains(0, 1));
        assert!(!rect.contains(-1, 0));
    }

    #[test]
    fn test_index_of() {
        let rect = Rect::new(10, 20, 3, 2);
        assert_eq!(rect.index_of(10, 20), Some(0));
        assert_eq!(rect.index_of(12, 20), Some(2));
        assert_eq!(rect.index_of(10, 21), Some(3));
        assert_eq!(rect.index_of(12, 21), Some(5));
        assert_eq!(rect.index_of(13, 21), None);
    }

    #[test]
    fn test_intersect_disjoint() {
        let a = Rect::from_size(10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn test_try_new_rejects_overflow() {
        assert_eq!(Rect::try_new(-3, 2, 5, 5).unwrap(), Rect::new(-3, 2, 5, 5));
        assert!(Rect::try_new(i32::MAX - 1, 0, 1, 1).is_ok());

        let err = Rect::try_new(i32::MAX, 0, 1, 1).unwrap_err();
        assert!(err.to_string().contains("overflows"));
        assert!(Rect::try_new(0, 0, u32::MAX, 1).is_err());
        assert!(Rect::try_new(i32::MIN, 0, u32::MAX, 1).is_ok());
    }

    #[test]
    fn test_edges_saturate() {
        let rect = Rect::new(i32::MAX - 2, i32::MAX, 10, 1);
        assert_eq!(rect.right(), i32::MAX);
        assert_eq!(rect.bottom(), i32::MAX);
        assert_eq!(rect.x_range().count(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rect::new(-1, 0, 3, 2).to_string(), "[-1, 2) x [0, 2)");
    }
}
