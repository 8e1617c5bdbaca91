//! Per-coordinate iteration over a bounding rectangle.
//!
//! Every conversion in this crate is a pure function of one source
//! coordinate, so rasters are built by evaluating a callback at each
//! coordinate independently. With the `parallel` feature (default) rows
//! are filled on the Rayon thread pool; the result is identical either way.
//!
//! # Example
//!
//! ```rust
//! use imgconv_core::Rect;
//! use imgconv_ops::iter::{fill_raster, for_each_coord};
//!
//! let bounds = Rect::new(-1, 0, 3, 2);
//!
//! let mut visited = Vec::new();
//! for_each_coord(bounds, |x, y| visited.push((x, y)));
//! assert_eq!(visited.len(), 6);
//!
//! let raster = fill_raster(bounds, |x, y| [(x + 1) as u8, y as u8]);
//! assert_eq!(raster.pixel(1, 1), Some([2, 1]));
//! ```

use imgconv_core::{Raster, Rect, Sample};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Calls `f(x, y)` for every coordinate of `bounds`, rows first.
pub fn for_each_coord(bounds: Rect, mut f: impl FnMut(i32, i32)) {
    for y in bounds.y_range() {
        for x in bounds.x_range() {
            f(x, y);
        }
    }
}

/// Builds a raster covering `bounds` with `f(x, y)` as each pixel.
///
/// `f` must not depend on evaluation order; rows may be produced
/// concurrently.
pub fn fill_raster<T, const N: usize, F>(bounds: Rect, f: F) -> Raster<T, N>
where
    T: Sample,
    F: Fn(i32, i32) -> [T; N] + Sync,
{
    let mut raster = Raster::new(bounds);
    let row_len = raster.row_len();
    if row_len == 0 || bounds.height == 0 {
        return raster;
    }

    let fill_row = |(row, samples): (usize, &mut [T])| {
        let y = bounds.y + row as i32;
        for (x, px) in bounds.x_range().zip(samples.chunks_exact_mut(N)) {
            px.copy_from_slice(&f(x, y));
        }
    };

    #[cfg(feature = "parallel")]
    raster
        .data_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(fill_row);

    #[cfg(not(feature = "parallel"))]
    raster
        .data_mut()
        .chunks_mut(row_len)
        .enumerate()
        .for_each(fill_row);

    raster
}
