//! Exit-on-error policy for top-level callers.
//!
//! Library functions in this workspace always return their errors. A
//! program that wants the classic behavior (print the failure and stop
//! with a non-zero status) opts in at the call site:
//!
//! ```rust,no_run
//! use imgconv_core::{Rect, Rgba8Raster};
//! use imgconv_ops::{to_binary, FailFast};
//!
//! let src = Rgba8Raster::new(Rect::from_size(4, 4));
//! to_binary(&src, 127, false).save_as_png("out/binary.png").or_exit();
//! ```

use std::fmt::Display;
use tracing::error;

/// Exit status used when [`FailFast::or_exit`] terminates the process.
pub const EXIT_FAILURE: i32 = 1;

/// Turns a failed result into process termination.
pub trait FailFast<T> {
    /// Returns the success value, or reports the error on stderr and exits
    /// with [`EXIT_FAILURE`].
    fn or_exit(self) -> T;
}

impl<T, E: Display> FailFast<T> for Result<T, E> {
    fn or_exit(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                error!(error = %err, "fatal error, exiting");
                eprintln!("{}", err);
                std::process::exit(EXIT_FAILURE)
            }
        }
    }
}
