//! # imgconv-io
//!
//! PNG and BMP codecs for imgconv rasters.
//!
//! - **PNG** - lossless, 16-bit gray and 8-bit RGB(A) output
//! - **BMP** - uncompressed 8/24/32 bpp bitmaps
//!
//! Encoders write to any [`std::io::Write`]; the `write_*` helpers in each
//! format module create the destination file through [`create_file`], which
//! reports creation failures as [`IoError::Create`]. File handles live only
//! for the duration of a single call.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use imgconv_io::read;
//!
//! // Read any supported format (auto-detected)
//! let image = read("input.png")?;
//! println!("Size: {}x{}", image.width(), image.height());
//! ```
//!
//! # Supported Formats
//!
//! | Format | Read | Write | Bit Depths |
//! |--------|------|-------|------------|
//! | PNG | Yes | Yes | 8, 16 |
//! | BMP | Yes | Yes | 8 |
//!
//! PNG goes through the `png` crate, BMP through the `image` crate.
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `bmp` - BMP support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "bmp")]
pub mod bmp;

pub use detect::Format;
pub use error::{IoError, IoResult};

use imgconv_core::{
    Color, Gray8Raster, GrayAlpha16Raster, PixelSource, Raster, Rect, Rgb8Raster, Rgba16Raster,
    Rgba8Raster,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{trace, warn};

/// Reads an image from a file, auto-detecting the format.
///
/// The format is detected by magic bytes, falling back to the extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The format is not supported
/// - The file is corrupted
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<DecodedImage> {
    let path = path.as_ref();
    let format = Format::detect(path)?;
    trace!(path = %path.display(), ?format, "read");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path),

        #[cfg(feature = "bmp")]
        Format::Bmp => bmp::read(path),

        _ => Err(IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }
}

/// Creates (or truncates) the file at `path` for buffered writing.
///
/// # Errors
///
/// Returns [`IoError::Create`] carrying the path when the file cannot be
/// created.
pub fn create_file(path: &Path) -> IoResult<BufWriter<File>> {
    let file = File::create(path).map_err(|source| IoError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Creates `path`, runs `encode` into it and flushes.
///
/// When encoding or flushing fails the partially written file is removed,
/// so a failed save never leaves a truncated image behind.
pub(crate) fn write_file<F>(path: &Path, encode: F) -> IoResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> IoResult<()>,
{
    let mut writer = create_file(path)?;
    let result = encode(&mut writer).and_then(|()| writer.flush().map_err(IoError::from));

    if let Err(err) = &result {
        drop(writer);
        trace!(path = %path.display(), error = %err, "removing partial file");
        if let Err(remove_err) = std::fs::remove_file(path) {
            warn!(path = %path.display(), error = %remove_err, "cannot remove partial file");
        }
    }
    result
}

/// Raster decoded from a PNG or BMP file.
///
/// Keeps the layout the file was stored in; every variant is a
/// [`PixelSource`] with its origin at (0, 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedImage {
    /// 8-bit gray.
    Gray8(Gray8Raster),
    /// 8-bit gray + alpha.
    GrayAlpha8(Raster<u8, 2>),
    /// 8-bit RGB.
    Rgb8(Rgb8Raster),
    /// 8-bit RGBA.
    Rgba8(Rgba8Raster),
    /// 16-bit gray.
    Gray16(Raster<u16, 1>),
    /// 16-bit gray + alpha.
    GrayAlpha16(GrayAlpha16Raster),
    /// 16-bit RGB.
    Rgb16(Raster<u16, 3>),
    /// 16-bit RGBA.
    Rgba16(Rgba16Raster),
}

macro_rules! each_layout {
    ($self:expr, $r:ident => $body:expr) => {
        match $self {
            DecodedImage::Gray8($r) => $body,
            DecodedImage::GrayAlpha8($r) => $body,
            DecodedImage::Rgb8($r) => $body,
            DecodedImage::Rgba8($r) => $body,
            DecodedImage::Gray16($r) => $body,
            DecodedImage::GrayAlpha16($r) => $body,
            DecodedImage::Rgb16($r) => $body,
            DecodedImage::Rgba16($r) => $body,
        }
    };
}

impl DecodedImage {
    /// Bounding rectangle.
    pub fn bounds(&self) -> Rect {
        each_layout!(self, r => r.bounds())
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.bounds().width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.bounds().height
    }

    /// Number of stored channels.
    pub fn channels(&self) -> usize {
        each_layout!(self, r => r.channels())
    }

    /// Bits per stored channel.
    pub fn bit_depth(&self) -> u32 {
        match self {
            Self::Gray8(_) | Self::GrayAlpha8(_) | Self::Rgb8(_) | Self::Rgba8(_) => 8,
            _ => 16,
        }
    }

    /// Short name of the stored layout, e.g. `"rgba8"`.
    pub fn layout(&self) -> &'static str {
        match self {
            Self::Gray8(_) => "gray8",
            Self::GrayAlpha8(_) => "gray-alpha8",
            Self::Rgb8(_) => "rgb8",
            Self::Rgba8(_) => "rgba8",
            Self::Gray16(_) => "gray16",
            Self::GrayAlpha16(_) => "gray-alpha16",
            Self::Rgb16(_) => "rgb16",
            Self::Rgba16(_) => "rgba16",
        }
    }
}

impl PixelSource for DecodedImage {
    fn bounds(&self) -> Rect {
        DecodedImage::bounds(self)
    }

    fn color_at(&self, x: i32, y: i32) -> Color {
        each_layout!(self, r => r.color_at(x, y))
    }
}
