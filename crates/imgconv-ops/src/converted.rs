//! Conversion results and their PNG/BMP output.
//!
//! A [`ConvertedImage`] holds exactly one raster: the 16-bit gray + alpha
//! output of [`to_grayscale`](crate::to_grayscale) or the 8-bit black/white
//! RGBA output of [`to_binary`](crate::to_binary). It owns no external
//! resources; each save call opens, writes and releases its own file.
//!
//! | Variant | PNG | BMP |
//! |---------|-----|-----|
//! | Grayscale | 16-bit gray (+ alpha) | 8 bpp gray, or 32 bpp if translucent |
//! | Binary | 8-bit RGB (+ alpha) | 24 bpp, or 32 bpp if translucent |
//!
//! Save operations return errors instead of terminating; see
//! [`FailFast`](crate::FailFast) for the exit-on-error policy.

use imgconv_core::{Color, GrayAlpha16Raster, PixelSource, Rect, Rgba8Raster};
use imgconv_io::{bmp, png, Format, IoError, IoResult};
use std::fmt;
use std::io::Write;
use std::path::Path;
use tracing::{debug, trace};

/// Which conversion produced an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionKind {
    /// 16-bit luminance.
    Grayscale,
    /// Thresholded black and white.
    Binary,
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grayscale => f.write_str("grayscale"),
            Self::Binary => f.write_str("binary"),
        }
    }
}

/// Result of a grayscale or binary conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertedImage {
    /// Gray + alpha at 16 bits per channel.
    Grayscale(GrayAlpha16Raster),
    /// RGBA at 8 bits per channel, R = G = B in {0, 255}.
    Binary(Rgba8Raster),
}

impl ConvertedImage {
    /// Which conversion produced this image.
    pub fn kind(&self) -> ConversionKind {
        match self {
            Self::Grayscale(_) => ConversionKind::Grayscale,
            Self::Binary(_) => ConversionKind::Binary,
        }
    }

    /// Bounding rectangle, equal to the source's.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Grayscale(r) => r.bounds(),
            Self::Binary(r) => r.bounds(),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.bounds().width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.bounds().height
    }

    /// The grayscale raster, if this is a grayscale result.
    pub fn as_grayscale(&self) -> Option<&GrayAlpha16Raster> {
        match self {
            Self::Grayscale(r) => Some(r),
            Self::Binary(_) => None,
        }
    }

    /// The binary raster, if this is a binary result.
    pub fn as_binary(&self) -> Option<&Rgba8Raster> {
        match self {
            Self::Binary(r) => Some(r),
            Self::Grayscale(_) => None,
        }
    }

    /// Consumes the image, returning the grayscale raster if present.
    pub fn into_grayscale(self) -> Option<GrayAlpha16Raster> {
        match self {
            Self::Grayscale(r) => Some(r),
            Self::Binary(_) => None,
        }
    }

    /// Consumes the image, returning the binary raster if present.
    pub fn into_binary(self) -> Option<Rgba8Raster> {
        match self {
            Self::Binary(r) => Some(r),
            Self::Grayscale(_) => None,
        }
    }

    /// Encodes the image as PNG into `writer`.
    pub fn write_png<W: Write>(&self, writer: W) -> IoResult<()> {
        match self {
            Self::Grayscale(r) => png::encode_gray16(writer, r),
            Self::Binary(r) => png::encode_rgba8(writer, r),
        }
    }

    /// Encodes the image as BMP into `writer`.
    pub fn write_bmp<W: Write>(&self, writer: W) -> IoResult<()> {
        match self {
            Self::Grayscale(r) => bmp::encode_gray16(writer, r),
            Self::Binary(r) => bmp::encode_rgba8(writer, r),
        }
    }

    /// Encodes the image as PNG and writes it to `path`.
    ///
    /// # Errors
    ///
    /// - [`IoError::Create`] if the file cannot be created
    /// - [`IoError::EncodeError`] / [`IoError::Io`] if encoding or writing
    ///   fails; the destination file is removed in that case
    pub fn save_as_png<P: AsRef<Path>>(&self, path: P) -> IoResult<()> {
        self.save(path, Format::Png)
    }

    /// Encodes the image as BMP and writes it to `path`.
    ///
    /// # Errors
    ///
    /// Same as [`save_as_png`](Self::save_as_png).
    pub fn save_as_bmp<P: AsRef<Path>>(&self, path: P) -> IoResult<()> {
        self.save(path, Format::Bmp)
    }

    /// Writes the image to `path` in the given format.
    pub fn save<P: AsRef<Path>>(&self, path: P, format: Format) -> IoResult<()> {
        let path = path.as_ref();
        trace!(path = %path.display(), ?format, kind = %self.kind(), "converted::save");

        match (format, self) {
            (Format::Png, Self::Grayscale(r)) => png::write_gray16(path, r)?,
            (Format::Png, Self::Binary(r)) => png::write_rgba8(path, r)?,
            (Format::Bmp, Self::Grayscale(r)) => bmp::write_gray16(path, r)?,
            (Format::Bmp, Self::Binary(r)) => bmp::write_rgba8(path, r)?,
            (Format::Unknown, _) => {
                return Err(IoError::UnsupportedFormat(format!(
                    "no encoder for {}",
                    path.display()
                )));
            }
        }

        debug!(
            path = %path.display(),
            width = self.width(),
            height = self.height(),
            "Saved {} image as {}",
            self.kind(),
            format.extension()
        );
        Ok(())
    }

    /// Writes the image to `path`, picking the format from its extension.
    pub fn save_auto<P: AsRef<Path>>(&self, path: P) -> IoResult<()> {
        let format = Format::from_extension(path.as_ref());
        self.save(path, format)
    }
}

impl PixelSource for ConvertedImage {
    fn bounds(&self) -> Rect {
        ConvertedImage::bounds(self)
    }

    fn color_at(&self, x: i32, y: i32) -> Color {
        match self {
            Self::Grayscale(r) => r.color_at(x, y),
            Self::Binary(r) => r.color_at(x, y),
        }
    }
}

impl From<GrayAlpha16Raster> for ConvertedImage {
    fn from(raster: GrayAlpha16Raster) -> Self {
        Self::Grayscale(raster)
    }
}

impl From<Rgba8Raster> for ConvertedImage {
    fn from(raster: Rgba8Raster) -> Self {
        Self::Binary(raster)
    }
}
