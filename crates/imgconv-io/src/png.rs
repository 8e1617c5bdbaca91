//! PNG format support.
//!
//! Provides reading and writing of PNG files through the `png` crate.
//!
//! # Features
//!
//! - 16-bit gray and gray + alpha output for grayscale rasters
//! - 8-bit RGB and RGBA output for color rasters
//! - Opaque rasters drop the alpha channel on write
//! - Gray, gray + alpha, RGB and RGBA input at 8 or 16 bits; palette and
//!   low bit depth images are expanded on read
//!
//! # Example
//!
//! ```rust,ignore
//! use imgconv_io::png;
//!
//! let image = png::read("input.png")?;
//! png::write_rgba8("output.png", &raster)?;
//! ```

use crate::{write_file, DecodedImage, IoError, IoResult};
use imgconv_core::{GrayAlpha16Raster, Raster, Rect, Rgba8Raster};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, Write};
use std::path::Path;

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<DecodedImage> {
    let file = File::open(path.as_ref())?;
    decode(BufReader::new(file))
}

/// Decodes a PNG stream.
pub fn decode<R: BufRead + Seek>(reader: R) -> IoResult<DecodedImage> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let bounds = Rect::try_new(0, 0, info.width, info.height)?;
    let bytes = &buf[..info.buffer_size()];

    let image = match (info.color_type, info.bit_depth) {
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            DecodedImage::Gray8(Raster::from_data(bounds, bytes.to_vec())?)
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => {
            DecodedImage::GrayAlpha8(Raster::from_data(bounds, bytes.to_vec())?)
        }
        (png::ColorType::Rgb, png::BitDepth::Eight) => {
            DecodedImage::Rgb8(Raster::from_data(bounds, bytes.to_vec())?)
        }
        (png::ColorType::Rgba, png::BitDepth::Eight) => {
            DecodedImage::Rgba8(Raster::from_data(bounds, bytes.to_vec())?)
        }
        (png::ColorType::Grayscale, png::BitDepth::Sixteen) => {
            DecodedImage::Gray16(Raster::from_data(bounds, bytes_to_u16(bytes))?)
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Sixteen) => {
            DecodedImage::GrayAlpha16(Raster::from_data(bounds, bytes_to_u16(bytes))?)
        }
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => {
            DecodedImage::Rgb16(Raster::from_data(bounds, bytes_to_u16(bytes))?)
        }
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => {
            DecodedImage::Rgba16(Raster::from_data(bounds, bytes_to_u16(bytes))?)
        }
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    Ok(image)
}

/// Encodes a grayscale raster at 16 bits per channel.
///
/// Fully opaque rasters are written as `Grayscale`, others as
/// `GrayscaleAlpha`. Either way the samples are stored losslessly.
pub fn encode_gray16<W: Write>(writer: W, raster: &GrayAlpha16Raster) -> IoResult<()> {
    let (color_type, bytes) = if raster.is_opaque() {
        let bytes = raster
            .data()
            .chunks_exact(2)
            .flat_map(|ga| ga[0].to_be_bytes())
            .collect::<Vec<u8>>();
        (png::ColorType::Grayscale, bytes)
    } else {
        (png::ColorType::GrayscaleAlpha, u16_to_bytes(raster.data()))
    };

    encode(
        writer,
        raster.width(),
        raster.height(),
        color_type,
        png::BitDepth::Sixteen,
        &bytes,
    )
}

/// Encodes an RGBA raster at 8 bits per channel.
///
/// Fully opaque rasters are written as `Rgb`, others as `Rgba`.
pub fn encode_rgba8<W: Write>(writer: W, raster: &Rgba8Raster) -> IoResult<()> {
    if raster.is_opaque() {
        let rgb = raster
            .data()
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect::<Vec<u8>>();
        encode(
            writer,
            raster.width(),
            raster.height(),
            png::ColorType::Rgb,
            png::BitDepth::Eight,
            &rgb,
        )
    } else {
        encode(
            writer,
            raster.width(),
            raster.height(),
            png::ColorType::Rgba,
            png::BitDepth::Eight,
            raster.data(),
        )
    }
}

/// Writes a grayscale raster to a PNG file.
pub fn write_gray16<P: AsRef<Path>>(path: P, raster: &GrayAlpha16Raster) -> IoResult<()> {
    write_file(path.as_ref(), |writer| encode_gray16(writer, raster))
}

/// Writes an RGBA raster to a PNG file.
pub fn write_rgba8<P: AsRef<Path>>(path: P, raster: &Rgba8Raster) -> IoResult<()> {
    write_file(path.as_ref(), |writer| encode_rgba8(writer, raster))
}

fn encode<W: Write>(
    writer: W,
    width: u32,
    height: u32,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    data: &[u8],
) -> IoResult<()> {
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(bit_depth);
    encoder.set_compression(png::Compression::default());

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer
        .write_image_data(data)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

/// Converts big-endian byte slice to u16 vector.
fn bytes_to_u16(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
        .collect()
}

/// Converts u16 samples to big-endian bytes.
fn u16_to_bytes(samples: &[u16]) -> Vec<u8> {
    samples.iter().flat_map(|v| v.to_be_bytes()).collect()
}
