//! Windows bitmap (BMP) format support.
//!
//! Read/write uncompressed bitmaps via the `image` crate.
//!
//! # Output layouts
//!
//! | Raster | Opaque | Translucent |
//! |--------|--------|-------------|
//! | gray (16-bit) | 8 bpp, gray palette | 32 bpp BGRA |
//! | RGBA (8-bit) | 24 bpp BGR | 32 bpp BGRA |
//!
//! BMP has no 16-bit channel depth: gray samples keep their high byte.
//!
//! # Example
//!
//! ```ignore
//! use imgconv_io::bmp;
//!
//! let image = bmp::read("input.bmp")?;
//! bmp::write_rgba8("output.bmp", &raster)?;
//! ```

use crate::{write_file, DecodedImage, IoError, IoResult};
use image::codecs::bmp::BmpEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageFormat, ImageReader};
use imgconv_core::{GrayAlpha16Raster, Raster, Rect, Rgba8Raster, Sample};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, Write};
use std::path::Path;

/// Reads a BMP file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<DecodedImage> {
    let file = File::open(path.as_ref())?;
    decode(BufReader::new(file))
}

/// Decodes a BMP stream.
///
/// Malformed or unsupported bitmaps (RLE, odd header sizes, truncated
/// pixel data) are reported as [`IoError::DecodeError`].
pub fn decode<R: BufRead + Seek>(reader: R) -> IoResult<DecodedImage> {
    let img = ImageReader::with_format(reader, ImageFormat::Bmp)
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    dynamic_to_decoded(img)
}

/// Encodes a grayscale raster.
///
/// Opaque rasters become 8 bpp paletted bitmaps; translucent ones become
/// 32 bpp BGRA. Samples are reduced to their high byte.
pub fn encode_gray16<W: Write>(mut writer: W, raster: &GrayAlpha16Raster) -> IoResult<()> {
    let (color_type, bytes) = if raster.is_opaque() {
        let luma = raster
            .data()
            .chunks_exact(2)
            .map(|ga| ga[0].to_u8())
            .collect::<Vec<u8>>();
        (ExtendedColorType::L8, luma)
    } else {
        let rgba = raster
            .data()
            .chunks_exact(2)
            .flat_map(|ga| {
                let g = ga[0].to_u8();
                [g, g, g, ga[1].to_u8()]
            })
            .collect::<Vec<u8>>();
        (ExtendedColorType::Rgba8, rgba)
    };

    encode(&mut writer, raster.width(), raster.height(), color_type, &bytes)
}

/// Encodes an RGBA raster.
///
/// Opaque rasters become 24 bpp BGR bitmaps; translucent ones become
/// 32 bpp BGRA.
pub fn encode_rgba8<W: Write>(mut writer: W, raster: &Rgba8Raster) -> IoResult<()> {
    if raster.is_opaque() {
        let rgb = raster
            .data()
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect::<Vec<u8>>();
        encode(&mut writer, raster.width(), raster.height(), ExtendedColorType::Rgb8, &rgb)
    } else {
        encode(
            &mut writer,
            raster.width(),
            raster.height(),
            ExtendedColorType::Rgba8,
            raster.data(),
        )
    }
}

/// Writes a grayscale raster to a BMP file.
pub fn write_gray16<P: AsRef<Path>>(path: P, raster: &GrayAlpha16Raster) -> IoResult<()> {
    write_file(path.as_ref(), |writer| encode_gray16(writer, raster))
}

/// Writes an RGBA raster to a BMP file.
pub fn write_rgba8<P: AsRef<Path>>(path: P, raster: &Rgba8Raster) -> IoResult<()> {
    write_file(path.as_ref(), |writer| encode_rgba8(writer, raster))
}

fn encode<W: Write>(
    writer: &mut W,
    width: u32,
    height: u32,
    color_type: ExtendedColorType,
    data: &[u8],
) -> IoResult<()> {
    BmpEncoder::new(writer)
        .write_image(data, width, height, color_type)
        .map_err(|e| IoError::EncodeError(e.to_string()))
}

/// Converts a decoded `DynamicImage` to the matching raster layout.
fn dynamic_to_decoded(img: DynamicImage) -> IoResult<DecodedImage> {
    let bounds = Rect::try_new(0, 0, img.width(), img.height())?;

    let image = match img {
        DynamicImage::ImageLuma8(gray) => {
            DecodedImage::Gray8(Raster::from_data(bounds, gray.into_raw())?)
        }
        DynamicImage::ImageLumaA8(gray_alpha) => {
            DecodedImage::GrayAlpha8(Raster::from_data(bounds, gray_alpha.into_raw())?)
        }
        DynamicImage::ImageRgb8(rgb) => {
            DecodedImage::Rgb8(Raster::from_data(bounds, rgb.into_raw())?)
        }
        DynamicImage::ImageRgba8(rgba) => {
            DecodedImage::Rgba8(Raster::from_data(bounds, rgba.into_raw())?)
        }
        other => DecodedImage::Rgba8(Raster::from_data(bounds, other.to_rgba8().into_raw())?),
    };

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgconv_core::{Color, PixelSource};
    use std::io::Cursor;

    fn encoded(f: impl FnOnce(&mut Vec<u8>) -> IoResult<()>) -> Vec<u8> {
        let mut out = Vec::new();
        f(&mut out).expect("encode failed");
        out
    }

    #[test]
    fn test_rgba8_opaque_roundtrip() {
        let raster = Rgba8Raster::from_fn(Rect::from_size(5, 3), |x, y| {
            let v = if (x + y) % 2 == 0 { 0 } else { 255 };
            [v, v, v, 255]
        });
        let bytes = encoded(|out| encode_rgba8(out, &raster));
        assert_eq!(&bytes[0..2], b"BM");

        let loaded = decode(Cursor::new(bytes)).expect("decode failed");
        assert_eq!(loaded.layout(), "rgb8");
        assert_eq!(loaded.bounds(), raster.bounds());
        for (x, y, px) in raster.pixels() {
            assert_eq!(loaded.color_at(x, y), Color::Rgba8(px));
        }
    }

    #[test]
    fn test_rgba8_translucent_roundtrip() {
        let raster = Rgba8Raster::from_fn(Rect::from_size(2, 2), |x, y| {
            [10, 20, 30, (x * 100 + y * 10) as u8]
        });
        let bytes = encoded(|out| encode_rgba8(out, &raster));

        match decode(Cursor::new(bytes)).expect("decode failed") {
            DecodedImage::Rgba8(loaded) => assert_eq!(loaded.data(), raster.data()),
            other => panic!("unexpected layout: {:?}", other.layout()),
        }
    }

    #[test]
    fn test_gray16_opaque_keeps_high_byte() {
        let raster = GrayAlpha16Raster::from_fn(Rect::from_size(3, 2), |x, y| {
            [((x + y * 3) as u16) * 0x1111, u16::MAX]
        });
        let bytes = encoded(|out| encode_gray16(out, &raster));

        let loaded = decode(Cursor::new(bytes)).expect("decode failed");
        for (x, y, [g, _]) in raster.pixels() {
            assert_eq!(loaded.color_at(x, y), Color::gray8(g.to_u8()));
        }
    }

    #[test]
    fn test_gray16_translucent_keeps_alpha() {
        let raster =
            GrayAlpha16Raster::from_data(Rect::from_size(1, 1), vec![0x8000, 0x4000]).unwrap();
        let bytes = encoded(|out| encode_gray16(out, &raster));

        assert_eq!(
            decode(Cursor::new(bytes)).unwrap().color_at(0, 0),
            Color::rgba8(0x80, 0x80, 0x80, 0x40)
        );
    }

    #[test]
    fn test_rejects_bad_magic_and_truncation() {
        let err = decode(Cursor::new(b"PN\0\0\0\0".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));

        let raster = Rgba8Raster::from_fn(Rect::from_size(4, 4), |_, _| [1, 2, 3, 255]);
        let mut bytes = encoded(|out| encode_rgba8(out, &raster));
        bytes.truncate(bytes.len() - 20);
        assert!(decode(Cursor::new(bytes)).is_err());
    }

    #[test]
    fn test_oversized_header_is_an_error() {
        let raster = GrayAlpha16Raster::from_fn(Rect::from_size(2, 2), |_, _| [0x4000, u16::MAX]);
        let mut bytes = encoded(|out| encode_gray16(out, &raster));
        bytes[14..18].copy_from_slice(&u32::MAX.to_le_bytes());

        let err = decode(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
