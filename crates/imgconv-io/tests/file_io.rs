use imgconv_core::{Color, GrayAlpha16Raster, PixelSource, Rect, Rgba8Raster};
use imgconv_io::{bmp, png, read, DecodedImage, Format, IoError};
use tempfile::tempdir;

fn checkerboard() -> Rgba8Raster {
    Rgba8Raster::from_fn(Rect::from_size(16, 8), |x, y| {
        let v = if (x / 2 + y / 2) % 2 == 0 { 0 } else { 255 };
        [v, v, v, 255]
    })
}

#[test]
fn png_file_roundtrip_keeps_16bit_gray() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gray.png");
    let raster = GrayAlpha16Raster::from_fn(Rect::from_size(9, 5), |x, y| {
        [(x as u16) << 12 | (y as u16) << 4 | 0x7, u16::MAX]
    });

    png::write_gray16(&path, &raster).expect("write png");
    assert_eq!(Format::detect(&path).unwrap(), Format::Png);

    let loaded = read(&path).expect("read png");
    assert_eq!(loaded.bit_depth(), 16);
    for (x, y, [g, a]) in raster.pixels() {
        assert_eq!(loaded.color_at(x, y), Color::rgba16(g, g, g, a));
    }
}

#[test]
fn bmp_file_roundtrip_rgba() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("binary.bmp");
    let raster = checkerboard();

    bmp::write_rgba8(&path, &raster).expect("write bmp");
    assert_eq!(Format::detect(&path).unwrap(), Format::Bmp);

    let loaded = read(&path).expect("read bmp");
    assert!(matches!(loaded, DecodedImage::Rgb8(_)));
    assert_eq!(loaded.bounds(), raster.bounds());
    for (x, y, px) in raster.pixels() {
        assert_eq!(loaded.color_at(x, y), Color::Rgba8(px));
    }
}

#[test]
fn magic_bytes_win_over_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("actually_png.bmp");

    png::write_rgba8(&path, &checkerboard()).expect("write png");
    assert_eq!(Format::detect(&path).unwrap(), Format::Png);
    assert!(read(&path).is_ok());
}

#[test]
fn write_into_missing_directory_is_create_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.bmp");

    let err = bmp::write_rgba8(&path, &checkerboard()).unwrap_err();
    assert!(matches!(err, IoError::Create { .. }));
    assert!(!path.exists());

    let err = png::write_rgba8(&path, &checkerboard()).unwrap_err();
    assert!(err.is_create_error());
}

#[test]
fn overwrite_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.png");
    std::fs::write(&path, vec![0u8; 4096]).unwrap();

    png::write_rgba8(&path, &checkerboard()).expect("overwrite png");
    let loaded = read(&path).expect("read png");
    assert_eq!(loaded.width(), 16);
    assert_eq!(loaded.height(), 8);
}

#[test]
fn failed_encode_removes_partial_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.png");
    std::fs::write(&path, b"previous contents").unwrap();

    let err = png::write_gray16(&path, &GrayAlpha16Raster::new(Rect::from_size(0, 4))).unwrap_err();
    assert!(matches!(err, IoError::EncodeError(_)), "unexpected error: {}", err);
    assert!(!path.exists());
}
