//! Integration tests for imgconv crates.
//!
//! End-to-end checks of the full pipeline: decode a file, convert it, save
//! the result in both containers and decode it again.

#[cfg(test)]
mod tests {
    use imgconv_core::{Color, PixelSource, Rect, Rgba8Raster, Sample};
    use imgconv_io::{DecodedImage, Format};
    use imgconv_ops::{to_binary, to_grayscale, ConvertedImage};
    use std::path::Path;
    use tempfile::tempdir;

    /// Opaque color test card: hue sweep across, brightness down.
    fn test_card() -> Rgba8Raster {
        Rgba8Raster::from_fn(Rect::from_size(48, 32), |x, y| {
            let r = (x * 5) as u8;
            let g = (255 - y * 8) as u8;
            let b = ((x + y) * 3) as u8;
            [r, g, b, 255]
        })
    }

    /// Writes the test card as PNG and decodes it back, like a caller would.
    fn load_test_card(dir: &Path) -> DecodedImage {
        let path = dir.join("test.png");
        imgconv_io::png::write_rgba8(&path, &test_card()).expect("write test card");
        imgconv_io::read(&path).expect("read test card")
    }

    /// Every coordinate of `loaded` matches `expected` at 8 bits.
    fn assert_matches_8bit(loaded: &DecodedImage, expected: &ConvertedImage) {
        assert_eq!(loaded.bounds(), expected.bounds());
        for y in expected.bounds().y_range() {
            for x in expected.bounds().x_range() {
                assert_eq!(
                    loaded.color_at(x, y).to_rgba8(),
                    expected.color_at(x, y).to_rgba8(),
                    "pixel ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_convert_and_save_as_png() {
        let dir = tempdir().unwrap();
        let img = load_test_card(dir.path());

        let gray = to_grayscale(&img);
        let gray_path = dir.path().join("out_gray.png");
        gray.save_as_png(&gray_path).expect("save gray png");

        let loaded = imgconv_io::read(&gray_path).expect("read gray png");
        assert_eq!(loaded.bit_depth(), 16);
        for (x, y, [g, a]) in gray.as_grayscale().unwrap().pixels() {
            assert_eq!(loaded.color_at(x, y), Color::rgba16(g, g, g, a));
        }

        for (reverse, name) in [(false, "out_binary_false.png"), (true, "out_binary_true.png")] {
            let binary = to_binary(&img, 127, reverse);
            let path = dir.path().join(name);
            binary.save_as_png(&path).expect("save binary png");

            let loaded = imgconv_io::read(&path).expect("read binary png");
            assert_matches_8bit(&loaded, &binary);
        }
    }

    #[test]
    fn test_convert_and_save_as_bmp() {
        let dir = tempdir().unwrap();
        let img = load_test_card(dir.path());

        let gray = to_grayscale(&img);
        let gray_path = dir.path().join("out_gray.bmp");
        gray.save_as_bmp(&gray_path).expect("save gray bmp");

        let loaded = imgconv_io::read(&gray_path).expect("read gray bmp");
        assert_eq!(loaded.bit_depth(), 8);
        for (x, y, [g, _]) in gray.as_grayscale().unwrap().pixels() {
            assert_eq!(loaded.color_at(x, y), Color::gray8(g.to_u8()));
        }

        for (reverse, name) in [(false, "out_binary_false.bmp"), (true, "out_binary_true.bmp")] {
            let binary = to_binary(&img, 127, reverse);
            let path = dir.path().join(name);
            binary.save_as_bmp(&path).expect("save binary bmp");

            let loaded = imgconv_io::read(&path).expect("read binary bmp");
            assert_matches_8bit(&loaded, &binary);
        }
    }

    #[test]
    fn test_converted_image_is_a_source() {
        // Thresholding a grayscale result sees one value on all channels.
        let card = test_card();
        let gray = to_grayscale(&card);
        let via_gray = to_binary(&gray, 100, false);

        let direct_luma = to_binary(
            &Rgba8Raster::from_fn(card.bounds(), |x, y| {
                let v = gray.color_at(x, y).to_rgba8()[0];
                [v, v, v, 255]
            }),
            100,
            false,
        );
        assert_eq!(via_gray, direct_luma);
    }

    #[test]
    fn test_translucent_binary_roundtrip() {
        let dir = tempdir().unwrap();
        let src = Rgba8Raster::from_fn(Rect::from_size(6, 6), |x, y| {
            [(x * 40) as u8, (y * 40) as u8, 128, (x * 40 + y) as u8]
        });
        let binary = to_binary(&src, 90, true);

        for format in [Format::Png, Format::Bmp] {
            let path = dir.path().join(format!("translucent.{}", format.extension()));
            binary.save(&path, format).expect("save translucent");
            let loaded = imgconv_io::read(&path).expect("read translucent");
            assert_eq!(loaded.layout(), "rgba8");
            assert_matches_8bit(&loaded, &binary);
        }
    }

    #[test]
    fn test_translucent_png_source_is_premultiplied() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("faded.png");
        let faded = Rgba8Raster::from_data(
            Rect::from_size(2, 1),
            vec![200, 200, 200, 100, 200, 200, 200, 255],
        )
        .unwrap();
        imgconv_io::png::write_rgba8(&path, &faded).expect("write faded");
        let img = imgconv_io::read(&path).expect("read faded");

        let binary = to_binary(&img, 127, false);
        let raster = binary.as_binary().unwrap();
        assert_eq!(raster.pixel(0, 0), Some([0, 0, 0, 100]));
        assert_eq!(raster.pixel(1, 0), Some([255, 255, 255, 255]));

        let gray = to_grayscale(&img);
        let raster = gray.as_grayscale().unwrap();
        assert_eq!(raster.pixel(0, 0), Some([20156, 100 * 257]));
        assert_eq!(raster.pixel(1, 0), Some([200 * 257, u16::MAX]));
    }

    #[test]
    fn test_offset_origin_is_written_from_zero() {
        let dir = tempdir().unwrap();
        let src = Rgba8Raster::from_fn(Rect::new(-10, 5, 3, 2), |x, _| {
            if x == -10 { [0, 0, 0, 255] } else { [255, 255, 255, 255] }
        });
        let binary = to_binary(&src, 127, false);
        assert_eq!(binary.bounds(), Rect::new(-10, 5, 3, 2));

        let path = dir.path().join("offset.png");
        binary.save_auto(&path).expect("save offset");
        let loaded = imgconv_io::read(&path).expect("read offset");
        assert_eq!(loaded.bounds(), Rect::from_size(3, 2));
        assert_eq!(loaded.color_at(0, 0), Color::rgba8(0, 0, 0, 255));
        assert_eq!(loaded.color_at(1, 1), Color::rgba8(255, 255, 255, 255));
    }

    #[test]
    fn test_save_twice_from_one_result() {
        let dir = tempdir().unwrap();
        let binary = to_binary(&test_card(), 127, false);

        binary.save_as_png(dir.path().join("a.png")).expect("first save");
        binary.save_as_png(dir.path().join("b.png")).expect("second save");

        let a = std::fs::read(dir.path().join("a.png")).unwrap();
        let b = std::fs::read(dir.path().join("b.png")).unwrap();
        assert_eq!(a, b);
    }
}
