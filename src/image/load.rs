//! Image decoding.

use std::io::{BufRead, Seek};

use image::{ImageError, RgbaImage};

use super::SourceFormat;

/// Decode an image of the given format from a stream into 8-bit RGBA.
///
/// Sources without an alpha channel decode as fully opaque. Higher bit
/// depths are narrowed to 8 bits per channel.
///
/// # Errors
///
/// Returns the codec error if the stream is not a well-formed image of
/// `format`. Callers attach the path context.
pub fn decode<R: BufRead + Seek>(reader: R, format: SourceFormat) -> Result<RgbaImage, ImageError> {
    let img = image::load(reader, format.image_format())?;

    tracing::debug!(
        "Decoded {format} image {}x{} ({:?})",
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img.into_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn encoded(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, format).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_decode_bmp_is_opaque_rgba() {
        let rgb = RgbImage::from_pixel(3, 2, Rgb([0x81, 0x79, 0x7D]));
        let bytes = encoded(&DynamicImage::ImageRgb8(rgb), ImageFormat::Bmp);

        let img = decode(Cursor::new(bytes), SourceFormat::Bmp).unwrap();

        assert_eq!(img.dimensions(), (3, 2));
        assert!(img.pixels().all(|p| p.0 == [0x81, 0x79, 0x7D, 0xFF]));
    }

    #[test]
    fn test_decode_png() {
        let rgb = RgbImage::from_pixel(4, 4, Rgb([0xFF, 0xFF, 0xFF]));
        let bytes = encoded(&DynamicImage::ImageRgb8(rgb), ImageFormat::Png);

        let img = decode(Cursor::new(bytes), SourceFormat::Png).unwrap();

        assert_eq!(img.dimensions(), (4, 4));
        assert_eq!(img.get_pixel(0, 0).0, [0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_decode_malformed() {
        let bytes = b"BM this is not a bitmap".to_vec();
        assert!(decode(Cursor::new(bytes), SourceFormat::Bmp).is_err());
    }

    #[test]
    fn test_decode_wrong_format() {
        let rgb = RgbImage::new(2, 2);
        let bytes = encoded(&DynamicImage::ImageRgb8(rgb), ImageFormat::Png);
        assert!(decode(Cursor::new(bytes), SourceFormat::Bmp).is_err());
    }
}
