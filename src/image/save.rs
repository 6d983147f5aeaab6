//! Image encoding.

use std::io::Write;

use image::codecs::png::PngEncoder;
use image::{ImageEncoder, ImageError, RgbaImage};

/// Encode an RGBA image as PNG into `writer`.
///
/// # Errors
///
/// Returns the codec error if serialization or the underlying write fails.
pub fn encode_png<W: Write>(img: &RgbaImage, writer: W) -> Result<(), ImageError> {
    let (width, height) = img.dimensions();
    PngEncoder::new(writer).write_image(
        img.as_raw(),
        width,
        height,
        image::ExtendedColorType::Rgba8,
    )
}
