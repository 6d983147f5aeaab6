//! Chroma-key transparency: exact palette matches become fully transparent.

use image::{Rgba, RgbaImage};

/// Fully transparent pixel written over every palette match.
pub const TRANSPARENT: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0x00]);

/// Gray and blue-gray backdrop tones used by BMP sources.
pub const BMP_BACKGROUND: &[Rgba<u8>] = &[
    Rgba([0x81, 0x79, 0x7D, 0xFF]),
    Rgba([0x69, 0x71, 0x89, 0xFF]),
    Rgba([0x69, 0x89, 0x91, 0xFF]),
    Rgba([0x6B, 0x8C, 0x94, 0xFF]),
    Rgba([0x95, 0xA9, 0xD1, 0xFF]),
];

/// Opaque white backdrop used by PNG sources.
pub const PNG_BACKGROUND: &[Rgba<u8>] = &[Rgba([0xFF, 0xFF, 0xFF, 0xFF])];

/// Ordered set of colors treated as background.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<Rgba<u8>>,
}

impl Palette {
    /// Create a palette from the given colors, keeping their order.
    #[must_use]
    pub fn new(colors: &[Rgba<u8>]) -> Self {
        Self {
            colors: colors.to_vec(),
        }
    }

    /// A palette that matches nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Palette entries in match order.
    #[must_use]
    pub fn colors(&self) -> &[Rgba<u8>] {
        &self.colors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Whether `pixel` equals any entry on all four channels.
    #[must_use]
    pub fn contains(&self, pixel: &Rgba<u8>) -> bool {
        self.colors.iter().any(|c| c == pixel)
    }
}

/// Replace every pixel matching `palette` with [`TRANSPARENT`].
///
/// Returns a new image with the same dimensions. Non-matching pixels are
/// copied unchanged; there is no tolerance and no blending.
#[must_use]
pub fn apply_palette(img: &RgbaImage, palette: &Palette) -> RgbaImage {
    let mut out = RgbaImage::new(img.width(), img.height());

    for (x, y, pixel) in img.enumerate_pixels() {
        let value = if palette.contains(pixel) {
            TRANSPARENT
        } else {
            *pixel
        };
        out.put_pixel(x, y, value);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Image cycling through every backdrop tone plus some foreground colors.
    fn sample_image() -> RgbaImage {
        let foreground = [
            Rgba([0x81, 0x79, 0x7D, 0xFE]),
            Rgba([0x81, 0x79, 0x7C, 0xFF]),
            Rgba([0xFF, 0xFF, 0xFF, 0xFF]),
            Rgba([0x12, 0x34, 0x56, 0x78]),
            TRANSPARENT,
        ];
        let all: Vec<Rgba<u8>> = BMP_BACKGROUND.iter().chain(&foreground).copied().collect();

        RgbaImage::from_fn(7, 5, |x, y| all[((y * 7 + x) as usize) % all.len()])
    }

    #[test]
    fn test_matches_become_transparent() {
        let img = sample_image();
        let palette = Palette::new(BMP_BACKGROUND);

        let out = apply_palette(&img, &palette);

        for (x, y, src) in img.enumerate_pixels() {
            let dst = out.get_pixel(x, y);
            if BMP_BACKGROUND.contains(src) {
                assert_eq!(*dst, TRANSPARENT, "pixel ({x}, {y})");
            } else {
                assert_eq!(dst, src, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_palette_keeps_order() {
        let palette = Palette::new(BMP_BACKGROUND);
        assert_eq!(palette.colors(), BMP_BACKGROUND);
        assert!(Palette::empty().colors().is_empty());
    }

    #[test]
    fn test_near_misses_are_preserved() {
        let palette = Palette::new(BMP_BACKGROUND);

        // Off by one in alpha or blue.
        assert!(!palette.contains(&Rgba([0x81, 0x79, 0x7D, 0xFE])));
        assert!(!palette.contains(&Rgba([0x81, 0x79, 0x7C, 0xFF])));
        assert!(palette.contains(&Rgba([0x95, 0xA9, 0xD1, 0xFF])));
    }

    #[test]
    fn test_dimensions_preserved() {
        let img = sample_image();
        let out = apply_palette(&img, &Palette::new(PNG_BACKGROUND));
        assert_eq!(out.dimensions(), img.dimensions());
    }

    #[test]
    fn test_empty_palette_is_identity() {
        let img = sample_image();
        let out = apply_palette(&img, &Palette::empty());
        assert_eq!(out, img);
    }

    #[test]
    fn test_idempotent() {
        let img = sample_image();
        let palette = Palette::new(BMP_BACKGROUND);

        let once = apply_palette(&img, &palette);
        let twice = apply_palette(&once, &palette);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_png_palette_only_white() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([0xFF, 0xFF, 0xFF, 0xFF]));
        img.put_pixel(1, 0, BMP_BACKGROUND[0]);

        let out = apply_palette(&img, &Palette::new(PNG_BACKGROUND));

        assert_eq!(*out.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*out.get_pixel(1, 0), BMP_BACKGROUND[0]);
    }

    #[test]
    fn test_zero_sized_image() {
        let img = RgbaImage::new(0, 0);
        let out = apply_palette(&img, &Palette::new(BMP_BACKGROUND));
        assert_eq!(out.dimensions(), (0, 0));
    }
}
