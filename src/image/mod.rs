//! Image decoding and encoding for the supported source formats.

mod load;
mod save;

pub use load::decode;
pub use save::encode_png;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use image::ImageFormat;

use crate::error::Error;
use crate::pipeline::Palette;

/// Extension written for every converted file.
pub const OUTPUT_EXTENSION: &str = "png";

/// Format the input tree is decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFormat {
    /// Windows bitmap.
    #[default]
    Bmp,
    /// Portable network graphics.
    Png,
}

impl SourceFormat {
    /// Conventional lowercase file extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Bmp => "bmp",
            Self::Png => "png",
        }
    }

    /// Background palette made transparent for inputs of this format.
    #[must_use]
    pub fn default_palette(self) -> Palette {
        match self {
            Self::Bmp => Palette::new(crate::pipeline::BMP_BACKGROUND),
            Self::Png => Palette::new(crate::pipeline::PNG_BACKGROUND),
        }
    }

    /// Whether `path` carries this format's extension (ASCII case-insensitive).
    ///
    /// The extension is everything after the last dot of the file name, so a
    /// bare `.bmp` file counts as a bitmap.
    #[must_use]
    pub fn matches_path(self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.rsplit_once('.'))
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(self.extension()))
    }

    const fn image_format(self) -> ImageFormat {
        match self {
            Self::Bmp => ImageFormat::Bmp,
            Self::Png => ImageFormat::Png,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bmp => f.write_str("BMP"),
            Self::Png => f.write_str("PNG"),
        }
    }
}

impl FromStr for SourceFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("bmp") {
            Ok(Self::Bmp)
        } else if s.eq_ignore_ascii_case("png") {
            Ok(Self::Png)
        } else {
            Err(Error::InvalidFormat {
                value: s.to_string(),
            })
        }
    }
}
