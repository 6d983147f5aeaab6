//! Single-image conversion: decode, key out the background, encode as PNG.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, Write};
use std::path::Path;

use image::RgbaImage;

use crate::error::{Error, Result};
use crate::image::{decode, encode_png, SourceFormat};

use super::chroma::{apply_palette, Palette};

/// Convert one image between streams.
///
/// `source` and `destination` only label errors; no files are opened here.
///
/// # Errors
///
/// Returns [`Error::Decode`] for malformed input and [`Error::Encode`] if
/// serialization or the write fails.
pub fn convert<R, W>(
    reader: R,
    writer: W,
    format: SourceFormat,
    palette: &Palette,
    source: &Path,
    destination: &Path,
) -> Result<()>
where
    R: BufRead + Seek,
    W: Write,
{
    let keyed = decode_keyed(reader, format, palette, source)?;
    write_png(&keyed, writer, destination)
}

/// Convert the image at `input` and write the PNG result to `output`.
///
/// The parent directory of `output` must already exist. The output file is
/// only created once the input has decoded successfully.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or decoded, or the output
/// cannot be created, encoded or flushed.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    format: SourceFormat,
    palette: &Palette,
) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let reader = File::open(input).map_err(|source| Error::FileOpen {
        path: input.to_path_buf(),
        source,
    })?;
    let keyed = decode_keyed(BufReader::new(reader), format, palette, input)?;

    let file = File::create(output).map_err(|source| Error::FileCreate {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    write_png(&keyed, &mut writer, output)?;

    writer.flush().map_err(|source| Error::Encode {
        path: output.to_path_buf(),
        source: image::ImageError::IoError(source),
    })
}

fn decode_keyed<R: BufRead + Seek>(
    reader: R,
    format: SourceFormat,
    palette: &Palette,
    source: &Path,
) -> Result<RgbaImage> {
    let img = decode(reader, format).map_err(|err| Error::Decode {
        path: source.to_path_buf(),
        source: err,
    })?;

    Ok(apply_palette(&img, palette))
}

fn write_png<W: Write>(img: &RgbaImage, writer: W, destination: &Path) -> Result<()> {
    encode_png(img, writer).map_err(|err| Error::Encode {
        path: destination.to_path_buf(),
        source: err,
    })
}
