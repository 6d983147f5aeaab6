//! Chroma-key conversion pipeline.

mod batch;
mod chroma;
mod convert;
mod walker;

pub use batch::{Config, Pipeline, Summary};
pub use chroma::{apply_palette, Palette, BMP_BACKGROUND, PNG_BACKGROUND, TRANSPARENT};
pub use convert::{convert, convert_file};
pub use walker::{is_eligible, walk, FileTask, WalkItem};
