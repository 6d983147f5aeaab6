//! # bmp2png
//!
//! Batch-converts a tree of BMP (or PNG) images into a mirrored tree of PNG
//! files, keying a fixed palette of background colors out to full
//! transparency. Every other pixel passes through unchanged.
//!
//! ## Example
//!
//! ```no_run
//! use bmp2png::{Config, Pipeline, SourceFormat};
//!
//! # fn main() -> bmp2png::Result<()> {
//! let config = Config::new("sprites", "sprites_png", SourceFormat::Bmp);
//! let pipeline = Pipeline::new(config)?;
//!
//! let summary = pipeline.run(|task| println!("{}", task.output.display()))?;
//! println!("{} converted", summary.converted);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod pipeline;

pub use error::{Error, Result};
pub use crate::image::SourceFormat;
pub use pipeline::{Config, Palette, Pipeline, Summary};
