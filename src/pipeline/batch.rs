//! Batch driver: walks the input tree and converts every eligible file.

use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::image::SourceFormat;

use super::chroma::Palette;
use super::convert::convert_file;
use super::walker::{walk, FileTask, WalkItem};

/// Configuration for a batch conversion.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the tree to convert.
    pub input_dir: PathBuf,

    /// Root the converted tree is written under. Created if missing.
    pub output_dir: PathBuf,

    /// Format input files are decoded from.
    pub format: SourceFormat,

    /// Colors keyed out to transparency.
    pub palette: Palette,
}

impl Config {
    /// Create a configuration using the default palette for `format`.
    #[must_use]
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        format: SourceFormat,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            format,
            palette: format.default_palette(),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the input root is missing or not a directory.
    pub fn validate(&self) -> Result<()> {
        if !self.input_dir.exists() {
            return Err(Error::InvalidParameter {
                name: "input_dir".to_string(),
                reason: format!("{} does not exist", self.input_dir.display()),
            });
        }

        if !self.input_dir.is_dir() {
            return Err(Error::InvalidParameter {
                name: "input_dir".to_string(),
                reason: format!("{} is not a directory", self.input_dir.display()),
            });
        }

        Ok(())
    }
}

/// Counts reported after a complete walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Files converted and written.
    pub converted: usize,
    /// Files skipped because their extension did not match.
    pub skipped: usize,
}

/// Converts a whole input tree into a mirrored PNG tree.
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        tracing::debug!("Initializing pipeline with config: {config:?}");

        Ok(Self { config })
    }

    /// Convert every eligible file, calling `on_converted` after each success.
    ///
    /// Stops at the first error. Files converted before it stay on disk.
    ///
    /// # Errors
    ///
    /// Returns the first walk, directory creation or conversion error.
    pub fn run<F>(&self, mut on_converted: F) -> Result<Summary>
    where
        F: FnMut(&FileTask),
    {
        let Config {
            input_dir,
            output_dir,
            format,
            ..
        } = &self.config;

        tracing::info!(
            "Converting {format} files from {} to {}",
            input_dir.display(),
            output_dir.display()
        );

        fs::create_dir_all(output_dir).map_err(|source| Error::CreateDir {
            path: output_dir.clone(),
            source,
        })?;

        let mut summary = Summary::default();

        for item in walk(input_dir, output_dir, *format) {
            match item? {
                WalkItem::Skip(_) => summary.skipped += 1,
                WalkItem::Convert(task) => {
                    self.process(&task)?;
                    summary.converted += 1;
                    on_converted(&task);
                }
            }
        }

        tracing::info!(
            "Processing complete: {} converted, {} skipped",
            summary.converted,
            summary.skipped
        );

        Ok(summary)
    }

    /// Convert a single task, creating its output directory first.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or conversion fails.
    pub fn process(&self, task: &FileTask) -> Result<()> {
        if let Some(parent) = task.output.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        tracing::info!("Processing image: {}", task.input.display());

        convert_file(&task.input, &task.output, self.config.format, &self.config.palette)
    }
}
