//! Custom error types for bmp2png.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the bmp2png library.
#[derive(Error, Debug)]
pub enum Error {
    /// The source format selector is not one of the supported formats.
    #[error("Invalid format: {value} (expected BMP or PNG)")]
    InvalidFormat { value: String },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Failed to open an input file.
    #[error("error opening input file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to decode an input image.
    #[error("error decoding image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to create an output directory.
    #[error("error creating output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create an output file.
    #[error("error creating output file {path}: {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode or write an output image.
    #[error("error encoding PNG image {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Directory traversal failed.
    #[error("error walking input directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result type alias for bmp2png operations.
pub type Result<T> = std::result::Result<T, Error>;
