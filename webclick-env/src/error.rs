//! Errors in the library.
use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum WebClickError {
    /// A font file could not be read.
    #[error("Failed to read font file {path:?}: {source}")]
    FontIo {
        /// Path of the font file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A font file could not be parsed.
    #[error("Failed to parse font file {0:?}")]
    FontParse(PathBuf),

    /// Inconsistent configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A target was placed outside of the canvas.
    #[error("{what} at ({x}, {y}) does not fit in the {width}x{height} canvas")]
    OutOfCanvas {
        /// Name of the target.
        what: String,
        /// Left edge.
        x: u32,
        /// Top edge.
        y: u32,
        /// Canvas width.
        width: u32,
        /// Canvas height.
        height: u32,
    },

    /// Image encoding error.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
