//! Unified error type for samplegen.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating a sample batch.
#[derive(Debug, Error)]
pub enum SampleError {
    /// A command-line value failed validation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A color string matched none of the accepted syntaxes.
    #[error("Unknown color format: {0}")]
    InvalidColor(String),

    /// An aspect ratio string was not of the form `H:V`.
    #[error("Invalid aspect ratio format: {0}. Use format 'H:V' (e.g., '3:2')")]
    InvalidAspectRatio(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image encoder rejected the canvas or failed to write it.
    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),

    /// A font file could not be read or parsed.
    #[error("Failed to load font {}: {reason}", path.display())]
    FontLoad {
        /// The candidate font path.
        path: PathBuf,
        /// Why loading failed.
        reason: String,
    },
}
