//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decode/encode and resize errors, and provides semantic
//! variants for a missing source image and invalid target dimensions.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Image buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Source image not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Invalid icon dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Unsupported icon file extension: {filename}")]
    UnsupportedFormat { filename: String },

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub fn processing<E: std::fmt::Display>(e: E) -> Self {
        Error::Processing(e.to_string())
    }
}
