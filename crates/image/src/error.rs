//! Error types for the image crate.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for image operations.
pub type Result<T> = std::result::Result<T, ImageError>;

/// Errors that can occur during icon generation.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Target icon size is zero or negative
    #[error("Invalid icon size: {0} (must be greater than zero)")]
    InvalidSize(i64),

    /// Source image has no pixels to scale
    #[error("Source image is empty ({width}x{height})")]
    EmptySourceImage {
        /// Source width in pixels
        width: u32,
        /// Source height in pixels
        height: u32,
    },

    /// Source image could not be decoded
    #[error("Failed to load source image {path}: {source}")]
    Load {
        /// Path that was being read
        path: PathBuf,
        /// Decoder error
        #[source]
        source: image::ImageError,
    },

    /// A multi-resolution container could not be produced
    #[error("Failed to package {container}: {reason}")]
    ContainerPackaging {
        /// Container kind, e.g. "icon.ico"
        container: String,
        /// Underlying cause
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Image processing error
    #[error("Image processing error: {0}")]
    ProcessingError(#[from] image::ImageError),
}

impl ImageError {
    /// Build a container packaging error from any displayable cause
    pub fn packaging(container: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        ImageError::ContainerPackaging {
            container: container.into(),
            reason: reason.to_string(),
        }
    }
}

