//! Error types for cardtrip-canvas.

use thiserror::Error;

/// Result type alias using CanvasError.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors that can occur while rendering a card.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Invalid canvas dimensions (must be positive and within limits).
    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngError(String),

    /// The outline has no drawable geometry.
    #[error("Path error: outline is empty")]
    EmptyPath,

    /// Error from the card geometry layer.
    #[error(transparent)]
    Card(#[from] cardtrip_rs::CardError),
}

impl From<png::EncodingError> for CanvasError {
    fn from(err: png::EncodingError) -> Self {
        CanvasError::PngError(err.to_string())
    }
}
