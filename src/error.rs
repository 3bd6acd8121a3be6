//! Error types for surface texturing.

use thiserror::Error;

/// Result type alias using TexturingError.
pub type Result<T> = std::result::Result<T, TexturingError>;

/// Main error type for texture coordinate and compositing operations.
#[derive(Error, Debug)]
pub enum TexturingError {
    /// Vertex count violates a coordinate function's shape requirement.
    #[error("invalid vertex count: {0}")]
    InvalidVertexCount(String),

    /// Geometry cannot be projected (e.g. a degenerate face loop).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Failed to read or process an image.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
