//! Error types for mxn-vis.
//!
//! A single error enum covers every failure the library can surface, from
//! encoder and I/O failures to invalid arrays and drawing errors.

use thiserror::Error;

/// The main error type for mxn-vis operations.
#[derive(Error, Debug)]
pub enum VisError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding/decoding errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Array construction errors
    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Mask and data disagree on shape
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// No finite sample to derive a normalization range from
    #[error("Empty value range: {message}")]
    EmptyRange { message: String },

    /// Drawing errors raised by the plotting backend
    #[error("Render error: {message}")]
    Render { message: String },
}

/// Convenience type alias for Results with VisError
pub type Result<T> = std::result::Result<T, VisError>;
