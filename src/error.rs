//! Error types for the chess-eye board recognition library.
//!
//! Every stage of the pipeline reports failures through [`ChessEyeError`].
//! Structural problems (bad image dimensions, classifier output of the
//! wrong shape, undecodable bytes, unknown orientation) are terminal for
//! the request; a misclassified square is never an error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChessEyeError {
    /// The board image cannot be cut into an 8×8 grid of equal cells.
    #[error("Invalid image dimensions: {width}x{height} is not a square divisible by 8")]
    InvalidImageDimensions { width: u32, height: u32 },

    /// Classifier output (or a label list) does not have the expected shape.
    #[error("Shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// The input bytes could not be decoded as an image.
    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// The input bytes are an image format we do not accept.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// A square label is neither `empty` nor a single piece letter.
    #[error("Invalid square label: {0:?}")]
    InvalidLabel(String),

    /// The orientation flag is neither `white` nor `black`.
    #[error("Unsupported orientation: {0:?}")]
    UnsupportedOrientation(String),

    /// Wraps an error returned by the underlying ONNX Runtime bindings.
    #[error("ONNX Runtime error: {0}")]
    OrtError(#[from] ort::Error),

    /// Occurs when an ndarray has an unexpected dimensionality while
    /// extracting classifier scores.
    #[error("Tensor shape error: {0}")]
    ShapeError(#[from] ndarray::ShapeError),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
