//! Chessboard photograph to FEN piece placement.
//!
//!
//! This crate cuts a photographed board into its 64 squares, hands them
//! to a per-square piece classifier, and turns the classifier's
//! probabilities back into a board. Squares the classifier is not sure
//! about are read as empty, and boards photographed from black's side are
//! rotated into canonical orientation before being written out as the
//! piece-placement field of a FEN string.
//!
//! The principal type is [`ChessEye`], which owns an injected
//! [`Classifier`]. [`OnnxClassifier`] runs an ONNX export of the square
//! model; any closure with the right signature works as well, which is
//! handy for testing.
//!
//! Only piece placement is produced. Side to move, castling rights and
//! en passant squares have no visual signal and are not guessed, and the
//! position is not checked for legality.
//!
//! The library re‑exports `shakmaty`, whose `Board` holds the result.

mod board;
mod classifier;
mod config;
mod error;
mod eye;
mod labels;
mod squares;
mod tensor;
mod types;

/// Main pipeline handle.
pub use eye::ChessEye;

/// Classifier collaborator and its ONNX Runtime implementation.
pub use classifier::{Backend, Classifier, OnnxClassifier};

/// Pipeline configuration.
pub use config::{BOARD_SIZE, CONFIDENCE_THRESHOLD, ChannelOrder, Config, ResizeFilter};

/// Error type produced by library operations.
pub use error::ChessEyeError;

/// Individual pipeline stages, usable on their own.
pub use board::{assemble_board, orient_board, placement_fen};
pub use labels::{LABELS, NUM_CLASSES, class_index, decode_predictions};
pub use squares::{NUM_SQUARES, image_cell, square_at, traversal, traversal_index};
pub use tensor::{decode_board_image, extract_squares, normalize_board_image};

/// Data structures passed between stages and returned by detection.
pub use types::{DecodedSquare, Detection, Orientation, Report, SquareLabel};

/// Re-export of `shakmaty` for convenience when inspecting boards.
pub use shakmaty;
