use log::trace;
use ndarray::{ArrayView1, ArrayView2};
use shakmaty::{Color, Piece, Role};

use crate::{
    error::ChessEyeError,
    squares::{NUM_SQUARES, square_at},
    types::{DecodedSquare, SquareLabel},
};

/// Number of classes the classifier scores per square.
pub const NUM_CLASSES: usize = 13;

const fn piece(color: Color, role: Role) -> SquareLabel {
    SquareLabel::Piece(Piece { color, role })
}

/// Class vocabulary, indexed by the classifier's output position.
///
/// Index 0 is an empty square, 1..=6 are black king, queen, rook, bishop,
/// knight, pawn and 7..=12 the same roles for white.
pub const LABELS: [SquareLabel; NUM_CLASSES] = [
    SquareLabel::Empty,
    piece(Color::Black, Role::King),
    piece(Color::Black, Role::Queen),
    piece(Color::Black, Role::Rook),
    piece(Color::Black, Role::Bishop),
    piece(Color::Black, Role::Knight),
    piece(Color::Black, Role::Pawn),
    piece(Color::White, Role::King),
    piece(Color::White, Role::Queen),
    piece(Color::White, Role::Rook),
    piece(Color::White, Role::Bishop),
    piece(Color::White, Role::Knight),
    piece(Color::White, Role::Pawn),
];

/// Position of `label` in [`LABELS`].
pub fn class_index(label: SquareLabel) -> usize {
    LABELS
        .iter()
        .position(|&l| l == label)
        .unwrap_or_default()
}

/// Index and value of the highest score; the first index wins ties.
///
/// NaN never compares greater, so a NaN score is only selected when it sits
/// in column 0, which reads as empty.
fn argmax(scores: ArrayView1<f32>) -> (usize, f32) {
    let mut best = (0, scores[0]);
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > best.1 {
            best = (i, score);
        }
    }
    best
}

/// Turn a `[64, 13]` matrix of class probabilities into square labels.
///
/// Each square takes its most probable class, then any square whose best
/// probability is strictly below `threshold` is read as empty.
pub fn decode_predictions(
    predictions: ArrayView2<f32>,
    threshold: f32,
) -> Result<Vec<DecodedSquare>, ChessEyeError> {
    let found = predictions.dim();
    if found != (NUM_SQUARES, NUM_CLASSES) {
        return Err(ChessEyeError::ShapeMismatch {
            expected: (NUM_SQUARES, NUM_CLASSES),
            found,
        });
    }

    let decoded = predictions
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, scores)| {
            let (class, confidence) = argmax(scores);
            let mut label = LABELS[class];
            if confidence < threshold {
                if !label.is_empty() {
                    trace!(
                        "{}: {label} at {confidence:.3} is below the confidence floor",
                        square_at(i)
                    );
                }
                label = SquareLabel::Empty;
            }
            DecodedSquare { label, confidence }
        })
        .collect();
    Ok(decoded)
}
