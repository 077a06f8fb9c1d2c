//! Board assembly, orientation correction and piece-placement output.
//!
//! No legality checks happen here: two white kings or a pawn on the back
//! rank are passed through exactly as they were read.

use shakmaty::Board;

use crate::{
    error::ChessEyeError,
    squares::{NUM_SQUARES, square_at},
    types::{Orientation, SquareLabel},
};

/// Place 64 labels, given in traversal order, on an empty board.
pub fn assemble_board(labels: &[SquareLabel]) -> Result<Board, ChessEyeError> {
    if labels.len() != NUM_SQUARES {
        return Err(ChessEyeError::ShapeMismatch {
            expected: (NUM_SQUARES, 1),
            found: (labels.len(), 1),
        });
    }

    let mut board = Board::empty();
    for (i, label) in labels.iter().enumerate() {
        let square = square_at(i);
        match label.piece() {
            Some(piece) => {
                board.set_piece_at(square, piece);
            }
            None => {
                board.remove_piece_at(square);
            }
        }
    }
    Ok(board)
}

/// Rotate a board photographed from black's side into canonical
/// orientation. Boards photographed from white's side are returned as is.
pub fn orient_board(board: &Board, orientation: Orientation) -> Board {
    let mut oriented = board.clone();
    if orientation == Orientation::Black {
        oriented.rotate_180();
    }
    oriented
}

/// Piece-placement field of the FEN: ranks 8 to 1 separated by `/`,
/// runs of empty squares written as digits.
pub fn placement_fen(board: &Board) -> String {
    board.to_string()
}

#[cfg(test)]
mod tests {
    use shakmaty::{Color, Piece, Role, Square};

    use super::*;
    use crate::squares::traversal_index;

    const EMPTY_FEN: &str = "8/8/8/8/8/8/8/8";

    fn labels_with(pieces: &[(Square, Piece)]) -> Vec<SquareLabel> {
        let mut labels = vec![SquareLabel::Empty; 64];
        for &(square, piece) in pieces {
            labels[traversal_index(square)] = SquareLabel::Piece(piece);
        }
        labels
    }

    fn kings() -> Vec<SquareLabel> {
        labels_with(&[
            (Square::E1, Piece { color: Color::White, role: Role::King }),
            (Square::E8, Piece { color: Color::Black, role: Role::King }),
        ])
    }

    #[test]
    fn empty_labels_give_empty_board() {
        let board = assemble_board(&[SquareLabel::Empty; 64]).unwrap();
        assert_eq!(placement_fen(&board), EMPTY_FEN);
    }

    #[test]
    fn kings_on_e_file() {
        let board = assemble_board(&kings()).unwrap();
        let fen = placement_fen(&orient_board(&board, Orientation::White));
        assert_eq!(fen, "4k3/8/8/8/8/8/8/4K3");
    }

    #[test]
    fn black_perspective_rotates_180() {
        let board = assemble_board(&kings()).unwrap();
        let fen = placement_fen(&orient_board(&board, Orientation::Black));
        assert_eq!(fen, "3K4/8/8/8/8/8/8/3k4");
    }

    #[test]
    fn rotation_is_self_inverse() {
        let labels = labels_with(&[
            (Square::A1, Piece { color: Color::White, role: Role::Rook }),
            (Square::C6, Piece { color: Color::Black, role: Role::Knight }),
            (Square::H2, Piece { color: Color::White, role: Role::Pawn }),
        ]);
        let board = assemble_board(&labels).unwrap();
        let twice = orient_board(&orient_board(&board, Orientation::Black), Orientation::Black);
        assert_eq!(twice, board);

        let once = orient_board(&board, Orientation::Black);
        assert_eq!(
            once.piece_at(Square::H8),
            Some(Piece { color: Color::White, role: Role::Rook })
        );
        assert_eq!(
            once.piece_at(Square::F3),
            Some(Piece { color: Color::Black, role: Role::Knight })
        );
    }

    #[test]
    fn starting_position_round_trips() {
        let start = Board::default();
        let labels: Vec<SquareLabel> = (0..64)
            .map(|i| match start.piece_at(square_at(i)) {
                Some(piece) => SquareLabel::Piece(piece),
                None => SquareLabel::Empty,
            })
            .collect();
        let board = assemble_board(&labels).unwrap();
        assert_eq!(
            placement_fen(&board),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }

    #[test]
    fn full_board_from_black_side() {
        let board = orient_board(&Board::default(), Orientation::Black);
        assert_eq!(
            placement_fen(&board),
            "RNBKQBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbkqbnr"
        );
        assert_eq!(
            board.piece_at(Square::D1),
            Some(Piece { color: Color::Black, role: Role::King })
        );
    }

    #[test]
    fn illegal_positions_pass_through() {
        let white_king = Piece { color: Color::White, role: Role::King };
        let labels = labels_with(&[
            (Square::A1, white_king),
            (Square::H1, white_king),
            (Square::D8, Piece { color: Color::White, role: Role::Pawn }),
        ]);
        let board = assemble_board(&labels).unwrap();
        assert_eq!(placement_fen(&board), "3P4/8/8/8/8/8/8/K6K");
    }

    #[test]
    fn rejects_wrong_label_count() {
        let err = assemble_board(&[SquareLabel::Empty; 63]).unwrap_err();
        assert!(matches!(err, ChessEyeError::ShapeMismatch { found: (63, 1), .. }));
    }
}
