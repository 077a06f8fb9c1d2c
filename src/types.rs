use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use shakmaty::{Board, Color, Piece, Role};

use crate::error::ChessEyeError;

/// Resolved content of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareLabel {
    Empty,
    Piece(Piece),
}

impl SquareLabel {
    pub fn piece(self) -> Option<Piece> {
        match self {
            SquareLabel::Empty => None,
            SquareLabel::Piece(piece) => Some(piece),
        }
    }

    pub fn is_empty(self) -> bool {
        self == SquareLabel::Empty
    }
}

/// Formats as `empty`, or the piece letter (uppercase for white).
impl fmt::Display for SquareLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareLabel::Empty => f.write_str("empty"),
            SquareLabel::Piece(piece) => write!(f, "{}", piece.char()),
        }
    }
}

impl FromStr for SquareLabel {
    type Err = ChessEyeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "empty" {
            return Ok(SquareLabel::Empty);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Piece::from_char(c)
                .map(SquareLabel::Piece)
                .ok_or_else(|| ChessEyeError::InvalidLabel(s.to_string())),
            _ => Err(ChessEyeError::InvalidLabel(s.to_string())),
        }
    }
}

/// Side of the board nearest the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Photographed from white's side; already canonical.
    #[default]
    White,
    /// Photographed from black's side; the board is rotated 180°.
    Black,
}

impl FromStr for Orientation {
    type Err = ChessEyeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(Orientation::White),
            "black" => Ok(Orientation::Black),
            _ => Err(ChessEyeError::UnsupportedOrientation(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::White => f.write_str("white"),
            Orientation::Black => f.write_str("black"),
        }
    }
}

/// Decoded classifier output for one square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedSquare {
    pub label: SquareLabel,
    /// Highest class probability the classifier produced for this square,
    /// kept even when the label was forced to empty.
    pub confidence: f32,
}

#[derive(Debug, Clone)]
pub struct Detection {
    /// Per-square decoding, in traversal order (a1, a2, …, h8) of the
    /// photograph as taken.
    pub squares: Vec<DecodedSquare>,
    /// Board in canonical orientation.
    pub board: Board,
    /// Piece-placement field of the FEN.
    pub fen: String,
}

/// Service-shaped result payload: `{"fen": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Report {
    Position { fen: String },
    Error { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_display_uses_case_for_color() {
        let white_king = SquareLabel::Piece(Piece {
            color: Color::White,
            role: Role::King,
        });
        let black_knight = SquareLabel::Piece(Piece {
            color: Color::Black,
            role: Role::Knight,
        });
        assert_eq!(white_king.to_string(), "K");
        assert_eq!(black_knight.to_string(), "n");
        assert_eq!(SquareLabel::Empty.to_string(), "empty");
    }

    #[test]
    fn label_parses_back() {
        for s in ["empty", "k", "q", "r", "b", "n", "p", "K", "Q", "R", "B", "N", "P"] {
            let label: SquareLabel = s.parse().unwrap();
            assert_eq!(label.to_string(), s);
        }
        assert!(matches!(
            "x".parse::<SquareLabel>(),
            Err(ChessEyeError::InvalidLabel(s)) if s == "x"
        ));
        assert!(matches!(
            "kk".parse::<SquareLabel>(),
            Err(ChessEyeError::InvalidLabel(_))
        ));
        assert!("".parse::<SquareLabel>().is_err());
    }

    #[test]
    fn orientation_parsing() {
        assert_eq!("white".parse::<Orientation>().unwrap(), Orientation::White);
        assert_eq!("Black".parse::<Orientation>().unwrap(), Orientation::Black);
        assert!(matches!(
            "north".parse::<Orientation>(),
            Err(ChessEyeError::UnsupportedOrientation(s)) if s == "north"
        ));
    }

    #[test]
    fn report_serializes_untagged() {
        let ok = Report::Position {
            fen: "8/8/8/8/8/8/8/8".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&ok).unwrap(),
            r#"{"fen":"8/8/8/8/8/8/8/8"}"#
        );
        let err = Report::Error {
            error: "nope".to_string(),
        };
        assert_eq!(serde_json::to_string(&err).unwrap(), r#"{"error":"nope"}"#);
    }
}
