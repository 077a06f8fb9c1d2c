use shakmaty::{File, Rank, Square};

/// Number of squares visited per board.
pub const NUM_SQUARES: usize = 64;

/// Map a traversal index (0..64) to its board square.
///
/// The traversal is file-major: a1, a2, …, a8, b1, …, h8. Both the grid
/// slicer and the board assembler go through this function, so the order
/// in which image cells are cut is the order in which labels are placed.
///
/// Panics if `index >= 64`.
pub fn square_at(index: usize) -> Square {
    assert!(index < NUM_SQUARES, "traversal index out of range: {index}");
    Square::from_coords(File::new((index / 8) as u32), Rank::new((index % 8) as u32))
}

/// Inverse of [`square_at`].
pub fn traversal_index(square: Square) -> usize {
    square.file() as usize * 8 + square.rank() as usize
}

/// Image cell `(row, column)` holding `square` in a photograph taken with
/// rank 8 at the top and file a on the left.
///
/// Image row 0 is the top of the picture, so rank 1 lives in row 7.
pub fn image_cell(square: Square) -> (usize, usize) {
    (7 - square.rank() as usize, square.file() as usize)
}

/// Iterate all squares in traversal order.
pub fn traversal() -> impl Iterator<Item = Square> {
    (0..NUM_SQUARES).map(square_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_is_file_major() {
        let names: Vec<String> = traversal().take(10).map(|sq| sq.to_string()).collect();
        assert_eq!(
            names,
            ["a1", "a2", "a3", "a4", "a5", "a6", "a7", "a8", "b1", "b2"]
        );
        assert_eq!(square_at(63), Square::H8);
    }

    #[test]
    fn index_round_trips() {
        for i in 0..NUM_SQUARES {
            assert_eq!(traversal_index(square_at(i)), i);
        }
    }

    #[test]
    fn rank_one_is_bottom_row() {
        assert_eq!(image_cell(Square::A1), (7, 0));
        assert_eq!(image_cell(Square::H8), (0, 7));
        assert_eq!(image_cell(Square::E4), (4, 4));
    }

    #[test]
    #[should_panic]
    fn rejects_out_of_range_index() {
        square_at(64);
    }
}
