//! Square conversions for coordinate notation.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`.
//! Row 0 is rank 8, column 0 is file a.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert a coordinate (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    Square::new(b'8' - rank, file - b'a')
}

/// Convert a square to its coordinate (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col());
    let rank_char = char::from(b'8' - square.row());
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_rows_and_columns() {
        assert_eq!(algebraic_to_square("a8").unwrap(), Square::new(0, 0).unwrap());
        assert_eq!(algebraic_to_square("h1").unwrap(), Square::new(7, 7).unwrap());
        assert_eq!(square_to_algebraic(Square::new(7, 4).unwrap()), "e1");
    }

    #[test]
    fn every_square_converts_back() {
        for sq in Square::all() {
            assert_eq!(algebraic_to_square(&square_to_algebraic(sq)).unwrap(), sq);
        }
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            algebraic_to_square("i1"),
            Err(ChessErrors::InvalidAlgebraicChar('i'))
        );
        assert_eq!(
            algebraic_to_square("a9"),
            Err(ChessErrors::InvalidAlgebraicChar('9'))
        );
        assert!(matches!(
            algebraic_to_square("e10"),
            Err(ChessErrors::InvalidAlgebraicString(_))
        ));
    }
}
