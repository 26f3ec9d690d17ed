use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};
use crate::utils::algebraic::square_to_algebraic;

/// A single from-square to to-square displacement.
///
/// Moves are produced fresh by generation, never mutated, and owned by the
/// game history once applied. Equality and hashing are structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
}

impl ChessMove {
    /// Build a move by reading both endpoints off `board`.
    ///
    /// Returns `None` when `from` is empty.
    pub fn from_board(board: &Board, from: Square, to: Square) -> Option<Self> {
        let piece_moved = board.piece_at(from)?;
        Some(Self {
            from,
            to,
            piece_moved,
            piece_captured: board.piece_at(to),
        })
    }

    /// Stable four-digit identity: `from.row, from.col, to.row, to.col`.
    #[inline]
    pub fn move_id(&self) -> u16 {
        self.from.row() as u16 * 1000
            + self.from.col() as u16 * 100
            + self.to.row() as u16 * 10
            + self.to.col() as u16
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Long algebraic notation, e.g. "e2e4".
    pub fn to_long_algebraic(&self) -> String {
        format!(
            "{}{}",
            square_to_algebraic(self.from),
            square_to_algebraic(self.to)
        )
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_long_algebraic())
    }
}
