//! 8x8 mailbox board.
//!
//! Readable by every component; only `GameState` (and the scratch copies made
//! during king-move validation) write to it.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Raw row-major cells, row 0 first.
    #[inline]
    pub fn cells(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.cells
    }

    /// Squares holding pieces of `color`, in board-scan order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    pub fn find_kings(&self, color: Color) -> Vec<Square> {
        self.squares_of(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
            .collect()
    }
}
