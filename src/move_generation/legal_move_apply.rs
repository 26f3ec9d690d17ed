//! Move application and reversal on a live `GameState`.
//!
//! Neither operation validates legality: `make_move` expects a member of the
//! most recently computed legal-move list.

use log::trace;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

impl GameState {
    /// Apply `mv`: empty the origin, place the mover on the destination,
    /// record the move, flip the turn and follow a moving king.
    pub fn make_move(&mut self, mv: &ChessMove) {
        self.board.set(mv.from, None);
        self.board.set(mv.to, Some(mv.piece_moved));
        self.move_history.push(*mv);
        self.side_to_move = self.side_to_move.opposite();

        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_square(mv.piece_moved.color, mv.to);
        }

        trace!("make_move {mv} (ply {})", self.move_history.len());
    }

    /// Revert the most recent move. Returns it, or `None` when history is
    /// empty (a no-op).
    pub fn undo_move(&mut self) -> Option<ChessMove> {
        let mv = self.move_history.pop()?;

        self.board.set(mv.from, Some(mv.piece_moved));
        self.board.set(mv.to, mv.piece_captured);
        self.side_to_move = self.side_to_move.opposite();

        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_square(mv.piece_moved.color, mv.from);
        }

        trace!("undo_move {mv} (ply {})", self.move_history.len());
        Some(mv)
    }
}
