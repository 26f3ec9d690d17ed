//! Legal rook move generation.
//!
//! Emits rook moves along the four orthogonal rays, restricted to the pin
//! axis when the rook is pinned.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::CheckInspection;
use crate::move_generation::legal_move_shared::generate_slider_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::ray_directions::ORTHOGONAL_DIRECTIONS;

pub fn generate_rook_moves(
    game_state: &GameState,
    inspection: &CheckInspection,
    from: Square,
    piece: Piece,
    out: &mut Vec<ChessMove>,
) {
    generate_slider_moves(game_state, inspection, from, piece, &ORTHOGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::inspect_position;
    use crate::utils::algebraic::algebraic_to_square;

    fn rook_moves(fen: &str, from: &str) -> Vec<ChessMove> {
        let game = GameState::from_fen(fen).unwrap();
        let inspection = inspect_position(&game).unwrap();
        let from = algebraic_to_square(from).unwrap();
        let mut out = Vec::new();
        generate_rook_moves(&game, &inspection, from, game.piece_at(from).unwrap(), &mut out);
        out
    }

    #[test]
    fn open_rook_has_fourteen_moves() {
        assert_eq!(rook_moves("7k/8/8/8/3R4/8/8/K7 w - - 0 1", "d4").len(), 14);
    }

    #[test]
    fn file_pinned_rook_slides_along_file_only() {
        let moves = rook_moves("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1", "e2");
        // e3..e7 plus the capture on e8.
        assert_eq!(moves.len(), 6);
        assert!(moves.iter().all(|m| m.to.col() == 4));
    }

    #[test]
    fn diagonally_pinned_rook_cannot_move() {
        assert!(rook_moves("7k/8/8/b7/8/8/3R4/4K3 w - - 0 1", "d2").is_empty());
    }
}
