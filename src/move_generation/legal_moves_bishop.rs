//! Legal bishop move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::CheckInspection;
use crate::move_generation::legal_move_shared::generate_slider_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::ray_directions::DIAGONAL_DIRECTIONS;

pub fn generate_bishop_moves(
    game_state: &GameState,
    inspection: &CheckInspection,
    from: Square,
    piece: Piece,
    out: &mut Vec<ChessMove>,
) {
    generate_slider_moves(game_state, inspection, from, piece, &DIAGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::inspect_position;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn bishop_stops_before_allies_and_on_enemies() {
        // c1 bishop: b2 blocked by own pawn, d2-e3-f4 open, g5 enemy pawn.
        let game = GameState::from_fen("4k3/8/8/6p1/8/8/1P6/2B1K3 w - - 0 1").unwrap();
        let inspection = inspect_position(&game).unwrap();
        let from = algebraic_to_square("c1").unwrap();
        let mut out = Vec::new();
        generate_bishop_moves(&game, &inspection, from, game.piece_at(from).unwrap(), &mut out);

        assert_eq!(out.len(), 4);
        assert_eq!(out.iter().filter(|m| m.is_capture()).count(), 1);
    }
}
