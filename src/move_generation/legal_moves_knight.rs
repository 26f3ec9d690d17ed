use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::CheckInspection;
use crate::move_generation::legal_move_shared::{build_move, pin_allows};
use crate::moves::move_descriptions::ChessMove;
use crate::moves::ray_directions::KNIGHT_OFFSETS;

pub fn generate_knight_moves(
    game_state: &GameState,
    inspection: &CheckInspection,
    from: Square,
    piece: Piece,
    out: &mut Vec<ChessMove>,
) {
    let pin_axis = inspection.pin_axis(from);

    for offset in KNIGHT_OFFSETS {
        if !pin_allows(pin_axis, offset) {
            continue;
        }
        let Some(to) = from.offset(offset, 1) else {
            continue;
        };
        match game_state.piece_at(to) {
            Some(target) if target.color == piece.color => {}
            _ => out.push(build_move(game_state, from, to, piece)),
        }
    }
}
