//! Pawn pushes and diagonal captures. Promotion and en passant are not
//! generated.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::CheckInspection;
use crate::move_generation::legal_move_shared::{build_move, pin_allows};
use crate::moves::move_descriptions::ChessMove;

pub fn generate_pawn_moves(
    game_state: &GameState,
    inspection: &CheckInspection,
    from: Square,
    piece: Piece,
    out: &mut Vec<ChessMove>,
) {
    let forward = piece.color.pawn_forward();
    let pin_axis = inspection.pin_axis(from);

    let push = Direction::new(forward, 0);
    if pin_allows(pin_axis, push) {
        if let Some(one_step) = from.offset(push, 1) {
            if game_state.board().is_empty(one_step) {
                out.push(build_move(game_state, from, one_step, piece));

                if from.row() == piece.color.pawn_start_row() {
                    if let Some(two_step) = from.offset(push, 2) {
                        if game_state.board().is_empty(two_step) {
                            out.push(build_move(game_state, from, two_step, piece));
                        }
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let capture = Direction::new(forward, d_col);
        if !pin_allows(pin_axis, capture) {
            continue;
        }
        let Some(to) = from.offset(capture, 1) else {
            continue;
        };
        if matches!(game_state.piece_at(to), Some(target) if target.color != piece.color) {
            out.push(build_move(game_state, from, to, piece));
        }
    }
}
