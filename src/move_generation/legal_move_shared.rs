use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::CheckInspection;
use crate::moves::move_descriptions::ChessMove;

/// A piece pinned along `pin_axis` may only step along that axis.
///
/// Knight offsets are never parallel to a ray, so a pinned knight gets no
/// moves through this same test.
#[inline]
pub fn pin_allows(pin_axis: Option<Direction>, step: Direction) -> bool {
    match pin_axis {
        None => true,
        Some(axis) => step.is_along(axis),
    }
}

#[inline]
pub fn build_move(game_state: &GameState, from: Square, to: Square, piece: Piece) -> ChessMove {
    ChessMove {
        from,
        to,
        piece_moved: piece,
        piece_captured: game_state.piece_at(to),
    }
}

/// Walk each of `directions` from `from` until an edge, an ally (excluded)
/// or an enemy (included).
pub fn generate_slider_moves(
    game_state: &GameState,
    inspection: &CheckInspection,
    from: Square,
    piece: Piece,
    directions: &[Direction],
    out: &mut Vec<ChessMove>,
) {
    let pin_axis = inspection.pin_axis(from);

    for &direction in directions {
        if !pin_allows(pin_axis, direction) {
            continue;
        }
        for distance in 1..8 {
            let Some(to) = from.offset(direction, distance) else {
                break;
            };
            match game_state.piece_at(to) {
                None => out.push(build_move(game_state, from, to, piece)),
                Some(target) if target.color != piece.color => {
                    out.push(build_move(game_state, from, to, piece));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
