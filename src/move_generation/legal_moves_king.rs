use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::build_move;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::ray_directions::KING_OFFSETS;

/// King steps to the eight adjacent squares, each validated by a trial
/// placement.
///
/// The trial runs on a copy of the board with the king lifted from `from` and
/// set down on the candidate, so the live state is never touched and the
/// king cannot shield itself along a checking ray.
pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<ChessMove>,
) {
    for offset in KING_OFFSETS {
        let Some(to) = from.offset(offset, 1) else {
            continue;
        };
        if matches!(game_state.piece_at(to), Some(target) if target.color == piece.color) {
            continue;
        }

        let mut trial = *game_state.board();
        trial.set(from, None);
        trial.set(to, Some(piece));
        if !is_king_in_check(&trial, to, piece.color) {
            out.push(build_move(game_state, from, to, piece));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

    fn king_targets(fen: &str) -> Vec<String> {
        let game = GameState::from_fen(fen).unwrap();
        let from = game.king_square(game.side_to_move());
        let mut out = Vec::new();
        generate_king_moves(&game, from, game.piece_at(from).unwrap(), &mut out);
        let mut targets: Vec<String> = out.iter().map(|m| square_to_algebraic(m.to)).collect();
        targets.sort();
        targets
    }

    #[test]
    fn lone_king_in_corner_has_three_moves() {
        assert_eq!(king_targets("7k/8/8/8/8/8/8/K7 w - - 0 1"), ["a2", "b1", "b2"]);
    }

    #[test]
    fn king_cannot_retreat_along_checking_file() {
        // e2 king checked from e8: e1 stays on the file, d-file and f-file escape.
        let targets = king_targets("4r2k/8/8/8/8/8/4K3/8 w - - 0 1");
        assert!(!targets.contains(&"e1".to_owned()));
        assert!(!targets.contains(&"e3".to_owned()));
        assert_eq!(targets, ["d1", "d2", "d3", "f1", "f2", "f3"]);
    }

    #[test]
    fn kings_keep_their_distance() {
        // Dark king on e3 covers d2, e2, f2.
        assert_eq!(king_targets("8/8/8/8/8/4k3/8/4K3 w - - 0 1"), ["d1", "f1"]);
    }

    #[test]
    fn king_may_capture_an_undefended_piece_but_not_a_defended_one() {
        assert_eq!(king_targets("7k/8/8/8/8/8/8/3rK3 w - - 0 1").len(), 3);
        // The d8 rook defends d1 down the file.
        let targets = king_targets("3r3k/8/8/8/8/8/8/3rK3 w - - 0 1");
        assert!(!targets.contains(&"d1".to_owned()));
    }

    #[test]
    fn generation_leaves_the_live_state_untouched() {
        let game = GameState::from_fen("4r2k/8/8/8/8/8/4K3/8 w - - 0 1").unwrap();
        let before = game.clone();
        let from = algebraic_to_square("e2").unwrap();
        let mut out = Vec::new();
        generate_king_moves(&game, from, game.piece_at(from).unwrap(), &mut out);
        assert_eq!(game, before);
    }
}
