//! Perft node counting over make/undo.
//!
//! Used to validate move generation against published node counts for
//! positions and depths where castling, en passant and promotion cannot
//! occur.

use std::sync::Arc;
use std::thread;

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::inspect_position;
use crate::move_generation::legal_move_generator::PinAwareMoveGenerator;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub checks: usize,
    pub double_checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
        self.double_checks += rhs.double_checks;
    }
}

/// Perft with the game's own generator.
pub fn perft_legal(game_state: &GameState, depth: u8) -> MoveGenResult<PerftCounts> {
    perft(&PinAwareMoveGenerator, game_state, depth)
}

pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut scratch = game_state.clone();
    let mut total = PerftCounts::default();
    perft_recurse(generator, &mut scratch, depth, &mut total)?;
    Ok(total)
}

/// Splits the root moves across one thread each; every thread works on its
/// own clone of the state.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth <= 1 {
        return perft(generator.as_ref(), game_state, depth);
    }

    let root_moves = generator.generate_legal_moves(game_state)?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let mut child = game_state.clone();
        handles.push(thread::spawn(move || {
            child.make_move(&mv);
            let mut local = PerftCounts::default();
            let result = perft_recurse(generator_ref.as_ref(), &mut child, depth - 1, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .map_err(|_| ChessErrors::WorkerThreadPanicked)?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    let moves = generator.generate_legal_moves(game_state)?;

    if depth == 1 {
        for mv in &moves {
            counts.nodes += 1;
            if mv.is_capture() {
                counts.captures += 1;
            }
            game_state.make_move(mv);
            let inspection = inspect_position(game_state)?;
            if inspection.in_check {
                counts.checks += 1;
            }
            if inspection.is_double_check() {
                counts.double_checks += 1;
            }
            game_state.undo_move();
        }
        return Ok(());
    }

    for mv in &moves {
        game_state.make_move(mv);
        perft_recurse(generator, game_state, depth - 1, counts)?;
        game_state.undo_move();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::BruteForceMoveGenerator;

    const ENDGAME_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    #[test]
    fn startpos_node_counts() {
        let game = GameState::new_game();
        assert_eq!(perft_legal(&game, 0).unwrap().nodes, 1);
        assert_eq!(perft_legal(&game, 1).unwrap().nodes, 20);
        assert_eq!(perft_legal(&game, 2).unwrap().nodes, 400);

        let depth_3 = perft_legal(&game, 3).unwrap();
        assert_eq!(
            depth_3,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                checks: 12,
                double_checks: 0,
            }
        );
    }

    #[test]
    fn endgame_node_counts() {
        let game = GameState::from_fen(ENDGAME_FEN).unwrap();
        let depth_1 = perft_legal(&game, 1).unwrap();
        assert_eq!((depth_1.nodes, depth_1.captures, depth_1.checks), (14, 1, 2));

        let depth_2 = perft_legal(&game, 2).unwrap();
        assert_eq!((depth_2.nodes, depth_2.captures, depth_2.checks), (191, 14, 10));
    }

    #[test]
    fn perft_leaves_the_input_state_untouched() {
        let game = GameState::from_fen(ENDGAME_FEN).unwrap();
        let before = game.clone();
        perft_legal(&game, 2).unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn generators_and_threading_agree() {
        let game = GameState::new_game();
        let single = perft_legal(&game, 3).unwrap();
        let brute = perft(&BruteForceMoveGenerator, &game, 3).unwrap();
        let threaded = perft_multi_threaded(Arc::new(PinAwareMoveGenerator), &game, 3).unwrap();
        assert_eq!(single, brute);
        assert_eq!(single, threaded);
    }
}
