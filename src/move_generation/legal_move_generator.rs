//! Full legal move generation pipeline.
//!
//! Runs the pin and check detector once, dispatches every piece of the side
//! to move to its per-kind generator (pins already applied), then filters the
//! result against the checks found: single check keeps captures of the
//! checker, interpositions on its ray and king moves; double check keeps king
//! moves only.

use log::debug;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{
    inspect_position, is_king_in_check, CheckInspection, CheckRecord,
};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{LegalMoveList, MoveGenResult, MoveGenerator};
use crate::moves::move_descriptions::ChessMove;

/// Detector-driven generator used by the game.
pub struct PinAwareMoveGenerator;

/// Reference generator: unrestricted pseudo-legal moves, each applied to a
/// clone and dropped if it leaves the mover's king attacked.
pub struct BruteForceMoveGenerator;

impl MoveGenerator for PinAwareMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<LegalMoveList> {
        let inspection = inspect_position(game_state)?;
        let pseudo = generate_pseudo_legal_moves(game_state, &inspection);

        let legal = match inspection.checks.as_slice() {
            [] => pseudo,
            [check] => {
                let king_sq = game_state.king_square(game_state.side_to_move());
                let rescue = rescue_squares(king_sq, check);
                pseudo
                    .into_iter()
                    .filter(|mv| mv.piece_moved.kind == PieceKind::King || rescue.contains(&mv.to))
                    .collect()
            }
            _ => pseudo
                .into_iter()
                .filter(|mv| mv.piece_moved.kind == PieceKind::King)
                .collect(),
        };

        debug!(
            "{:?} to move: {} checks, {} pins, {} legal moves",
            game_state.side_to_move(),
            inspection.checks.len(),
            inspection.pins.len(),
            legal.len()
        );
        Ok(LegalMoveList::new(legal))
    }
}

impl MoveGenerator for BruteForceMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<LegalMoveList> {
        let side = game_state.side_to_move();
        game_state.verified_king_square(side)?;

        let unrestricted = CheckInspection::default();
        let mut legal = Vec::new();
        for mv in generate_pseudo_legal_moves(game_state, &unrestricted) {
            let mut next = game_state.clone();
            next.make_move(&mv);
            if !is_king_in_check(next.board(), next.king_square(side), side) {
                legal.push(mv);
            }
        }
        Ok(LegalMoveList::new(legal))
    }
}

/// Legal moves for the side to move of `game_state`.
#[inline]
pub fn legal_moves(game_state: &GameState) -> MoveGenResult<LegalMoveList> {
    PinAwareMoveGenerator.generate_legal_moves(game_state)
}

/// Every move of the side to move in board-scan order, honouring the pins in
/// `inspection` but not its checks.
pub fn generate_pseudo_legal_moves(
    game_state: &GameState,
    inspection: &CheckInspection,
) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(64);
    for (from, piece) in game_state.board().squares_of(game_state.side_to_move()) {
        generate_piece_moves(game_state, inspection, from, piece, &mut out);
    }
    out
}

pub fn generate_piece_moves(
    game_state: &GameState,
    inspection: &CheckInspection,
    from: Square,
    piece: Piece,
    out: &mut Vec<ChessMove>,
) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, inspection, from, piece, out),
        PieceKind::Knight => generate_knight_moves(game_state, inspection, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, inspection, from, piece, out),
        PieceKind::Rook => generate_rook_moves(game_state, inspection, from, piece, out),
        PieceKind::Queen => generate_queen_moves(game_state, inspection, from, piece, out),
        PieceKind::King => generate_king_moves(game_state, from, piece, out),
    }
}

/// Squares on which a non-king move resolves a single check.
///
/// A knight can only be captured; any other checker can also be blocked on
/// the squares strictly between it and the king.
pub fn rescue_squares(king_sq: Square, check: &CheckRecord) -> Vec<Square> {
    if check.checker.kind == PieceKind::Knight {
        return vec![check.checker_square];
    }

    let mut squares = Vec::with_capacity(7);
    for distance in 1..8 {
        let Some(square) = king_sq.offset(check.attack_axis, distance) else {
            break;
        };
        squares.push(square);
        if square == check.checker_square {
            break;
        }
    }
    squares
}
