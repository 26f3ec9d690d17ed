//! Pin and check detection.
//!
//! Scans outward from a king along the eight rays and probes the eight knight
//! offsets. The result is an immutable snapshot consulted by the per-piece
//! generators; it is recomputed for every legal-move computation.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::ray_directions::{ALL_RAY_DIRECTIONS, KNIGHT_OFFSETS};

/// An allied piece that may only move along `axis` (either sense).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinRecord {
    pub pinned_square: Square,
    pub axis: Direction,
}

/// An enemy piece attacking the king.
///
/// `attack_axis` points from the king toward the checker: a unit ray for
/// sliders, pawns and kings, the knight offset for knights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckRecord {
    pub checker_square: Square,
    pub attack_axis: Direction,
    pub checker: Piece,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckInspection {
    pub in_check: bool,
    pub pins: Vec<PinRecord>,
    pub checks: Vec<CheckRecord>,
}

impl CheckInspection {
    /// Pin axis of the piece on `square`, if it is pinned.
    #[inline]
    pub fn pin_axis(&self, square: Square) -> Option<Direction> {
        self.pins
            .iter()
            .find(|pin| pin.pinned_square == square)
            .map(|pin| pin.axis)
    }

    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.checks.len() >= 2
    }
}

/// Inspect the side to move's king.
pub fn inspect_position(game_state: &GameState) -> Result<CheckInspection, ChessErrors> {
    let side = game_state.side_to_move();
    let king_sq = game_state.verified_king_square(side)?;
    Ok(inspect_check(game_state.board(), king_sq, side))
}

/// Inspect a king of `color` standing on `king_sq`.
///
/// `king_sq` need not hold the king on `board`; king-move validation passes
/// a candidate square on a scratch board.
pub fn inspect_check(board: &Board, king_sq: Square, color: Color) -> CheckInspection {
    let mut inspection = CheckInspection::default();

    for ray in ALL_RAY_DIRECTIONS {
        let mut possible_pin: Option<Square> = None;

        for distance in 1..8 {
            let Some(target) = king_sq.offset(ray, distance) else {
                break;
            };
            let Some(piece) = board.piece_at(target) else {
                continue;
            };

            if piece.color == color {
                if possible_pin.is_none() {
                    possible_pin = Some(target);
                    continue;
                }
                // Second ally on the ray shields the king.
                break;
            }

            if attacks_along_ray(piece, ray, distance) {
                match possible_pin {
                    None => {
                        inspection.in_check = true;
                        inspection.checks.push(CheckRecord {
                            checker_square: target,
                            attack_axis: ray,
                            checker: piece,
                        });
                    }
                    Some(pinned_square) => inspection.pins.push(PinRecord {
                        pinned_square,
                        axis: ray,
                    }),
                }
            }
            break;
        }
    }

    for offset in KNIGHT_OFFSETS {
        let Some(target) = king_sq.offset(offset, 1) else {
            continue;
        };
        if let Some(piece) = board.piece_at(target) {
            if piece.color != color && piece.kind == PieceKind::Knight {
                inspection.in_check = true;
                inspection.checks.push(CheckRecord {
                    checker_square: target,
                    attack_axis: offset,
                    checker: piece,
                });
            }
        }
    }

    inspection
}

/// Whether an enemy `piece` found `distance` squares out along `ray` (from
/// the king) attacks back down that ray.
fn attacks_along_ray(piece: Piece, ray: Direction, distance: i8) -> bool {
    match piece.kind {
        PieceKind::Rook => ray.is_orthogonal(),
        PieceKind::Bishop => ray.is_diagonal(),
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        // A pawn attacks forward-diagonally, so it sits one row behind the
        // king from its own point of view.
        PieceKind::Pawn => {
            distance == 1 && ray.is_diagonal() && ray.d_row == -piece.color.pawn_forward()
        }
        PieceKind::Knight => false,
    }
}

/// Whether the king of `color` would be attacked on `king_sq`.
#[inline]
pub fn is_king_in_check(board: &Board, king_sq: Square, color: Color) -> bool {
    inspect_check(board, king_sq, color).in_check
}
