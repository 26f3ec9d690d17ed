use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

pub type MoveGenResult<T> = Result<T, ChessErrors>;

/// Legal moves for one position, in board-scan order.
///
/// Valid until the next `make_move` / `undo_move` on the state it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoveList {
    moves: Vec<ChessMove>,
}

impl LegalMoveList {
    pub fn new(moves: Vec<ChessMove>) -> Self {
        Self { moves }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[ChessMove] {
        &self.moves
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ChessMove> {
        self.moves.iter()
    }

    /// Legality verdict for a candidate move.
    #[inline]
    pub fn contains(&self, mv: &ChessMove) -> bool {
        self.moves.contains(mv)
    }

    /// Look up the legal move joining a user-selected source and destination.
    pub fn find(&self, from: Square, to: Square) -> Option<&ChessMove> {
        self.moves.iter().find(|mv| mv.from == from && mv.to == to)
    }

    pub fn moves_from(&self, from: Square) -> impl Iterator<Item = &ChessMove> + '_ {
        self.moves.iter().filter(move |mv| mv.from == from)
    }

    pub fn into_vec(self) -> Vec<ChessMove> {
        self.moves
    }
}

impl IntoIterator for LegalMoveList {
    type Item = ChessMove;
    type IntoIter = std::vec::IntoIter<ChessMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a LegalMoveList {
    type Item = &'a ChessMove;
    type IntoIter = std::slice::Iter<'a, ChessMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<LegalMoveList>;
}
