//! Game state: board, turn, cached king squares and move history.
//!
//! `GameState` is the only owner of the board. One instance lives for a whole
//! game session; it is mutated in place by `make_move` / `undo_move` (see
//! `move_generation::legal_move_apply`) and read by move generation.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,

    // Cached for O(1) lookup; kept in sync with the board on every king move.
    pub(crate) light_king_square: Square,
    pub(crate) dark_king_square: Square,

    pub(crate) move_history: Vec<ChessMove>,
}

impl GameState {
    /// Standard initial position, Light to move.
    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Wrap an arbitrary board. Each color must have exactly one king.
    pub fn from_board(board: Board, side_to_move: Color) -> Result<Self, ChessErrors> {
        let light_king_square = single_king(&board, Color::Light)?;
        let dark_king_square = single_king(&board, Color::Dark)?;
        Ok(Self {
            board,
            side_to_move,
            light_king_square,
            dark_king_square,
            move_history: Vec::new(),
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::Light => self.light_king_square,
            Color::Dark => self.dark_king_square,
        }
    }

    #[inline]
    pub(crate) fn set_king_square(&mut self, color: Color, square: Square) {
        match color {
            Color::Light => self.light_king_square = square,
            Color::Dark => self.dark_king_square = square,
        }
    }

    /// Applied moves, oldest first.
    #[inline]
    pub fn move_history(&self) -> &[ChessMove] {
        &self.move_history
    }

    /// Confirm the cached king square of `color` really holds that king.
    pub fn verified_king_square(&self, color: Color) -> Result<Square, ChessErrors> {
        let square = self.king_square(color);
        match self.board.piece_at(square) {
            Some(Piece {
                color: c,
                kind: PieceKind::King,
            }) if c == color => Ok(square),
            _ => Err(ChessErrors::KingCacheOutOfSync((color, square))),
        }
    }
}

fn single_king(board: &Board, color: Color) -> Result<Square, ChessErrors> {
    match board.find_kings(color).as_slice() {
        [square] => Ok(*square),
        others => Err(ChessErrors::KingCountMismatch((color, others.len()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn new_game_has_cached_kings_and_light_to_move() {
        let game = GameState::new_game();
        assert_eq!(game.side_to_move(), Color::Light);
        assert_eq!(game.king_square(Color::Light), algebraic_to_square("e1").unwrap());
        assert_eq!(game.king_square(Color::Dark), algebraic_to_square("e8").unwrap());
        assert!(game.move_history().is_empty());
        assert!(game.verified_king_square(Color::Light).is_ok());
        assert!(game.verified_king_square(Color::Dark).is_ok());
    }

    #[test]
    fn from_board_requires_one_king_per_color() {
        let mut board = Board::new_empty();
        board.set(
            algebraic_to_square("e1").unwrap(),
            Some(Piece::new(Color::Light, PieceKind::King)),
        );
        assert_eq!(
            GameState::from_board(board, Color::Light),
            Err(ChessErrors::KingCountMismatch((Color::Dark, 0)))
        );

        board.set(
            algebraic_to_square("e8").unwrap(),
            Some(Piece::new(Color::Dark, PieceKind::King)),
        );
        assert!(GameState::from_board(board, Color::Dark).is_ok());
    }
}
