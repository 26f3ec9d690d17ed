//! FEN-to-GameState parser.
//!
//! Reads the piece-placement and side-to-move fields. Castling, en-passant
//! and clock fields are accepted when present but ignored, since none of
//! those rules are modelled.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFENstringForm("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFENstringForm("missing side to move".to_owned()))?;

    if parts.count() > 4 {
        return Err(ChessErrors::InvalidFENstringForm(
            "FEN has extra trailing fields".to_owned(),
        ));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;

    GameState::from_board(board, side_to_move)
}

fn parse_board(board_part: &str) -> Result<Board, ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFENstringForm(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::new_empty();

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFENtoken(ch));
                }
                col += empty_count as u8;
                if col > 8 {
                    return Err(ChessErrors::InvalidFENstringForm(format!(
                        "rank \"{rank_str}\" has more than 8 files"
                    )));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFENtoken(ch))?;
            let square = Square::new(row as u8, col).map_err(|_| {
                ChessErrors::InvalidFENstringForm(format!("rank \"{rank_str}\" has more than 8 files"))
            })?;
            board.set(square, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessErrors::InvalidFENstringForm(format!(
                "rank \"{rank_str}\" does not sum to 8 files"
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidFENstringForm(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state.side_to_move(), Color::Light);
        assert_eq!(
            game_state.piece_at(algebraic_to_square("d8").unwrap()),
            Some(Piece::new(Color::Dark, PieceKind::Queen))
        );
        assert_eq!(
            game_state.piece_at(algebraic_to_square("g1").unwrap()),
            Some(Piece::new(Color::Light, PieceKind::Knight))
        );
        assert_eq!(game_state.board().squares_of(Color::Dark).count(), 16);
    }

    #[test]
    fn trailing_fields_are_optional() {
        let short = parse_fen("4k3/8/8/8/8/8/8/4K3 b").unwrap();
        let full = parse_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        assert_eq!(short, full);
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1 extra").is_err());
    }

    #[test]
    fn malformed_layouts_are_rejected() {
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4X3 w"),
            Err(ChessErrors::InvalidFENtoken('X'))
        );
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/4K3 w"),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
        assert!(matches!(
            parse_fen("4k4/8/8/8/8/8/8/4K3 w"),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 x"),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
    }

    #[test]
    fn positions_need_one_king_each() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/4K3 w"),
            Err(ChessErrors::KingCountMismatch((Color::Dark, 0)))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/3KK3 w"),
            Err(ChessErrors::KingCountMismatch((Color::Light, 2)))
        );
    }
}
