//! Errors used throughout the crate.
//!
//! `ChessErrors` is the single error type returned by position loading,
//! coordinate conversion and move generation. Legal-move generation itself
//! cannot fail on a well-formed position; the generation variants flag a
//! position whose cached king squares no longer match the board.
//!
//! Applying a move that was not in the last computed legal set is a caller
//! contract violation and is not represented here.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Square};

/// Unified error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Row or column outside `0..8`.
    ///
    /// Payload: (row, column)
    InvalidRowOrColumn((u8, u8)),

    /// A single coordinate character was invalid (file outside 'a'..'h' or
    /// rank outside '1'..'8').
    InvalidAlgebraicChar(char),

    /// A coordinate string had the wrong shape.
    InvalidAlgebraicString(String),

    /// Unexpected character in the piece-placement field of a FEN string.
    InvalidFENtoken(char),

    /// FEN string had malformed structure.
    ///
    /// Payload: a description of what was wrong.
    InvalidFENstringForm(String),

    /// A loaded position does not hold exactly one king for `Color`.
    ///
    /// Payload: (color, kings found)
    KingCountMismatch((Color, usize)),

    /// The cached king square for `Color` does not hold that side's king.
    ///
    /// This indicates a corrupted `GameState`, typically one driven by moves
    /// that were never produced by the legal-move generator.
    KingCacheOutOfSync((Color, Square)),

    /// A perft worker thread panicked before reporting its counts.
    WorkerThreadPanicked,
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidRowOrColumn((row, col)) => {
                write!(f, "row {row} / column {col} is off the board")
            }
            ChessErrors::InvalidAlgebraicChar(c) => write!(f, "invalid coordinate character '{c}'"),
            ChessErrors::InvalidAlgebraicString(s) => write!(f, "invalid coordinate string \"{s}\""),
            ChessErrors::InvalidFENtoken(c) => write!(f, "invalid FEN token '{c}'"),
            ChessErrors::InvalidFENstringForm(msg) => write!(f, "malformed FEN: {msg}"),
            ChessErrors::KingCountMismatch((color, count)) => {
                write!(f, "{color:?} must have exactly one king, found {count}")
            }
            ChessErrors::KingCacheOutOfSync((color, square)) => write!(
                f,
                "cached {color:?} king square (row {}, col {}) does not hold that king",
                square.row(),
                square.col()
            ),
            ChessErrors::WorkerThreadPanicked => write!(f, "perft worker thread panicked"),
        }
    }
}

impl Error for ChessErrors {}
