//! Errors used throughout the rules core.
//!
//! `ChessErrors` is the single error type returned by parsing utilities and
//! board construction. Variants fall into two groups:
//!
//! - Malformed input (`InvalidFenForm`, `InvalidFenToken`,
//!   `InvalidAlgebraicString`, `TooManyPieces`, `KingCount`): the caller supplied
//!   notation that cannot describe a position. Not recoverable by the core; the
//!   caller must provide a corrected string.
//! - Contract violations (`SquareOutOfRange`, `CorruptedState`): the caller
//!   asked for a square the board does not have, or the board detected that
//!   its own invariants no longer hold.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// Position string had the wrong field structure.
    ///
    /// Payload: a description naming the offending field.
    #[error("invalid FEN form: {0}")]
    InvalidFenForm(String),

    /// Unexpected character in the board layout or castling field.
    #[error("invalid FEN token '{0}'")]
    InvalidFenToken(char),

    /// A coordinate such as `e4` failed to parse.
    #[error("invalid algebraic string: {0}")]
    InvalidAlgebraicString(String),

    /// More pieces of one kind than its piece list can hold.
    #[error("too many {kind:?} pieces for {color:?}: capacity is {capacity}")]
    TooManyPieces {
        color: Color,
        kind: PieceKind,
        capacity: usize,
    },

    /// A position must contain exactly one king per color.
    #[error("expected exactly one {0:?} king, found {1}")]
    KingCount(Color, usize),

    /// Square index outside `0..=63`.
    #[error("square index {0} is outside 0..=63")]
    SquareOutOfRange(u8),

    /// Occupant array and piece lists disagree.
    #[error("board state corrupted: {0}")]
    CorruptedState(String),
}
