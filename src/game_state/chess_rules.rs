//! Canonical chess-rule constants.
//!
//! Starting position, home squares used by castling, and the piece-list
//! capacities that bound how many pieces of each kind a side may hold.

use crate::game_state::chess_types::{Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const LIGHT_KING_HOME: Square = 4;
pub const DARK_KING_HOME: Square = 60;

pub const LIGHT_QUEENSIDE_ROOK_HOME: Square = 0;
pub const LIGHT_KINGSIDE_ROOK_HOME: Square = 7;
pub const DARK_QUEENSIDE_ROOK_HOME: Square = 56;
pub const DARK_KINGSIDE_ROOK_HOME: Square = 63;

pub const LIGHT_KINGSIDE_CASTLE_TARGET: Square = 6;
pub const LIGHT_QUEENSIDE_CASTLE_TARGET: Square = 2;
pub const DARK_KINGSIDE_CASTLE_TARGET: Square = 62;
pub const DARK_QUEENSIDE_CASTLE_TARGET: Square = 58;

pub const PAWN_LIST_CAPACITY: usize = 8;
pub const KNIGHT_LIST_CAPACITY: usize = 10;
pub const BISHOP_LIST_CAPACITY: usize = 10;
pub const ROOK_LIST_CAPACITY: usize = 10;
pub const QUEEN_LIST_CAPACITY: usize = 9;

#[inline]
pub const fn king_home(color: Color) -> Square {
    match color {
        Color::Light => LIGHT_KING_HOME,
        Color::Dark => DARK_KING_HOME,
    }
}

#[inline]
pub const fn is_kingside_castle_target(king_to: Square) -> bool {
    king_to == LIGHT_KINGSIDE_CASTLE_TARGET || king_to == DARK_KINGSIDE_CASTLE_TARGET
}

/// Rook origin and destination for a castle, derived from the king's destination.
///
/// Only meaningful for the four canonical castle targets.
#[inline]
pub const fn castle_rook_squares(king_to: Square) -> (Square, Square) {
    if is_kingside_castle_target(king_to) {
        (king_to + 1, king_to - 1)
    } else {
        (king_to - 2, king_to + 1)
    }
}
