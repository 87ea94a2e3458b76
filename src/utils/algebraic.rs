//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square indices reused by the FEN and long-algebraic components.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{file_of, rank_of, square_of, Square};

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Ok(square_of(file - b'a', rank - b'1'))
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, ChessErrors> {
    if square > 63 {
        return Err(ChessErrors::SquareOutOfRange(square));
    }

    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + rank_of(square));

    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::chess_errors::ChessErrors;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 63);
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), 28);
        assert_eq!(square_to_algebraic(0).expect("0 should convert"), "a1");
        assert_eq!(square_to_algebraic(63).expect("63 should convert"), "h8");
    }

    #[test]
    fn rejects_bad_coordinates() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert_eq!(square_to_algebraic(64), Err(ChessErrors::SquareOutOfRange(64)));
    }
}
