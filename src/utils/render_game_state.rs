//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the occupant array for debugging,
//! tests, and diagnostics in text environments.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board to a Unicode string for terminal output.
///
/// Assumes square indexing where `0 == a1`, `7 == h1`, and `63 == h8`.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            match piece_to_unicode(game_state.piece_at(square_of(file, rank))) {
                Some(ch) => out.push(ch),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> Option<char> {
    let ch = match (piece.color()?, piece.kind()?) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    };
    Some(ch)
}
