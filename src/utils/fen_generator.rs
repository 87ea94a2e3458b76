//! GameState-to-FEN writer.

use crate::game_state::packed_state::*;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state);
    let side_to_move = match game_state.color_to_move() {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights());
    let en_passant = generate_en_passant_field(game_state);

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        game_state.halfmove_clock(),
        game_state.fullmove_number()
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match game_state.piece_at(square_of(file, rank)).to_fen_char() {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if (rights & CASTLE_LIGHT_KINGSIDE) != 0 {
        out.push('K');
    }
    if (rights & CASTLE_LIGHT_QUEENSIDE) != 0 {
        out.push('Q');
    }
    if (rights & CASTLE_DARK_KINGSIDE) != 0 {
        out.push('k');
    }
    if (rights & CASTLE_DARK_QUEENSIDE) != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

/// Only the file is stored; the rank is the one behind the pawn that just moved.
fn generate_en_passant_field(game_state: &GameState) -> String {
    let Some(file) = game_state.en_passant_file() else {
        return "-".to_owned();
    };

    let rank = match game_state.color_to_move() {
        Color::Light => 5,
        Color::Dark => 2,
    };
    square_to_algebraic(square_of(file, rank)).unwrap_or_else(|_| "-".to_owned())
}
