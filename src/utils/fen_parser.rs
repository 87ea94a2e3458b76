//! FEN-to-LoadedPosition parser.
//!
//! Turns a Forsyth-Edwards Notation string into plain position data: square
//! occupants, side to move, castling rights, en-passant file, and clocks. The
//! board consumes a `LoadedPosition` once to build its piece lists.
//!
//! Only the layout and side-to-move fields are required. Castling, en
//! passant, halfmove clock, and fullmove number may be omitted from the end.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{file_of, square_of, Color, Piece, PieceKind};
use crate::utils::algebraic::algebraic_to_square;

const MAX_FEN_FIELDS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPosition {
    pub squares: [Piece; 64],
    pub side_to_move: Color,
    pub light_castle_kingside: bool,
    pub light_castle_queenside: bool,
    pub dark_castle_kingside: bool,
    pub dark_castle_queenside: bool,
    pub en_passant_file: Option<u8>,
    pub halfmove_clock: u16,
    pub ply_count: u16,
}

impl Default for LoadedPosition {
    fn default() -> Self {
        Self {
            squares: [Piece::NONE; 64],
            side_to_move: Color::Light,
            light_castle_kingside: false,
            light_castle_queenside: false,
            dark_castle_kingside: false,
            dark_castle_queenside: false,
            en_passant_file: None,
            halfmove_clock: 0,
            ply_count: 0,
        }
    }
}

pub fn parse_fen(fen: &str) -> Result<LoadedPosition, ChessErrors> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(ChessErrors::InvalidFenForm(format!(
            "expected at least layout and side-to-move fields: {fen:?}"
        )));
    }
    if parts.len() > MAX_FEN_FIELDS {
        return Err(ChessErrors::InvalidFenForm(format!(
            "FEN has extra trailing fields: {fen:?}"
        )));
    }

    let mut position = LoadedPosition::default();

    parse_board(parts[0], &mut position)?;
    position.side_to_move = parse_side_to_move(parts[1]);

    if let Some(castling_part) = parts.get(2) {
        parse_castling_rights(castling_part, &mut position)?;
    }
    if let Some(en_passant_part) = parts.get(3) {
        position.en_passant_file = parse_en_passant_file(en_passant_part)?;
    }
    if let Some(halfmove_part) = parts.get(4) {
        position.halfmove_clock = halfmove_part.parse::<u16>().map_err(|_| {
            ChessErrors::InvalidFenForm(format!("invalid halfmove clock: {halfmove_part}"))
        })?;
    }
    let fullmove_number = match parts.get(5) {
        Some(fullmove_part) => fullmove_part.parse::<u16>().map_err(|_| {
            ChessErrors::InvalidFenForm(format!("invalid fullmove number: {fullmove_part}"))
        })?,
        None => 1,
    };

    // Some published test positions write a fullmove number of 0.
    let dark_offset = u16::from(position.side_to_move == Color::Dark);
    position.ply_count = (fullmove_number.max(1) - 1)
        .saturating_mul(2)
        .saturating_add(dark_offset);

    Ok(position)
}

fn parse_board(board_part: &str, position: &mut LoadedPosition) -> Result<(), ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFenForm(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenToken(ch));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(ChessErrors::InvalidFenForm(format!(
                        "rank {} has more than 8 files",
                        board_rank + 1
                    )));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFenToken(ch))?;
            if file >= 8 {
                return Err(ChessErrors::InvalidFenForm(format!(
                    "rank {} has more than 8 files",
                    board_rank + 1
                )));
            }

            position.squares[square_of(file, board_rank) as usize] = piece;
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFenForm(format!(
                "rank {} does not sum to 8 files",
                board_rank + 1
            )));
        }
    }

    Ok(())
}

/// `"w"` is light to move; anything else is dark.
fn parse_side_to_move(side_part: &str) -> Color {
    if side_part == "w" {
        Color::Light
    } else {
        Color::Dark
    }
}

fn parse_castling_rights(
    castling_part: &str,
    position: &mut LoadedPosition,
) -> Result<(), ChessErrors> {
    if castling_part == "-" {
        return Ok(());
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => position.light_castle_kingside = true,
            'Q' => position.light_castle_queenside = true,
            'k' => position.dark_castle_kingside = true,
            'q' => position.dark_castle_queenside = true,
            _ => return Err(ChessErrors::InvalidFenToken(ch)),
        }
    }

    Ok(())
}

fn parse_en_passant_file(en_passant_part: &str) -> Result<Option<u8>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(file_of(algebraic_to_square(en_passant_part)?)))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    PieceKind::from_fen_char(ch).map(|kind| Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn parse_starting_fen() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(position.side_to_move, Color::Light);
        assert!(position.light_castle_kingside);
        assert!(position.light_castle_queenside);
        assert!(position.dark_castle_kingside);
        assert!(position.dark_castle_queenside);
        assert_eq!(position.en_passant_file, None);
        assert_eq!(position.ply_count, 0);

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.into_iter().enumerate() {
            assert_eq!(position.squares[file], Piece::new(Color::Light, kind));
            assert_eq!(position.squares[56 + file], Piece::new(Color::Dark, kind));
            assert_eq!(
                position.squares[8 + file],
                Piece::new(Color::Light, PieceKind::Pawn)
            );
            assert_eq!(
                position.squares[48 + file],
                Piece::new(Color::Dark, PieceKind::Pawn)
            );
        }
        assert!(position.squares[16..48].iter().all(|p| p.is_none()));
        assert_eq!(position.squares.iter().filter(|p| !p.is_none()).count(), 32);
    }

    #[test]
    fn parse_minimal_two_field_fen() {
        let position = parse_fen("4k3/8/8/8/8/8/8/4K3 b").expect("two fields should parse");

        assert_eq!(position.side_to_move, Color::Dark);
        assert!(!position.light_castle_kingside);
        assert_eq!(position.en_passant_file, None);
        assert_eq!(position.halfmove_clock, 0);
        assert_eq!(position.ply_count, 1);
    }

    #[test]
    fn parse_en_passant_and_clocks() {
        let position =
            parse_fen("rnbqkbnr/pppp1ppp/8/8/3pP3/8/PPP2PPP/RNBQKBNR b Kq e3 0 3")
                .expect("FEN should parse");

        assert_eq!(position.en_passant_file, Some(4));
        assert!(position.light_castle_kingside);
        assert!(!position.light_castle_queenside);
        assert!(!position.dark_castle_kingside);
        assert!(position.dark_castle_queenside);
        assert_eq!(position.ply_count, 5);
    }

    #[test]
    fn non_w_side_field_means_dark_to_move() {
        let position = parse_fen("4k3/8/8/8/8/8/8/4K3 x").expect("FEN should parse");
        assert_eq!(position.side_to_move, Color::Dark);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3"),
            Err(ChessErrors::InvalidFenForm(_))
        ));
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4X3 w"),
            Err(ChessErrors::InvalidFenToken('X'))
        );
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/4K3 w"),
            Err(ChessErrors::InvalidFenForm(_))
        ));
        assert!(matches!(
            parse_fen("4k4/8/8/8/8/8/8/4K3 w"),
            Err(ChessErrors::InvalidFenForm(_))
        ));
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w KX"),
            Err(ChessErrors::InvalidFenToken('X'))
        );
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - z9").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra").is_err());
    }
}
