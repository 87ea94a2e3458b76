use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{Move, MoveType, PROMOTION_MOVE_TYPES};

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.color_to_move();
    let Some(pawns) = game_state.piece_list(side, PieceKind::Pawn) else {
        return;
    };
    let forward = side.forward();
    let promotion_rank = side.promotion_rank();

    // An en-passant target is only live for pawns standing next to the pushed pawn.
    let en_passant_target = game_state
        .en_passant_file()
        .map(|file| square_of(file, (side.en_passant_rank() as i8 + forward) as u8));

    for from in pawns.iter() {
        if let Some(to) = offset_square(from, 0, forward) {
            if game_state.piece_at(to).is_none() {
                push_pawn_move(from, to, promotion_rank, out);

                if rank_of(from) == side.pawn_start_rank() {
                    if let Some(two_step) = offset_square(to, 0, forward) {
                        if game_state.piece_at(two_step).is_none() {
                            out.push(Move::new(from, two_step, MoveType::DoublePawnPush));
                        }
                    }
                }
            }
        }

        for d_file in [-1i8, 1i8] {
            let Some(to) = offset_square(from, d_file, forward) else {
                continue;
            };

            let occupant = game_state.piece_at(to);
            if occupant.is_color(side.opposite()) {
                push_pawn_move(from, to, promotion_rank, out);
            } else if occupant.is_none()
                && en_passant_target == Some(to)
                && rank_of(from) == side.en_passant_rank()
                && offset_square(to, 0, -forward).map(|victim| game_state.piece_at(victim))
                    == Some(Piece::new(side.opposite(), PieceKind::Pawn))
            {
                out.push(Move::new(from, to, MoveType::EnPassantCapture));
            }
        }
    }
}

/// A pawn landing on the last rank yields one move per promotion piece instead.
fn push_pawn_move(from: Square, to: Square, promotion_rank: u8, out: &mut Vec<Move>) {
    if rank_of(to) == promotion_rank {
        for move_type in PROMOTION_MOVE_TYPES {
            out.push(Move::new(from, to, move_type));
        }
    } else {
        out.push(Move::quiet(from, to));
    }
}
