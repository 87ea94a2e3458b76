use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::Move;

/// Walk each ray from every square in `from_squares`, pushing quiet moves onto
/// empty squares and one capture onto the first enemy piece. A ray stops at the
/// board edge, before a friendly piece, or just after a capture.
pub fn generate_sliding_moves(
    game_state: &GameState,
    from_squares: &[Square],
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    let side = game_state.color_to_move();

    for &from in from_squares {
        for &(d_file, d_rank) in directions {
            let mut current = from;
            while let Some(to) = offset_square(current, d_file, d_rank) {
                let occupant = game_state.piece_at(to);
                if occupant.is_color(side) {
                    break;
                }

                out.push(Move::quiet(from, to));
                if !occupant.is_none() {
                    break;
                }
                current = to;
            }
        }
    }
}

/// Push a move to each on-board target not held by a friendly piece.
pub fn generate_step_moves(
    game_state: &GameState,
    from: Square,
    targets: impl Iterator<Item = Square>,
    out: &mut Vec<Move>,
) {
    let side = game_state.color_to_move();
    for to in targets {
        if !game_state.piece_at(to).is_color(side) {
            out.push(Move::quiet(from, to));
        }
    }
}
