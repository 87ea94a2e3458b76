use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::pseudo_move_shared::generate_sliding_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

pub fn generate_queen_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.color_to_move();
    if let Some(queens) = game_state.piece_list(side, PieceKind::Queen) {
        generate_sliding_moves(game_state, queens.as_slice(), &QUEEN_DIRECTIONS, out);
    }
}
