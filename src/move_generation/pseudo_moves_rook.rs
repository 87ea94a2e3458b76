use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::pseudo_move_shared::generate_sliding_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.color_to_move();
    if let Some(rooks) = game_state.piece_list(side, PieceKind::Rook) {
        generate_sliding_moves(game_state, rooks.as_slice(), &ROOK_DIRECTIONS, out);
    }
}
