use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::pseudo_move_shared::generate_step_moves;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.color_to_move();
    let Some(knights) = game_state.piece_list(side, PieceKind::Knight) else {
        return;
    };

    for from in knights.iter() {
        generate_step_moves(game_state, from, knight_targets(from), out);
    }
}
