use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::pseudo_move_shared::generate_sliding_moves;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.color_to_move();
    if let Some(bishops) = game_state.piece_list(side, PieceKind::Bishop) {
        generate_sliding_moves(game_state, bishops.as_slice(), &BISHOP_DIRECTIONS, out);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::game_state::GameState;

    #[test]
    fn bishop_in_open_centre_has_thirteen_moves() {
        let game = GameState::from_fen("k7/8/8/8/3B4/8/8/7K w - - 0 1").expect("FEN should load");
        let mut moves = Vec::new();
        generate_bishop_moves(&game, &mut moves);
        // d4 sees 13 diagonal squares; h8 and a1 are empty corners here.
        assert_eq!(moves.len(), 13);
    }
}
