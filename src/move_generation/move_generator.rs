//! Pseudo-legal move generation entry point.
//!
//! Produces every move that obeys piece movement and occupancy for the side to
//! move. Moves that leave the mover's own king in check are not filtered.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::pseudo_moves_bishop::generate_bishop_moves;
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_queen::generate_queen_moves;
use crate::move_generation::pseudo_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::{Move, MoveType};

pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, game_state: &GameState) -> Vec<Move>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub generate_castling: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generate_castling: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalMoveGenerator {
    pub config: GeneratorConfig,
}

impl PseudoLegalMoveGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Append moves to `out`. Order is pawns, knights, bishops, rooks, queens, king.
    pub fn generate_moves_into(&self, game_state: &GameState, out: &mut Vec<Move>) {
        generate_pawn_moves(game_state, out);
        generate_knight_moves(game_state, out);
        generate_bishop_moves(game_state, out);
        generate_rook_moves(game_state, out);
        generate_queen_moves(game_state, out);
        generate_king_moves(game_state, out, self.config.generate_castling);
    }
}

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, game_state: &GameState) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.generate_moves_into(game_state, &mut moves);
        moves
    }
}

/// Pick the generated move for a from/to pair. For promotions `promotion`
/// selects the piece; it is ignored for every other move.
pub fn find_move(
    moves: &[Move],
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Option<Move> {
    let wanted_promotion = promotion.and_then(MoveType::promotion_to);
    moves
        .iter()
        .copied()
        .filter(|mv| mv.from == from && mv.to == to)
        .find(|mv| !mv.is_promotion() || Some(mv.move_type) == wanted_promotion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> u8 {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let game = GameState::from_fen(STARTING_POSITION_FEN).expect("FEN should load");
        let moves = PseudoLegalMoveGenerator::default().generate_moves(&game);

        assert_eq!(moves.len(), 20);
        let double_pushes = moves
            .iter()
            .filter(|m| m.move_type == MoveType::DoublePawnPush)
            .count();
        assert_eq!(double_pushes, 8);
        let knight_moves = moves
            .iter()
            .filter(|m| m.from == sq("b1") || m.from == sq("g1"))
            .count();
        assert_eq!(knight_moves, 4);
    }

    #[test]
    fn generation_is_deterministic() {
        let game = GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("FEN should load");
        let generator = PseudoLegalMoveGenerator::default();
        assert_eq!(generator.generate_moves(&game), generator.generate_moves(&game));
    }

    #[test]
    fn no_move_lands_on_a_friendly_piece() {
        let game = GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("FEN should load");
        let moves = PseudoLegalMoveGenerator::default().generate_moves(&game);
        let side = game.color_to_move();

        assert!(!moves.is_empty());
        assert!(moves
            .iter()
            .all(|m| !game.piece_at(m.to).is_color(side) && game.piece_at(m.from).is_color(side)));
    }

    #[test]
    fn find_move_selects_promotion_piece() {
        let game = GameState::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should load");
        let moves = PseudoLegalMoveGenerator::default().generate_moves(&game);

        let knight = find_move(&moves, sq("b7"), sq("b8"), Some(PieceKind::Knight))
            .expect("knight promotion should exist");
        assert_eq!(knight.move_type, MoveType::PromoteToKnight);
        assert!(find_move(&moves, sq("b7"), sq("b8"), None).is_none());

        let king_step = find_move(&moves, sq("e1"), sq("d1"), Some(PieceKind::Queen))
            .expect("king step should exist");
        assert_eq!(king_step.move_type, MoveType::Quiet);
    }
}
