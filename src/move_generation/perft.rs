//! Move-path enumeration for generator verification and benchmarking.
//!
//! Counts leaf nodes of the pseudo-legal move tree. Each child is searched on a
//! clone of its parent because the board only applies moves forward.
//!
//! A move that takes a king ends its line: it is counted when it sits at the
//! leaves and is never applied above them.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::{Move, MoveType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }

    for mv in generator.generate_moves(game_state) {
        perft_recurse(generator, game_state, mv, depth, &mut counts);
    }

    counts
}

/// Leaf count below each root move, in generation order.
pub fn perft_divide<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> Vec<(Move, PerftCounts)> {
    if depth == 0 {
        return Vec::new();
    }

    generator
        .generate_moves(game_state)
        .into_iter()
        .map(|mv| {
            let mut counts = PerftCounts::default();
            perft_recurse(generator, game_state, mv, depth, &mut counts);
            (mv, counts)
        })
        .collect()
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    parent: &GameState,
    mv: Move,
    remaining_depth: u8,
    counts: &mut PerftCounts,
) {
    if remaining_depth == 1 {
        counts.nodes += 1;
        if !parent.piece_at(mv.to).is_none() || mv.move_type == MoveType::EnPassantCapture {
            counts.captures += 1;
        }
        match mv.move_type {
            MoveType::EnPassantCapture => counts.en_passant += 1,
            MoveType::Castling => counts.castles += 1,
            _ if mv.is_promotion() => counts.promotions += 1,
            _ => {}
        }
        return;
    }
    if parent.piece_at(mv.to).is_kind(PieceKind::King) {
        return;
    }

    let mut child = parent.clone();
    child.apply_move(mv);

    let mut sub = PerftCounts::default();
    for next in generator.generate_moves(&child) {
        perft_recurse(generator, &child, next, remaining_depth - 1, &mut sub);
    }
    counts.merge(sub);
}
