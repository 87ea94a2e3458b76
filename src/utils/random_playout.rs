//! Seeded random walks over generated moves.
//!
//! Used to reach a wide spread of positions when exercising board invariants,
//! and by the `random_walk` binary.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

/// Why a playout ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutEnd {
    PlyLimit,
    NoMoves,
}

#[derive(Debug, Clone)]
pub struct Playout {
    pub moves: Vec<Move>,
    pub end: PlayoutEnd,
}

/// Apply up to `max_plies` random moves. Moves that would take a king are
/// skipped since pseudo-legal play does not prevent leaving a king en prise.
pub fn random_playout<G: MoveGenerator + ?Sized, R: Rng + ?Sized>(
    game_state: &mut GameState,
    generator: &G,
    max_plies: usize,
    rng: &mut R,
) -> Playout {
    let mut played = Vec::with_capacity(max_plies);

    for _ in 0..max_plies {
        let candidates: Vec<Move> = generator
            .generate_moves(game_state)
            .into_iter()
            .filter(|mv| !game_state.piece_at(mv.to).is_kind(PieceKind::King))
            .collect();

        let Some(mv) = candidates.choose(rng).copied() else {
            return Playout {
                moves: played,
                end: PlayoutEnd::NoMoves,
            };
        };

        game_state.apply_move(mv);
        played.push(mv);
    }

    Playout {
        moves: played,
        end: PlayoutEnd::PlyLimit,
    }
}

/// Convenience wrapper with a reproducible seed.
pub fn seeded_playout<G: MoveGenerator + ?Sized>(
    game_state: &mut GameState,
    generator: &G,
    max_plies: usize,
    seed: u64,
) -> Playout {
    let mut rng = StdRng::seed_from_u64(seed);
    random_playout(game_state, generator, max_plies, &mut rng)
}
