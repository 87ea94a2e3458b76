//! King step offsets.

use crate::game_state::chess_types::{offset_square, Square};

/// (d_file, d_rank) for the eight single king steps.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// On-board king targets from `square`, ignoring occupancy.
#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_file, d_rank)| offset_square(square, d_file, d_rank))
}
