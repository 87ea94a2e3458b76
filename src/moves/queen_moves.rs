use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Queen rays: the bishop diagonals followed by the rook lines.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
];
