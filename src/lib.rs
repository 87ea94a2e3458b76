//! Crate root module declarations for the Plum chess rules core.
//!
//! Exposes the board state (occupant array, piece lists, packed bookkeeping),
//! the movement tables, the pseudo-legal move generator with perft, and the
//! notation helpers, so binaries, tests, and view layers can import stable
//! module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod packed_state;
    pub mod piece_list;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_move_shared;
    pub mod pseudo_moves_bishop;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_queen;
    pub mod pseudo_moves_rook;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod random_playout;
    pub mod render_game_state;
}
