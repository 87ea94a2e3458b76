use crate::game_state::chess_rules::*;
use crate::game_state::packed_state::*;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::pseudo_move_shared::generate_step_moves;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::{Move, MoveType};

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<Move>, include_castling: bool) {
    let side = game_state.color_to_move();
    let from = game_state.king_square(side);

    generate_step_moves(game_state, from, king_targets(from), out);

    if include_castling {
        generate_castling_moves(game_state, out, from);
    }
}

struct CastleSide {
    right: CastlingRights,
    rook_home: Square,
    king_target: Square,
}

const LIGHT_CASTLES: [CastleSide; 2] = [
    CastleSide {
        right: CASTLE_LIGHT_KINGSIDE,
        rook_home: LIGHT_KINGSIDE_ROOK_HOME,
        king_target: LIGHT_KINGSIDE_CASTLE_TARGET,
    },
    CastleSide {
        right: CASTLE_LIGHT_QUEENSIDE,
        rook_home: LIGHT_QUEENSIDE_ROOK_HOME,
        king_target: LIGHT_QUEENSIDE_CASTLE_TARGET,
    },
];

const DARK_CASTLES: [CastleSide; 2] = [
    CastleSide {
        right: CASTLE_DARK_KINGSIDE,
        rook_home: DARK_KINGSIDE_ROOK_HOME,
        king_target: DARK_KINGSIDE_CASTLE_TARGET,
    },
    CastleSide {
        right: CASTLE_DARK_QUEENSIDE,
        rook_home: DARK_QUEENSIDE_ROOK_HOME,
        king_target: DARK_QUEENSIDE_CASTLE_TARGET,
    },
];

/// Castle when the right is held, king and rook stand on their home squares,
/// and every square between them is empty. Attacked squares are not tested.
fn generate_castling_moves(game_state: &GameState, out: &mut Vec<Move>, king_from: Square) {
    let side = game_state.color_to_move();
    if king_from != king_home(side) {
        return;
    }

    let castles = match side {
        Color::Light => &LIGHT_CASTLES,
        Color::Dark => &DARK_CASTLES,
    };

    for castle in castles {
        if !game_state.has_castling_right(castle.right) {
            continue;
        }
        if game_state.piece_at(castle.rook_home) != Piece::new(side, PieceKind::Rook) {
            continue;
        }

        let (low, high) = if castle.rook_home < king_from {
            (castle.rook_home, king_from)
        } else {
            (king_from, castle.rook_home)
        };
        let path_clear = (low + 1..high).all(|sq| game_state.piece_at(sq).is_none());
        if path_clear {
            out.push(Move::new(king_from, castle.king_target, MoveType::Castling));
        }
    }
}
