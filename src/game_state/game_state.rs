//! Core incremental board state representation.
//!
//! `GameState` owns the 64-square occupant array (the single source of truth
//! for occupancy), the king squares, one piece list per (color, kind) for the
//! non-king pieces, the side to move, and the packed bookkeeping word. Moves
//! are applied forward in place; there is no unmake.

use log::{debug, trace};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::packed_state::*;
use crate::game_state::piece_list::PieceList;
use crate::moves::move_descriptions::{Move, MoveType};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::{parse_fen, LoadedPosition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    squares: [Piece; 64],
    king_square: [Square; 2],

    // [color]
    pawns: [PieceList; 2],
    knights: [PieceList; 2],
    bishops: [PieceList; 2],
    rooks: [PieceList; 2],
    queens: [PieceList; 2],

    color_to_move: Color,
    packed: PackedGameState,
    ply_count: u16,
}

fn piece_list_pair(capacity: usize) -> [PieceList; 2] {
    [PieceList::new(capacity), PieceList::new(capacity)]
}

impl GameState {
    fn new_empty() -> Self {
        Self {
            squares: [Piece::NONE; 64],
            king_square: [LIGHT_KING_HOME, DARK_KING_HOME],
            pawns: piece_list_pair(PAWN_LIST_CAPACITY),
            knights: piece_list_pair(KNIGHT_LIST_CAPACITY),
            bishops: piece_list_pair(BISHOP_LIST_CAPACITY),
            rooks: piece_list_pair(ROOK_LIST_CAPACITY),
            queens: piece_list_pair(QUEEN_LIST_CAPACITY),
            color_to_move: Color::Light,
            packed: PackedGameState::default(),
            ply_count: 0,
        }
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        Self::from_fen(STARTING_POSITION_FEN).expect("starting FEN should always load")
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        Self::from_loaded_position(parse_fen(fen)?)
    }

    /// Re-initialise this board from a FEN string. On error the board is left unchanged.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), ChessErrors> {
        *self = Self::from_fen(fen)?;
        Ok(())
    }

    pub fn from_loaded_position(position: LoadedPosition) -> Result<Self, ChessErrors> {
        let mut game_state = Self::new_empty();
        let mut king_counts = [0usize; 2];

        for (index, piece) in position.squares.iter().copied().enumerate() {
            let (Some(color), Some(kind)) = (piece.color(), piece.kind()) else {
                continue;
            };
            let square = index as Square;

            if kind == PieceKind::King {
                king_counts[color.index()] += 1;
                game_state.king_square[color.index()] = square;
            } else if let Some(list) = game_state.piece_list_mut(color, kind) {
                if list.is_full() {
                    return Err(ChessErrors::TooManyPieces {
                        color,
                        kind,
                        capacity: list.capacity(),
                    });
                }
                list.add(square);
            }
            game_state.squares[index] = piece;
        }

        for color in [Color::Light, Color::Dark] {
            if king_counts[color.index()] != 1 {
                return Err(ChessErrors::KingCount(color, king_counts[color.index()]));
            }

            // Every pawn may still promote, so each list needs room for all of them.
            let pawn_count = game_state.pawns[color.index()].len();
            for kind in [
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen,
            ] {
                if let Some(list) = game_state.piece_list(color, kind) {
                    if list.len() + pawn_count > list.capacity() {
                        return Err(ChessErrors::TooManyPieces {
                            color,
                            kind,
                            capacity: list.capacity(),
                        });
                    }
                }
            }
        }

        let mut rights: CastlingRights = 0;
        if position.light_castle_kingside {
            rights |= CASTLE_LIGHT_KINGSIDE;
        }
        if position.light_castle_queenside {
            rights |= CASTLE_LIGHT_QUEENSIDE;
        }
        if position.dark_castle_kingside {
            rights |= CASTLE_DARK_KINGSIDE;
        }
        if position.dark_castle_queenside {
            rights |= CASTLE_DARK_QUEENSIDE;
        }

        game_state.color_to_move = position.side_to_move;
        game_state.packed.set_castling_rights(rights);
        game_state.packed.set_en_passant_file(position.en_passant_file);
        game_state.packed.set_halfmove_clock(position.halfmove_clock);
        game_state.ply_count = position.ply_count;

        debug!(
            "loaded position: {:?} to move, castling {:04b}, en passant {:?}",
            game_state.color_to_move,
            rights,
            game_state.en_passant_file()
        );

        Ok(game_state)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    // --- Read access ---

    /// Read-only view of the occupant array.
    #[inline]
    pub fn squares(&self) -> &[Piece; 64] {
        &self.squares
    }

    /// Occupant of `square`. Panics if `square > 63`; use [`GameState::try_piece_at`]
    /// for unchecked input.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.squares[square as usize]
    }

    pub fn try_piece_at(&self, square: Square) -> Result<Piece, ChessErrors> {
        self.squares
            .get(square as usize)
            .copied()
            .ok_or(ChessErrors::SquareOutOfRange(square))
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_square[color.index()]
    }

    #[inline]
    pub fn color_to_move(&self) -> Color {
        self.color_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.packed.castling_rights()
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.packed.has_castling_right(right)
    }

    #[inline]
    pub fn en_passant_file(&self) -> Option<u8> {
        self.packed.en_passant_file()
    }

    /// Piece removed by the last applied move, `Piece::NONE` if none.
    #[inline]
    pub fn captured_piece(&self) -> Piece {
        self.packed.captured_piece()
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.packed.halfmove_clock()
    }

    #[inline]
    pub fn ply_count(&self) -> u16 {
        self.ply_count
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.ply_count / 2 + 1
    }

    /// Squares holding `color`'s pieces of `kind`. Kings have no list.
    #[inline]
    pub fn piece_list(&self, color: Color, kind: PieceKind) -> Option<&PieceList> {
        let lists = match kind {
            PieceKind::Pawn => &self.pawns,
            PieceKind::Knight => &self.knights,
            PieceKind::Bishop => &self.bishops,
            PieceKind::Rook => &self.rooks,
            PieceKind::Queen => &self.queens,
            PieceKind::King => return None,
        };
        Some(&lists[color.index()])
    }

    fn piece_list_mut(&mut self, color: Color, kind: PieceKind) -> Option<&mut PieceList> {
        let lists = match kind {
            PieceKind::Pawn => &mut self.pawns,
            PieceKind::Knight => &mut self.knights,
            PieceKind::Bishop => &mut self.bishops,
            PieceKind::Rook => &mut self.rooks,
            PieceKind::Queen => &mut self.queens,
            PieceKind::King => return None,
        };
        Some(&mut lists[color.index()])
    }

    // --- Move application ---

    /// Apply a move produced by the generator for this exact position.
    ///
    /// The board trusts its caller: no legality re-check is made. Debug builds
    /// assert that the moving piece belongs to the side to move.
    ///
    /// Callers must filter out generated moves that capture a king (as
    /// `perft` and `random_playout` do); applying one in a release build
    /// leaves `king_square` naming an empty square.
    pub fn apply_move(&mut self, mv: Move) {
        let mover = self.color_to_move;
        let moving_piece = self.piece_at(mv.from);
        debug_assert!(
            moving_piece.is_color(mover),
            "move {mv} does not start on a {mover:?} piece"
        );
        debug_assert!(
            !self.piece_at(mv.to).is_kind(PieceKind::King),
            "move {mv} captures a king"
        );

        let captured = match mv.move_type {
            MoveType::EnPassantCapture => self.piece_at(en_passant_victim_square(mv.to, mover)),
            _ => self.piece_at(mv.to),
        };

        let mut packed = self.packed;
        packed.set_en_passant_file(None);
        packed.set_captured_piece(captured);
        update_castling_rights(&mut packed, moving_piece, mv);

        match mv.move_type {
            MoveType::Quiet => self.move_piece(mv.from, mv.to),
            MoveType::DoublePawnPush => {
                self.move_piece(mv.from, mv.to);
                packed.set_en_passant_file(Some(file_of(mv.to)));
            }
            MoveType::EnPassantCapture => {
                let victim = en_passant_victim_square(mv.to, mover);
                self.remove_piece(victim);
                self.move_piece(mv.from, mv.to);
            }
            MoveType::PromoteToQueen
            | MoveType::PromoteToRook
            | MoveType::PromoteToBishop
            | MoveType::PromoteToKnight => {
                let kind = mv.promotion_piece().unwrap_or(PieceKind::Queen);
                self.remove_piece(mv.from);
                self.remove_piece(mv.to);
                self.place_piece(mv.to, Piece::new(mover, kind));
            }
            MoveType::Castling => {
                self.move_piece(mv.from, mv.to);
                let (rook_from, rook_to) = castle_rook_squares(mv.to);
                debug_assert!(
                    self.piece_at(rook_from) == Piece::new(mover, PieceKind::Rook),
                    "castle {mv} has no rook on {rook_from}"
                );
                self.move_piece(rook_from, rook_to);
            }
        }

        let resets_clock = moving_piece.is_kind(PieceKind::Pawn) || !captured.is_none();
        let clock = if resets_clock {
            0
        } else {
            packed.halfmove_clock().saturating_add(1)
        };
        packed.set_halfmove_clock(clock);

        self.packed = packed;
        self.ply_count = self.ply_count.saturating_add(1);
        self.color_to_move = mover.opposite();

        trace!(
            "applied {mv} ({:?}); {:?} to move, castling {:04b}, en passant {:?}",
            mv.move_type,
            self.color_to_move,
            self.packed.castling_rights(),
            self.packed.en_passant_file()
        );
    }

    /// Generic relocate: drops any occupant of `to`, then moves the piece on
    /// `from` there, keeping its piece list or king square in step.
    fn move_piece(&mut self, from: Square, to: Square) {
        self.remove_piece(to);

        let piece = self.piece_at(from);
        if let (Some(color), Some(kind)) = (piece.color(), piece.kind()) {
            if kind == PieceKind::King {
                self.king_square[color.index()] = to;
            } else if let Some(list) = self.piece_list_mut(color, kind) {
                list.relocate(from, to);
            }
        }

        self.squares[to as usize] = piece;
        self.squares[from as usize] = Piece::NONE;
    }

    fn remove_piece(&mut self, square: Square) {
        let piece = self.piece_at(square);
        if let (Some(color), Some(kind)) = (piece.color(), piece.kind()) {
            if let Some(list) = self.piece_list_mut(color, kind) {
                list.remove(square);
            }
        }
        self.squares[square as usize] = Piece::NONE;
    }

    fn place_piece(&mut self, square: Square, piece: Piece) {
        if let (Some(color), Some(kind)) = (piece.color(), piece.kind()) {
            if kind == PieceKind::King {
                self.king_square[color.index()] = square;
            } else if let Some(list) = self.piece_list_mut(color, kind) {
                list.add(square);
            }
        }
        self.squares[square as usize] = piece;
    }

    // --- Invariant checks ---

    /// Verify that the occupant array, the piece lists, and the king squares agree.
    pub fn validate_consistency(&self) -> Result<(), ChessErrors> {
        for color in [Color::Light, Color::Dark] {
            let king = self.king_square(color);
            if self.piece_at(king) != Piece::new(color, PieceKind::King) {
                return Err(ChessErrors::CorruptedState(format!(
                    "{color:?} king square {king} holds {:?}",
                    self.piece_at(king)
                )));
            }

            for kind in [
                PieceKind::Pawn,
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen,
            ] {
                let Some(list) = self.piece_list(color, kind) else {
                    continue;
                };
                for square in list.iter() {
                    if self.piece_at(square) != Piece::new(color, kind) {
                        return Err(ChessErrors::CorruptedState(format!(
                            "{color:?} {kind:?} list names square {square} holding {:?}",
                            self.piece_at(square)
                        )));
                    }
                }
            }
        }

        for (index, piece) in self.squares.iter().copied().enumerate() {
            let square = index as Square;
            let (Some(color), Some(kind)) = (piece.color(), piece.kind()) else {
                continue;
            };
            let tracked = match self.piece_list(color, kind) {
                Some(list) => list.contains(square),
                None => self.king_square(color) == square,
            };
            if !tracked {
                return Err(ChessErrors::CorruptedState(format!(
                    "{color:?} {kind:?} on {square} is not tracked"
                )));
            }
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

/// Square of the pawn taken by an en-passant capture landing on `to`.
#[inline]
fn en_passant_victim_square(to: Square, mover: Color) -> Square {
    match mover {
        Color::Light => to - 8,
        Color::Dark => to + 8,
    }
}

fn update_castling_rights(packed: &mut PackedGameState, moving_piece: Piece, mv: Move) {
    if packed.castling_rights() == 0 {
        return;
    }

    match (moving_piece.color(), moving_piece.kind()) {
        (Some(Color::Light), Some(PieceKind::King)) => {
            packed.clear_castling_rights(CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE)
        }
        (Some(Color::Dark), Some(PieceKind::King)) => {
            packed.clear_castling_rights(CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE)
        }
        (Some(color), Some(PieceKind::Rook)) => {
            if let Some(right) = rook_home_right(color, mv.from) {
                packed.clear_castling_rights(right);
            }
        }
        _ => {}
    }

    // A rook captured on its home square takes its side's right with it.
    if let Some(color) = moving_piece.color() {
        if let Some(right) = rook_home_right(color.opposite(), mv.to) {
            packed.clear_castling_rights(right);
        }
    }
}

fn rook_home_right(color: Color, square: Square) -> Option<CastlingRights> {
    match (color, square) {
        (Color::Light, LIGHT_QUEENSIDE_ROOK_HOME) => Some(CASTLE_LIGHT_QUEENSIDE),
        (Color::Light, LIGHT_KINGSIDE_ROOK_HOME) => Some(CASTLE_LIGHT_KINGSIDE),
        (Color::Dark, DARK_QUEENSIDE_ROOK_HOME) => Some(CASTLE_DARK_QUEENSIDE),
        (Color::Dark, DARK_KINGSIDE_ROOK_HOME) => Some(CASTLE_DARK_KINGSIDE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::packed_state::*;
    use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};
    use crate::moves::move_descriptions::{Move, MoveType};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> u8 {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn mv(from: &str, to: &str, move_type: MoveType) -> Move {
        Move::new(sq(from), sq(to), move_type)
    }

    #[test]
    fn new_game_builds_piece_lists() {
        let game = GameState::new_game();

        assert_eq!(game.color_to_move(), Color::Light);
        assert_eq!(game.castling_rights(), CASTLE_ALL);
        assert_eq!(game.en_passant_file(), None);
        assert_eq!(game.king_square(Color::Light), sq("e1"));
        assert_eq!(game.king_square(Color::Dark), sq("e8"));
        for color in [Color::Light, Color::Dark] {
            let count = |kind| game.piece_list(color, kind).map(|l| l.len());
            assert_eq!(count(PieceKind::Pawn), Some(8));
            assert_eq!(count(PieceKind::Knight), Some(2));
            assert_eq!(count(PieceKind::Bishop), Some(2));
            assert_eq!(count(PieceKind::Rook), Some(2));
            assert_eq!(count(PieceKind::Queen), Some(1));
            assert_eq!(count(PieceKind::King), None);
        }
        game.validate_consistency().expect("start position is consistent");
    }

    #[test]
    fn quiet_move_relocates_piece() {
        let mut game = GameState::new_game();
        game.apply_move(mv("g1", "f3", MoveType::Quiet));

        assert_eq!(
            game.piece_at(sq("f3")),
            Piece::new(Color::Light, PieceKind::Knight)
        );
        assert!(game.piece_at(sq("g1")).is_none());
        let knights = game
            .piece_list(Color::Light, PieceKind::Knight)
            .expect("knight list");
        assert!(knights.contains(sq("f3")));
        assert!(!knights.contains(sq("g1")));
        assert_eq!(game.color_to_move(), Color::Dark);
        assert_eq!(game.halfmove_clock(), 1);
        assert_eq!(game.ply_count(), 1);
        game.validate_consistency().expect("consistent after quiet move");
    }

    #[test]
    fn capture_removes_enemy_list_entry() {
        let mut game = GameState::from_fen("4k3/8/8/3p4/8/4N3/8/4K3 w - - 5 1")
            .expect("FEN should load");
        game.apply_move(mv("e3", "d5", MoveType::Quiet));

        assert_eq!(
            game.captured_piece(),
            Piece::new(Color::Dark, PieceKind::Pawn)
        );
        assert!(game
            .piece_list(Color::Dark, PieceKind::Pawn)
            .expect("pawn list")
            .is_empty());
        assert_eq!(game.halfmove_clock(), 0);
        game.validate_consistency().expect("consistent after capture");
    }

    #[test]
    fn double_push_marker_lasts_one_ply() {
        let mut game = GameState::new_game();
        game.apply_move(mv("e2", "e4", MoveType::DoublePawnPush));
        assert_eq!(game.en_passant_file(), Some(4));

        game.apply_move(mv("g8", "f6", MoveType::Quiet));
        assert_eq!(game.en_passant_file(), None);
    }

    #[test]
    fn en_passant_removes_pawn_behind_destination() {
        let mut game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1")
            .expect("FEN should load");
        game.apply_move(mv("e5", "d6", MoveType::EnPassantCapture));

        assert_eq!(
            game.piece_at(sq("d6")),
            Piece::new(Color::Light, PieceKind::Pawn)
        );
        assert!(game.piece_at(sq("d5")).is_none());
        assert!(game.piece_at(sq("e5")).is_none());
        assert_eq!(
            game.captured_piece(),
            Piece::new(Color::Dark, PieceKind::Pawn)
        );
        assert!(game
            .piece_list(Color::Dark, PieceKind::Pawn)
            .expect("pawn list")
            .is_empty());
        game.validate_consistency().expect("consistent after en passant");
    }

    #[test]
    fn dark_en_passant_takes_pawn_above_destination() {
        let generator = PseudoLegalMoveGenerator::default();
        let mut game = GameState::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1")
            .expect("FEN should load");
        game.apply_move(mv("e2", "e4", MoveType::DoublePawnPush));

        let capture = mv("d4", "e3", MoveType::EnPassantCapture);
        assert!(generator.generate_moves(&game).contains(&capture));

        game.apply_move(capture);

        assert!(game.piece_at(sq("e4")).is_none());
        assert!(game.piece_at(sq("d4")).is_none());
        assert_eq!(
            game.piece_at(sq("e3")),
            Piece::new(Color::Dark, PieceKind::Pawn)
        );
        assert_eq!(
            game.captured_piece(),
            Piece::new(Color::Light, PieceKind::Pawn)
        );
        assert!(game
            .piece_list(Color::Light, PieceKind::Pawn)
            .expect("pawn list")
            .is_empty());
        assert_eq!(game.get_fen(), "4k3/8/8/8/8/4p3/8/4K3 w - - 0 2");
        game.validate_consistency().expect("consistent after dark en passant");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "captures a king")]
    fn applying_a_king_capture_is_rejected_in_debug_builds() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/r3K3 b - - 0 1")
            .expect("FEN should load");
        game.apply_move(mv("a1", "e1", MoveType::Quiet));
    }

    #[test]
    fn promotion_replaces_pawn_with_new_piece() {
        let mut game = GameState::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1")
            .expect("FEN should load");
        game.apply_move(mv("a7", "b8", MoveType::PromoteToQueen));

        assert_eq!(
            game.piece_at(sq("b8")),
            Piece::new(Color::Light, PieceKind::Queen)
        );
        assert!(game.piece_at(sq("a7")).is_none());
        assert!(game
            .piece_list(Color::Light, PieceKind::Pawn)
            .expect("pawn list")
            .is_empty());
        assert!(game
            .piece_list(Color::Light, PieceKind::Queen)
            .expect("queen list")
            .contains(sq("b8")));
        assert!(game
            .piece_list(Color::Dark, PieceKind::Knight)
            .expect("knight list")
            .is_empty());
        game.validate_consistency().expect("consistent after promotion");
    }

    #[test]
    fn castling_moves_king_and_rook_and_clears_rights() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should load");
        game.apply_move(mv("e1", "g1", MoveType::Castling));

        assert_eq!(game.king_square(Color::Light), sq("g1"));
        assert_eq!(
            game.piece_at(sq("f1")),
            Piece::new(Color::Light, PieceKind::Rook)
        );
        assert!(game.piece_at(sq("h1")).is_none());
        assert!(!game.has_castling_right(CASTLE_LIGHT_KINGSIDE));
        assert!(!game.has_castling_right(CASTLE_LIGHT_QUEENSIDE));
        assert!(game.has_castling_right(CASTLE_DARK_KINGSIDE));

        game.apply_move(mv("e8", "c8", MoveType::Castling));
        assert_eq!(game.king_square(Color::Dark), sq("c8"));
        assert_eq!(
            game.piece_at(sq("d8")),
            Piece::new(Color::Dark, PieceKind::Rook)
        );
        assert!(game.piece_at(sq("a8")).is_none());
        assert_eq!(game.castling_rights(), 0);
        game.validate_consistency().expect("consistent after castling");
    }

    #[test]
    fn rook_departure_clears_only_its_right() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should load");
        game.apply_move(mv("a1", "a2", MoveType::Quiet));
        assert!(!game.has_castling_right(CASTLE_LIGHT_QUEENSIDE));
        assert!(game.has_castling_right(CASTLE_LIGHT_KINGSIDE));

        game.apply_move(mv("h8", "h2", MoveType::Quiet));
        assert!(!game.has_castling_right(CASTLE_DARK_KINGSIDE));
        assert!(game.has_castling_right(CASTLE_DARK_QUEENSIDE));

        // Rook comes back home: the right stays lost.
        game.apply_move(mv("a2", "a1", MoveType::Quiet));
        assert!(!game.has_castling_right(CASTLE_LIGHT_QUEENSIDE));
    }

    #[test]
    fn capturing_rook_on_home_square_clears_that_right() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should load");
        game.apply_move(mv("a1", "a8", MoveType::Quiet));
        assert!(!game.has_castling_right(CASTLE_DARK_QUEENSIDE));
        assert!(!game.has_castling_right(CASTLE_LIGHT_QUEENSIDE));
        assert!(game.has_castling_right(CASTLE_DARK_KINGSIDE));
    }

    #[test]
    fn load_rejects_missing_king_and_overfull_lists() {
        assert_eq!(
            GameState::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessErrors::KingCount(Color::Dark, 0))
        );
        assert!(matches!(
            GameState::from_fen("4k3/8/8/8/8/8/PPPPPPPP/P3K3 w - - 0 1"),
            Err(ChessErrors::TooManyPieces {
                color: Color::Light,
                kind: PieceKind::Pawn,
                ..
            })
        ));
        // Two queens plus eight pawns leave no room for an eighth promotion.
        assert!(matches!(
            GameState::from_fen("4k3/8/8/8/8/8/PPPPPPPP/QQ2K3 w - - 0 1"),
            Err(ChessErrors::TooManyPieces {
                color: Color::Light,
                kind: PieceKind::Queen,
                ..
            })
        ));
    }

    #[test]
    fn try_piece_at_rejects_out_of_range_square() {
        let game = GameState::new_game();
        assert_eq!(
            game.try_piece_at(64),
            Err(ChessErrors::SquareOutOfRange(64))
        );
        assert_eq!(
            game.try_piece_at(4),
            Ok(Piece::new(Color::Light, PieceKind::King))
        );
    }

    #[test]
    fn load_fen_replaces_position_in_place() {
        let mut game = GameState::new_game();
        game.load_fen("4k3/8/8/8/8/8/8/4K3 b - - 7 20")
            .expect("FEN should load");

        assert_eq!(game.color_to_move(), Color::Dark);
        assert_eq!(game.halfmove_clock(), 7);
        assert_eq!(game.fullmove_number(), 20);
        assert!(game
            .piece_list(Color::Light, PieceKind::Pawn)
            .expect("pawn list")
            .is_empty());

        assert!(game.load_fen("not a fen").is_err());
        assert_eq!(game.color_to_move(), Color::Dark);
    }
}
