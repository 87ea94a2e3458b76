//! Packed per-position bookkeeping word.
//!
//! Layout:
//! - bits 0-3: castling rights (light kingside, light queenside, dark
//!   kingside, dark queenside)
//! - bits 4-7: en-passant file + 1 (`0` means no en-passant square)
//! - bits 8-13: value of the piece captured by the last move
//! - bits 14-29: halfmove clock

use crate::game_state::chess_types::Piece;

pub type CastlingRights = u8;

pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights = 0b1111;

const CASTLING_SHIFT: u32 = 0;
const EN_PASSANT_SHIFT: u32 = 4;
const CAPTURED_SHIFT: u32 = 8;
const HALFMOVE_SHIFT: u32 = 14;

const CASTLING_MASK: u32 = 0xF;
const EN_PASSANT_MASK: u32 = 0xF;
const CAPTURED_MASK: u32 = 0x3F;
const HALFMOVE_MASK: u32 = 0xFFFF;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PackedGameState(u32);

impl PackedGameState {
    #[inline]
    pub const fn castling_rights(self) -> CastlingRights {
        ((self.0 >> CASTLING_SHIFT) & CASTLING_MASK) as CastlingRights
    }

    #[inline]
    pub const fn has_castling_right(self, right: CastlingRights) -> bool {
        self.castling_rights() & right != 0
    }

    #[inline]
    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.0 &= !(CASTLING_MASK << CASTLING_SHIFT);
        self.0 |= (rights as u32 & CASTLING_MASK) << CASTLING_SHIFT;
    }

    /// Rights are only ever removed; nothing restores a cleared right.
    #[inline]
    pub fn clear_castling_rights(&mut self, rights: CastlingRights) {
        self.0 &= !((rights as u32 & CASTLING_MASK) << CASTLING_SHIFT);
    }

    #[inline]
    pub const fn en_passant_file(self) -> Option<u8> {
        match (self.0 >> EN_PASSANT_SHIFT) & EN_PASSANT_MASK {
            0 => None,
            stored => Some(stored as u8 - 1),
        }
    }

    #[inline]
    pub fn set_en_passant_file(&mut self, file: Option<u8>) {
        let stored = file.map(|f| (f as u32 % 8) + 1).unwrap_or(0);
        self.0 &= !(EN_PASSANT_MASK << EN_PASSANT_SHIFT);
        self.0 |= stored << EN_PASSANT_SHIFT;
    }

    #[inline]
    pub const fn captured_piece(self) -> Piece {
        Piece::from_value(((self.0 >> CAPTURED_SHIFT) & CAPTURED_MASK) as u8)
    }

    #[inline]
    pub fn set_captured_piece(&mut self, piece: Piece) {
        self.0 &= !(CAPTURED_MASK << CAPTURED_SHIFT);
        self.0 |= (piece.value() as u32 & CAPTURED_MASK) << CAPTURED_SHIFT;
    }

    #[inline]
    pub const fn halfmove_clock(self) -> u16 {
        ((self.0 >> HALFMOVE_SHIFT) & HALFMOVE_MASK) as u16
    }

    #[inline]
    pub fn set_halfmove_clock(&mut self, clock: u16) {
        self.0 &= !(HALFMOVE_MASK << HALFMOVE_SHIFT);
        self.0 |= (clock as u32) << HALFMOVE_SHIFT;
    }
}
