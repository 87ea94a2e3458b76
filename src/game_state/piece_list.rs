//! Per (color, kind) index of occupied squares.
//!
//! A dense array of squares plus a square -> slot table gives constant-time
//! add, remove, and relocate, so move generation can enumerate "all my
//! knights" without scanning the 64-square board.

use crate::game_state::chess_types::Square;

const MAX_PIECE_LIST_CAPACITY: usize = 10;
const NO_SLOT: u8 = u8::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceList {
    squares: [Square; MAX_PIECE_LIST_CAPACITY],
    slot_of_square: [u8; 64],
    count: usize,
    capacity: usize,
}

impl PieceList {
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity <= MAX_PIECE_LIST_CAPACITY);
        Self {
            squares: [0; MAX_PIECE_LIST_CAPACITY],
            slot_of_square: [NO_SLOT; 64],
            count: 0,
            capacity: capacity.min(MAX_PIECE_LIST_CAPACITY),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count >= self.capacity
    }

    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        self.slot_of_square[square as usize] != NO_SLOT
    }

    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.count]
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.as_slice().iter().copied()
    }

    pub fn add(&mut self, square: Square) {
        debug_assert!(!self.is_full(), "piece list over capacity");
        debug_assert!(!self.contains(square), "square {square} already listed");

        self.squares[self.count] = square;
        self.slot_of_square[square as usize] = self.count as u8;
        self.count += 1;
    }

    /// Swap the last entry into the removed slot and shrink by one.
    pub fn remove(&mut self, square: Square) {
        let slot = self.slot_of_square[square as usize];
        debug_assert!(slot != NO_SLOT, "square {square} not listed");
        if slot == NO_SLOT {
            return;
        }

        let slot = slot as usize;
        let last = self.count - 1;
        let last_square = self.squares[last];
        self.squares[slot] = last_square;
        self.slot_of_square[last_square as usize] = slot as u8;
        self.slot_of_square[square as usize] = NO_SLOT;
        self.count = last;
    }

    /// Move an entry in place; the slot is reused so enumeration order is kept.
    pub fn relocate(&mut self, from: Square, to: Square) {
        let slot = self.slot_of_square[from as usize];
        debug_assert!(slot != NO_SLOT, "square {from} not listed");
        debug_assert!(!self.contains(to), "square {to} already listed");
        if slot == NO_SLOT {
            return;
        }

        self.squares[slot as usize] = to;
        self.slot_of_square[from as usize] = NO_SLOT;
        self.slot_of_square[to as usize] = slot;
    }
}
