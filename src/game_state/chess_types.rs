//! Core value types shared by the board, the generator, and the parsers.
//!
//! A square occupant is stored as a packed `Piece` value: the piece kind code
//! lives in bits 0-2 and the color in bits 3-4, so either half can be pulled
//! out with a single mask.

pub use crate::game_state::game_state::GameState;

/// Side to move. `Light` is white and owns rank 0 as its back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank step a pawn of this color advances by.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    /// Rank a pawn of this color must stand on to capture en passant.
    #[inline]
    pub const fn en_passant_rank(self) -> u8 {
        match self {
            Color::Light => 4,
            Color::Dark => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    #[inline]
    const fn code(self) -> u8 {
        self.index() as u8 + 1
    }

    #[inline]
    const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Piece kind for a FEN letter, ignoring case.
    pub fn from_fen_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase FEN letter.
    pub const fn to_fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

const KIND_MASK: u8 = 0b0_0111;
const COLOR_MASK: u8 = 0b1_1000;

/// Packed square occupant: `kind code | color bits`, `0` for an empty square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const NONE: Piece = Piece(0);
    pub const LIGHT: u8 = 0b0_1000;
    pub const DARK: u8 = 0b1_0000;

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        let color_bits = match color {
            Color::Light => Self::LIGHT,
            Color::Dark => Self::DARK,
        };
        Piece(kind.code() | color_bits)
    }

    /// Raw packed value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Rebuild a piece from a value previously produced by [`Piece::value`].
    #[inline]
    pub const fn from_value(value: u8) -> Self {
        Piece(value & (KIND_MASK | COLOR_MASK))
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        PieceKind::from_code(self.0 & KIND_MASK)
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self.0 & COLOR_MASK {
            Self::LIGHT => Some(Color::Light),
            Self::DARK => Some(Color::Dark),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    #[inline]
    pub fn is_kind(self, kind: PieceKind) -> bool {
        self.kind() == Some(kind)
    }

    /// FEN letter: uppercase for light, lowercase for dark.
    pub fn to_fen_char(self) -> Option<char> {
        let kind = self.kind()?;
        let ch = kind.to_fen_char();
        match self.color()? {
            Color::Light => Some(ch.to_ascii_uppercase()),
            Color::Dark => Some(ch),
        }
    }
}

/// Board square index (`0..=63`, `rank * 8 + file`, `0 == a1`).
pub type Square = u8;

#[inline]
pub const fn square_of(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

/// Step from `square` by a file/rank delta, or `None` when the step leaves the board.
#[inline]
pub const fn offset_square(square: Square, d_file: i8, d_rank: i8) -> Option<Square> {
    let file = file_of(square) as i8 + d_file;
    let rank = rank_of(square) as i8 + d_rank;
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return None;
    }
    Some(square_of(file as u8, rank as u8))
}
