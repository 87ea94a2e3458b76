use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    /// Plain move or capture; a capture is a move onto an occupied square.
    Quiet,
    DoublePawnPush,
    EnPassantCapture,
    PromoteToQueen,
    PromoteToRook,
    PromoteToBishop,
    PromoteToKnight,
    Castling,
}

pub const PROMOTION_MOVE_TYPES: [MoveType; 4] = [
    MoveType::PromoteToQueen,
    MoveType::PromoteToRook,
    MoveType::PromoteToBishop,
    MoveType::PromoteToKnight,
];

impl MoveType {
    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(
            self,
            MoveType::PromoteToQueen
                | MoveType::PromoteToRook
                | MoveType::PromoteToBishop
                | MoveType::PromoteToKnight
        )
    }

    #[inline]
    pub const fn promotion_piece(self) -> Option<PieceKind> {
        match self {
            MoveType::PromoteToQueen => Some(PieceKind::Queen),
            MoveType::PromoteToRook => Some(PieceKind::Rook),
            MoveType::PromoteToBishop => Some(PieceKind::Bishop),
            MoveType::PromoteToKnight => Some(PieceKind::Knight),
            _ => None,
        }
    }

    #[inline]
    pub const fn promotion_to(kind: PieceKind) -> Option<MoveType> {
        match kind {
            PieceKind::Queen => Some(MoveType::PromoteToQueen),
            PieceKind::Rook => Some(MoveType::PromoteToRook),
            PieceKind::Bishop => Some(MoveType::PromoteToBishop),
            PieceKind::Knight => Some(MoveType::PromoteToKnight),
            _ => None,
        }
    }
}

/// A move as produced by the generator. Captured pieces are not stored; the
/// board reads the destination occupant when the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub move_type: MoveType,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, move_type: MoveType) -> Self {
        Self {
            from,
            to,
            move_type,
        }
    }

    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveType::Quiet)
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.move_type.is_promotion()
    }

    #[inline]
    pub const fn promotion_piece(&self) -> Option<PieceKind> {
        self.move_type.promotion_piece()
    }
}

/// Long algebraic form, e.g. `e2e4` or `a7a8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = square_to_algebraic(self.from).map_err(|_| fmt::Error)?;
        let to = square_to_algebraic(self.to).map_err(|_| fmt::Error)?;
        write!(f, "{from}{to}")?;
        if let Some(kind) = self.promotion_piece() {
            write!(f, "{}", kind.to_fen_char())?;
        }
        Ok(())
    }
}
