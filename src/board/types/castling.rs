//! Castling rights mask and the per-square update table.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

/// 4-bit castling rights mask.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: CastlingRights = CastlingRights(1);
    pub const WHITE_QUEENSIDE: CastlingRights = CastlingRights(2);
    pub const BLACK_KINGSIDE: CastlingRights = CastlingRights(4);
    pub const BLACK_QUEENSIDE: CastlingRights = CastlingRights(8);
    pub const ALL: CastlingRights = CastlingRights(15);

    /// Kingside right for a color.
    #[inline]
    #[must_use]
    pub const fn kingside(color: Color) -> Self {
        match color {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        }
    }

    /// Queenside right for a color.
    #[inline]
    #[must_use]
    pub const fn queenside(color: Color) -> Self {
        match color {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every right in `other` is present.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: CastlingRights) -> bool {
        self.0 & other.0 == other.0
    }

    /// Raw 4-bit mask, used as the Zobrist castling-key index.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    const fn without(self, other: CastlingRights) -> Self {
        CastlingRights(self.0 & !other.0)
    }
}

impl BitAnd for CastlingRights {
    type Output = CastlingRights;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        CastlingRights(self.0 & rhs.0)
    }
}

impl BitOr for CastlingRights {
    type Output = CastlingRights;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        CastlingRights(self.0 | rhs.0)
    }
}

impl BitAndAssign for CastlingRights {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for CastlingRights {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        if self.contains(Self::WHITE_KINGSIDE) {
            write!(f, "K")?;
        }
        if self.contains(Self::WHITE_QUEENSIDE) {
            write!(f, "Q")?;
        }
        if self.contains(Self::BLACK_KINGSIDE) {
            write!(f, "k")?;
        }
        if self.contains(Self::BLACK_QUEENSIDE) {
            write!(f, "q")?;
        }
        Ok(())
    }
}

/// Rights preserved when a square is touched as the origin or destination of a
/// move. `rights &= CASTLE_MASK[from] & CASTLE_MASK[to]` clears a right as soon
/// as either end of a move touches the relevant king or rook home square.
pub(crate) static CASTLE_MASK: [CastlingRights; 64] = build_castle_mask();

const fn build_castle_mask() -> [CastlingRights; 64] {
    let mut masks = [CastlingRights::ALL; 64];
    masks[Square::A1.index()] = CastlingRights::ALL.without(CastlingRights::WHITE_QUEENSIDE);
    masks[Square::H1.index()] = CastlingRights::ALL.without(CastlingRights::WHITE_KINGSIDE);
    masks[Square::E1.index()] = CastlingRights::ALL
        .without(CastlingRights::WHITE_KINGSIDE)
        .without(CastlingRights::WHITE_QUEENSIDE);
    masks[Square::A8.index()] = CastlingRights::ALL.without(CastlingRights::BLACK_QUEENSIDE);
    masks[Square::H8.index()] = CastlingRights::ALL.without(CastlingRights::BLACK_KINGSIDE);
    masks[Square::E8.index()] = CastlingRights::ALL
        .without(CastlingRights::BLACK_KINGSIDE)
        .without(CastlingRights::BLACK_QUEENSIDE);
    masks
}
