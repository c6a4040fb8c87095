//! Precomputed attack tables.
//!
//! Leaper attacks (knight, king, pawn) are computed at compile time from the
//! shift primitives. Slider attacks (bishop, rook) go through magic-bitboard
//! lookup tables built once at startup; see [`magics`].

mod leapers;
mod magics;

use super::types::{Bitboard, Color, Square};

/// Knight attack set for a square.
#[inline]
#[must_use]
pub fn knight_attacks(sq: Square) -> Bitboard {
    Bitboard(leapers::KNIGHT_ATTACKS[sq.index()])
}

/// King attack set for a square.
#[inline]
#[must_use]
pub fn king_attacks(sq: Square) -> Bitboard {
    Bitboard(leapers::KING_ATTACKS[sq.index()])
}

/// Squares a pawn of `color` on `sq` attacks.
#[inline]
#[must_use]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    Bitboard(leapers::PAWN_ATTACKS[color.index()][sq.index()])
}

/// Bishop attack set for a square given the full occupancy.
#[inline]
#[must_use]
pub fn bishop_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    magics::bishop_attacks(sq, occupancy)
}

/// Rook attack set for a square given the full occupancy.
#[inline]
#[must_use]
pub fn rook_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    magics::rook_attacks(sq, occupancy)
}

/// Queen attack set: the union of bishop and rook attacks.
#[inline]
#[must_use]
pub fn queen_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    magics::bishop_attacks(sq, occupancy) | magics::rook_attacks(sq, occupancy)
}

/// Force construction of the magic tables.
///
/// Process-wide, idempotent, once-only; the first call pays the search cost
/// (dominated by the rook magics). Attack lookups made before `init` trigger
/// the same once-only construction, so no lookup can observe a partial table.
pub fn init() {
    magics::init();
}
