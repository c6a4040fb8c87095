//! Bitboard board representation with mailbox redundancy.

use super::types::{Bitboard, Color, Piece, Square};

/// Piece placement only: twelve piece bitboards, per-color and total occupancy
/// aggregates, and a 64-slot mailbox for O(1) piece lookup.
///
/// Invariants maintained by `put_piece` / `remove_piece`:
/// - `pieces[c][t]` has bit `s` set iff `mailbox[s] == Some((c, t))`;
/// - `occupied[c]` is the union of `pieces[c][..]`;
/// - `all_occupied` is the union of both occupancies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pieces: [[Bitboard; 6]; 2],
    occupied: [Bitboard; 2],
    all_occupied: Bitboard,
    mailbox: [Option<(Color, Piece)>; 64],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            mailbox: [None; 64],
        }
    }

    /// Place a piece on an empty square.
    pub(crate) fn put_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        debug_assert!(self.mailbox[sq.index()].is_none(), "put_piece on occupied {sq}");
        let bit = Bitboard::from_square(sq);
        self.pieces[color.index()][piece.index()] |= bit;
        self.occupied[color.index()] |= bit;
        self.all_occupied |= bit;
        self.mailbox[sq.index()] = Some((color, piece));
    }

    /// Remove the piece on an occupied square, returning it.
    pub(crate) fn remove_piece(&mut self, sq: Square) -> (Color, Piece) {
        let (color, piece) = self.mailbox[sq.index()].expect("remove_piece on empty square");
        let bit = Bitboard::from_square(sq);
        self.pieces[color.index()][piece.index()] ^= bit;
        self.occupied[color.index()] ^= bit;
        self.all_occupied ^= bit;
        self.mailbox[sq.index()] = None;
        (color, piece)
    }

    /// Piece on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.mailbox[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.mailbox[sq.index()].is_none()
    }

    /// Bitboard of all pieces of one color and kind.
    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    /// Bitboard of all pieces of one color.
    #[inline]
    #[must_use]
    pub fn occupied(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    /// Bitboard of all pieces on the board.
    #[inline]
    #[must_use]
    pub fn occupied_all(&self) -> Bitboard {
        self.all_occupied
    }

    /// The king square of a color. Requires a board with that king present.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.pieces(color, Piece::King).lsb()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
