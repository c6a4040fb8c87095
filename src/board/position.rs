//! Complete game position: board, side to move, castling rights, en passant,
//! clocks, incremental Zobrist key, and the undo/repetition stacks.

use crate::zobrist::KEYS;

use super::attack_tables;
use super::state::Board;
use super::types::{CastlingRights, Color, Piece, Square};

/// The standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Snapshot saved on every make so the move can be undone.
#[derive(Clone, Copy, Debug)]
pub struct UndoInfo {
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) captured: Option<(Color, Piece)>,
    /// Zobrist key before the move; restored verbatim on unmake.
    pub(crate) key: u64,
}

/// A chess position.
///
/// Mutated only through `make_move` / `unmake_move` and the null-move pair;
/// the undo stack and key history grow on make and shrink on unmake, so calls
/// must be strictly paired.
#[derive(Clone)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) key: u64,
    pub(crate) undo_stack: Vec<UndoInfo>,
    pub(crate) key_history: Vec<u64>,
}

impl Position {
    /// An empty board, White to move, no castling rights.
    #[must_use]
    pub fn new() -> Self {
        let mut pos = Position {
            board: Board::new(),
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            key: 0,
            undo_stack: Vec::new(),
            key_history: Vec::new(),
        };
        pos.reset_key();
        pos
    }

    /// The standard starting position.
    #[must_use]
    pub fn startpos() -> Self {
        Self::from_fen(STARTING_FEN).expect("starting position descriptor is valid")
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// The incrementally maintained Zobrist key.
    #[inline]
    #[must_use]
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Is `sq` attacked by any piece of color `by`?
    ///
    /// Uses the reverse-attack trick: the attackers of a square are found by
    /// placing a hypothetical piece of the opposite kind on it and
    /// intersecting its attack pattern with the attacker's piece bitboard.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let occ = self.board.occupied_all();

        if (attack_tables::pawn_attacks(by.opponent(), sq) & self.board.pieces(by, Piece::Pawn))
            .any()
        {
            return true;
        }
        if (attack_tables::knight_attacks(sq) & self.board.pieces(by, Piece::Knight)).any() {
            return true;
        }
        if (attack_tables::king_attacks(sq) & self.board.pieces(by, Piece::King)).any() {
            return true;
        }

        let diag = self.board.pieces(by, Piece::Bishop) | self.board.pieces(by, Piece::Queen);
        if (attack_tables::bishop_attacks(sq, occ) & diag).any() {
            return true;
        }

        let straight = self.board.pieces(by, Piece::Rook) | self.board.pieces(by, Piece::Queen);
        (attack_tables::rook_attacks(sq, occ) & straight).any()
    }

    /// Is the given color's king in check?
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.board.king_square(color), color.opponent())
    }

    /// Is the side to move in check?
    #[must_use]
    pub fn side_in_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }

    /// How many times the current key appears in the key history, counting the
    /// current occurrence.
    #[must_use]
    pub(crate) fn repetition_count(&self) -> usize {
        self.key_history.iter().filter(|&&k| k == self.key).count()
    }

    /// Draw by the 50-move rule, repetition, or insufficient material.
    ///
    /// Repetition uses a twofold cutoff: any earlier occurrence of the current
    /// key counts as a draw. This deliberately trades the strict threefold
    /// rule for search efficiency.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        if self.halfmove_clock >= 100 {
            return true;
        }
        if self.repetition_count() >= 2 {
            return true;
        }
        self.is_insufficient_material()
    }

    /// K vs K, a lone minor piece, or same-colored bishops only.
    fn is_insufficient_material(&self) -> bool {
        let total = self.board.occupied_all().popcount();

        if total == 2 {
            return true;
        }

        if total == 3 {
            for color in Color::BOTH {
                if self.board.pieces(color, Piece::Knight).any()
                    || self.board.pieces(color, Piece::Bishop).any()
                {
                    return true;
                }
            }
        }

        if total == 4 {
            let wb = self.board.pieces(Color::White, Piece::Bishop);
            let bb = self.board.pieces(Color::Black, Piece::Bishop);
            if wb.any() && bb.any() {
                let w_light = (wb & super::types::Bitboard::LIGHT_SQUARES).any();
                let b_light = (bb & super::types::Bitboard::LIGHT_SQUARES).any();
                return w_light == b_light;
            }
        }

        false
    }

    /// Does `side` have any piece besides pawns and the king? Gates null-move
    /// pruning.
    #[must_use]
    pub(crate) fn has_non_pawn_material(&self, side: Color) -> bool {
        self.board.pieces(side, Piece::Knight).any()
            || self.board.pieces(side, Piece::Bishop).any()
            || self.board.pieces(side, Piece::Rook).any()
            || self.board.pieces(side, Piece::Queen).any()
    }

    /// Recompute the key from scratch and reset the key history to contain it
    /// exactly once. Called after construction and parsing.
    pub(crate) fn reset_key(&mut self) {
        self.key = self.compute_key_from_scratch();
        self.key_history.clear();
        self.key_history.push(self.key);
        self.undo_stack.clear();
    }

    /// Full non-incremental key computation; the oracle the incremental
    /// updates are tested against.
    #[must_use]
    pub(crate) fn compute_key_from_scratch(&self) -> u64 {
        let mut key = KEYS.castling[self.castling.bits() as usize];
        if self.side_to_move == Color::Black {
            key ^= KEYS.side_to_move;
        }
        if let Some(ep) = self.en_passant {
            key ^= KEYS.en_passant[ep.index()];
        }
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            if let Some((color, piece)) = self.board.piece_at(sq) {
                key ^= KEYS.piece[color.index()][piece.index()][idx];
            }
        }
        key
    }

    #[inline]
    pub(crate) fn toggle_piece_key(&mut self, color: Color, piece: Piece, sq: Square) {
        self.key ^= KEYS.piece[color.index()][piece.index()][sq.index()];
    }

    #[inline]
    pub(crate) fn toggle_side_key(&mut self) {
        self.key ^= KEYS.side_to_move;
    }

    /// Assign castling rights, keeping the key in sync.
    pub(crate) fn set_castling(&mut self, rights: CastlingRights) {
        if rights == self.castling {
            return;
        }
        self.key ^= KEYS.castling[self.castling.bits() as usize];
        self.castling = rights;
        self.key ^= KEYS.castling[self.castling.bits() as usize];
    }

    /// Assign the en-passant square, keeping the key in sync.
    pub(crate) fn set_en_passant(&mut self, ep: Option<Square>) {
        if ep == self.en_passant {
            return;
        }
        if let Some(old) = self.en_passant {
            self.key ^= KEYS.en_passant[old.index()];
        }
        self.en_passant = ep;
        if let Some(new) = self.en_passant {
            self.key ^= KEYS.en_passant[new.index()];
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl PartialEq for Position {
    /// Position identity: placement and all scalar state, ignoring the history
    /// stacks.
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.castling == other.castling
            && self.en_passant == other.en_passant
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
            && self.key == other.key
    }
}

impl Eq for Position {}
