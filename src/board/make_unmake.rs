//! Applying and undoing moves with incremental hash maintenance.

use super::position::{Position, UndoInfo};
use super::types::{Color, Move, MoveFlag, Piece, Square, CASTLE_MASK};

impl Position {
    /// Apply a move produced by the move generator for this position.
    ///
    /// Infallible by precondition: the move must come from the pseudo-legal
    /// generator. The board, scalar state, and the Zobrist key stay consistent
    /// after every step.
    pub fn make_move(&mut self, m: Move) {
        let (color, piece) = self
            .board
            .piece_at(m.from())
            .expect("make_move: origin square is empty");

        // Resolve the capture target. For en passant the victim sits one rank
        // behind the destination, on the mover's side.
        let capture_sq = if m.flag() == MoveFlag::EnPassant {
            Square::new(m.from().rank(), m.to().file())
        } else {
            m.to()
        };
        let captured = if m.flag() == MoveFlag::EnPassant || !m.is_castling() {
            self.board.piece_at(capture_sq)
        } else {
            None
        };

        self.undo_stack.push(UndoInfo {
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            captured,
            key: self.key,
        });

        // Lift the mover off its origin.
        self.toggle_piece_key(color, piece, m.from());
        self.board.remove_piece(m.from());

        // Remove the victim.
        if let Some((cap_color, cap_piece)) = captured {
            self.toggle_piece_key(cap_color, cap_piece, capture_sq);
            self.board.remove_piece(capture_sq);
        }

        // Place the mover (possibly promoted) on the destination.
        let placed = match m.promotion_piece() {
            Some(promo) => promo,
            None => piece,
        };
        self.board.put_piece(m.to(), color, placed);
        self.toggle_piece_key(color, placed, m.to());

        // Slide the rook for castling: h -> f kingside, a -> d queenside.
        match m.flag() {
            MoveFlag::CastleKingside => self.slide_rook(color, 7, 5, m.from().rank()),
            MoveFlag::CastleQueenside => self.slide_rook(color, 0, 3, m.from().rank()),
            _ => {}
        }

        // En-passant square for the reply.
        if m.flag() == MoveFlag::DoublePawn {
            let mid_rank = (m.from().rank() + m.to().rank()) / 2;
            self.set_en_passant(Some(Square::new(mid_rank, m.from().file())));
        } else {
            self.set_en_passant(None);
        }

        // Castling rights: touching a king or rook home square clears rights.
        let rights = self.castling & CASTLE_MASK[m.from().index()] & CASTLE_MASK[m.to().index()];
        self.set_castling(rights);

        // Clocks.
        if piece == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }

        self.side_to_move = self.side_to_move.opponent();
        self.toggle_side_key();

        self.key_history.push(self.key);
    }

    /// Undo the most recent `make_move`.
    pub fn unmake_move(&mut self, m: Move) {
        self.key_history.pop();
        let undo = self
            .undo_stack
            .pop()
            .expect("unmake_move without matching make_move");

        self.side_to_move = self.side_to_move.opponent();
        if self.side_to_move == Color::Black {
            self.fullmove_number -= 1;
        }

        // Take the moved piece off the destination, downgrading a promotion
        // back to the pawn that made it.
        let (color, placed) = self.board.remove_piece(m.to());
        let original = if m.flag() == MoveFlag::Promotion {
            Piece::Pawn
        } else {
            placed
        };
        self.board.put_piece(m.from(), color, original);

        // Restore the victim.
        if let Some((cap_color, cap_piece)) = undo.captured {
            let capture_sq = if m.flag() == MoveFlag::EnPassant {
                Square::new(m.from().rank(), m.to().file())
            } else {
                m.to()
            };
            self.board.put_piece(capture_sq, cap_color, cap_piece);
        }

        // Walk the rook home.
        match m.flag() {
            MoveFlag::CastleKingside => self.unslide_rook(5, 7, m.from().rank()),
            MoveFlag::CastleQueenside => self.unslide_rook(3, 0, m.from().rank()),
            _ => {}
        }

        // The stored key is authoritative; no further hashing.
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.key = undo.key;
    }

    /// Pass the turn: same bookkeeping as a move, but no piece changes.
    pub fn make_null_move(&mut self) {
        self.undo_stack.push(UndoInfo {
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            captured: None,
            key: self.key,
        });

        self.set_en_passant(None);
        self.halfmove_clock += 1;
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.opponent();
        self.toggle_side_key();

        self.key_history.push(self.key);
    }

    /// Undo the most recent `make_null_move`.
    pub fn unmake_null_move(&mut self) {
        self.key_history.pop();
        let undo = self
            .undo_stack
            .pop()
            .expect("unmake_null_move without matching make_null_move");

        self.side_to_move = self.side_to_move.opponent();
        if self.side_to_move == Color::Black {
            self.fullmove_number -= 1;
        }

        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.key = undo.key;
    }

    /// Move the castling rook between files on the back rank, hashing it out
    /// and back in.
    fn slide_rook(&mut self, color: Color, from_file: usize, to_file: usize, rank: usize) {
        let rook_from = Square::new(rank, from_file);
        let rook_to = Square::new(rank, to_file);
        self.toggle_piece_key(color, Piece::Rook, rook_from);
        let (rook_color, rook) = self.board.remove_piece(rook_from);
        self.board.put_piece(rook_to, rook_color, rook);
        self.toggle_piece_key(color, Piece::Rook, rook_to);
    }

    /// Reverse the rook slide without hashing (the stored key is restored by
    /// the caller).
    fn unslide_rook(&mut self, from_file: usize, to_file: usize, rank: usize) {
        let rook_from = Square::new(rank, from_file);
        let rook_to = Square::new(rank, to_file);
        let (rook_color, rook) = self.board.remove_piece(rook_from);
        self.board.put_piece(rook_to, rook_color, rook);
    }
}
