//! Batch pawn move generation via bitboard shifts.

use super::super::attack_tables;
use super::super::position::Position;
use super::super::types::{Bitboard, Color, Move, MoveList, Piece, Square, PROMOTION_ORDER};

fn push_promotions(moves: &mut MoveList, from: Square, to: Square, is_capture: bool) {
    for piece in PROMOTION_ORDER {
        moves.push(Move::promotion(from, to, piece, is_capture));
    }
}

impl Position {
    pub(super) fn gen_pawn_moves(&self, moves: &mut MoveList) {
        let us = self.side_to_move();
        let white = us == Color::White;
        let pawns = self.board.pieces(us, Piece::Pawn);
        let empty = !self.board.occupied_all();
        let enemy = self.board.occupied(us.opponent());
        let promo_rank = if white {
            Bitboard::RANK_8
        } else {
            Bitboard::RANK_1
        };

        // Single pushes
        let single = if white {
            pawns.shift_north() & empty
        } else {
            pawns.shift_south() & empty
        };
        for to in (single & !promo_rank).iter() {
            let from = Square::from_index(if white { to.index() - 8 } else { to.index() + 8 });
            moves.push(Move::quiet(from, to));
        }
        for to in (single & promo_rank).iter() {
            let from = Square::from_index(if white { to.index() - 8 } else { to.index() + 8 });
            push_promotions(moves, from, to, false);
        }

        // Double pushes: only through the rank-3/rank-6 gateway
        let gateway = if white {
            Bitboard::RANK_3
        } else {
            Bitboard::RANK_6
        };
        let double = if white {
            (single & gateway).shift_north() & empty
        } else {
            (single & gateway).shift_south() & empty
        };
        for to in double.iter() {
            let from = Square::from_index(if white { to.index() - 16 } else { to.index() + 16 });
            moves.push(Move::double_pawn(from, to));
        }

        self.gen_pawn_captures(moves, pawns, enemy, promo_rank);
        self.gen_en_passant(moves, pawns);
    }

    /// Captures, promotions (capturing and not), and en passant: the pawn
    /// contribution to the quiescence move set.
    pub(super) fn gen_pawn_tactical_moves(&self, moves: &mut MoveList) {
        let us = self.side_to_move();
        let white = us == Color::White;
        let pawns = self.board.pieces(us, Piece::Pawn);
        let empty = !self.board.occupied_all();
        let enemy = self.board.occupied(us.opponent());
        let promo_rank = if white {
            Bitboard::RANK_8
        } else {
            Bitboard::RANK_1
        };

        self.gen_pawn_captures(moves, pawns, enemy, promo_rank);

        // Non-capture promotions are tactically non-quiet
        let single = if white {
            pawns.shift_north() & empty
        } else {
            pawns.shift_south() & empty
        };
        for to in (single & promo_rank).iter() {
            let from = Square::from_index(if white { to.index() - 8 } else { to.index() + 8 });
            push_promotions(moves, from, to, false);
        }

        self.gen_en_passant(moves, pawns);
    }

    fn gen_pawn_captures(
        &self,
        moves: &mut MoveList,
        pawns: Bitboard,
        enemy: Bitboard,
        promo_rank: Bitboard,
    ) {
        let white = self.side_to_move() == Color::White;

        // Toward the a-file
        let cap_left = if white {
            pawns.shift_nw() & enemy
        } else {
            pawns.shift_sw() & enemy
        };
        for to in cap_left.iter() {
            let from = Square::from_index(if white { to.index() - 7 } else { to.index() + 9 });
            if promo_rank.contains(to) {
                push_promotions(moves, from, to, true);
            } else {
                moves.push(Move::capture(from, to));
            }
        }

        // Toward the h-file
        let cap_right = if white {
            pawns.shift_ne() & enemy
        } else {
            pawns.shift_se() & enemy
        };
        for to in cap_right.iter() {
            let from = Square::from_index(if white { to.index() - 9 } else { to.index() + 7 });
            if promo_rank.contains(to) {
                push_promotions(moves, from, to, true);
            } else {
                moves.push(Move::capture(from, to));
            }
        }
    }

    fn gen_en_passant(&self, moves: &mut MoveList, pawns: Bitboard) {
        if let Some(ep) = self.en_passant() {
            let them = self.side_to_move().opponent();
            // Our pawns that attack the target are exactly the reverse
            // pawn-attack set from the target square.
            let attackers = attack_tables::pawn_attacks(them, ep) & pawns;
            for from in attackers.iter() {
                moves.push(Move::en_passant(from, ep));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::position::Position;
    use crate::board::MoveFlag;

    #[test]
    fn test_startpos_pawn_moves() {
        let pos = Position::startpos();
        let mut moves = crate::board::MoveList::default();
        pos.gen_pawn_moves(&mut moves);
        // 8 single + 8 double pushes
        assert_eq!(moves.len(), 16);
        assert_eq!(
            moves.iter().filter(|m| m.flag() == MoveFlag::DoublePawn).count(),
            8
        );
    }

    #[test]
    fn test_blocked_pawns_cannot_push() {
        // White pawn on e4 blocked by a black pawn on e5
        let pos = Position::from_fen("4k3/8/8/4p3/4P3/8/8/4K3 w - - 0 1").unwrap();
        let mut moves = crate::board::MoveList::default();
        pos.gen_pawn_moves(&mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_double_push_blocked_by_gateway() {
        // Piece on e3 blocks both e3 and e4 for the e2 pawn
        let pos = Position::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").unwrap();
        let mut moves = crate::board::MoveList::default();
        pos.gen_pawn_moves(&mut moves);
        assert!(moves.iter().all(|m| m.flag() != MoveFlag::DoublePawn));
        assert!(!moves.iter().any(|m| m.to().rank() >= 2 && m.from().rank() == 1 && !m.is_capture()));
    }

    #[test]
    fn test_promotion_expansion() {
        let mut pos = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let moves = pos.legal_moves();
        let promos: Vec<String> = moves
            .iter()
            .filter(|m| m.is_promotion())
            .map(ToString::to_string)
            .collect();
        assert_eq!(promos, vec!["a7a8q", "a7a8r", "a7a8b", "a7a8n"]);
    }

    #[test]
    fn test_en_passant_generated() {
        let mut pos =
            Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
                .unwrap();
        let moves = pos.legal_moves();
        let eps: Vec<String> = moves
            .iter()
            .filter(|m| m.flag() == MoveFlag::EnPassant)
            .map(ToString::to_string)
            .collect();
        assert_eq!(eps, vec!["e5f6"]);
    }

    #[test]
    fn test_capture_promotions() {
        // White pawn on b7 can capture a8 or c8 rooks, promoting either way
        let mut pos = Position::from_fen("r1r5/1P6/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let moves = pos.legal_moves();
        let capture_promos = moves
            .iter()
            .filter(|m| m.is_promotion() && m.is_capture())
            .count();
        assert_eq!(capture_promos, 8); // two targets x four pieces
    }
}
