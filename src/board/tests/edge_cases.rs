//! Pins, en-passant legality, and other corner cases the legality filter must
//! get right.

use crate::board::{MoveFlag, Position};

#[test]
fn test_pinned_piece_cannot_expose_king() {
    // The d2 knight is pinned to the king by the d8 rook.
    let mut pos = Position::from_fen("3r4/8/8/8/8/8/3N4/3K4 w - - 0 1").unwrap();
    let moves = pos.legal_moves();
    assert!(!moves.iter().any(|m| m.from() == "d2".parse().unwrap()));
}

#[test]
fn test_en_passant_discovered_check_is_illegal() {
    // Capturing en passant would clear the fifth rank and expose the white
    // king to the h5 rook.
    let mut pos = Position::from_fen("8/8/8/KPp4r/8/8/8/7k w - c6 0 1").unwrap();
    let moves = pos.legal_moves();
    assert!(
        !moves.iter().any(|m| m.flag() == MoveFlag::EnPassant),
        "en passant must be rejected when it uncovers the rook"
    );
}

#[test]
fn test_en_passant_capture_resolving_nothing_still_legal() {
    let mut pos =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
            .unwrap();
    let moves = pos.legal_moves();
    assert!(moves.iter().any(|m| m.flag() == MoveFlag::EnPassant));
}

#[test]
fn test_king_cannot_step_into_defended_square() {
    // Black king on a8, white queen on b6 guarded by the king.
    let mut pos = Position::from_fen("k7/8/1QK5/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(pos.legal_moves().is_empty());
    assert!(pos.is_stalemate());
}

#[test]
fn test_must_resolve_check() {
    // White king on e1 checked by the e8 rook: every legal move must leave
    // the king out of check.
    let mut pos = Position::from_fen("4r2k/8/8/8/8/8/3P1P2/4K3 w - - 0 1").unwrap();
    let us = pos.side_to_move();
    assert!(pos.side_in_check());
    let moves = pos.legal_moves();
    assert!(!moves.is_empty());
    for &m in &moves {
        pos.make_move(m);
        assert!(!pos.is_in_check(us), "move {m} leaves the king in check");
        pos.unmake_move(m);
    }
}

#[test]
fn test_double_check_forces_king_move() {
    // Knight on f3 and rook on e8 both give check; only king moves help.
    let mut pos = Position::from_fen("4r3/8/8/8/8/5n2/3P4/4K3 w - - 0 1").unwrap();
    let moves = pos.legal_moves();
    assert!(!moves.is_empty());
    for &m in &moves {
        assert_eq!(m.from(), "e1".parse().unwrap());
    }
}

#[test]
fn test_castling_rights_lost_after_king_moves() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let ke2 = pos.parse_uci_move("e1e2").unwrap();
    pos.make_move(ke2);
    let pass = pos.parse_uci_move("e8e7").unwrap();
    pos.make_move(pass);
    let back = pos.parse_uci_move("e2e1").unwrap();
    pos.make_move(back);
    let pass2 = pos.parse_uci_move("e7e8").unwrap();
    pos.make_move(pass2);

    // Both kings are home again, but no castling move exists.
    let moves = pos.legal_moves();
    assert!(!moves.iter().any(|m| m.is_castling()));
}

#[test]
fn test_kingside_castle_blocked_by_piece() {
    let mut pos = Position::from_fen("4k3/8/8/8/8/8/8/4K1NR w K - 0 1").unwrap();
    let moves = pos.legal_moves();
    assert!(!moves.iter().any(|m| m.flag() == MoveFlag::CastleKingside));
}

#[test]
fn test_stalemate_has_score_but_no_moves() {
    let mut pos = Position::from_fen("7k/5Q2/8/8/8/8/8/K7 b - - 0 1").unwrap();
    assert!(pos.is_stalemate());
    assert!(!pos.side_in_check());
}
