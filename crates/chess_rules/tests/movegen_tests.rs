//! Move generation tests, including perft validation against known node
//! counts from the starting position.

use chess_rules::{legal_moves, perft, Position};

#[test]
fn test_startpos_has_twenty_moves() {
    let moves = legal_moves(&Position::startpos());
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_perft_startpos() {
    let mut pos = Position::startpos();
    assert_eq!(perft(&mut pos, 1), 20);
    assert_eq!(perft(&mut pos, 2), 400);
    assert_eq!(perft(&mut pos, 3), 8_902);
}

#[test]
fn test_perft_leaves_position_unchanged() {
    let mut pos = Position::startpos();
    let before = pos.clone();
    perft(&mut pos, 3);
    assert_eq!(pos, before);
}

#[test]
fn test_king_rook_and_castle_counts() {
    // King: 5 moves, rook: 9, castling: 1.
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 15);
    assert_eq!(moves.iter().filter(|m| m.is_castle).count(), 1);
}

#[test]
fn test_castling_blocked_while_in_check() {
    let pos = Position::from_fen("4r1k1/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    let moves = legal_moves(&pos);
    assert!(moves.iter().all(|m| !m.is_castle));
}

#[test]
fn test_en_passant_is_generated() {
    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").unwrap();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 7);
    assert_eq!(moves.iter().filter(|m| m.is_en_passant).count(), 1);
}

#[test]
fn test_promotions_expand_to_four_moves() {
    let pos = Position::from_fen("8/P3k3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 9);
    assert_eq!(moves.iter().filter(|m| m.promo.is_some()).count(), 4);
}

#[test]
fn test_pinned_piece_cannot_expose_king() {
    // The e4 knight is pinned against the king by the e8 rook.
    let pos = Position::from_fen("4r1k1/8/8/8/4N3/8/8/4K3 w - - 0 1").unwrap();
    let moves = legal_moves(&pos);
    assert!(moves
        .iter()
        .all(|m| m.from != chess_rules::square::parse("e4").unwrap()));
}
