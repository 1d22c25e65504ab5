use super::*;
use crate::position::Position;
use crate::types::{Color, Piece};

#[test]
fn test_move_to_uci_plain_and_promotion() {
    let mv = Move::new(
        crate::square::parse("e2").unwrap(),
        crate::square::parse("e4").unwrap(),
    );
    assert_eq!(move_to_uci(mv), "e2e4");

    let promo = Move::promotion(
        crate::square::parse("a7").unwrap(),
        crate::square::parse("a8").unwrap(),
        PieceKind::Knight,
    );
    assert_eq!(move_to_uci(promo), "a7a8n");
}

#[test]
fn test_parse_resolves_castle_flag() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = parse_uci_move(&pos, "e1g1").unwrap();
    assert!(mv.is_castle);

    let mv = parse_uci_move(&pos, "e1c1").unwrap();
    assert!(mv.is_castle);
}

#[test]
fn test_parse_respects_promotion_choice() {
    let pos = Position::from_fen("8/P3k3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let mv = parse_uci_move(&pos, "a7a8r").unwrap();
    assert_eq!(mv.promo, Some(PieceKind::Rook));
}

#[test]
fn test_parse_rejects_illegal_and_garbage() {
    let pos = Position::startpos();
    assert!(parse_uci_move(&pos, "e2e5").is_none());
    assert!(parse_uci_move(&pos, "zz").is_none());
    assert!(parse_uci_move(&pos, "e7e5").is_none());
}

#[test]
fn test_apply_position_startpos_with_moves() {
    let mut pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    apply_uci_position(&mut pos, &["startpos", "moves", "e2e4", "e7e5"]).unwrap();

    assert_eq!(
        pos.piece_at(crate::square::parse("e4").unwrap()),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(
        pos.piece_at(crate::square::parse("e5").unwrap()),
        Some(Piece::new(Color::Black, PieceKind::Pawn))
    );
    assert_eq!(pos.side_to_move, Color::White);
}

#[test]
fn test_apply_position_fen_then_moves() {
    let mut pos = Position::startpos();
    let args = ["fen", "4k3/8/8/8/8/8/4P3/4K3", "w", "-", "-", "0", "1", "moves", "e2e4"];
    apply_uci_position(&mut pos, &args).unwrap();

    assert_eq!(
        pos.piece_at(crate::square::parse("e4").unwrap()),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(pos.side_to_move, Color::Black);
}

#[test]
fn test_apply_position_bad_fen_leaves_position_alone() {
    let mut pos = Position::startpos();
    let before = pos.clone();
    let err = apply_uci_position(&mut pos, &["fen", "garbage"]).unwrap_err();
    assert!(matches!(err, UciPositionError::Fen(_)));
    assert_eq!(pos, before);
}

#[test]
fn test_apply_position_reports_bad_move() {
    let mut pos = Position::startpos();
    let err = apply_uci_position(&mut pos, &["startpos", "moves", "e2e5"]).unwrap_err();
    assert_eq!(err, UciPositionError::BadMove("e2e5".to_string()));
}
