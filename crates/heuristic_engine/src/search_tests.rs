use super::*;
use crate::eval::MATE_SCORE;
use chess_rules::{legal_moves, move_to_uci, Position};
use rand::SeedableRng;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn search(pos: &mut Position, depth: u8, seed: u64) -> (Move, f32) {
    let mut nodes = 0;
    best_move(
        pos,
        f32::NEG_INFINITY,
        f32::INFINITY,
        depth,
        &mut rng(seed),
        &EngineConfig::default(),
        &mut nodes,
    )
}

/// Full-width minimax without pruning or ordering, as a reference.
fn minimax_reference(pos: &mut Position, depth: u8, config: &EngineConfig) -> f32 {
    let maximizing = pos.side_to_move == chess_rules::Color::White;
    let mut best = if maximizing {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    };

    for mv in legal_moves(pos) {
        let undo = pos.make_move(mv);
        let score = if depth == 0 || is_leaf(pos) {
            evaluate(pos, config)
        } else {
            minimax_reference(pos, depth - 1, config)
        };
        pos.unmake_move(mv, undo);

        if maximizing {
            best = best.max(score);
        } else {
            best = best.min(score);
        }
    }
    best
}

#[test]
fn test_search_leaves_position_unchanged() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2",
    ];
    for fen in fens {
        let mut pos = Position::from_fen(fen).unwrap();
        let before = pos.clone();
        search(&mut pos, 2, 7);
        assert_eq!(pos, before, "search mutated {fen}");
    }
}

#[test]
fn test_pruned_score_matches_full_minimax() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 4 4",
    ];
    let config = EngineConfig::default();
    for fen in fens {
        let mut pos = Position::from_fen(fen).unwrap();
        let expected = minimax_reference(&mut pos, 2, &config);
        for seed in 0..3 {
            let (_, score) = search(&mut pos, 2, seed);
            assert_eq!(score, expected, "pruning changed the score of {fen}");
        }
    }
}

#[test]
fn test_pruned_score_matches_full_minimax_deeper_endgame() {
    let mut pos = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
    let config = EngineConfig::default();
    let expected = minimax_reference(&mut pos, 3, &config);
    let (_, score) = search(&mut pos, 3, 11);
    assert_eq!(score, expected);
}

#[test]
fn test_finds_mate_in_one_as_white() {
    let mut pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/4R1K1 w - - 0 1").unwrap();
    for seed in 0..5 {
        let (mv, score) = search(&mut pos, 1, seed);
        assert_eq!(move_to_uci(mv), "e1e8", "seed {seed}");
        assert_eq!(score, MATE_SCORE);
    }
}

#[test]
fn test_finds_mate_in_one_as_black() {
    let mut pos = Position::from_fen("4r1k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1").unwrap();
    for seed in 0..5 {
        let (mv, score) = search(&mut pos, 1, seed);
        assert_eq!(move_to_uci(mv), "e8e1", "seed {seed}");
        assert_eq!(score, -MATE_SCORE);
    }
}

#[test]
fn test_mate_found_at_deeper_depth_too() {
    let mut pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/4R1K1 w - - 0 1").unwrap();
    let (mv, score) = search(&mut pos, 2, 3);
    assert_eq!(move_to_uci(mv), "e1e8");
    assert_eq!(score, MATE_SCORE);
}

#[test]
fn test_takes_a_hanging_queen() {
    // Black queen on d5 is free for the taking.
    let mut pos = Position::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
    let (mv, _) = search(&mut pos, 1, 5);
    assert_eq!(move_to_uci(mv), "e4d5");
}

#[test]
fn test_minimizing_side_takes_the_queen() {
    // Mirror case: black grabs the loose white queen and the score favors
    // black from then on.
    let mut pos = Position::from_fen("4k3/8/8/4p3/3Q4/8/8/4K3 b - - 0 1").unwrap();
    let (mv, score) = search(&mut pos, 1, 5);
    assert_eq!(move_to_uci(mv), "e5d4");
    assert!(score < 0.0);
}
