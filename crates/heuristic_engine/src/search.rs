//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores are always from White's point of view: White is the maximizing
//! side, Black the minimizing side, whichever is to move. Every move applied
//! to the position is reverted before the frame returns, including when the
//! scan stops early on a cutoff, so callers always get their position back
//! untouched.

use chess_rules::{legal_moves_into, Color, Move, Position};
use rand::rngs::StdRng;

use crate::config::EngineConfig;
use crate::eval::evaluate;
use crate::ordering::order_moves;

/// Finds the best move for the side to move.
///
/// Requires at least one legal move; terminal positions must be filtered
/// out by the caller. Ties on score keep the earliest candidate, which the
/// pre-shuffle in move ordering varies from call to call.
pub(crate) fn best_move(
    pos: &mut Position,
    mut alpha: f32,
    mut beta: f32,
    depth: u8,
    rng: &mut StdRng,
    config: &EngineConfig,
    nodes: &mut u64,
) -> (Move, f32) {
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);
    debug_assert!(!moves.is_empty(), "searched a position with no legal moves");

    order_moves(pos, &mut moves, rng);

    let maximizing = pos.side_to_move == Color::White;
    let mut best = moves[0];
    let mut best_score = if maximizing {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    };

    for mv in moves {
        let undo = pos.make_move(mv);
        *nodes += 1;

        let score = if depth == 0 || is_leaf(pos) {
            evaluate(pos, config)
        } else {
            best_move(pos, alpha, beta, depth - 1, rng, config, nodes).1
        };

        pos.unmake_move(mv, undo);

        if (maximizing && score > best_score) || (!maximizing && score < best_score) {
            best_score = score;
            best = mv;
        }
        if maximizing && score > alpha {
            alpha = score;
        }
        if !maximizing && score < beta {
            beta = score;
        }
        if beta < alpha {
            break;
        }
    }

    (best, best_score)
}

/// Positions the search must not descend into: the game is over, either by
/// dead material or because the side to move has no reply (mate or stalemate).
fn is_leaf(pos: &Position) -> bool {
    pos.is_insufficient_material() || chess_rules::legal_moves(pos).is_empty()
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
