//! Heuristic move ordering.
//!
//! Captures of valuable pieces and checking moves are examined first, which
//! tightens the alpha-beta window early. The input is shuffled before the
//! stable sort so that equally-ranked moves come out in a fresh random order
//! on every call instead of repeating the generator's fixed order.

use chess_rules::{Move, PieceKind, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

const CHECK_BONUS: i32 = 5;

/// Reorders `moves` in place: uniform shuffle, then stable sort by
/// descending priority. The result is always a permutation of the input.
pub(crate) fn order_moves(pos: &mut Position, moves: &mut Vec<Move>, rng: &mut StdRng) {
    moves.shuffle(rng);

    let mut scored: Vec<(Move, i32)> = moves
        .iter()
        .map(|&mv| (mv, move_priority(pos, mv)))
        .collect();
    scored.sort_by_key(|&(_, priority)| std::cmp::Reverse(priority));

    moves.clear();
    moves.extend(scored.into_iter().map(|(mv, _)| mv));
}

/// Priority of a single move: a flat bonus when it delivers check, plus the
/// rank of whatever currently occupies the destination square.
pub(crate) fn move_priority(pos: &mut Position, mv: Move) -> i32 {
    let capture = pos
        .piece_at(mv.to)
        .map(|p| capture_rank(p.kind))
        .unwrap_or(0);

    let undo = pos.make_move(mv);
    let gives_check = pos.in_check(pos.side_to_move);
    pos.unmake_move(mv, undo);

    let check = if gives_check { CHECK_BONUS } else { 0 };
    check + capture
}

/// Monotonic ranking of capture targets by kind.
fn capture_rank(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 2,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 4,
        PieceKind::Queen => 5,
        PieceKind::King => 6,
    }
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
