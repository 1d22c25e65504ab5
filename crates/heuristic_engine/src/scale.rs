//! Continuous game-phase and openness estimates.
//!
//! Both are linear maps over piece counts and deliberately do not clamp:
//! counts outside the nominal domain extrapolate, which keeps the estimates
//! smooth for odd material distributions instead of flattening them.

use chess_rules::{PieceKind, Position};

/// Linearly remaps `value` from one interval to another.
pub(crate) fn map_range(value: f32, old_min: f32, old_max: f32, new_min: f32, new_max: f32) -> f32 {
    new_min + (value - old_min) * (new_max - new_min) / (old_max - old_min)
}

pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// How far the game has progressed, judged by total piece count:
/// 0.0 with all 32 pieces on the board, 1.0 when only the kings remain.
pub(crate) fn game_phase(pos: &Position) -> f32 {
    phase_from_count(pos.pieces().count() as f32)
}

pub(crate) fn phase_from_count(count: f32) -> f32 {
    map_range(count, 2.0, 32.0, 1.0, 0.0)
}

/// How open the position is, judged by pawn count: 0.0 with no pawns left,
/// 1.0 with all sixteen still on the board.
pub(crate) fn openness(pos: &Position) -> f32 {
    let pawns = pos
        .pieces()
        .filter(|(_, p)| p.kind == PieceKind::Pawn)
        .count();
    openness_from_pawns(pawns as f32)
}

pub(crate) fn openness_from_pawns(pawns: f32) -> f32 {
    map_range(pawns, 0.0, 16.0, 0.0, 1.0)
}

#[cfg(test)]
#[path = "scale_tests.rs"]
mod scale_tests;
