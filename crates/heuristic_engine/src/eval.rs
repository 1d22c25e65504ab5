//! Static position evaluation.
//!
//! Scores are from White's point of view: positive favors White no matter
//! whose turn it is. Every piece contributes an unsigned magnitude for its
//! owner; the sign is applied once when the two totals are subtracted.

use chess_rules::{legal_moves, Color, PieceKind, Position};

use crate::config::EngineConfig;
use crate::scale::{game_phase, lerp, map_range, openness};

/// Score reported for a mated side. Large enough to dominate any material
/// sum, small enough to stay comfortably inside f32 integer precision.
pub const MATE_SCORE: f32 = 1_000_000.0;

const PAWN_BASE: f32 = 100.0;
const KNIGHT_BASE: f32 = 305.0;
const BISHOP_BASE: f32 = 333.0;
const ROOK_BASE: f32 = 563.0;
const QUEEN_BASE: f32 = 950.0;
const KING_VALUE: f32 = 100_000.0;
const BISHOP_PAIR_BONUS: f32 = 150.0;

/// Pawn position multipliers by relative rank (2..7 from the pawn's own side)
/// and by file folded about the board center, so a file and its mirror share
/// a column. Values follow Berliner's system.
const PAWN_TABLE_EARLY: [[f32; 4]; 6] = [
    [0.90, 0.95, 1.05, 1.10],
    [0.90, 0.95, 1.05, 1.15],
    [0.90, 0.95, 1.10, 1.20],
    [0.97, 1.03, 1.17, 1.27],
    [1.06, 1.12, 1.25, 1.40],
    [5.63, 5.63, 5.63, 5.63],
];

const PAWN_TABLE_LATE: [[f32; 4]; 6] = [
    [1.20, 1.05, 0.95, 0.90],
    [1.20, 1.05, 0.95, 0.90],
    [1.25, 1.10, 1.00, 0.95],
    [1.33, 1.17, 1.07, 1.00],
    [1.45, 1.29, 1.16, 1.05],
    [5.63, 5.63, 5.63, 5.63],
];

/// Evaluates a position, White minus Black.
///
/// Terminal states short-circuit material counting: a mated side to move
/// scores -/+[`MATE_SCORE`], and drawn states (insufficient material,
/// no legal moves without check) score exactly 0.
pub fn evaluate(pos: &Position, config: &EngineConfig) -> f32 {
    if legal_moves(pos).is_empty() {
        if pos.in_check(pos.side_to_move) {
            return match pos.side_to_move {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            };
        }
        return 0.0;
    }
    if pos.is_insufficient_material() {
        return 0.0;
    }

    let phase = game_phase(pos);
    let open = openness(pos);

    let mut white = 0.0;
    let mut black = 0.0;
    for (sq, piece) in pos.pieces() {
        let value = piece_value(piece.color, piece.kind, sq, phase, open);
        match piece.color {
            Color::White => white += value,
            Color::Black => black += value,
        }
    }

    if config.bishop_pair_bonus {
        if bishop_count(pos, Color::White) >= 2 {
            white += BISHOP_PAIR_BONUS;
        }
        if bishop_count(pos, Color::Black) >= 2 {
            black += BISHOP_PAIR_BONUS;
        }
    }

    white - black
}

/// Unsigned value of one piece for its owner.
fn piece_value(color: Color, kind: PieceKind, sq: u8, phase: f32, open: f32) -> f32 {
    match kind {
        PieceKind::Pawn => pawn_value(color, sq, phase),
        PieceKind::Knight => knight_value(sq, open),
        PieceKind::Bishop => slider_value(BISHOP_BASE, open),
        PieceKind::Rook => slider_value(ROOK_BASE, open),
        PieceKind::Queen => slider_value(QUEEN_BASE, open),
        PieceKind::King => KING_VALUE,
    }
}

fn pawn_value(color: Color, sq: u8, phase: f32) -> f32 {
    let rank = chess_rules::square::rank_of(sq);
    let file = chess_rules::square::file_of(sq);

    // Rank 2 (either color's own second rank) maps to row 0.
    let row = match color {
        Color::White => rank - 1,
        Color::Black => 6 - rank,
    } as usize;
    let column = file.min(7 - file) as usize;

    let multiplier = lerp(
        PAWN_TABLE_EARLY[row][column],
        PAWN_TABLE_LATE[row][column],
        phase,
    );
    PAWN_BASE * multiplier
}

fn knight_value(sq: u8, open: f32) -> f32 {
    let file = chess_rules::square::file_of(sq);
    let rank = chess_rules::square::rank_of(sq);
    let rim = file == 0 || file == 7 || rank == 0 || rank == 7;
    let rim_multiplier = if rim { 0.5 } else { 1.0 };
    KNIGHT_BASE * rim_multiplier * knight_openness_multiplier(open)
}

fn slider_value(base: f32, open: f32) -> f32 {
    base * slider_openness_multiplier(open)
}

pub(crate) fn knight_openness_multiplier(open: f32) -> f32 {
    map_range(open, 0.0, 1.0, 1.5, 1.0)
}

pub(crate) fn slider_openness_multiplier(open: f32) -> f32 {
    map_range(open, 0.0, 1.0, 0.8, 1.1)
}

fn bishop_count(pos: &Position, color: Color) -> usize {
    pos.pieces()
        .filter(|(_, p)| p.color == color && p.kind == PieceKind::Bishop)
        .count()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
