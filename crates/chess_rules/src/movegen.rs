//! Legal move generation.
//!
//! Pseudo-legal moves are generated per piece kind, then filtered by playing
//! each one and rejecting those that leave the mover's own king attacked.

use crate::position::Position;
use crate::square::{file_of, rank_of, square_at};
use crate::types::{Color, Move, PieceKind};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generates all legal moves for the side to move into a fresh vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut scratch = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut scratch, &mut out);
    out
}

/// Generates all legal moves into `out`, reusing its allocation.
///
/// The position is mutated while filtering but restored before returning.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_legal_moves(pos, out);

    let mover = pos.side_to_move;
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let keeps_king_safe = !pos.in_check(mover);
        pos.unmake_move(mv, undo);
        keeps_king_safe
    });
}

fn pseudo_legal_moves(pos: &Position, out: &mut Vec<Move>) {
    for sq in 0..64u8 {
        let piece = match pos.piece_at(sq) {
            Some(p) if p.color == pos.side_to_move => p,
            _ => continue,
        };
        match piece.kind {
            PieceKind::Pawn => pawn_moves(pos, sq, piece.color, out),
            PieceKind::Knight => step_moves(pos, sq, piece.color, &KNIGHT_DELTAS, out),
            PieceKind::Bishop => slider_moves(pos, sq, piece.color, &BISHOP_DIRS, out),
            PieceKind::Rook => slider_moves(pos, sq, piece.color, &ROOK_DIRS, out),
            PieceKind::Queen => {
                slider_moves(pos, sq, piece.color, &BISHOP_DIRS, out);
                slider_moves(pos, sq, piece.color, &ROOK_DIRS, out);
            }
            PieceKind::King => {
                step_moves(pos, sq, piece.color, &KING_DELTAS, out);
                castle_moves(pos, sq, piece.color, out);
            }
        }
    }
}

fn pawn_moves(pos: &Position, from: u8, color: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let (dir, start_rank, promo_rank): (i8, i8, i8) = match color {
        Color::White => (1, 1, 7),
        Color::Black => (-1, 6, 0),
    };

    // Pushes
    if let Some(to) = square_at(f, r + dir) {
        if pos.piece_at(to).is_none() {
            push_pawn_move(from, to, promo_rank, out);
            if r == start_rank {
                if let Some(to2) = square_at(f, r + 2 * dir) {
                    if pos.piece_at(to2).is_none() {
                        out.push(Move::new(from, to2));
                    }
                }
            }
        }
    }

    // Captures, including en-passant
    for df in [-1, 1] {
        if let Some(to) = square_at(f + df, r + dir) {
            match pos.piece_at(to) {
                Some(target) if target.color != color => {
                    push_pawn_move(from, to, promo_rank, out);
                }
                None if pos.en_passant == Some(to) => {
                    let mut mv = Move::new(from, to);
                    mv.is_en_passant = true;
                    out.push(mv);
                }
                _ => {}
            }
        }
    }
}

fn push_pawn_move(from: u8, to: u8, promo_rank: i8, out: &mut Vec<Move>) {
    if rank_of(to) == promo_rank {
        for kind in PROMOTION_KINDS {
            out.push(Move::promotion(from, to, kind));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn step_moves(pos: &Position, from: u8, color: Color, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    for &(df, dr) in deltas {
        if let Some(to) = square_at(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(p) if p.color != color => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn slider_moves(pos: &Position, from: u8, color: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for &(df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = square_at(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(p) if p.color != color => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

fn castle_moves(pos: &Position, from: u8, color: Color, out: &mut Vec<Move>) {
    let (home, kingside, queenside) = match color {
        Color::White => (
            4u8,
            pos.castling.white_kingside,
            pos.castling.white_queenside,
        ),
        Color::Black => (
            60u8,
            pos.castling.black_kingside,
            pos.castling.black_queenside,
        ),
    };
    if from != home || pos.in_check(color) {
        return;
    }

    let enemy = color.other();
    // Kingside: both transit squares empty and unattacked.
    if kingside
        && pos.piece_at(home + 1).is_none()
        && pos.piece_at(home + 2).is_none()
        && !pos.is_square_attacked(home + 1, enemy)
        && !pos.is_square_attacked(home + 2, enemy)
    {
        let mut mv = Move::new(home, home + 2);
        mv.is_castle = true;
        out.push(mv);
    }
    // Queenside: the rook transit square (b-file) only needs to be empty.
    if queenside
        && pos.piece_at(home - 1).is_none()
        && pos.piece_at(home - 2).is_none()
        && pos.piece_at(home - 3).is_none()
        && !pos.is_square_attacked(home - 1, enemy)
        && !pos.is_square_attacked(home - 2, enemy)
    {
        let mut mv = Move::new(home, home - 2);
        mv.is_castle = true;
        out.push(mv);
    }
}
