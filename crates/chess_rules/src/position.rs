//! Board state with reversible move application.
//!
//! `make_move` returns an [`Undo`] token; passing it back to `unmake_move`
//! restores the position exactly, including castling rights, the en-passant
//! square, and both move counters. Search code relies on this round trip
//! being lossless.

use crate::movegen::legal_moves;
use crate::square::{file_of, rank_of, square_at};
use crate::types::{Color, Move, Piece, PieceKind};

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

const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const STRAIGHT_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub fn none() -> Self {
        Self {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// Square a double-pushed pawn skipped over, if any.
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// State needed to reverse one `make_move`.
#[derive(Clone, Debug)]
pub struct Undo {
    moved: Piece,
    captured: Option<Piece>,
    castling: CastlingRights,
    en_passant: Option<u8>,
    halfmove_clock: u32,
    fullmove_number: u32,
    /// (from, to) of the rook shuffled by castling.
    castle_rook: Option<(u8, u8)>,
    /// Square the captured pawn actually stood on for en-passant.
    ep_capture_square: Option<u8>,
}

impl Position {
    pub fn startpos() -> Self {
        let mut p = Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        };

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back_rank.iter().enumerate() {
            p.board[f] = Some(Piece::new(Color::White, kind));
            p.board[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.board[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            p.board[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        p
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }

    pub fn set_piece(&mut self, sq: u8, piece: Option<Piece>) {
        self.board[sq as usize] = piece;
    }

    /// Iterates over all occupied squares as `(square, piece)` pairs.
    pub fn pieces(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|piece| (i as u8, piece)))
    }

    pub fn king_square(&self, color: Color) -> Option<u8> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    pub fn in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(ksq) => self.is_square_attacked(ksq, color.other()),
            None => false,
        }
    }

    /// Side to move is in check and has no legal moves.
    pub fn is_checkmate(&self) -> bool {
        self.in_check(self.side_to_move) && legal_moves(self).is_empty()
    }

    /// Side to move is not in check but has no legal moves.
    pub fn is_stalemate(&self) -> bool {
        !self.in_check(self.side_to_move) && legal_moves(self).is_empty()
    }

    /// Neither side retains enough material to ever deliver mate:
    /// bare kings, a single minor piece, or one bishop per side on
    /// same-colored squares.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors: Vec<(Color, PieceKind, u8)> = Vec::new();
        for (sq, piece) in self.pieces() {
            match piece.kind {
                PieceKind::King => {}
                PieceKind::Knight | PieceKind::Bishop => minors.push((piece.color, piece.kind, sq)),
                // Any pawn, rook, or queen is mating material.
                _ => return false,
            }
        }
        match minors.as_slice() {
            [] | [_] => true,
            [(c1, PieceKind::Bishop, s1), (c2, PieceKind::Bishop, s2)] if c1 != c2 => {
                square_shade(*s1) == square_shade(*s2)
            }
            _ => false,
        }
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);

        // A pawn attacks the target from one rank behind its push direction.
        let pawn_rank_delta: i8 = match by {
            Color::White => -1,
            Color::Black => 1,
        };
        for df in [-1, 1] {
            if self.has_piece_at(tf + df, tr + pawn_rank_delta, by, PieceKind::Pawn) {
                return true;
            }
        }

        for (df, dr) in KNIGHT_DELTAS {
            if self.has_piece_at(tf + df, tr + dr, by, PieceKind::Knight) {
                return true;
            }
        }

        for (df, dr) in KING_DELTAS {
            if self.has_piece_at(tf + df, tr + dr, by, PieceKind::King) {
                return true;
            }
        }

        self.ray_attacked(tf, tr, by, &DIAGONAL_DIRS, PieceKind::Bishop)
            || self.ray_attacked(tf, tr, by, &STRAIGHT_DIRS, PieceKind::Rook)
    }

    fn has_piece_at(&self, file: i8, rank: i8, color: Color, kind: PieceKind) -> bool {
        match square_at(file, rank) {
            Some(sq) => self.piece_at(sq) == Some(Piece::new(color, kind)),
            None => false,
        }
    }

    fn ray_attacked(&self, tf: i8, tr: i8, by: Color, dirs: &[(i8, i8)], slider: PieceKind) -> bool {
        for &(df, dr) in dirs {
            let mut f = tf + df;
            let mut r = tr + dr;
            while let Some(sq) = square_at(f, r) {
                if let Some(piece) = self.piece_at(sq) {
                    if piece.color == by && (piece.kind == slider || piece.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                f += df;
                r += dr;
            }
        }
        false
    }

    pub fn make_move(&mut self, mv: Move) -> Undo {
        let moved = self.piece_at(mv.from).expect("make_move: empty origin square");
        let mut captured = self.piece_at(mv.to);

        let undo_base = Undo {
            moved,
            captured: None,
            castling: self.castling.clone(),
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            castle_rook: None,
            ep_capture_square: None,
        };

        self.en_passant = None;

        // En-passant removes a pawn from a square other than the destination.
        let mut ep_capture_square = None;
        if mv.is_en_passant {
            let behind: i8 = match moved.color {
                Color::White => -1,
                Color::Black => 1,
            };
            if let Some(cap_sq) = square_at(file_of(mv.to), rank_of(mv.to) + behind) {
                captured = self.piece_at(cap_sq);
                self.set_piece(cap_sq, None);
                ep_capture_square = Some(cap_sq);
            }
        }

        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(moved));

        if moved.kind == PieceKind::Pawn && is_promotion_rank(moved.color, mv.to) {
            let kind = mv.promo.unwrap_or(PieceKind::Queen);
            self.set_piece(mv.to, Some(Piece::new(moved.color, kind)));
        }

        let mut castle_rook = None;
        if mv.is_castle && moved.kind == PieceKind::King {
            if let Some((rook_from, rook_to)) = castle_rook_squares(moved.color, mv.to) {
                let rook = self.piece_at(rook_from).expect("castling without a rook");
                self.set_piece(rook_from, None);
                self.set_piece(rook_to, Some(rook));
                castle_rook = Some((rook_from, rook_to));
            }
        }

        if moved.kind == PieceKind::King {
            match moved.color {
                Color::White => {
                    self.castling.white_kingside = false;
                    self.castling.white_queenside = false;
                }
                Color::Black => {
                    self.castling.black_kingside = false;
                    self.castling.black_queenside = false;
                }
            }
        }
        if moved.kind == PieceKind::Rook {
            self.clear_rook_right(moved.color, mv.from);
        }
        if let Some(piece) = captured {
            if piece.kind == PieceKind::Rook {
                self.clear_rook_right(piece.color, mv.to);
            }
        }

        // A double push exposes the skipped square to en-passant.
        if moved.kind == PieceKind::Pawn {
            let from_rank = rank_of(mv.from);
            let to_rank = rank_of(mv.to);
            if (from_rank - to_rank).abs() == 2 {
                self.en_passant = square_at(file_of(mv.from), (from_rank + to_rank) / 2);
            }
        }

        self.halfmove_clock = if moved.kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            castle_rook,
            ep_capture_square,
            ..undo_base
        }
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rook_from, rook_to)) = undo.castle_rook {
            let rook = self.piece_at(rook_to).expect("unmake: rook missing");
            self.set_piece(rook_to, None);
            self.set_piece(rook_from, Some(rook));
        }

        // Promotions demote back to the pawn that made the move.
        self.set_piece(mv.from, Some(undo.moved));
        self.set_piece(mv.to, None);

        match undo.ep_capture_square {
            Some(cap_sq) => self.set_piece(cap_sq, undo.captured),
            None => self.set_piece(mv.to, undo.captured),
        }
    }

    fn clear_rook_right(&mut self, color: Color, sq: u8) {
        match (color, sq) {
            (Color::White, 0) => self.castling.white_queenside = false,
            (Color::White, 7) => self.castling.white_kingside = false,
            (Color::Black, 56) => self.castling.black_queenside = false,
            (Color::Black, 63) => self.castling.black_kingside = false,
            _ => {}
        }
    }
}

fn is_promotion_rank(color: Color, sq: u8) -> bool {
    match color {
        Color::White => rank_of(sq) == 7,
        Color::Black => rank_of(sq) == 0,
    }
}

/// Rook (from, to) squares for a completed king castling move.
fn castle_rook_squares(color: Color, king_to: u8) -> Option<(u8, u8)> {
    match (color, king_to) {
        (Color::White, 6) => Some((7, 5)),
        (Color::White, 2) => Some((0, 3)),
        (Color::Black, 62) => Some((63, 61)),
        (Color::Black, 58) => Some((56, 59)),
        _ => None,
    }
}

/// 0 for dark squares, 1 for light squares.
fn square_shade(sq: u8) -> u8 {
    ((file_of(sq) + rank_of(sq)) % 2) as u8
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
