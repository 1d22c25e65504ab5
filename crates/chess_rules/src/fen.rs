//! Forsyth-Edwards Notation parsing.

use thiserror::Error;

use crate::position::{CastlingRights, Position};
use crate::square;
use crate::types::{Color, Piece, PieceKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 whitespace-separated fields, found {0}")]
    MissingFields(usize),
    #[error("board field must describe 8 ranks, found {0}")]
    BadRankCount(usize),
    #[error("rank '{0}' does not describe exactly 8 files")]
    BadRankWidth(String),
    #[error("invalid piece character '{0}'")]
    BadPiece(char),
    #[error("invalid side to move '{0}'")]
    BadSideToMove(String),
    #[error("invalid castling character '{0}'")]
    BadCastling(char),
    #[error("invalid en-passant square '{0}'")]
    BadEnPassant(String),
    #[error("invalid move counter '{0}'")]
    BadCounter(String),
}

impl Position {
    /// Parses a FEN string. The halfmove clock and fullmove number fields are
    /// optional and default to 0 and 1.
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let board = parse_board(parts[0])?;
        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::BadSideToMove(other.to_string())),
        };
        let castling = parse_castling(parts[2])?;
        let en_passant = match parts[3] {
            "-" => None,
            text => Some(square::parse(text).ok_or_else(|| FenError::BadEnPassant(text.to_string()))?),
        };
        let halfmove_clock = parse_counter(parts.get(4).copied().unwrap_or("0"))?;
        let fullmove_number = parse_counter(parts.get(5).copied().unwrap_or("1"))?;

        Ok(Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }
}

fn parse_board(field: &str) -> Result<[Option<Piece>; 64], FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::BadRankCount(ranks.len()));
    }

    let mut board = [None; 64];
    // FEN lists rank 8 first.
    for (i, rank_text) in ranks.iter().enumerate() {
        let rank: i8 = 7 - i as i8;
        let mut file: i8 = 0;
        for ch in rank_text.chars() {
            if let Some(skip) = ch.to_digit(10) {
                file += skip as i8;
            } else {
                let piece = parse_piece(ch)?;
                match square::square_at(file, rank) {
                    Some(sq) => board[sq as usize] = Some(piece),
                    None => return Err(FenError::BadRankWidth(rank_text.to_string())),
                }
                file += 1;
            }
            if file > 8 {
                return Err(FenError::BadRankWidth(rank_text.to_string()));
            }
        }
        if file != 8 {
            return Err(FenError::BadRankWidth(rank_text.to_string()));
        }
    }
    Ok(board)
}

fn parse_piece(ch: char) -> Result<Piece, FenError> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return Err(FenError::BadPiece(ch)),
    };
    Ok(Piece::new(color, kind))
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for ch in field.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => return Err(FenError::BadCastling(ch)),
        }
    }
    Ok(rights)
}

fn parse_counter(field: &str) -> Result<u32, FenError> {
    field
        .parse()
        .map_err(|_| FenError::BadCounter(field.to_string()))
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
