//! UCI long algebraic move notation and the `position` command.

use thiserror::Error;

use crate::fen::FenError;
use crate::movegen::legal_moves;
use crate::position::Position;
use crate::square;
use crate::types::{Move, PieceKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UciPositionError {
    #[error(transparent)]
    Fen(#[from] FenError),
    #[error("illegal or unparsable move '{0}'")]
    BadMove(String),
}

pub fn move_to_uci(mv: Move) -> String {
    let mut text = String::new();
    text.push_str(&square::name(mv.from));
    text.push_str(&square::name(mv.to));
    if let Some(kind) = mv.promo {
        text.push(match kind {
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            _ => 'q',
        });
    }
    text
}

/// Resolves UCI text like "e2e4" or "a7a8q" against the legal moves of the
/// position, so castle and en-passant flags come out correctly set.
pub fn parse_uci_move(pos: &Position, text: &str) -> Option<Move> {
    if text.len() < 4 {
        return None;
    }
    let from = square::parse(&text[0..2])?;
    let to = square::parse(&text[2..4])?;
    let promo = match text.as_bytes().get(4).map(|b| *b as char) {
        Some('q') | Some('Q') => Some(PieceKind::Queen),
        Some('r') | Some('R') => Some(PieceKind::Rook),
        Some('b') | Some('B') => Some(PieceKind::Bishop),
        Some('n') | Some('N') => Some(PieceKind::Knight),
        _ => None,
    };

    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to && (promo.is_none() || m.promo == promo))
}

/// Handles the body of a UCI `position` command:
/// `[startpos | fen <fields...>] [moves <uci...>]`.
///
/// The position is only replaced once the FEN parses, so a bad command
/// leaves it as it was.
pub fn apply_uci_position(pos: &mut Position, args: &[&str]) -> Result<(), UciPositionError> {
    let mut rest: &[&str] = match args.first() {
        Some(&"fen") => {
            let end = args
                .iter()
                .position(|&p| p == "moves")
                .unwrap_or(args.len());
            let fen = args[1..end].join(" ");
            *pos = Position::from_fen(&fen)?;
            &args[end..]
        }
        _ => {
            *pos = Position::startpos();
            if args.first() == Some(&"startpos") {
                &args[1..]
            } else {
                args
            }
        }
    };

    if rest.first() == Some(&"moves") {
        rest = &rest[1..];
        for &text in rest {
            let mv = parse_uci_move(pos, text)
                .ok_or_else(|| UciPositionError::BadMove(text.to_string()))?;
            pos.make_move(mv);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
