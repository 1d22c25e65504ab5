//! Chess rules library: board state, legal move generation, draw detection,
//! FEN parsing, and UCI move notation.
//!
//! This crate knows nothing about searching or evaluating positions; it only
//! answers questions about what is legal and applies moves reversibly.

pub mod fen;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod position;
pub mod square;
pub mod types;

pub use fen::FenError;
pub use movegen::{legal_moves, legal_moves_into};
pub use notation::{apply_uci_position, move_to_uci, parse_uci_move, UciPositionError};
pub use perft::perft;
pub use position::{CastlingRights, Position, Undo};
pub use types::{Color, Move, Piece, PieceKind};
