//! Heuristic Chess Engine
//!
//! Depth-limited minimax with alpha-beta pruning, heuristic move ordering,
//! and a phase-aware material evaluation. Board rules live in `chess_rules`;
//! this crate only decides which move to play.

mod config;
mod eval;
mod ordering;
mod scale;
mod search;

use chess_rules::{legal_moves, move_to_uci, Move, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use config::EngineConfig;
pub use eval::{evaluate, MATE_SCORE};

/// Outcome of one search. Produced per call and handed straight to the
/// caller; the engine keeps nothing between searches except its RNG state.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Move,
    /// Evaluation from White's point of view.
    pub score: f32,
    /// Depth the search was asked for.
    pub depth: u8,
    /// Positions visited, for diagnostics.
    pub nodes: u64,
}

/// Chess engine combining minimax search with a blended material and
/// positional evaluation.
///
/// The engine owns its random generator so that move-ordering tie-breaks
/// stay reproducible under a fixed seed and self-contained otherwise.
#[derive(Debug, Clone)]
pub struct HeuristicEngine {
    pub config: EngineConfig,
    rng: StdRng,
    nodes: u64,
}

impl HeuristicEngine {
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            nodes: 0,
        }
    }

    /// Engine with default settings and a fixed RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(EngineConfig {
            seed: Some(seed),
            ..EngineConfig::default()
        })
    }

    /// Restarts the tie-break RNG from the given seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Searches `depth` plies deep and returns the chosen move with its
    /// evaluation, or `None` when the side to move has no legal moves.
    ///
    /// The caller's position is never modified; the search works on its own
    /// copy. Repeated calls on the same position may legitimately return
    /// different, equally-scored moves.
    pub fn select_move(&mut self, pos: &Position, depth: u8) -> Option<SearchResult> {
        if legal_moves(pos).is_empty() {
            return None;
        }

        self.nodes = 0;
        let mut scratch = pos.clone();
        let (best_move, score) = search::best_move(
            &mut scratch,
            f32::NEG_INFINITY,
            f32::INFINITY,
            depth,
            &mut self.rng,
            &self.config,
            &mut self.nodes,
        );

        log::debug!(
            "selected {} score {:.1} depth {} nodes {}",
            move_to_uci(best_move),
            score,
            depth,
            self.nodes
        );

        Some(SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        })
    }
}

impl Default for HeuristicEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
