//! UCI front-end.
//!
//! Speaks enough of the UCI protocol to plug the engine into a GUI or a
//! match script: position setup (startpos or FEN plus a move list), fixed
//! depth search, and options for depth, the bishop-pair bonus, and the
//! tie-break RNG seed. Time management belongs to whatever drives us.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chess_rules::{apply_uci_position, move_to_uci, Position};
use heuristic_engine::{EngineConfig, HeuristicEngine};

const MAX_DEPTH: u8 = 6;

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config()?;
    let mut engine = HeuristicEngine::new(config);
    let mut pos = Position::startpos();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "uci" => {
                writeln!(stdout, "id name phase-minimax 0.1")?;
                writeln!(stdout, "id author phase-minimax")?;
                writeln!(
                    stdout,
                    "option name Depth type spin default {} min 1 max {}",
                    engine.config.depth, MAX_DEPTH
                )?;
                writeln!(stdout, "option name BishopPair type check default true")?;
                writeln!(stdout, "option name Seed type string default <empty>")?;
                writeln!(stdout, "uciok")?;
                stdout.flush()?;
            }
            "isready" => {
                writeln!(stdout, "readyok")?;
                stdout.flush()?;
            }
            "setoption" => apply_option(&mut engine, &parts),
            "ucinewgame" => {
                pos = Position::startpos();
            }
            "position" => {
                if let Err(err) = apply_uci_position(&mut pos, &parts[1..]) {
                    log::warn!("ignoring position command: {err}");
                }
            }
            "go" => {
                let depth = go_depth(&engine, &parts);
                match engine.select_move(&pos, depth) {
                    Some(result) => {
                        writeln!(
                            stdout,
                            "info depth {} score cp {} nodes {}",
                            result.depth,
                            result.score as i64,
                            result.nodes
                        )?;
                        writeln!(stdout, "bestmove {}", move_to_uci(result.best_move))?;
                    }
                    None => {
                        writeln!(stdout, "bestmove 0000")?;
                    }
                }
                stdout.flush()?;
            }
            "quit" => break,
            _ => {
                // Unknown commands are ignored, as the protocol asks.
            }
        }
    }

    Ok(())
}

/// Reads the optional TOML config file. A missing file means defaults; a
/// present-but-broken file is an error worth stopping for.
fn load_config() -> Result<EngineConfig> {
    let path = std::env::var("ENGINE_CONFIG").unwrap_or_else(|_| "engine.toml".to_string());
    if !Path::new(&path).exists() {
        return Ok(EngineConfig::default());
    }
    let text =
        std::fs::read_to_string(&path).with_context(|| format!("reading config file {path}"))?;
    let config: EngineConfig =
        toml::from_str(&text).with_context(|| format!("parsing config file {path}"))?;
    log::info!("loaded engine config from {path}");
    Ok(config)
}

/// Handles `setoption name <Name> value <Value>`.
fn apply_option(engine: &mut HeuristicEngine, parts: &[&str]) {
    let name_idx = parts.iter().position(|&p| p == "name");
    let value_idx = parts.iter().position(|&p| p == "value");
    let (name, value) = match (name_idx, value_idx) {
        (Some(n), Some(v)) if n + 1 < parts.len() && v + 1 < parts.len() => {
            (parts[n + 1], parts[v + 1])
        }
        _ => return,
    };

    match name {
        "Depth" => {
            if let Ok(depth) = value.parse::<u8>() {
                engine.config.depth = depth.clamp(1, MAX_DEPTH);
            }
        }
        "BishopPair" => {
            engine.config.bishop_pair_bonus = value == "true";
        }
        "Seed" => {
            if let Ok(seed) = value.parse::<u64>() {
                engine.reseed(seed);
            }
        }
        _ => log::warn!("unknown option {name}"),
    }
}

/// Depth for a `go` command: `go depth N` overrides the configured depth.
fn go_depth(engine: &HeuristicEngine, parts: &[&str]) -> u8 {
    if let Some(idx) = parts.iter().position(|&p| p == "depth") {
        if let Some(text) = parts.get(idx + 1) {
            if let Ok(depth) = text.parse::<u8>() {
                return depth.clamp(1, MAX_DEPTH);
            }
        }
    }
    engine.config.depth
}
