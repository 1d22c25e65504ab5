//! Engine configuration, loadable from TOML.

use serde::Deserialize;

/// Tunable engine settings.
///
/// All fields have defaults so a config file only needs to mention the
/// settings it overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Search depth in plies.
    pub depth: u8,
    /// Seed for the move-ordering tie-break shuffle. `None` seeds from
    /// entropy, which is what you want for actual play; fix it for
    /// reproducible searches.
    pub seed: Option<u64>,
    /// Award a bonus to a side holding both bishops.
    pub bishop_pair_bonus: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            seed: None,
            bishop_pair_bonus: true,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
