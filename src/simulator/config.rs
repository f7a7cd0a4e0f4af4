//! Simulation configuration.

use crate::core::config::EngineConfig;
use crate::core::game_state::Difficulty;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play per difficulty
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Difficulty to play (None = every difficulty)
    pub difficulty: Option<Difficulty>,

    /// Whether sessions generate analyst-style commentary
    pub enable_ai: bool,

    /// Tuning the sessions run under
    pub engine: EngineConfig,

    /// Safety cap on actions per game
    pub max_actions_per_run: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            difficulty: None,
            enable_ai: false,
            engine: EngineConfig::default(),
            max_actions_per_run: 500,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking a single difficulty.
    pub fn difficulty_test(difficulty: Difficulty) -> Self {
        Self {
            num_runs: 100,
            difficulty: Some(difficulty),
            ..Default::default()
        }
    }

    /// Difficulties this config covers, easiest first.
    pub fn difficulties(&self) -> Vec<Difficulty> {
        match self.difficulty {
            Some(difficulty) => vec![difficulty],
            None => Difficulty::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_covers_every_difficulty() {
        let config = SimConfig::default();
        assert_eq!(config.difficulties(), Difficulty::ALL.to_vec());
        assert_eq!(config.num_runs, 1000);
    }

    #[test]
    fn test_difficulty_test_is_single() {
        let config = SimConfig::difficulty_test(Difficulty::Hard);
        assert_eq!(config.difficulties(), vec![Difficulty::Hard]);
        assert_eq!(config.num_runs, 100);
    }
}
