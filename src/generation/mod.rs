//! # Generation Module
//!
//! Game configuration, the treasure catalog, and board population.
//!
//! Setup draws every random number through a caller-supplied generator, so a
//! seeded `StdRng` reproduces the same board every time.

pub mod encounters;
pub mod items;

pub use encounters::*;
pub use items::*;

use crate::config;
use crate::{TreasureHuntError, TreasureHuntResult};
use serde::{Deserialize, Serialize};

/// Configuration for a single game.
///
/// Controls the board size, the number of rounds, and how densely the board is
/// filled with treasure and monsters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width and height of the square board
    pub board_size: usize,
    /// Number of rounds; every player guesses once per round
    pub guesses: u32,
    /// Treasure count lower bound, as a multiple of the board size
    pub min_treasure_factor: usize,
    /// Treasure count upper bound, as a multiple of the board size
    pub max_treasure_factor: usize,
    /// Fewest monsters to spawn
    pub min_monsters: usize,
    /// Most monsters to spawn
    pub max_monsters: usize,
    /// Random seed for reproducible games; entropy when unset
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Creates a configuration with the standard treasure and monster densities.
    ///
    /// # Examples
    ///
    /// ```
    /// use treasure_hunt::GameConfig;
    ///
    /// let config = GameConfig::new(5, 3);
    /// assert_eq!(config.board_size, 5);
    /// assert!(config.validate().is_ok());
    /// assert!(GameConfig::new(0, 3).validate().is_err());
    /// ```
    pub fn new(board_size: usize, guesses: u32) -> Self {
        Self {
            board_size,
            guesses,
            min_treasure_factor: config::MIN_TREASURE_FACTOR,
            max_treasure_factor: config::MAX_TREASURE_FACTOR,
            min_monsters: config::MIN_MONSTERS,
            max_monsters: config::MAX_MONSTERS,
            seed: None,
        }
    }

    /// Creates a small, seeded configuration for tests.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(5, 3)
        }
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that a game can be started with this configuration.
    pub fn validate(&self) -> TreasureHuntResult<()> {
        if self.board_size < 1 || self.board_size > config::MAX_BOARD_SIZE {
            return Err(TreasureHuntError::InvalidConfig(format!(
                "board size must be between 1 and {}, got {}",
                config::MAX_BOARD_SIZE,
                self.board_size
            )));
        }

        if self.guesses < 1 {
            return Err(TreasureHuntError::InvalidConfig(
                "at least one guess is required".to_string(),
            ));
        }

        if self.min_treasure_factor > self.max_treasure_factor {
            return Err(TreasureHuntError::InvalidConfig(format!(
                "treasure factor range {}..={} is empty",
                self.min_treasure_factor, self.max_treasure_factor
            )));
        }

        if self.min_monsters > self.max_monsters {
            return Err(TreasureHuntError::InvalidConfig(format!(
                "monster range {}..={} is empty",
                self.min_monsters, self.max_monsters
            )));
        }

        Ok(())
    }

    /// Inclusive range the treasure count is drawn from.
    pub fn treasure_range(&self) -> (usize, usize) {
        (
            self.board_size * self.min_treasure_factor,
            self.board_size * self.max_treasure_factor,
        )
    }

    /// Inclusive range the monster count is drawn from.
    pub fn monster_range(&self) -> (usize, usize) {
        (self.min_monsters, self.max_monsters)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(5, 5)
    }
}

/// Utility functions for setup.
pub mod utils {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates a random number generator from the config.
    ///
    /// Seeded configs always produce the same sequence of draws.
    pub fn create_rng(config: &GameConfig) -> StdRng {
        match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_game_config_creation() {
        let config = GameConfig::new(6, 4);
        assert_eq!(config.board_size, 6);
        assert_eq!(config.guesses, 4);
        assert_eq!(config.treasure_range(), (12, 30));
        assert_eq!(config.monster_range(), (3, 5));
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        assert!(GameConfig::new(0, 1).validate().is_err());
        assert!(GameConfig::new(config::MAX_BOARD_SIZE + 1, 1).validate().is_err());
        assert!(GameConfig::new(1, 1).validate().is_ok());
        assert!(GameConfig::new(config::MAX_BOARD_SIZE, 1).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_guesses() {
        let result = GameConfig::new(5, 0).validate();
        assert!(matches!(result, Err(TreasureHuntError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_ranges() {
        let mut config = GameConfig::new(5, 1);
        config.min_monsters = 6;
        assert!(config.validate().is_err());

        let mut config = GameConfig::new(5, 1);
        config.min_treasure_factor = 9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = GameConfig::for_testing(12345);
        let mut first = utils::create_rng(&config);
        let mut second = utils::create_rng(&config);
        let a: Vec<u32> = (0..10).map(|_| first.gen()).collect();
        let b: Vec<u32> = (0..10).map(|_| second.gen()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::for_testing(99);
        let json = serde_json::to_string(&config).unwrap();
        let loaded: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, config);
    }
}
