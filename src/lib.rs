//! # Treasure Hunt
//!
//! A turn-based grid guessing game. Players guess coordinates on a square board
//! to uncover hidden treasure, while monsters wander the board and rob anyone
//! who lands on their tile.
//!
//! ## Architecture Overview
//!
//! - **Game**: the board, players, monsters and the round state machine
//! - **Generation**: game configuration, the treasure catalog and board population
//! - **Input**: the guess source seam and console prompts
//! - **Rendering**: the display seam and narrative text for game events
//!
//! The engine never touches stdin/stdout directly. It asks a [`GuessSource`]
//! for positions and reports to a [`GameDisplay`], so a whole game can be
//! driven from tests with a seeded random number generator.

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod utils;

pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

/// Core error type for the treasure hunt engine.
#[derive(thiserror::Error, Debug)]
pub enum TreasureHuntError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Game configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No treasure item could be loaded
    #[error("Treasure catalog is empty: {0}")]
    EmptyCatalog(String),

    /// Position is outside the board or otherwise unusable
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    /// Game state does not allow the requested operation
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// The input source ran out before the game finished
    #[error("Input closed before the game finished")]
    InputClosed,
}

/// Result type used throughout the treasure hunt codebase.
pub type TreasureHuntResult<T> = Result<T, TreasureHuntError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Largest supported board; every column needs its own letter
    pub const MAX_BOARD_SIZE: usize = 26;

    /// Lowest monster stealth
    pub const MIN_STEALTH: u32 = 1;

    /// Highest monster stealth
    pub const MAX_STEALTH: u32 = 4;

    /// Name given to the lone player when nobody registers
    pub const DEFAULT_PLAYER_NAME: &str = "player";

    /// Treasure count is drawn from `[size * MIN, size * MAX]`
    pub const MIN_TREASURE_FACTOR: usize = 2;
    pub const MAX_TREASURE_FACTOR: usize = 5;

    /// Monster count is drawn from `[MIN_MONSTERS, MAX_MONSTERS]`
    pub const MIN_MONSTERS: usize = 3;
    pub const MAX_MONSTERS: usize = 5;
}
