//! # Rendering Module
//!
//! Text output for boards and game events.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;

use crate::{GameEvent, TreasureHuntResult};

/// Receives everything the engine wants the players to see.
pub trait GameDisplay {
    /// Shows a rendered board snapshot.
    fn show_board(&mut self, board: &str) -> TreasureHuntResult<()>;

    /// Shows a game event.
    fn show_event(&mut self, event: &GameEvent) -> TreasureHuntResult<()>;
}
