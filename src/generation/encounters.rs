//! # Encounter Placement
//!
//! Fills a fresh board with treasure and monsters.

use crate::{random_between, Board, GameConfig, TreasureCatalog};
use log::debug;
use rand::Rng;

/// What setup actually placed, which may fall short of what was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementSummary {
    pub treasure_drawn: usize,
    pub treasure_placed: usize,
    pub monsters_drawn: usize,
    pub monsters_placed: usize,
}

/// Draws a treasure count from the configured range and places that many
/// items on distinct cells. Stops early once every cell holds treasure.
///
/// Returns `(drawn, placed)`.
pub fn scatter_treasure<R: Rng + ?Sized>(
    board: &mut Board,
    config: &GameConfig,
    catalog: &TreasureCatalog,
    rng: &mut R,
) -> (usize, usize) {
    let (low, high) = config.treasure_range();
    let drawn = random_between(rng, low as i64, high as i64) as usize;

    let mut placed = 0;
    while placed < drawn && board.place_random_treasure(catalog, rng).is_some() {
        placed += 1;
    }
    (drawn, placed)
}

/// Draws a monster count from the configured range and spawns that many
/// monsters on distinct cells. Stops early once every cell has a monster.
///
/// Returns `(drawn, placed)`.
pub fn spawn_monsters<R: Rng + ?Sized>(
    board: &mut Board,
    config: &GameConfig,
    rng: &mut R,
) -> (usize, usize) {
    let (low, high) = config.monster_range();
    let drawn = random_between(rng, low as i64, high as i64) as usize;

    let mut placed = 0;
    while placed < drawn && board.place_random_monster(rng).is_some() {
        placed += 1;
    }
    (drawn, placed)
}

/// Treasure first, then monsters.
pub fn populate_board<R: Rng + ?Sized>(
    board: &mut Board,
    config: &GameConfig,
    catalog: &TreasureCatalog,
    rng: &mut R,
) -> PlacementSummary {
    let (treasure_drawn, treasure_placed) = scatter_treasure(board, config, catalog, rng);
    let (monsters_drawn, monsters_placed) = spawn_monsters(board, config, rng);

    let summary = PlacementSummary {
        treasure_drawn,
        treasure_placed,
        monsters_drawn,
        monsters_placed,
    };
    debug!("Populated {}x{} board: {:?}", board.size(), board.size(), summary);
    summary
}
