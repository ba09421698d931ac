//! # Entities
//!
//! Monsters that roam the board and the players hunting for treasure.

use crate::config::{MAX_STEALTH, MIN_STEALTH};
use crate::{random_between, TreasureHuntError, TreasureHuntResult, TreasureItem};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// A monster hiding on the board.
///
/// Stealth is the monster's strength: the higher it is, the further the
/// monster can move in one round and the more items it may take from a
/// player who lands on it. It never changes once the monster exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    stealth: u32,
}

impl Monster {
    /// Creates a monster with a uniformly random stealth in `[1, 4]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let stealth = random_between(rng, MIN_STEALTH as i64, MAX_STEALTH as i64) as u32;
        Self { stealth }
    }

    /// Creates a monster with a fixed stealth.
    ///
    /// # Examples
    ///
    /// ```
    /// use treasure_hunt::Monster;
    ///
    /// assert_eq!(Monster::with_stealth(3).unwrap().stealth(), 3);
    /// assert!(Monster::with_stealth(0).is_err());
    /// assert!(Monster::with_stealth(5).is_err());
    /// ```
    pub fn with_stealth(stealth: u32) -> TreasureHuntResult<Self> {
        if !(MIN_STEALTH..=MAX_STEALTH).contains(&stealth) {
            return Err(TreasureHuntError::InvalidState(format!(
                "monster stealth must be between {} and {}, got {}",
                MIN_STEALTH, MAX_STEALTH, stealth
            )));
        }
        Ok(Self { stealth })
    }

    pub fn stealth(&self) -> u32 {
        self.stealth
    }
}

/// A player and the treasure they are carrying.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    found_treasure: Vec<Rc<TreasureItem>>,
}

impl Player {
    /// Creates a player with empty pockets.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            found_treasure: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Treasure found so far, oldest first.
    pub fn found_treasure(&self) -> &[Rc<TreasureItem>] {
        &self.found_treasure
    }

    /// Number of items currently held.
    pub fn treasure_count(&self) -> usize {
        self.found_treasure.len()
    }

    /// Total coin value of everything currently held.
    pub fn total_value(&self) -> u64 {
        self.found_treasure.iter().map(|item| item.value).sum()
    }

    /// Adds a found item to the end of the collection.
    pub fn add_treasure(&mut self, item: Rc<TreasureItem>) {
        self.found_treasure.push(item);
    }

    /// Removes one uniformly random item, or `None` when empty-handed.
    pub fn take_random_treasure<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Rc<TreasureItem>> {
        if self.found_treasure.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.found_treasure.len());
        Some(self.found_treasure.remove(index))
    }
}
