//! # Scoring
//!
//! End-of-game totals and per-item tallies.

use crate::{Player, TreasureItem};
use serde::{Deserialize, Serialize};

/// How many of one item were found (or stolen).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTally {
    pub item: TreasureItem,
    pub count: u32,
}

impl ItemTally {
    /// Coin value of a single item.
    pub fn unit_value(&self) -> u64 {
        self.item.value
    }

    /// Coin value of all counted items together.
    pub fn extended_value(&self) -> u64 {
        self.item.value * self.count as u64
    }
}

/// Groups items by value equality, keeping the order of first appearance.
///
/// # Examples
///
/// ```
/// use treasure_hunt::{tally_items, TreasureItem};
///
/// let ruby = TreasureItem::new("Ruby", 50);
/// let coin = TreasureItem::new("Gold Coin", 1);
/// let tallies = tally_items([&ruby, &coin, &ruby]);
/// assert_eq!(tallies.len(), 2);
/// assert_eq!(tallies[0].count, 2);
/// assert_eq!(tallies[0].extended_value(), 100);
/// ```
pub fn tally_items<'a>(items: impl IntoIterator<Item = &'a TreasureItem>) -> Vec<ItemTally> {
    let mut tallies: Vec<ItemTally> = Vec::new();
    for item in items {
        match tallies.iter_mut().find(|tally| tally.item == *item) {
            Some(tally) => tally.count += 1,
            None => tallies.push(ItemTally {
                item: item.clone(),
                count: 1,
            }),
        }
    }
    tallies
}

/// Final standing of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub name: String,
    /// Sum of the values of everything the player ended with
    pub total: u64,
    pub items: Vec<ItemTally>,
}

impl PlayerResult {
    /// Scores whatever the player is holding right now.
    pub fn for_player(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            total: player.total_value(),
            items: tally_items(player.found_treasure().iter().map(|item| item.as_ref())),
        }
    }

    /// Number of items held, counting duplicates.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|tally| tally.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_tally_empty() {
        assert!(tally_items(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_same_name_different_value_is_different_item() {
        let cheap = TreasureItem::new("Ring", 5);
        let dear = TreasureItem::new("Ring", 500);
        let tallies = tally_items([&cheap, &dear, &cheap]);
        assert_eq!(tallies.len(), 2);
        assert_eq!(tallies[0].count, 2);
        assert_eq!(tallies[1].count, 1);
    }

    #[test]
    fn test_player_result_totals_match_tallies() {
        let mut player = Player::new("Alice");
        let ruby = Rc::new(TreasureItem::new("Ruby", 50));
        let coin = Rc::new(TreasureItem::new("Gold Coin", 1));
        player.add_treasure(Rc::clone(&coin));
        player.add_treasure(Rc::clone(&ruby));
        player.add_treasure(Rc::clone(&coin));

        let result = PlayerResult::for_player(&player);
        assert_eq!(result.name, "Alice");
        assert_eq!(result.total, 52);
        assert_eq!(result.item_count(), 3);
        assert_eq!(result.items[0].item, *coin);
        assert_eq!(result.items[0].extended_value(), 2);
        assert_eq!(result.items[1].unit_value(), 50);

        let summed: u64 = result.items.iter().map(ItemTally::extended_value).sum();
        assert_eq!(summed, result.total);
    }
}
