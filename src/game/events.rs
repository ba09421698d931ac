//! # Game Events
//!
//! Everything the engine reports to the display, as plain data.

use crate::{ItemTally, PlayerResult, Position, TreasureItem};
use serde::{Deserialize, Serialize};

/// Something that happened during a game and should be shown to the players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The game is about to begin
    GameStarted { guesses: u32, players: Vec<String> },
    /// A player is up; only sent when several players are registered
    TurnStarted { player: String },
    /// A player landed on a monster; `stolen` is empty if it took nothing
    MonsterEncounter {
        player: String,
        stolen: Vec<ItemTally>,
    },
    /// A player uncovered treasure
    TreasureFound { player: String, item: TreasureItem },
    /// A player searched a cell with nothing left to find
    NothingFound { player: String, position: Position },
    /// Every player has guessed this round
    RoundEnded { remaining: u32 },
    /// Final standing of one player
    PlayerSummary {
        result: PlayerResult,
        multiplayer: bool,
    },
}

impl GameEvent {
    /// Name of the player this event is about, if any.
    pub fn player(&self) -> Option<&str> {
        match self {
            GameEvent::TurnStarted { player }
            | GameEvent::MonsterEncounter { player, .. }
            | GameEvent::TreasureFound { player, .. }
            | GameEvent::NothingFound { player, .. } => Some(player),
            GameEvent::PlayerSummary { result, .. } => Some(&result.name),
            GameEvent::GameStarted { .. } | GameEvent::RoundEnded { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_player() {
        let event = GameEvent::TreasureFound {
            player: "Alice".to_string(),
            item: TreasureItem::new("Ruby", 50),
        };
        assert_eq!(event.player(), Some("Alice"));
        assert_eq!(GameEvent::RoundEnded { remaining: 2 }.player(), None);
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::NothingFound {
            player: "Bob".to_string(),
            position: Position::new(1, 2),
        };
        let json = serde_json::to_string(&event).unwrap();
        let loaded: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, event);
    }
}
