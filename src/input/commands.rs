//! # Command Parsing
//!
//! Parsing helpers for console answers, player-name intake, and a scripted
//! guess source for replays and tests.

use crate::config::DEFAULT_PLAYER_NAME;
use crate::{Board, GuessSource, Player, Position, TreasureHuntError, TreasureHuntResult};
use std::collections::{HashSet, VecDeque};

/// Parses a whole number of at least one, ignoring surrounding whitespace.
pub fn parse_positive_int(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|&value| value >= 1)
}

/// Only `y`, in either case, means yes.
pub fn is_yes(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("y")
}

/// Cleans up a list of player names.
///
/// Names are trimmed, blanks dropped, and later names that match an earlier
/// one ignoring case are discarded. An empty result becomes the single
/// default player.
///
/// # Examples
///
/// ```
/// use treasure_hunt::normalize_player_names;
///
/// assert_eq!(normalize_player_names(["Ann", " ann ", "Bo"]), vec!["Ann", "Bo"]);
/// assert_eq!(normalize_player_names(Vec::<String>::new()), vec!["player"]);
/// ```
pub fn normalize_player_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut unique: Vec<String> = names
        .into_iter()
        .map(|name| name.as_ref().trim().to_string())
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_lowercase()))
        .collect();

    if unique.is_empty() {
        unique.push(DEFAULT_PLAYER_NAME.to_string());
    }
    unique
}

/// A guess source that replays a fixed list of positions.
///
/// Positions that are off the current board are skipped, the same way a
/// console player would be asked again. Running out of positions ends the
/// game with [`TreasureHuntError::InputClosed`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedGuesses {
    queue: VecDeque<ScriptedGuess>,
}

#[derive(Debug, Clone)]
enum ScriptedGuess {
    Label(String),
    Position(Position),
}

impl ScriptedGuesses {
    /// Replays labels such as `"B2"`.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: labels
                .into_iter()
                .map(|label| ScriptedGuess::Label(label.into()))
                .collect(),
        }
    }

    /// Replays raw positions.
    pub fn from_positions(positions: impl IntoIterator<Item = Position>) -> Self {
        Self {
            queue: positions.into_iter().map(ScriptedGuess::Position).collect(),
        }
    }

    /// Guesses still queued.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl GuessSource for ScriptedGuesses {
    fn next_guess(&mut self, _player: &Player, board: &Board) -> TreasureHuntResult<Position> {
        while let Some(guess) = self.queue.pop_front() {
            let position = match guess {
                ScriptedGuess::Label(label) => board.address_to_position(&label),
                ScriptedGuess::Position(position) => Some(position).filter(|&p| board.contains(p)),
            };
            if let Some(position) = position {
                return Ok(position);
            }
        }
        Err(TreasureHuntError::InputClosed)
    }
}
