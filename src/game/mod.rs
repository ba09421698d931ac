//! # Game Module
//!
//! Core game state: the board, the entities living on it, and the round loop.
//!
//! This module contains the building blocks of a treasure hunt:
//! - Board and cell representation with text rendering
//! - Monsters and players
//! - The round state machine and guess resolution
//! - Events and final scoring

pub mod board;
pub mod entities;
pub mod events;
pub mod scoring;
pub mod state;

pub use board::*;
pub use entities::*;
pub use events::*;
pub use scoring::*;
pub use state::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A zero-based cell coordinate on the board.
///
/// Players address cells with a label such as `B3`: the letter picks the
/// column and the number picks the row, both counted from one.
///
/// # Examples
///
/// ```
/// use treasure_hunt::Position;
///
/// let pos = Position::new(2, 1);
/// assert_eq!(pos.label(), "B3");
/// assert_eq!(Position::from_label("b3", 5), Some(pos));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Creates a new position with the given row and column.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the origin position (top-left cell).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Checks whether this position lies on a `size` x `size` board.
    pub fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Human label for this position, e.g. `A1` for the origin.
    pub fn label(self) -> String {
        format!("{}{}", column_letter(self.col), self.row + 1)
    }

    /// Parses a human label into a position on a `size` x `size` board.
    ///
    /// Leading and trailing whitespace is ignored and the letter may be in
    /// either case. Returns `None` for anything malformed or off the board;
    /// this never panics, so callers can simply ask again.
    pub fn from_label(text: &str, size: usize) -> Option<Position> {
        let text = text.trim();
        let mut chars = text.chars();
        let letter = chars.next()?.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return None;
        }

        let digits = chars.as_str();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let row_number: usize = digits.parse().ok()?;
        if row_number == 0 {
            return None;
        }

        let position = Position::new(row_number - 1, (letter as u8 - b'A') as usize);
        position.is_within(size).then_some(position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Letter used for a zero-based column index.
pub fn column_letter(col: usize) -> char {
    (b'A' + (col % crate::config::MAX_BOARD_SIZE) as u8) as char
}
