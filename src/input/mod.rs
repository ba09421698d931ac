//! # Input Module
//!
//! Where guesses come from.
//!
//! The engine only ever receives positions that are already on the board;
//! re-prompting after bad input is the guess source's job.

pub mod commands;

pub use commands::*;

use crate::{Board, Player, Position, TreasureHuntError, TreasureHuntResult};
use std::io::{BufRead, Write};

/// Supplies one validated guess per player turn.
pub trait GuessSource {
    /// Returns a position that lies on `board`.
    ///
    /// Implementations loop internally on bad input. An error ends the game.
    fn next_guess(&mut self, player: &Player, board: &Board) -> TreasureHuntResult<Position>;
}

/// Console prompts over any reader/writer pair.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use treasure_hunt::{Board, ConsoleInput, GuessSource, Player, Position};
///
/// let mut input = ConsoleInput::new(Cursor::new("Z9\nb2\n"), Vec::new());
/// let board = Board::new(3).unwrap();
/// let guess = input.next_guess(&Player::new("Alice"), &board).unwrap();
/// assert_eq!(guess, Position::new(1, 1));
/// ```
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prints `prompt` and reads one line, without the line ending.
    ///
    /// Fails with [`TreasureHuntError::InputClosed`] at end of input.
    pub fn prompt(&mut self, prompt: &str) -> TreasureHuntResult<String> {
        write!(self.writer, "\n{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(TreasureHuntError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Asks until the answer is a whole number of at least one.
    pub fn prompt_positive_int(&mut self, prompt: &str) -> TreasureHuntResult<u32> {
        loop {
            let answer = self.prompt(prompt)?;
            match parse_positive_int(&answer) {
                Some(value) => return Ok(value),
                None => writeln!(self.writer, "Please enter a whole number greater than zero.")?,
            }
        }
    }

    /// Asks a yes/no question; only `y` (any case) counts as yes.
    pub fn prompt_yes_no(&mut self, prompt: &str) -> TreasureHuntResult<bool> {
        let answer = self.prompt(prompt)?;
        Ok(is_yes(&answer))
    }

    /// Asks for a comma-separated list of player names.
    pub fn prompt_player_names(&mut self, prompt: &str) -> TreasureHuntResult<Vec<String>> {
        let answer = self.prompt(prompt)?;
        Ok(normalize_player_names(answer.split(',')))
    }

    /// Gives back the writer, e.g. to inspect captured prompts.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> GuessSource for ConsoleInput<R, W> {
    fn next_guess(&mut self, _player: &Player, board: &Board) -> TreasureHuntResult<Position> {
        loop {
            let answer =
                self.prompt("Guess a position (for example, A1 would be the first position). ")?;
            if let Some(position) = board.address_to_position(&answer) {
                return Ok(position);
            }
        }
    }
}
