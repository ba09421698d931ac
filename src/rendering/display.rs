//! # Display Management
//!
//! Console display that writes boards and narrative lines to any writer.

use crate::rendering::{describe_event, GameDisplay};
use crate::{GameEvent, TreasureHuntResult};
use std::io::Write;

/// Writes boards and event text to a console or any other writer.
pub struct ConsoleDisplay<W> {
    writer: W,
}

impl<W: Write> ConsoleDisplay<W> {
    /// Creates a display over `writer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treasure_hunt::{ConsoleDisplay, GameDisplay, GameEvent};
    ///
    /// let mut display = ConsoleDisplay::new(Vec::new());
    /// display.show_event(&GameEvent::RoundEnded { remaining: 0 }).unwrap();
    /// let text = String::from_utf8(display.into_inner()).unwrap();
    /// assert!(text.contains("There are 0 guesses left."));
    /// ```
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Gives back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> GameDisplay for ConsoleDisplay<W> {
    fn show_board(&mut self, board: &str) -> TreasureHuntResult<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", board)?;
        self.writer.flush()?;
        Ok(())
    }

    fn show_event(&mut self, event: &GameEvent) -> TreasureHuntResult<()> {
        writeln!(self.writer)?;
        for line in describe_event(event) {
            writeln!(self.writer, "{}", line)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps every board and event it is shown, for replays and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    pub boards: Vec<String>,
    pub events: Vec<GameEvent>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events of the kind picked out by `filter`.
    pub fn events_matching<'a>(
        &'a self,
        filter: impl Fn(&GameEvent) -> bool + 'a,
    ) -> impl Iterator<Item = &'a GameEvent> + 'a {
        self.events.iter().filter(move |event| filter(*event))
    }

    /// Events about the named player, in the order they happened.
    pub fn events_for<'a>(&'a self, player: &'a str) -> impl Iterator<Item = &'a GameEvent> + 'a {
        self.events_matching(move |event| event.player() == Some(player))
    }
}

impl GameDisplay for RecordingDisplay {
    fn show_board(&mut self, board: &str) -> TreasureHuntResult<()> {
        self.boards.push(board.to_string());
        Ok(())
    }

    fn show_event(&mut self, event: &GameEvent) -> TreasureHuntResult<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
