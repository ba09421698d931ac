//! # Board
//!
//! The square grid of cells that hides treasure and monsters.
//!
//! Random placement and movement never rejection-sample: eligible cells (or
//! eligible movement offsets) are collected first and one is drawn from that
//! set, so every operation finishes even on a crowded board.

use crate::config::MAX_BOARD_SIZE;
use crate::{
    clamp_offset, column_letter, Monster, Position, TreasureCatalog, TreasureHuntError,
    TreasureHuntResult, TreasureItem,
};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::Write as _;
use std::rc::Rc;

/// What a cell shows on the player-facing board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellDisplay {
    /// Nobody has searched here yet
    Hidden,
    /// Treasure was found here
    Found,
    /// Searched and nothing was there
    Searched,
}

impl CellDisplay {
    /// The three-character marker drawn for this state.
    pub fn marker(self) -> &'static str {
        match self {
            CellDisplay::Hidden => "[ ]",
            CellDisplay::Found => "[X]",
            CellDisplay::Searched => "[O]",
        }
    }
}

/// One addressable position on the board.
///
/// A cell may hold a treasure item and a monster at the same time. Once
/// claimed, a cell stays claimed.
#[derive(Debug, Clone)]
pub struct Cell {
    treasure: Option<Rc<TreasureItem>>,
    claimed: bool,
    monster: Option<Monster>,
    display: CellDisplay,
}

impl Cell {
    fn new() -> Self {
        Self {
            treasure: None,
            claimed: false,
            monster: None,
            display: CellDisplay::Hidden,
        }
    }

    /// The treasure ever assigned to this cell, claimed or not.
    pub fn treasure(&self) -> Option<&TreasureItem> {
        self.treasure.as_deref()
    }

    pub fn has_treasure(&self) -> bool {
        self.treasure.is_some()
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    pub fn monster(&self) -> Option<Monster> {
        self.monster
    }

    pub fn has_monster(&self) -> bool {
        self.monster.is_some()
    }

    pub fn display(&self) -> CellDisplay {
        self.display
    }

    fn claim(&mut self) {
        self.claimed = true;
    }
}

/// Result of searching a cell for treasure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The cell's outcome was already settled, by a player or a monster
    AlreadyClaimed,
    /// Unclaimed treasure was found and is now claimed
    Found(Rc<TreasureItem>),
    /// No treasure was ever placed here
    Empty,
}

/// The game board: `size` x `size` cells indexed by row, then column.
///
/// # Examples
///
/// ```
/// use treasure_hunt::{Board, GuessOutcome, Position};
///
/// let mut board = Board::new(3).unwrap();
/// let pos = board.address_to_position("B2").unwrap();
/// assert_eq!(pos, Position::new(1, 1));
/// assert_eq!(board.resolve_guess(pos).unwrap(), GuessOutcome::Empty);
/// assert_eq!(board.resolve_guess(pos).unwrap(), GuessOutcome::AlreadyClaimed);
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Creates an empty board: no treasure, no monsters, nothing claimed.
    pub fn new(size: usize) -> TreasureHuntResult<Self> {
        if size < 1 || size > MAX_BOARD_SIZE {
            return Err(TreasureHuntError::InvalidConfig(format!(
                "board size must be between 1 and {}, got {}",
                MAX_BOARD_SIZE, size
            )));
        }

        Ok(Self {
            size,
            cells: (0..size)
                .map(|_| (0..size).map(|_| Cell::new()).collect())
                .collect(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    pub fn contains(&self, position: Position) -> bool {
        position.is_within(self.size)
    }

    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.cells.get(position.row)?.get(position.col)
    }

    fn cell_mut(&mut self, position: Position) -> TreasureHuntResult<&mut Cell> {
        let size = self.size;
        self.cells
            .get_mut(position.row)
            .and_then(|row| row.get_mut(position.col))
            .ok_or_else(|| {
                TreasureHuntError::InvalidPosition(format!(
                    "{:?} is outside the {}x{} board",
                    position, size, size
                ))
            })
    }

    /// Every position on the board in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    fn positions_where(&self, predicate: impl Fn(&Cell) -> bool) -> Vec<Position> {
        self.positions()
            .filter(|&pos| self.cell(pos).is_some_and(&predicate))
            .collect()
    }

    /// Cells that have never been assigned treasure.
    pub fn treasure_free_positions(&self) -> Vec<Position> {
        self.positions_where(|cell| !cell.has_treasure())
    }

    /// Cells currently without a monster.
    pub fn monster_free_positions(&self) -> Vec<Position> {
        self.positions_where(|cell| !cell.has_monster())
    }

    /// Cells currently hosting a monster, in row-major order.
    pub fn monster_positions(&self) -> Vec<Position> {
        self.positions_where(Cell::has_monster)
    }

    /// Cells that were ever assigned treasure.
    pub fn treasure_positions(&self) -> Vec<Position> {
        self.positions_where(Cell::has_treasure)
    }

    pub fn has_monster_free_cell(&self) -> bool {
        self.cells.iter().flatten().any(|cell| !cell.has_monster())
    }

    /// The monster at `position`, if any.
    pub fn monster_at(&self, position: Position) -> Option<Monster> {
        self.cell(position).and_then(Cell::monster)
    }

    /// Puts a treasure item on a cell that has none.
    pub fn place_treasure(
        &mut self,
        position: Position,
        item: Rc<TreasureItem>,
    ) -> TreasureHuntResult<()> {
        let cell = self.cell_mut(position)?;
        if cell.has_treasure() {
            return Err(TreasureHuntError::InvalidPosition(format!(
                "{} already holds treasure",
                position
            )));
        }
        cell.treasure = Some(item);
        cell.claimed = false;
        Ok(())
    }

    /// Puts a monster on a cell that has none.
    pub fn place_monster(&mut self, position: Position, monster: Monster) -> TreasureHuntResult<()> {
        let cell = self.cell_mut(position)?;
        if cell.has_monster() {
            return Err(TreasureHuntError::InvalidPosition(format!(
                "{} already holds a monster",
                position
            )));
        }
        cell.monster = Some(monster);
        Ok(())
    }

    /// Puts a random catalog item on a random treasure-free cell.
    ///
    /// Returns `None` without touching the board when every cell already
    /// holds treasure.
    pub fn place_random_treasure<R: Rng + ?Sized>(
        &mut self,
        catalog: &TreasureCatalog,
        rng: &mut R,
    ) -> Option<Position> {
        let position = *self.treasure_free_positions().choose(rng)?;
        let item = catalog.random_item(rng);
        debug!("Placing {} at {}", item.name, position);
        self.place_treasure(position, item).ok()?;
        Some(position)
    }

    /// Spawns a new monster on a random monster-free cell.
    ///
    /// Returns `None` without touching the board when every cell already
    /// hosts a monster.
    pub fn place_random_monster<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        let position = *self.monster_free_positions().choose(rng)?;
        let monster = Monster::random(rng);
        debug!("Placing monster with stealth {} at {}", monster.stealth(), position);
        self.place_monster(position, monster).ok()?;
        Some(position)
    }

    /// Searches a cell for treasure.
    ///
    /// Claimed cells report [`GuessOutcome::AlreadyClaimed`]; unclaimed
    /// treasure is claimed and returned; a cell that never had treasure is
    /// claimed and reported [`GuessOutcome::Empty`]. The cell's display is
    /// updated to match. Monster theft is not handled here.
    pub fn resolve_guess(&mut self, position: Position) -> TreasureHuntResult<GuessOutcome> {
        let cell = self.cell_mut(position)?;

        let outcome = if cell.is_claimed() {
            GuessOutcome::AlreadyClaimed
        } else {
            match &cell.treasure {
                Some(item) => GuessOutcome::Found(Rc::clone(item)),
                None => GuessOutcome::Empty,
            }
        };

        cell.claim();
        cell.display = match outcome {
            GuessOutcome::Found(_) => CellDisplay::Found,
            _ => CellDisplay::Searched,
        };

        Ok(outcome)
    }

    /// Moves the monster at `from` to a random reachable monster-free cell.
    ///
    /// The destination is `from` shifted by an offset drawn from
    /// `[-stealth, stealth]` on each axis and clamped onto the board. Offsets
    /// that land on a monster are never chosen. On a successful move the
    /// monster eats whatever treasure was left on `from`.
    ///
    /// Returns the destination, or `None` if the monster could not move.
    pub fn move_monster<R: Rng + ?Sized>(
        &mut self,
        from: Position,
        rng: &mut R,
    ) -> TreasureHuntResult<Option<Position>> {
        let monster = self.monster_at(from).ok_or_else(|| {
            TreasureHuntError::InvalidState(format!("no monster at {}", from))
        })?;

        if !self.has_monster_free_cell() {
            return Ok(None);
        }

        let reach = monster.stealth() as i64;
        let candidates: Vec<Position> = (-reach..=reach)
            .flat_map(|dx| (-reach..=reach).map(move |dy| (dx, dy)))
            .map(|(dx, dy)| {
                Position::new(
                    clamp_offset(from.row, dx, self.size),
                    clamp_offset(from.col, dy, self.size),
                )
            })
            .filter(|&pos| self.monster_at(pos).is_none())
            .collect();

        let Some(&destination) = candidates.choose(rng) else {
            debug!("Monster at {} is boxed in and stays put", from);
            return Ok(None);
        };

        let old_cell = self.cell_mut(from)?;
        old_cell.claim();
        old_cell.monster = None;
        self.cell_mut(destination)?.monster = Some(monster);

        debug!("Monster moved from {} to {}", from, destination);
        Ok(Some(destination))
    }

    /// Parses a label like `C4` into a position on this board.
    pub fn address_to_position(&self, text: &str) -> Option<Position> {
        Position::from_label(text, self.size)
    }

    /// Draws the board as players see it. Monsters stay invisible.
    pub fn render(&self) -> String {
        self.render_with(|cell| cell.display().marker())
    }

    /// Draws the end-of-game board: `[X]` wherever treasure was ever placed,
    /// `[O]` everywhere else.
    pub fn render_revealed(&self) -> String {
        self.render_with(|cell| {
            if cell.has_treasure() {
                CellDisplay::Found.marker()
            } else {
                CellDisplay::Searched.marker()
            }
        })
    }

    fn render_with(&self, marker: impl Fn(&Cell) -> &'static str) -> String {
        let label_width = self.size.to_string().len();
        let mut out = String::new();

        out.push_str(&" ".repeat(label_width + 1));
        for col in 0..self.size {
            let _ = write!(out, " {} ", column_letter(col));
        }

        for (row, cells) in self.cells.iter().enumerate() {
            let _ = write!(out, "\n{:>width$} ", row + 1, width = label_width);
            for cell in cells {
                out.push_str(marker(cell));
            }
        }

        out
    }
}
