//! # Game State Module
//!
//! The treasure hunt itself: setup, the round loop, theft, monster movement
//! and final scoring.
//!
//! A round is every player guessing once, in registration order, followed by
//! every monster moving once. [`GamePhase`] tracks where in that cycle the
//! game currently is.

use crate::config::DEFAULT_PLAYER_NAME;
use crate::{
    populate_board, random_between, tally_items, Board, GameConfig, GameDisplay, GameEvent,
    GuessOutcome, GuessSource, ItemTally, Player, PlayerResult, Position, TreasureCatalog,
    TreasureHuntError, TreasureHuntResult,
};
use log::{debug, info};
use rand::Rng;
use std::rc::Rc;

/// Where the game is in its round cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for `player` (an index into the roster) to pick a cell
    AwaitingGuess { round: u32, player: usize },
    /// Applying theft and treasure resolution for `player`
    ResolvingGuess { round: u32, player: usize },
    /// Every player has guessed; monsters are on the move
    MovingMonsters { round: u32 },
    /// All rounds are done
    GameOver,
}

/// Everything that happened to a player on one guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub position: Position,
    /// `None` when there was no monster on the cell
    pub stolen: Option<Vec<ItemTally>>,
    pub outcome: GuessOutcome,
}

impl GuessReport {
    /// Whether the guessed cell hosted a monster.
    pub fn met_monster(&self) -> bool {
        self.stolen.is_some()
    }

    /// Number of items the monster took.
    pub fn stolen_count(&self) -> u32 {
        self.stolen
            .iter()
            .flatten()
            .map(|tally| tally.count)
            .sum()
    }
}

/// A single game of treasure hunt.
///
/// The game owns its board, players and random number generator. Pass a
/// seeded generator to make every draw reproducible.
pub struct TreasureHuntGame<R: Rng> {
    board: Board,
    players: Vec<Player>,
    guesses: u32,
    phase: GamePhase,
    rng: R,
}

impl<R: Rng> TreasureHuntGame<R> {
    /// Sets up a new game: builds the board, scatters treasure, spawns
    /// monsters and registers the players.
    ///
    /// `player_names` should already be unique; an empty list registers a
    /// single player called `player`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use treasure_hunt::{GameConfig, GamePhase, TreasureCatalog, TreasureHuntGame};
    ///
    /// let config = GameConfig::new(5, 3);
    /// let game = TreasureHuntGame::new(
    ///     &config,
    ///     Vec::new(),
    ///     &TreasureCatalog::standard(),
    ///     StdRng::seed_from_u64(42),
    /// )
    /// .unwrap();
    /// assert_eq!(game.players()[0].name(), "player");
    /// assert_eq!(game.phase(), GamePhase::AwaitingGuess { round: 0, player: 0 });
    /// ```
    pub fn new(
        config: &GameConfig,
        player_names: Vec<String>,
        catalog: &TreasureCatalog,
        mut rng: R,
    ) -> TreasureHuntResult<Self> {
        config.validate()?;

        let mut board = Board::new(config.board_size)?;
        let summary = populate_board(&mut board, config, catalog, &mut rng);
        info!(
            "New {}x{} game: {} rounds, {} treasure, {} monsters",
            config.board_size,
            config.board_size,
            config.guesses,
            summary.treasure_placed,
            summary.monsters_placed
        );

        let players = if player_names.is_empty() {
            vec![Player::new(DEFAULT_PLAYER_NAME)]
        } else {
            player_names.into_iter().map(Player::new).collect()
        };

        Self::from_parts(board, players, config.guesses, rng)
    }

    /// Builds a game around an already prepared board.
    pub fn from_parts(
        board: Board,
        players: Vec<Player>,
        guesses: u32,
        rng: R,
    ) -> TreasureHuntResult<Self> {
        if guesses < 1 {
            return Err(TreasureHuntError::InvalidConfig(
                "at least one guess is required".to_string(),
            ));
        }
        if players.is_empty() {
            return Err(TreasureHuntError::InvalidConfig(
                "at least one player is required".to_string(),
            ));
        }

        Ok(Self {
            board,
            players,
            guesses,
            phase: GamePhase::AwaitingGuess { round: 0, player: 0 },
            rng,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Players in registration order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Number of rounds in this game.
    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_multiplayer(&self) -> bool {
        self.players.len() > 1
    }

    /// Plays every remaining round, then reveals the board and reports
    /// each player's result.
    pub fn play<I, D>(&mut self, input: &mut I, display: &mut D) -> TreasureHuntResult<Vec<PlayerResult>>
    where
        I: GuessSource + ?Sized,
        D: GameDisplay + ?Sized,
    {
        display.show_event(&GameEvent::GameStarted {
            guesses: self.guesses,
            players: self.players.iter().map(|p| p.name().to_string()).collect(),
        })?;

        while !self.is_game_over() {
            self.play_round(input, display)?;
        }

        self.finish(display)
    }

    /// Plays the rest of the current round: each player who has not guessed
    /// yet takes a turn, then the monsters move.
    ///
    /// A round interrupted by a failing guess source resumes with the player
    /// whose turn it was.
    pub fn play_round<I, D>(&mut self, input: &mut I, display: &mut D) -> TreasureHuntResult<()>
    where
        I: GuessSource + ?Sized,
        D: GameDisplay + ?Sized,
    {
        let (round, first) = match self.phase {
            GamePhase::AwaitingGuess { round, player } => (round, player),
            GamePhase::MovingMonsters { round } => (round, self.players.len()),
            other => {
                return Err(TreasureHuntError::InvalidState(format!(
                    "cannot play a round while {:?}",
                    other
                )))
            }
        };

        for index in first..self.players.len() {
            let name = self.players[index].name().to_string();

            if self.is_multiplayer() {
                display.show_event(&GameEvent::TurnStarted { player: name.clone() })?;
            }
            display.show_board(&self.board.render())?;

            let position = input.next_guess(&self.players[index], &self.board)?;
            let report = self.take_guess(index, position)?;

            if let Some(stolen) = report.stolen {
                display.show_event(&GameEvent::MonsterEncounter {
                    player: name.clone(),
                    stolen,
                })?;
            }
            let event = match report.outcome {
                GuessOutcome::Found(item) => GameEvent::TreasureFound {
                    player: name,
                    item: (*item).clone(),
                },
                GuessOutcome::AlreadyClaimed | GuessOutcome::Empty => GameEvent::NothingFound {
                    player: name,
                    position,
                },
            };
            display.show_event(&event)?;
        }

        display.show_event(&GameEvent::RoundEnded {
            remaining: self.guesses - round - 1,
        })?;

        self.end_round()?;
        Ok(())
    }

    /// Resolves one player's guess.
    ///
    /// Only the player whose turn it is may guess. If a monster sits on the
    /// cell it robs the player first; the treasure search then runs
    /// regardless. Afterwards the turn passes to the next player, or to the
    /// monsters once everyone has guessed.
    pub fn take_guess(&mut self, player: usize, position: Position) -> TreasureHuntResult<GuessReport> {
        let round = match self.phase {
            GamePhase::AwaitingGuess { round, player: expected } if expected == player => round,
            other => {
                return Err(TreasureHuntError::InvalidState(format!(
                    "player {} cannot guess while {:?}",
                    player, other
                )))
            }
        };
        if !self.board.contains(position) {
            return Err(TreasureHuntError::InvalidPosition(format!(
                "{:?} is outside the {}x{} board",
                position,
                self.board.size(),
                self.board.size()
            )));
        }
        self.phase = GamePhase::ResolvingGuess { round, player };

        let stolen = match self.board.monster_at(position) {
            Some(monster) => Some(self.steal_from(player, monster.stealth())),
            None => None,
        };

        let outcome = self.board.resolve_guess(position)?;
        if let GuessOutcome::Found(item) = &outcome {
            self.players[player].add_treasure(Rc::clone(item));
        }

        debug!(
            "{} guessed {}: {:?}",
            self.players[player].name(),
            position,
            outcome
        );

        self.phase = if player + 1 < self.players.len() {
            GamePhase::AwaitingGuess {
                round,
                player: player + 1,
            }
        } else {
            GamePhase::MovingMonsters { round }
        };

        Ok(GuessReport {
            position,
            stolen,
            outcome,
        })
    }

    /// Closes the round once every player has guessed: the monsters move and
    /// the game advances to the next round, or ends after the last one.
    ///
    /// Returns how many monsters moved.
    pub fn end_round(&mut self) -> TreasureHuntResult<usize> {
        let round = match self.phase {
            GamePhase::MovingMonsters { round } => round,
            other => {
                return Err(TreasureHuntError::InvalidState(format!(
                    "cannot end a round while {:?}",
                    other
                )))
            }
        };

        let moved = self.move_monsters()?;
        self.phase = if round + 1 >= self.guesses {
            GamePhase::GameOver
        } else {
            GamePhase::AwaitingGuess {
                round: round + 1,
                player: 0,
            }
        };
        Ok(moved)
    }

    /// A monster robs a player of up to `stealth` random items.
    fn steal_from(&mut self, player: usize, stealth: u32) -> Vec<ItemTally> {
        let attempts = random_between(&mut self.rng, 1, stealth as i64) as usize;
        let victim = &mut self.players[player];

        let mut taken = Vec::new();
        for _ in 0..attempts {
            match victim.take_random_treasure(&mut self.rng) {
                Some(item) => taken.push(item),
                None => break,
            }
        }

        debug!(
            "Monster (stealth {}) tried {} times and took {} items from {}",
            stealth,
            attempts,
            taken.len(),
            victim.name()
        );
        tally_items(taken.iter().map(|item| item.as_ref()))
    }

    /// Moves every monster once, in row-major order of where they started.
    /// Does not touch the round cycle; see [`Self::end_round`].
    ///
    /// Returns how many monsters actually moved.
    pub fn move_monsters(&mut self) -> TreasureHuntResult<usize> {
        let mut moved = 0;
        for from in self.board.monster_positions() {
            if self.board.move_monster(from, &mut self.rng)?.is_some() {
                moved += 1;
            }
        }
        Ok(moved)
    }

    /// Scores every player on what they currently hold.
    pub fn results(&self) -> Vec<PlayerResult> {
        self.players.iter().map(PlayerResult::for_player).collect()
    }

    fn finish<D: GameDisplay + ?Sized>(&mut self, display: &mut D) -> TreasureHuntResult<Vec<PlayerResult>> {
        display.show_board(&self.board.render_revealed())?;

        let results = self.results();
        let multiplayer = self.is_multiplayer();
        for result in &results {
            display.show_event(&GameEvent::PlayerSummary {
                result: result.clone(),
                multiplayer,
            })?;
        }

        info!(
            "Game over: {}",
            results
                .iter()
                .map(|r| format!("{} {}", r.name, r.total))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Monster, ScriptedGuesses, TreasureItem};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct NullDisplay;

    impl GameDisplay for NullDisplay {
        fn show_board(&mut self, _board: &str) -> TreasureHuntResult<()> {
            Ok(())
        }

        fn show_event(&mut self, _event: &GameEvent) -> TreasureHuntResult<()> {
            Ok(())
        }
    }

    fn empty_game(size: usize, names: &[&str], guesses: u32) -> TreasureHuntGame<StdRng> {
        let board = Board::new(size).unwrap();
        let players = names.iter().map(|name| Player::new(*name)).collect();
        TreasureHuntGame::from_parts(board, players, guesses, StdRng::seed_from_u64(12345)).unwrap()
    }

    #[test]
    fn test_new_game_setup() {
        let config = GameConfig::for_testing(12345);
        let game = TreasureHuntGame::new(
            &config,
            vec!["Alice".to_string(), "Bob".to_string()],
            &TreasureCatalog::standard(),
            StdRng::seed_from_u64(12345),
        )
        .unwrap();

        assert_eq!(game.players().len(), 2);
        assert!(game.is_multiplayer());
        assert_eq!(game.guesses(), 3);
        assert!((10..=25).contains(&game.board().treasure_positions().len()));
        assert!((3..=5).contains(&game.board().monster_positions().len()));
    }

    #[test]
    fn test_new_game_rejects_bad_config() {
        let result = TreasureHuntGame::new(
            &GameConfig::new(5, 0),
            Vec::new(),
            &TreasureCatalog::standard(),
            StdRng::seed_from_u64(1),
        );
        assert!(matches!(result, Err(TreasureHuntError::InvalidConfig(_))));
    }

    #[test]
    fn test_take_guess_finds_treasure() {
        let mut game = empty_game(3, &["Alice"], 2);
        let pos = Position::new(0, 1);
        game.board_mut()
            .place_treasure(pos, Rc::new(TreasureItem::new("Ruby", 50)))
            .unwrap();

        let report = game.take_guess(0, pos).unwrap();
        assert!(!report.met_monster());
        assert!(matches!(report.outcome, GuessOutcome::Found(_)));
        assert_eq!(game.players()[0].total_value(), 50);

        game.end_round().unwrap();
        let again = game.take_guess(0, pos).unwrap();
        assert_eq!(again.outcome, GuessOutcome::AlreadyClaimed);
        assert_eq!(game.players()[0].treasure_count(), 1);
    }

    #[test]
    fn test_monster_takes_nothing_from_empty_pockets() {
        let mut game = empty_game(3, &["Alice"], 1);
        let pos = Position::new(2, 2);
        game.board_mut()
            .place_monster(pos, Monster::with_stealth(4).unwrap())
            .unwrap();

        let report = game.take_guess(0, pos).unwrap();
        assert!(report.met_monster());
        assert_eq!(report.stolen_count(), 0);
        assert_eq!(report.outcome, GuessOutcome::Empty);
    }

    #[test]
    fn test_theft_then_treasure_on_same_cell() {
        let mut game = empty_game(3, &["Alice"], 1);
        let coin = Rc::new(TreasureItem::new("Gold Coin", 1));
        game.player_mut(0).unwrap().add_treasure(Rc::clone(&coin));

        let pos = Position::new(1, 1);
        game.board_mut()
            .place_treasure(pos, Rc::new(TreasureItem::new("Diamond", 100)))
            .unwrap();
        game.board_mut()
            .place_monster(pos, Monster::with_stealth(1).unwrap())
            .unwrap();

        let report = game.take_guess(0, pos).unwrap();
        // Stealth 1 always makes exactly one attempt.
        assert_eq!(report.stolen_count(), 1);
        assert!(matches!(report.outcome, GuessOutcome::Found(_)));
        assert_eq!(game.players()[0].treasure_count(), 1);
        assert_eq!(game.players()[0].total_value(), 100);
    }

    #[test]
    fn test_take_guess_validates_arguments() {
        let mut game = empty_game(3, &["Alice"], 1);
        assert!(game.take_guess(1, Position::origin()).is_err());
        assert!(matches!(
            game.take_guess(0, Position::new(0, 3)),
            Err(TreasureHuntError::InvalidPosition(_))
        ));
        // Rejected guesses leave the turn where it was.
        assert_eq!(game.phase(), GamePhase::AwaitingGuess { round: 0, player: 0 });
    }

    #[test]
    fn test_take_guess_passes_the_turn() {
        let mut game = empty_game(3, &["Alice", "Bob"], 2);

        game.take_guess(0, Position::origin()).unwrap();
        assert_eq!(game.phase(), GamePhase::AwaitingGuess { round: 0, player: 1 });
        // Alice already guessed this round.
        assert!(matches!(
            game.take_guess(0, Position::new(1, 1)),
            Err(TreasureHuntError::InvalidState(_))
        ));

        game.take_guess(1, Position::new(1, 1)).unwrap();
        assert_eq!(game.phase(), GamePhase::MovingMonsters { round: 0 });
        assert!(game.take_guess(0, Position::new(2, 2)).is_err());

        game.end_round().unwrap();
        assert_eq!(game.phase(), GamePhase::AwaitingGuess { round: 1, player: 0 });
        assert!(game.end_round().is_err());
    }

    #[test]
    fn test_play_round_continues_after_take_guess() {
        let mut game = empty_game(3, &["Alice", "Bob"], 2);
        game.take_guess(0, Position::origin()).unwrap();

        let mut input = ScriptedGuesses::from_labels(["B1"]);
        game.play_round(&mut input, &mut NullDisplay).unwrap();
        assert_eq!(input.remaining(), 0);
        assert_eq!(game.phase(), GamePhase::AwaitingGuess { round: 1, player: 0 });
        assert!(game.board().cell(Position::new(0, 1)).unwrap().is_claimed());
    }

    #[test]
    fn test_play_round_resumes_after_input_fails() {
        let mut game = empty_game(3, &["Alice", "Bob"], 2);

        let mut short = ScriptedGuesses::from_labels(["A1"]);
        let result = game.play_round(&mut short, &mut NullDisplay);
        assert!(matches!(result, Err(TreasureHuntError::InputClosed)));
        assert_eq!(game.phase(), GamePhase::AwaitingGuess { round: 0, player: 1 });

        let mut rest = ScriptedGuesses::from_labels(["C3"]);
        game.play_round(&mut rest, &mut NullDisplay).unwrap();
        assert_eq!(game.phase(), GamePhase::AwaitingGuess { round: 1, player: 0 });
        assert!(game.board().cell(Position::new(2, 2)).unwrap().is_claimed());
    }

    #[test]
    fn test_move_monsters_keeps_count() {
        let mut game = empty_game(4, &["Alice"], 1);
        for pos in [Position::new(0, 0), Position::new(1, 1), Position::new(3, 3)] {
            game.board_mut()
                .place_monster(pos, Monster::with_stealth(2).unwrap())
                .unwrap();
        }
        let moved = game.move_monsters().unwrap();
        assert_eq!(moved, 3);
        assert_eq!(game.board().monster_positions().len(), 3);
    }

    #[test]
    fn test_round_phases() {
        let mut game = empty_game(3, &["Alice", "Bob"], 2);
        let mut input = ScriptedGuesses::from_labels(["A1", "A2", "A3", "B1"]);
        let mut display = NullDisplay;

        assert_eq!(game.phase(), GamePhase::AwaitingGuess { round: 0, player: 0 });
        game.play_round(&mut input, &mut display).unwrap();
        assert_eq!(game.phase(), GamePhase::AwaitingGuess { round: 1, player: 0 });
        game.play_round(&mut input, &mut display).unwrap();
        assert!(game.is_game_over());

        assert!(game.play_round(&mut input, &mut display).is_err());
        assert!(game.take_guess(0, Position::origin()).is_err());
    }

    #[test]
    fn test_play_returns_results_for_every_player() {
        let mut game = empty_game(3, &["Alice", "Bob"], 1);
        let mut input = ScriptedGuesses::from_labels(["A1", "B2"]);
        let results = game.play(&mut input, &mut NullDisplay).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "Alice");
        assert_eq!(results[1].total, 0);
    }

    #[test]
    fn test_play_fails_when_input_runs_out() {
        let mut game = empty_game(3, &["Alice"], 2);
        let mut input = ScriptedGuesses::from_labels(["A1"]);
        let result = game.play(&mut input, &mut NullDisplay);
        assert!(matches!(result, Err(TreasureHuntError::InputClosed)));
    }
}
