//! # Treasure Hunt Main Entry Point
//!
//! Loads the treasure catalog, asks for the game settings, and runs games on
//! the console until the player stops.

use clap::Parser;
use log::{error, info, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use treasure_hunt::{
    normalize_player_names, ConsoleDisplay, ConsoleInput, GameConfig, TreasureCatalog,
    TreasureHuntError, TreasureHuntGame, TreasureHuntResult,
};

/// Command line arguments for the treasure hunt.
#[derive(Parser, Debug)]
#[command(name = "treasure-hunt")]
#[command(about = "A turn-based grid guessing game with hidden treasure and thieving monsters")]
#[command(version)]
struct Args {
    /// Board size for the first game (asked for when omitted)
    #[arg(short, long)]
    size: Option<u32>,

    /// Number of guesses for the first game (asked for when omitted)
    #[arg(short, long)]
    guesses: Option<u32>,

    /// Player name; repeat for a multiplayer game
    #[arg(short, long = "player")]
    players: Vec<String>,

    /// Random seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Directory of treasure item JSON files (built-in items when omitted)
    #[arg(long)]
    items_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("Starting Treasure Hunt v{}", treasure_hunt::VERSION);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(TreasureHuntError::InputClosed) => {
            info!("Input closed, exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .init();
}

fn load_catalog(args: &Args) -> TreasureHuntResult<TreasureCatalog> {
    match &args.items_dir {
        Some(dir) => {
            info!("Loading treasure items from {}", dir.display());
            TreasureCatalog::load_dir(dir)
        }
        None => Ok(TreasureCatalog::standard()),
    }
}

/// Runs games until the player declines to play again.
fn run(args: &Args) -> TreasureHuntResult<()> {
    // The catalog must be complete before any game is built.
    let catalog = load_catalog(args)?;

    let stdin = io::stdin();
    let mut console = ConsoleInput::new(stdin.lock(), io::stdout());
    let mut display = ConsoleDisplay::new(io::stdout());
    let mut seeder = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut first_game = true;
    let mut roster = None;
    loop {
        let config = ask_for_config(&mut console, args, first_game)?.with_seed(seeder.gen());
        let names = player_roster(&mut console, args, &mut roster)?;

        match play_one(&config, names, &catalog, &mut console, &mut display) {
            Ok(()) => {}
            Err(TreasureHuntError::InvalidConfig(reason)) => {
                println!("\nCannot start that game: {}", reason);
            }
            Err(e) => return Err(e),
        }

        first_game = false;
        if !console.prompt_yes_no("Would you like to play again? (y/n) ")? {
            break;
        }
    }

    Ok(())
}

fn ask_for_config<R: BufRead, W: Write>(
    console: &mut ConsoleInput<R, W>,
    args: &Args,
    first_game: bool,
) -> TreasureHuntResult<GameConfig> {
    let size = match args.size.filter(|_| first_game) {
        Some(size) => size,
        None => console.prompt_positive_int("What board size would you like? ")?,
    };
    let guesses = match args.guesses.filter(|_| first_game) {
        Some(guesses) => guesses,
        None => console.prompt_positive_int("How many guesses would you like? ")?,
    };
    Ok(GameConfig::new(size as usize, guesses))
}

/// Names for the next game. Without `--player` flags the names are asked
/// for once and reused for every replay.
fn player_roster<R: BufRead, W: Write>(
    console: &mut ConsoleInput<R, W>,
    args: &Args,
    roster: &mut Option<Vec<String>>,
) -> TreasureHuntResult<Vec<String>> {
    if !args.players.is_empty() {
        return Ok(normalize_player_names(&args.players));
    }
    if let Some(names) = roster {
        return Ok(names.clone());
    }

    let names = console.prompt_player_names(
        "Enter player names separated by commas (leave blank for a single player): ",
    )?;
    *roster = Some(names.clone());
    Ok(names)
}

fn play_one<R: BufRead, W: Write, D: Write>(
    config: &GameConfig,
    names: Vec<String>,
    catalog: &TreasureCatalog,
    console: &mut ConsoleInput<R, W>,
    display: &mut ConsoleDisplay<D>,
) -> TreasureHuntResult<()> {
    let rng = treasure_hunt::generation::utils::create_rng(config);
    let mut game = TreasureHuntGame::new(config, names, catalog, rng)?;
    game.play(console, display)?;
    Ok(())
}
