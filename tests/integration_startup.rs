//! Integration test to ensure a game can be set up and started without errors.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use treasure_hunt::{
    GameConfig, GamePhase, TreasureCatalog, TreasureHuntError, TreasureHuntGame,
    TreasureHuntResult,
};

#[test]
fn test_basic_startup() -> TreasureHuntResult<()> {
    let config = GameConfig::for_testing(12345);
    let catalog = TreasureCatalog::standard();
    let game = TreasureHuntGame::new(
        &config,
        vec!["Alice".to_string()],
        &catalog,
        StdRng::seed_from_u64(12345),
    )?;

    assert_eq!(game.players().len(), 1);
    assert!(!game.is_multiplayer());
    assert_eq!(game.phase(), GamePhase::AwaitingGuess { round: 0, player: 0 });
    assert_eq!(game.board().size(), 5);

    // Nothing is revealed before the first guess.
    assert!(!game.board().render().contains("[X]"));
    assert!(!game.board().render().contains("[O]"));

    Ok(())
}

#[test]
fn test_bundled_treasure_directory_loads() -> TreasureHuntResult<()> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("treasure");
    let catalog = TreasureCatalog::load_dir(dir)?;
    assert_eq!(catalog.len(), 7);
    assert!(catalog.items().any(|item| item.name == "Golden Crown" && item.value == 250));
    Ok(())
}

#[test]
fn test_default_player_when_none_registered() -> TreasureHuntResult<()> {
    let game = TreasureHuntGame::new(
        &GameConfig::new(3, 1),
        Vec::new(),
        &TreasureCatalog::standard(),
        StdRng::seed_from_u64(1),
    )?;
    assert_eq!(game.players().len(), 1);
    assert_eq!(game.players()[0].name(), "player");
    Ok(())
}

#[test]
fn test_setup_errors_stop_the_game() {
    let catalog = TreasureCatalog::standard();
    for config in [GameConfig::new(0, 3), GameConfig::new(27, 3), GameConfig::new(5, 0)] {
        let result = TreasureHuntGame::new(&config, Vec::new(), &catalog, StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(TreasureHuntError::InvalidConfig(_))));
    }
}

#[test]
fn test_same_seed_same_board() -> TreasureHuntResult<()> {
    let config = GameConfig::new(6, 2);
    let catalog = TreasureCatalog::standard();
    let first = TreasureHuntGame::new(&config, Vec::new(), &catalog, StdRng::seed_from_u64(77))?;
    let second = TreasureHuntGame::new(&config, Vec::new(), &catalog, StdRng::seed_from_u64(77))?;

    assert_eq!(first.board().render_revealed(), second.board().render_revealed());
    assert_eq!(first.board().monster_positions(), second.board().monster_positions());
    Ok(())
}
