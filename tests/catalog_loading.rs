//! Integration tests for loading treasure items from disk.

use std::fs;
use tempfile::TempDir;
use treasure_hunt::{TreasureCatalog, TreasureHuntError, TreasureHuntResult, TreasureItem};

fn write(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).unwrap();
}

#[test]
fn test_load_one_item_per_file() -> TreasureHuntResult<()> {
    let dir = TempDir::new()?;
    write(&dir, "b_ruby.json", r#"{"name": "Ruby", "value": 50}"#);
    write(&dir, "a_coin.json", r#"{"name": "Gold Coin", "value": 1}"#);

    let catalog = TreasureCatalog::load_dir(dir.path())?;
    let items: Vec<TreasureItem> = catalog.items().cloned().collect();
    // File-name order.
    assert_eq!(
        items,
        vec![TreasureItem::new("Gold Coin", 1), TreasureItem::new("Ruby", 50)]
    );
    Ok(())
}

#[test]
fn test_bad_records_are_skipped() -> TreasureHuntResult<()> {
    let dir = TempDir::new()?;
    write(&dir, "good.json", r#"{"name": "Ruby", "value": 50}"#);
    write(&dir, "broken.json", r#"{"name": "Ruby", "value": "#);
    write(&dir, "negative.json", r#"{"name": "Debt", "value": -10}"#);
    write(&dir, "mixed.json", r#"[{"name": "Emerald", "value": 75}, {"name": 3}]"#);
    write(&dir, "notes.txt", "not an item file");

    let catalog = TreasureCatalog::load_dir(dir.path())?;
    assert_eq!(catalog.len(), 2);
    assert!(catalog.items().any(|item| item.name == "Emerald"));
    Ok(())
}

#[test]
fn test_directory_without_valid_items_is_fatal() -> TreasureHuntResult<()> {
    let dir = TempDir::new()?;
    write(&dir, "broken.json", "[]");

    let result = TreasureCatalog::load_dir(dir.path());
    assert!(matches!(result, Err(TreasureHuntError::EmptyCatalog(_))));
    Ok(())
}

#[test]
fn test_missing_directory_is_an_io_error() {
    let result = TreasureCatalog::load_dir("/definitely/not/a/treasure/dir");
    assert!(matches!(result, Err(TreasureHuntError::Io(_))));
}
