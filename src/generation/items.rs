//! # Treasure Items
//!
//! Treasure item definitions and the catalog they are drawn from.
//!
//! Item definitions live in JSON files, one record per file or an array of
//! records per file. A bad record is logged and skipped; the catalog only
//! fails when nothing at all could be loaded.

use crate::{TreasureHuntError, TreasureHuntResult};
use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A kind of treasure and its worth in gold coins.
///
/// Two items are the same item when both name and value match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreasureItem {
    pub name: String,
    pub value: u64,
}

impl TreasureItem {
    /// Creates a new treasure item.
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// The set of treasure items a board can be filled with.
///
/// Items are shared with the board and players through `Rc`, so a single
/// definition backs every cell and inventory slot that holds it.
#[derive(Debug, Clone)]
pub struct TreasureCatalog {
    items: Vec<Rc<TreasureItem>>,
}

impl TreasureCatalog {
    /// Builds a catalog from in-memory items.
    ///
    /// # Examples
    ///
    /// ```
    /// use treasure_hunt::{TreasureCatalog, TreasureItem};
    ///
    /// let catalog = TreasureCatalog::from_items(vec![TreasureItem::new("Ruby", 50)]).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// assert!(TreasureCatalog::from_items(Vec::new()).is_err());
    /// ```
    pub fn from_items(items: Vec<TreasureItem>) -> TreasureHuntResult<Self> {
        if items.is_empty() {
            return Err(TreasureHuntError::EmptyCatalog(
                "no treasure items were supplied".to_string(),
            ));
        }

        Ok(Self {
            items: items.into_iter().map(Rc::new).collect(),
        })
    }

    /// The built-in item set used when no item directory is given.
    pub fn standard() -> Self {
        let items = [
            ("Gold Coin", 1),
            ("Silver Chalice", 15),
            ("Pearl Necklace", 25),
            ("Ruby", 50),
            ("Emerald", 75),
            ("Diamond", 100),
            ("Golden Crown", 250),
        ];

        Self {
            items: items
                .into_iter()
                .map(|(name, value)| Rc::new(TreasureItem::new(name, value)))
                .collect(),
        }
    }

    /// Loads every `*.json` file in `dir`, in file-name order.
    ///
    /// Unreadable files and malformed records are logged and skipped.
    pub fn load_dir(dir: impl AsRef<Path>) -> TreasureHuntResult<Self> {
        let dir = dir.as_ref();
        let mut files: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|ext| ext == "json")
            })
            .collect();
        files.sort();

        let mut items = Vec::new();
        for file in &files {
            match fs::read_to_string(file) {
                Ok(contents) => items.extend(parse_records(&contents, file)),
                Err(e) => warn!("Skipping unreadable treasure file {}: {}", file.display(), e),
            }
        }

        debug!(
            "Loaded {} treasure items from {} files in {}",
            items.len(),
            files.len(),
            dir.display()
        );

        if items.is_empty() {
            return Err(TreasureHuntError::EmptyCatalog(format!(
                "no valid treasure items found in {}",
                dir.display()
            )));
        }

        Self::from_items(items)
    }

    /// Returns a uniformly random item from the catalog.
    pub fn random_item<R: Rng + ?Sized>(&self, rng: &mut R) -> Rc<TreasureItem> {
        // Construction guarantees at least one item.
        let index = rng.gen_range(0..self.items.len());
        Rc::clone(&self.items[index])
    }

    /// All items in load order.
    pub fn items(&self) -> impl Iterator<Item = &TreasureItem> {
        self.items.iter().map(|item| item.as_ref())
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed catalog; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Parses the records in one item file, skipping the ones that are invalid.
fn parse_records(contents: &str, source: &Path) -> Vec<TreasureItem> {
    let document: serde_json::Value = match serde_json::from_str(contents) {
        Ok(value) => value,
        Err(e) => {
            warn!("Skipping malformed treasure file {}: {}", source.display(), e);
            return Vec::new();
        }
    };

    let records = match document {
        serde_json::Value::Array(records) => records,
        record => vec![record],
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match parse_record(record) {
            Ok(item) => Some(item),
            Err(reason) => {
                warn!(
                    "Skipping treasure record {} in {}: {}",
                    index,
                    source.display(),
                    reason
                );
                None
            }
        })
        .collect()
}

fn parse_record(record: serde_json::Value) -> TreasureHuntResult<TreasureItem> {
    let item: TreasureItem = serde_json::from_value(record)?;
    if item.name.trim().is_empty() {
        return Err(TreasureHuntError::InvalidConfig(
            "treasure name is empty".to_string(),
        ));
    }
    Ok(item)
}
