//! Whole-object persistence for `DeckCollection`.
//!
//! The collection is always encoded and written as one blob, so a reader
//! sees either the previous save or the new one.

use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::error::StoreError;

use super::collection::DeckCollection;
use super::validation::DeckValidator;

/// Key the collection is stored under.
pub const NAMESPACE: &str = "harmony-drift.decks.v1";

/// Somewhere a `DeckCollection` survives restarts.
pub trait DeckStore {
    /// The saved collection, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<DeckCollection>, StoreError>;

    fn save(&self, decks: &DeckCollection) -> Result<(), StoreError>;
}

/// Load the saved collection, falling back to a fresh one.
///
/// Unreadable or undecodable saves are logged and replaced by defaults.
/// A decoded collection is repaired against `validator` before use.
pub fn load_or_default(store: &dyn DeckStore, validator: &DeckValidator<'_>) -> DeckCollection {
    match store.load() {
        Ok(Some(mut decks)) => {
            let dropped = decks.repair(validator);
            if !dropped.is_empty() {
                warn!(dropped = dropped.len(), "saved deck collection held invalid decks");
            }
            decks
        }
        Ok(None) => DeckCollection::new(),
        Err(err) => {
            warn!(error = %err, "failed to load deck collection, using defaults");
            DeckCollection::new()
        }
    }
}

fn encode(decks: &DeckCollection) -> Result<Vec<u8>, StoreError> {
    Ok(bincode::serialize(decks)?)
}

fn decode(bytes: &[u8]) -> Result<DeckCollection, StoreError> {
    Ok(bincode::deserialize(bytes)?)
}

/// In-process key/value store.
#[derive(Debug, Default)]
pub struct MemoryDeckStore {
    entries: RefCell<FxHashMap<String, Vec<u8>>>,
}

impl MemoryDeckStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw bytes under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.borrow().get(key).cloned()
    }

    /// Overwrite the bytes under `key`.
    pub fn put_raw(&self, key: &str, bytes: Vec<u8>) {
        self.entries.borrow_mut().insert(key.to_string(), bytes);
    }
}

impl DeckStore for MemoryDeckStore {
    fn load(&self) -> Result<Option<DeckCollection>, StoreError> {
        self.entries
            .borrow()
            .get(NAMESPACE)
            .map(|bytes| decode(bytes))
            .transpose()
    }

    fn save(&self, decks: &DeckCollection) -> Result<(), StoreError> {
        let bytes = encode(decks)?;
        self.put_raw(NAMESPACE, bytes);
        Ok(())
    }
}

/// Single-file store. Saves go to a sibling temp file and are renamed
/// over the target.
#[derive(Clone, Debug)]
pub struct FileDeckStore {
    path: PathBuf,
}

impl FileDeckStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/harmony-drift.decks.v1.bin`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{NAMESPACE}.bin")))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl DeckStore for FileDeckStore {
    fn load(&self) -> Result<Option<DeckCollection>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };
        decode(&bytes).map(Some)
    }

    fn save(&self, decks: &DeckCollection) -> Result<(), StoreError> {
        let bytes = encode(decks)?;
        let temp = self.temp_path();

        let mut file = fs::File::create(&temp).map_err(|e| self.io_error(e))?;
        file.write_all(&bytes).map_err(|e| self.io_error(e))?;
        file.sync_all().map_err(|e| self.io_error(e))?;
        drop(file);

        fs::rename(&temp, &self.path).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "deck collection saved");
        Ok(())
    }
}
