//! Entry store - the in-memory database of configured entries.

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

use crate::entry::{Entry, EntryId, EntryKind};

/// Errors raised while building or loading the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate entry id: {0}")]
    DuplicateId(EntryId),

    #[error("invalid JSON page: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML page: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Snapshot query over the current entry configuration.
///
/// Implementations must return entries in a deterministic, stable order
/// for a fixed configuration; the engine's tie-breaking relies on it.
pub trait EntryQuery {
    fn entries_of(&self, kind: EntryKind) -> Vec<Entry>;
}

/// A page of authored entries, as deserialized from JSON or TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub entries: Vec<Entry>,
}

/// Insertion-ordered store of all configured entries.
///
/// The store owns the entries; the engine only ever reads from it.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
    by_id: HashMap<EntryId, usize>,
}

impl EntryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, rejecting duplicate IDs.
    pub fn insert(&mut self, entry: Entry) -> Result<(), StoreError> {
        if self.by_id.contains_key(&entry.id) {
            return Err(StoreError::DuplicateId(entry.id));
        }
        self.by_id.insert(entry.id.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Remove an entry by ID.
    pub fn remove(&mut self, id: &EntryId) -> Option<Entry> {
        let index = self.by_id.remove(id)?;
        let entry = self.entries.remove(index);
        for slot in self.by_id.values_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        Some(entry)
    }

    /// Get an entry by ID.
    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.by_id.get(id).map(|&index| &self.entries[index])
    }

    /// Load a JSON page of entries. Returns the number of entries added.
    pub fn load_json(&mut self, page: &str) -> Result<usize, StoreError> {
        let page: Page = serde_json::from_str(page)?;
        self.load_page(page)
    }

    /// Load a TOML page of entries. Returns the number of entries added.
    pub fn load_toml(&mut self, page: &str) -> Result<usize, StoreError> {
        let page: Page = toml::from_str(page)?;
        self.load_page(page)
    }

    fn load_page(&mut self, page: Page) -> Result<usize, StoreError> {
        let count = page.entries.len();
        for entry in page.entries {
            self.insert(entry)?;
        }
        Ok(count)
    }

    /// Iterate all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntryQuery for EntryStore {
    fn entries_of(&self, kind: EntryKind) -> Vec<Entry> {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .cloned()
            .collect()
    }
}
