//! Catalog store - the single source of truth for the menu list

use std::sync::Arc;

use shared::MenuEntry;

use crate::error::{ClientError, ClientResult};

/// Current catalog snapshot
///
/// Replaced wholesale on every successful refresh, never edited in place.
/// Readers holding an older [`CatalogStore::snapshot`] keep seeing the entries
/// they were given.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    entries: Arc<[MenuEntry]>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::from(Vec::<MenuEntry>::new()),
        }
    }

    /// Swap the current catalog for `entries`
    pub fn replace(&mut self, entries: Vec<MenuEntry>) {
        self.entries = Arc::from(entries);
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn at(&self, position: usize) -> ClientResult<&MenuEntry> {
        self.entries
            .get(position)
            .ok_or(ClientError::IndexOutOfRange {
                index: position,
                size: self.entries.len(),
            })
    }

    /// Shared handle to the current sequence
    pub fn snapshot(&self) -> Arc<[MenuEntry]> {
        Arc::clone(&self.entries)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
