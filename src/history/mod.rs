// src/history/mod.rs
use std::sync::Arc;

use thiserror::Error;

use crate::models::{GeneratedPassword, HistoryEntry};
use crate::storage::{KvStore, StorageError};

pub const HISTORY_KEY: &str = "passwordHistory";

/// Most-recent entries kept; oldest are evicted first.
pub const MAX_ENTRIES: usize = 100;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HistoryError>;

/// Append-capped ordered log of generated passwords, newest first.
///
/// Appends are in-memory only and set a dirty flag; `flush` persists the
/// whole list at most once per call. Callers flush once per request so
/// rapid bulk appends coalesce into a single write.
pub struct HistoryStore {
    store: Arc<dyn KvStore>,
    entries: Vec<HistoryEntry>,
    dirty: bool,
}

impl HistoryStore {
    pub fn load(store: Arc<dyn KvStore>) -> Self {
        let entries = match store.get(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!("Discarding unreadable password history: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Could not read password history: {}", e);
                Vec::new()
            }
        };

        Self {
            store,
            entries,
            dirty: false,
        }
    }

    /// Record a password at the front of the history. A consecutive
    /// duplicate of the newest entry is skipped.
    pub fn record(&mut self, password: &GeneratedPassword) {
        if self
            .entries
            .first()
            .map_or(false, |entry| entry.password == password.text)
        {
            return;
        }

        self.entries.insert(0, HistoryEntry::new(password));
        self.entries.truncate(MAX_ENTRIES);
        self.dirty = true;
    }

    pub fn recent(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.dirty = true;
    }

    /// Persist pending changes, if any.
    pub fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        let encoded = serde_json::to_string(&self.entries)?;
        self.store.set(HISTORY_KEY, &encoded)?;
        self.dirty = false;
        Ok(())
    }
}
