//! Flat-file entry store.
//!
//! Picks are persisted as a single pretty-printed JSON array. Every
//! operation re-reads the whole backing file and rewrites it; a missing or
//! corrupt file reads as an empty list rather than an error. Ids are dense
//! and contiguous: the id of an entry is always its index in the array, and
//! deletion renumbers everything behind the removed slot.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;

#[cfg(test)]
mod tests;

/// A recorded prop pick.
///
/// All pick fields arrive from the client verbatim and are stored without
/// validation; unknown fields in the request body are dropped. `id` is
/// assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent_team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pick: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
}

/// JSON-file backed list of entries.
///
/// Mutations serialize on an in-process mutex; the file itself carries no
/// cross-process lock, so concurrent processes race and the last writer
/// wins.
pub struct EntryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl EntryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// All entries in index order.
    pub fn list(&self) -> Vec<Entry> {
        self.load()
    }

    /// Replace the entry at `entry.id` when that id is a valid index,
    /// otherwise append with a freshly assigned `id = count`. Returns the
    /// full list after the mutation.
    pub fn upsert(&self, mut entry: Entry) -> Result<Vec<Entry>> {
        let _guard = self.write_lock.lock().unwrap();
        let mut entries = self.load();

        match entry.id {
            Some(id) if id < entries.len() => {
                entries[id] = entry;
            }
            _ => {
                entry.id = Some(entries.len());
                entries.push(entry);
            }
        }

        self.save(&entries)?;
        Ok(entries)
    }

    /// Remove the entry at `id` and renumber every later entry down by one.
    /// An out-of-range id leaves the store untouched. Returns the full list
    /// after the mutation.
    pub fn delete(&self, id: usize) -> Result<Vec<Entry>> {
        let _guard = self.write_lock.lock().unwrap();
        let mut entries = self.load();

        if id < entries.len() {
            entries.remove(id);
            for (index, entry) in entries.iter_mut().enumerate() {
                entry.id = Some(index);
            }
            self.save(&entries)?;
        }

        Ok(entries)
    }

    fn load(&self) -> Vec<Entry> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "entries file unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}
