// src/history/mod.rs
use std::io;
use thiserror::Error;

use crate::models::HistoryEntry;

pub mod export;
pub mod storage;

pub use export::EXPORT_FILE_NAME;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};

/// Key the history list is stored under.
pub const HISTORY_KEY: &str = "passwordHistory";
/// Number of entries kept; the oldest is dropped first.
pub const MAX_HISTORY_ENTRIES: usize = 10;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HistoryError>;

/// Most-recent-first ledger of generated passwords.
pub struct HistoryStore {
    store: Box<dyn KeyValueStore>,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Load the persisted history. An unreadable record starts an empty history.
    pub fn open(store: Box<dyn KeyValueStore>) -> Self {
        let entries = match store.get(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(mut entries) => {
                    entries.truncate(MAX_HISTORY_ENTRIES);
                    entries
                }
                Err(e) => {
                    log::warn!("Discarding unreadable password history: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to load password history: {}", e);
                Vec::new()
            }
        };

        log::debug!("Loaded {} history entries", entries.len());
        Self { store, entries }
    }

    pub fn in_memory() -> Self {
        Self::open(Box::new(MemoryStore::default()))
    }

    /// Prepend an entry, evicting the oldest past the limit.
    ///
    /// The in-memory list only changes once the new list has been persisted.
    pub fn append(&mut self, entry: HistoryEntry) -> Result<()> {
        let mut entries = Vec::with_capacity(MAX_HISTORY_ENTRIES + 1);
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        entries.truncate(MAX_HISTORY_ENTRIES);

        self.store.set(HISTORY_KEY, &serde_json::to_string(&entries)?)?;
        self.entries = entries;
        Ok(())
    }

    /// Entries, newest first.
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(HISTORY_KEY)?;
        self.entries.clear();
        log::info!("Password history cleared");
        Ok(())
    }

    /// CSV export of `list()`, UTF-8 encoded.
    pub fn export(&self) -> Vec<u8> {
        export::to_csv(&self.entries).into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tempfile::tempdir;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into())
        }
        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    #[test]
    fn eleventh_append_evicts_the_oldest() {
        let mut history = HistoryStore::in_memory();
        for i in 0..11 {
            history.append(HistoryEntry::new(format!("pw{i}"))).unwrap();
        }

        let passwords: Vec<&str> = history.list().iter().map(|e| e.password.as_str()).collect();
        assert_eq!(passwords.len(), 10);
        assert_eq!(passwords[0], "pw10");
        assert_eq!(passwords[9], "pw1");
        assert!(!passwords.contains(&"pw0"));
    }

    #[test]
    fn history_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut history = HistoryStore::open(Box::new(JsonFileStore::new(&path)));
        history.append(HistoryEntry::new("first")).unwrap();
        history.append(HistoryEntry::new("second")).unwrap();

        let reopened = HistoryStore::open(Box::new(JsonFileStore::new(&path)));
        assert_eq!(reopened.list().len(), 2);
        assert_eq!(reopened.list()[0].password, "second");
        assert_eq!(reopened.list()[0].timestamp, history.list()[0].timestamp);
    }

    #[test]
    fn timestamps_are_stored_as_iso_8601() {
        let mut kv = MemoryStore::default();
        let timestamp = Utc::now() - Duration::minutes(5);
        let entries = vec![HistoryEntry { password: "abc".into(), timestamp }];
        kv.set(HISTORY_KEY, &serde_json::to_string(&entries).unwrap()).unwrap();

        let raw = kv.get(HISTORY_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let stored = value[0]["timestamp"].as_str().unwrap();
        assert_eq!(
            chrono::DateTime::parse_from_rfc3339(stored).unwrap(),
            timestamp
        );

        let history = HistoryStore::open(Box::new(kv));
        assert_eq!(history.list(), entries.as_slice());
    }

    #[test]
    fn clear_empties_and_forgets_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut history = HistoryStore::open(Box::new(JsonFileStore::new(&path)));
        history.append(HistoryEntry::new("gone")).unwrap();
        history.clear().unwrap();

        assert!(history.list().is_empty());
        let reopened = HistoryStore::open(Box::new(JsonFileStore::new(&path)));
        assert!(reopened.list().is_empty());
    }

    #[test]
    fn unreadable_record_starts_empty() {
        let mut kv = MemoryStore::default();
        kv.set(HISTORY_KEY, "{broken").unwrap();
        assert!(HistoryStore::open(Box::new(kv)).list().is_empty());
    }

    #[test]
    fn failed_persist_leaves_history_unchanged() {
        let mut history = HistoryStore::open(Box::new(FailingStore));
        assert!(history.append(HistoryEntry::new("lost")).is_err());
        assert!(history.list().is_empty());
        assert!(history.clear().is_err());
    }

    #[test]
    fn export_follows_stored_order() {
        let mut history = HistoryStore::in_memory();
        history.append(HistoryEntry::new("older")).unwrap();
        history.append(HistoryEntry::new("newer")).unwrap();

        let csv = String::from_utf8(history.export()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Password,Generated");
        assert!(lines[1].starts_with("\"newer\""));
        assert!(lines[2].starts_with("\"older\""));
    }
}
