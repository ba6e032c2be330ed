//! Key-value persistence for model blobs.
//!
//! The engine treats persistence as an opaque string store: one value per
//! key, read once at load, rewritten whole on mutation. Hosts that already
//! have their own storage implement [`PersistenceStore`] directly.

use std::collections::HashMap;
use std::path::PathBuf;

/// Errors raised by a persistence backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("persistence write failed")]
    Write(#[from] std::io::Error),
}

/// Opaque blob storage. `get` returns the last value written for `key`,
/// `put` replaces it atomically.
pub trait PersistenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and hosts with external persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one file per key under a directory.
///
/// Writes go through a temp file followed by a rename, so each flush is an
/// atomic snapshot and a reader never observes a torn value.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.txt"))
    }
}

impl PersistenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.file_for(key)).ok()
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let tmp = self.dir.join(format!("{key}.txt.tmp"));
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, self.file_for(key))?;
        Ok(())
    }
}

/// Convenience for hosts holding the store behind a box.
impl PersistenceStore for Box<dyn PersistenceStore> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).put(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.get("words").is_none());
        store.put("words", "hello\nworld").unwrap();
        assert_eq!(store.get("words").unwrap(), "hello\nworld");
    }

    #[test]
    fn test_memory_store_overwrite() {
        let mut store = MemoryStore::new();
        store.put("k", "a").unwrap();
        store.put("k", "b").unwrap();
        assert_eq!(store.get("k").unwrap(), "b");
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.put("user_words", "one\ntwo").unwrap();

        // A fresh store over the same directory sees the value
        let reopened = FileStore::new(dir.path());
        assert_eq!(reopened.get("user_words").unwrap(), "one\ntwo");
    }

    #[test]
    fn test_file_store_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.get("absent").is_none());
    }

    #[test]
    fn test_file_store_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.put("k", "v").unwrap();
        store.put("k", "v2").unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["k.txt".to_string()]);
    }
}
