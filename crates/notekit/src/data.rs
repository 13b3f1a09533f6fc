//! # Plugin data persistence
//!
//! ## Overview
//!
//! Hosts own the mechanics of storing plugin data, while plugins own the
//! shape of what they store. The [DataStore] trait is the byte-level
//! contract between the two: opaque blobs in and out, keyed by plugin
//! identifier.
//!
//! A plugin that has never saved anything loads as `Ok(None)` rather than an
//! error, so that first runs need no special handling. Actual faults are
//! returned to the caller untouched, and the caller decides what to do about
//! them.
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::errors::DataError;

/// Load and save per-plugin data blobs.
pub trait DataStore {
    /// Load the bytes last saved for a plugin, or `None` if the plugin has
    /// never saved anything.
    fn load(&self, plugin: &str) -> Result<Option<Vec<u8>>, DataError>;

    /// Save a plugin's data, replacing whatever was stored before.
    fn save(&mut self, plugin: &str, data: &[u8]) -> Result<(), DataError>;
}

/// A [DataStore] kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemDataStore {
    blobs: HashMap<String, Vec<u8>>,
    saves: usize,
}

impl MemDataStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        MemDataStore::default()
    }

    /// The number of times [DataStore::save] has been called on this store.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for MemDataStore {
    fn load(&self, plugin: &str) -> Result<Option<Vec<u8>>, DataError> {
        Ok(self.blobs.get(plugin).cloned())
    }

    fn save(&mut self, plugin: &str, data: &[u8]) -> Result<(), DataError> {
        self.blobs.insert(plugin.to_string(), data.to_vec());
        self.saves += 1;

        return Ok(());
    }
}

/// A [DataStore] that keeps one JSON file per plugin under a directory.
#[derive(Debug)]
pub struct DiskDataStore {
    dir: PathBuf,
}

impl DiskDataStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is created on the first save, not here.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        DiskDataStore { dir: dir.into() }
    }

    /// Create a store under the user's configuration directory for the named
    /// host application.
    pub fn for_host(host: &str) -> Result<Self, DataError> {
        let dir = dirs::config_dir().ok_or(DataError::NoDataDirectory)?;

        Ok(DiskDataStore::new(dir.join(host).join("plugins")))
    }

    fn plugin_path(&self, plugin: &str) -> PathBuf {
        self.dir.join(format!("{plugin}.json"))
    }
}

impl DataStore for DiskDataStore {
    fn load(&self, plugin: &str) -> Result<Option<Vec<u8>>, DataError> {
        match fs::read(self.plugin_path(plugin)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, plugin: &str, data: &[u8]) -> Result<(), DataError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.plugin_path(plugin), data)?;

        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_dir::TempDir;

    #[test]
    fn test_mem_store_roundtrip() {
        let mut store = MemDataStore::new();

        assert_eq!(store.load("sample").unwrap(), None);
        assert_eq!(store.save_count(), 0);

        store.save("sample", b"{}").unwrap();
        assert_eq!(store.load("sample").unwrap(), Some(b"{}".to_vec()));
        assert_eq!(store.save_count(), 1);

        // Saving again replaces the blob and bumps the counter.
        store.save("sample", b"{\"a\":1}").unwrap();
        assert_eq!(store.load("sample").unwrap(), Some(b"{\"a\":1}".to_vec()));
        assert_eq!(store.save_count(), 2);

        // Other plugins are unaffected.
        assert_eq!(store.load("other").unwrap(), None);
    }

    #[test]
    fn test_disk_store_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let mut store = DiskDataStore::new(tmp.path());

        assert_eq!(store.load("sample").unwrap(), None);

        store.save("sample", b"{\"mySetting\":\"custom\"}").unwrap();
        assert_eq!(
            store.load("sample").unwrap(),
            Some(b"{\"mySetting\":\"custom\"}".to_vec())
        );

        // One file per plugin identifier.
        assert!(tmp.path().join("sample.json").is_file());
        assert_eq!(store.load("other").unwrap(), None);
    }

    #[test]
    fn test_disk_store_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("app").join("plugins");
        let mut store = DiskDataStore::new(&nested);

        // Loading from a directory that does not exist yet is not an error.
        assert_eq!(store.load("sample").unwrap(), None);

        store.save("sample", b"{}").unwrap();
        assert!(nested.join("sample.json").is_file());
    }
}
