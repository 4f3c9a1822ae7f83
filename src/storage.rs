//! # Storage Module
//!
//! Durable key/value storage behind the [`KeyValueStore`] trait. The
//! application persists whole JSON blobs under short keys; backends do not
//! interpret the values. Two implementations ship: one JSON file per key on
//! disk, and an in-memory map for tests and ephemeral runs.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Errors raised by storage backends
#[derive(Debug)]
pub enum StorageError {
    /// Underlying IO or lock failures
    Io(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "Storage IO error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

/// Durable string storage keyed by name
pub trait KeyValueStore {
    /// Read the value stored under a key; `None` when never written
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the value stored under a key, replacing any previous value
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// [`KeyValueStore`] keeping one `<key>.json` file per key under a directory.
///
/// The directory is created on first write; reading a key that was never
/// written yields `None`.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::from(err)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory [`KeyValueStore`] for tests and ephemeral runs.
///
/// Clones share the same map, so a test can keep a handle to the store it
/// handed to the application and inspect what was written.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|err| StorageError::Io(err.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| StorageError::Io(err.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
