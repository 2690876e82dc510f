//! Key-value storage backends.
//!
//! The persistence adapter only needs `load(key)` and `save(key, value)`.
//! `MemoryStorage` backs tests and embedders that bring their own medium;
//! `FileStorage` keeps one file per key in a directory.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::StorageError;

/// Minimal durable key-value surface.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
struct MemoryState {
    values: HashMap<String, String>,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

/// In-memory storage.
///
/// Clones share the same underlying map, so a test can keep a handle while
/// the service owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .state
            .borrow_mut()
            .values
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// The raw stored value, bypassing failure simulation.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.state.borrow().values.get(key).cloned()
    }

    /// Number of successful saves so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }

    /// Make subsequent loads fail.
    pub fn fail_reads(&self, fail: bool) {
        self.state.borrow_mut().fail_reads = fail;
    }

    /// Make subsequent saves fail.
    pub fn fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }
}

impl KeyValueStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let state = self.state.borrow();
        if state.fail_reads {
            return Err(StorageError::Unavailable("reads disabled".into()));
        }
        Ok(state.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(StorageError::Unavailable("writes disabled".into()));
        }
        state.values.insert(key.to_string(), value.to_string());
        state.writes += 1;
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
///
/// Writes go to a sibling temp file and are renamed into place, so a crash
/// mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Point at `dir`. The directory is created on first save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidKey` unless the key is non-empty ASCII
    /// alphanumerics, `-`, `_` or `.` and does not start with `.`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}
