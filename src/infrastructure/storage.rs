// SPDX-License-Identifier: MPL-2.0
//! Key-value storage adapters.
//!
//! [`FileStore`] is the native stand-in for browser local storage: each key
//! maps to one file under the data directory, overwritten wholesale on
//! every write. [`MemoryStore`] keeps everything in a map and can be told
//! to reject reads or writes.

use crate::app::paths;
use crate::application::port::{KeyValueStore, StorageError};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Extension of the per-key files.
const ITEM_EXTENSION: &str = "json";

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a store in the resolved data directory.
    ///
    /// See [`paths::get_app_data_dir`] for the resolution order.
    #[must_use]
    pub fn in_data_dir() -> Option<Self> {
        paths::get_app_data_dir().map(Self::new)
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn item_path(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file_stem}.{ITEM_EXTENSION}"))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.item_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.item_path(key), value)?;
        Ok(())
    }
}

/// In-memory storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    reject_reads: bool,
    reject_writes: bool,
    write_count: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with one item.
    #[must_use]
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.items.insert(key.to_string(), value.to_string());
        store
    }

    /// Makes every subsequent read fail, as a disabled storage would.
    pub fn reject_reads(&mut self, reject: bool) {
        self.reject_reads = reject;
    }

    /// Makes every subsequent write fail, as a full or disabled storage would.
    pub fn reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Raw stored value for `key`.
    #[must_use]
    pub fn item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.reject_reads {
            return Err(StorageError::Unavailable("reads are rejected".to_string()));
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Unavailable("writes are rejected".to_string()));
        }
        self.items.insert(key.to_string(), value.to_string());
        self.write_count += 1;
        Ok(())
    }
}
