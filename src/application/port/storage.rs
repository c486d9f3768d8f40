// SPDX-License-Identifier: MPL-2.0
//! Durable key-value storage port.
//!
//! Mirrors the browser's local storage: string keys, string values,
//! whole-value overwrites.

use std::fmt;

/// Errors reported by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backend cannot be reached or refused the write (quota, disabled).
    Unavailable(String),

    /// Reading or writing the underlying medium failed.
    Io(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "storage unavailable: {msg}"),
            StorageError::Io(msg) => write!(f, "storage I/O error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

/// String-keyed durable storage.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
