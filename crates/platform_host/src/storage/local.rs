//! Local key-value storage contract and in-memory adapters.
//!
//! The contract mirrors a browser `localStorage` surface: string keys, string values, and
//! synchronous access that may fail (quota exhaustion, disabled storage, privacy modes).

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors surfaced by [`LocalStore`] implementations and typed helpers.
pub enum StorageError {
    /// The backing store is not reachable on this host (no window, storage disabled).
    #[error("local storage unavailable")]
    Unavailable,
    /// The backing store rejected the operation (for example, quota exceeded).
    #[error("local storage {operation} failed: {message}")]
    Backend {
        /// Operation that failed (`get`, `set`, or `remove`).
        operation: &'static str,
        /// Host-provided failure description.
        message: String,
    },
    /// A stored value could not be encoded or decoded as JSON.
    #[error("stored value for `{key}` is not valid JSON: {message}")]
    Encoding {
        /// Key whose value failed to encode or decode.
        key: String,
        /// Serializer failure description.
        message: String,
    },
}

/// Host service for small string values keyed by string.
pub trait LocalStore {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key` if present.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store rejects the delete.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op store for unsupported targets and baseline tests.
pub struct NoopLocalStore;

impl LocalStore for NoopLocalStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store keyed by string. Clones share the same map.
pub struct MemoryLocalStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryLocalStore {
    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns `true` when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl LocalStore for MemoryLocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a typed JSON value through a [`LocalStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store read or JSON deserialization fails.
pub fn load_typed_with<S: LocalStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get_item(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| StorageError::Encoding {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    Ok(Some(value))
}

/// Serializes and saves a typed JSON value through a [`LocalStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_typed_with<S: LocalStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Encoding {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.set_item(key, &raw)
}
