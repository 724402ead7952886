//! Shared contract types between the desktop window manager runtime and managed apps.
//!
//! The runtime hands each mounted app an [`AppServices`] bundle. Persistence goes through
//! [`BestEffortStore`], which applies the shell-wide storage policy: a read or write failure is
//! logged and swallowed, and the app keeps its in-memory state as the source of truth for the
//! rest of the session.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{fmt, rc::Rc};

use leptos::logging;
use platform_host::{load_typed_with, save_typed_with, LocalStore, NoopLocalStore};
use serde::{de::DeserializeOwned, Serialize};

/// Stable identifier for a runtime-managed window, as seen by apps.
pub type WindowRuntimeId = u64;

/// Local store wrapper that never surfaces storage failures to its caller.
#[derive(Clone)]
pub struct BestEffortStore {
    inner: Rc<dyn LocalStore>,
}

impl fmt::Debug for BestEffortStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BestEffortStore").finish_non_exhaustive()
    }
}

impl Default for BestEffortStore {
    fn default() -> Self {
        Self::new(Rc::new(NoopLocalStore))
    }
}

impl BestEffortStore {
    /// Wraps a host store.
    pub fn new(inner: Rc<dyn LocalStore>) -> Self {
        Self { inner }
    }

    /// Reads a raw string value, returning `None` on absence or failure.
    pub fn load_string(&self, key: &str) -> Option<String> {
        match self.inner.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                logging::warn!("storage read for `{key}` failed: {err}");
                None
            }
        }
    }

    /// Writes a raw string value. Returns whether the write reached the store.
    pub fn save_string(&self, key: &str, value: &str) -> bool {
        match self.inner.set_item(key, value) {
            Ok(()) => true,
            Err(err) => {
                logging::warn!("storage write for `{key}` failed: {err}");
                false
            }
        }
    }

    /// Reads and decodes a JSON value, returning `None` on absence, failure, or bad payload.
    pub fn load_typed<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match load_typed_with::<dyn LocalStore, T>(self.inner.as_ref(), key) {
            Ok(value) => value,
            Err(err) => {
                logging::warn!("storage typed read for `{key}` failed: {err}");
                None
            }
        }
    }

    /// Encodes and writes a JSON value. Returns whether the write reached the store.
    pub fn save_typed<T: Serialize>(&self, key: &str, value: &T) -> bool {
        match save_typed_with::<dyn LocalStore, T>(self.inner.as_ref(), key, value) {
            Ok(()) => true,
            Err(err) => {
                logging::warn!("storage typed write for `{key}` failed: {err}");
                false
            }
        }
    }
}

/// Services injected into an app when the runtime mounts it into a window.
#[derive(Debug, Clone, Default)]
pub struct AppServices {
    /// Window hosting the app.
    pub window_id: WindowRuntimeId,
    /// Best-effort persistence for app content.
    pub storage: BestEffortStore,
}

impl AppServices {
    /// Creates a service bundle for `window_id`.
    pub fn new(window_id: WindowRuntimeId, storage: BestEffortStore) -> Self {
        Self { window_id, storage }
    }
}
