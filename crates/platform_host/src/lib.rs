//! Typed host-domain contracts shared by the desktop runtime, its apps, and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the local key-value
//! store contract used by app persistence plus time helpers, while concrete browser adapters
//! live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;
pub mod time;

pub use storage::local::{
    load_typed_with, save_typed_with, LocalStore, MemoryLocalStore, NoopLocalStore, StorageError,
};
pub use time::{date_stamp, date_stamp_now, unix_time_ms_now};
