//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! On non-wasm targets every adapter degrades to an inert fallback so the runtime and its tests
//! compile and run natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod download;
pub mod storage;
pub mod viewport;

pub use download::download_text_file;
pub use storage::local_storage::WebLocalStore;
pub use viewport::viewport_width;
