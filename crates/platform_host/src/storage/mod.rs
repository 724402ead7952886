//! Storage contracts and in-process adapters.

pub mod local;
