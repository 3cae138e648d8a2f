//! Persistence for Huecraft
//!
//! A small key-value layer over sled. Records are JSON-encoded, and a
//! versioned envelope is available for values where stale writers must
//! not clobber newer records.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;

pub use kv::{KvConfig, KvStore, StorageError};
