//! `storefront-storage` — the synchronous byte store behind cart persistence.
//!
//! The cart treats durable storage as an opaque key-value store of bytes.
//! This crate provides the trait plus two backends: an in-memory map for
//! tests and a file-per-key store for real processes.

pub mod file;
pub mod kv;
pub mod memory;

pub use file::FileStore;
pub use kv::KeyValueStore;
pub use memory::MemoryStore;
