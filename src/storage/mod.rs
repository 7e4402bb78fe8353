//! Storage Module
//!
//! The external key/value store the filesystem snapshot is persisted to.
//! Supports multiple implementations:
//! - MemoryStorage: in-process map, lives as long as the value does
//! - FileStorage: one file per key under a directory

pub mod types;
pub mod memory;
pub mod file;

pub use types::*;
pub use memory::MemoryStorage;
pub use file::FileStorage;
