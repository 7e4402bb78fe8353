//! File System Module
//!
//! The virtual file system conversations are stored in: a tree of
//! directories and text files with a working-directory cursor, plus
//! whole-tree snapshots to a `Storage` backend.

pub mod types;
pub mod virtual_fs;
pub mod persist;

pub use types::*;
pub use virtual_fs::{normalize_path, VirtualFs};
pub use persist::STORAGE_KEY;
