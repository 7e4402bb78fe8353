//! History Import
//!
//! The remote conversation history the `import` command pulls from, and
//! the mapping of those records onto the filesystem.

pub mod types;
pub mod mock;
pub mod import;

pub use types::*;
pub use mock::MockHistorySource;
pub use import::{conversation_path, import_history, PROJECTS_DIR, UNSORTED_PROJECT};
