//! chat-term - A simulated terminal over chat conversations
//!
//! Conversations live as `.chat` files in an in-memory file system that is
//! persisted as a single JSON snapshot. A small command set (`ls`, `cd`,
//! `cat`, `open`, `find`, `import`, ...) is dispatched over it.

pub mod commands;
pub mod conversation;
pub mod fs;
pub mod history;
pub mod session;
pub mod storage;
pub mod style;

pub use commands::{Dispatcher, CLEAR_SENTINEL};
pub use fs::{FsError, VirtualFs};
pub use session::{Session, SessionOptions};
