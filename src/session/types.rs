//! Session types.

use std::sync::Arc;

use crate::fs::STORAGE_KEY;
use crate::history::HistorySource;
use crate::storage::Storage;

pub const WELCOME_LINES: [&str; 2] = [
    "Welcome to ChatGPT Terminal v1.0.0",
    "Type \"help\" to see available commands.",
];

/// Options for starting a session.
pub struct SessionOptions {
    /// Where the filesystem snapshot lives (defaults to MemoryStorage)
    pub storage: Option<Arc<dyn Storage>>,
    /// Key of the snapshot in `storage`
    pub storage_key: String,
    /// Source for the `import` command (defaults to MockHistorySource)
    pub history_source: Option<Arc<dyn HistorySource>>,
    /// Start the transcript with the welcome banner
    pub welcome: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            storage: None,
            storage_key: STORAGE_KEY.to_string(),
            history_source: None,
            welcome: true,
        }
    }
}

/// One entry of the displayed transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptLine {
    Input(String),
    Output(String),
}

/// What submitting a line did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank line, nothing ran
    Empty,
    /// The command asked for the transcript to be wiped
    Cleared,
    Output(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Up,
    Down,
}
