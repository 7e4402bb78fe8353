//! History source types.

use async_trait::async_trait;
use thiserror::Error;

use crate::conversation::Conversation;
use crate::fs::{FsError, PersistError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("history unavailable: {0}")]
    Unavailable(String),
}

/// Failures while writing fetched conversations into the tree.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("cannot encode conversation: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Somewhere past conversations can be fetched from.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Fetch every conversation, oldest first.
    async fn fetch_history(&self) -> Result<Vec<Conversation>, HistoryError>;
}
