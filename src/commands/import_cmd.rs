use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::commands::{Command, CommandContext, CommandOutput};
use crate::history::{import_history, HistorySource};
use crate::storage::Storage;

/// Reply shown when the history source or the save step fails.
pub const IMPORT_FAILED: &str =
    "Failed to import history. Make sure you're logged into ChatGPT and the extension has permissions.";

/// Pulls conversations from a history source into `/projects` and saves.
pub struct ImportCommand {
    source: Arc<dyn HistorySource>,
    storage: Arc<dyn Storage>,
    storage_key: String,
}

impl ImportCommand {
    pub fn new(source: Arc<dyn HistorySource>, storage: Arc<dyn Storage>, storage_key: impl Into<String>) -> Self {
        Self { source, storage, storage_key: storage_key.into() }
    }
}

#[async_trait]
impl Command for ImportCommand {
    fn name(&self) -> &str {
        "import"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandOutput {
        let records = match self.source.fetch_history().await {
            Ok(records) => records,
            Err(e) => {
                error!("Failed to import history: {}", e);
                return Ok(IMPORT_FAILED.to_string());
            }
        };

        let mut fs = ctx.fs.lock().await;
        match import_history(&mut fs, &records, self.storage.as_ref(), &self.storage_key).await {
            Ok(count) => Ok(format!("Imported {} conversations", count)),
            Err(e) => {
                error!("Failed to import history: {}", e);
                Ok(IMPORT_FAILED.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::make_ctx;
    use crate::fs::{VirtualFs, STORAGE_KEY};
    use crate::history::{HistoryError, MockHistorySource};
    use crate::conversation::Conversation;
    use crate::storage::MemoryStorage;

    struct OfflineSource;

    #[async_trait]
    impl HistorySource for OfflineSource {
        async fn fetch_history(&self) -> Result<Vec<Conversation>, HistoryError> {
            Err(HistoryError::Unavailable("not logged in".to_string()))
        }
    }

    fn fs_with_projects() -> VirtualFs {
        let mut fs = VirtualFs::new();
        fs.mkdir("/projects").unwrap();
        fs
    }

    #[tokio::test]
    async fn test_import_mock_history() {
        let storage = Arc::new(MemoryStorage::new());
        let cmd = ImportCommand::new(Arc::new(MockHistorySource), storage.clone(), STORAGE_KEY);
        let ctx = make_ctx(vec![], fs_with_projects());
        let fs = ctx.fs.clone();

        assert_eq!(cmd.execute(ctx).await.unwrap(), "Imported 3 conversations");
        let fs = fs.lock().await;
        assert!(fs.exists("/projects/web-development/React Component Design.chat"));
        assert!(fs.exists("/projects/ai-research/GPT-4 Capabilities.chat"));
        assert!(storage.get_item(STORAGE_KEY).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_import_source_failure() {
        let storage = Arc::new(MemoryStorage::new());
        let cmd = ImportCommand::new(Arc::new(OfflineSource), storage.clone(), STORAGE_KEY);
        let ctx = make_ctx(vec![], fs_with_projects());
        let fs = ctx.fs.clone();

        assert_eq!(cmd.execute(ctx).await.unwrap(), IMPORT_FAILED);
        assert!(fs.lock().await.ls(Some("/projects")).unwrap().is_empty());
        assert!(storage.get_item(STORAGE_KEY).await.unwrap().is_none());
    }
}
