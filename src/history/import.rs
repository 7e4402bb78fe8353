//! Mapping fetched conversations onto `/projects`.

use tracing::{debug, info};

use crate::conversation::{Conversation, CHAT_EXTENSION};
use crate::fs::VirtualFs;
use super::types::ImportError;
use crate::storage::Storage;

pub const PROJECTS_DIR: &str = "/projects";

/// Project bucket for conversations that have none.
pub const UNSORTED_PROJECT: &str = "unsorted";

/// Turn a label into a single path segment. `/` is replaced, and labels
/// that would name the directory itself or its parent are rejected.
fn path_segment(label: Option<&str>) -> Option<String> {
    let segment = label?.replace('/', "-");
    match segment.as_str() {
        "" | "." | ".." => None,
        _ => Some(segment),
    }
}

/// Where the `index`-th fetched conversation is stored.
///
/// A project that is missing or not usable as a directory name goes to
/// [`UNSORTED_PROJECT`]; a title that is unusable becomes `chat-<index>`.
pub fn conversation_path(conversation: &Conversation, index: usize) -> (String, String) {
    let project = path_segment(conversation.project.as_deref())
        .unwrap_or_else(|| UNSORTED_PROJECT.to_string());
    let dir = format!("{}/{}", PROJECTS_DIR, project);

    let stem = path_segment(conversation.title()).unwrap_or_else(|| format!("chat-{}", index));
    let file = format!("{}/{}{}", dir, stem, CHAT_EXTENSION);
    (dir, file)
}

/// Write every conversation into the tree, then save the tree.
///
/// Directories are created as needed and existing files with the same
/// name are overwritten. Returns how many conversations were written.
pub async fn import_history(
    fs: &mut VirtualFs,
    conversations: &[Conversation],
    storage: &dyn Storage,
    storage_key: &str,
) -> Result<usize, ImportError> {
    if !fs.exists(PROJECTS_DIR) {
        fs.mkdir(PROJECTS_DIR)?;
    }

    for (index, conversation) in conversations.iter().enumerate() {
        let (dir, file) = conversation_path(conversation, index);
        if !fs.exists(&dir) {
            fs.mkdir(&dir)?;
        }
        fs.write_file(&file, conversation.to_json()?)?;
        debug!(path = %file, "imported conversation");
    }

    fs.save_to_storage_as(storage, storage_key).await?;
    info!(count = conversations.len(), "imported conversation history");
    Ok(conversations.len())
}
