//! Snapshot persistence for `VirtualFs`.
//!
//! The whole tree is written as one JSON document under a single key.
//! Loading replaces the tree wholesale or not at all.

use tracing::{debug, info};

use super::types::*;
use super::virtual_fs::VirtualFs;
use crate::storage::Storage;

/// Default key the snapshot is stored under.
pub const STORAGE_KEY: &str = "chatgpt-terminal-fs";

impl VirtualFs {
    /// Serialize the tree to its persisted JSON form.
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string(&self.root)?)
    }

    /// Replace the tree with one parsed from `json`.
    ///
    /// On error the current tree is left untouched.
    pub fn restore_json(&mut self, json: &str) -> Result<(), PersistError> {
        let root: Node = serde_json::from_str(json)?;
        self.replace_root(root)
    }

    /// Replace the whole tree. The root must be a directory; it is renamed to `/`.
    pub fn replace_root(&mut self, mut root: Node) -> Result<(), PersistError> {
        if !root.is_directory() {
            return Err(PersistError::InvalidRoot);
        }
        root.name = "/".to_string();
        self.root = root;
        self.repair_cwd();
        Ok(())
    }

    /// Save the tree under [`STORAGE_KEY`].
    pub async fn save_to_storage(&self, storage: &dyn Storage) -> Result<(), PersistError> {
        self.save_to_storage_as(storage, STORAGE_KEY).await
    }

    /// Load the tree from [`STORAGE_KEY`]. Nothing stored leaves the tree as is.
    pub async fn load_from_storage(&mut self, storage: &dyn Storage) -> Result<(), PersistError> {
        self.load_from_storage_as(storage, STORAGE_KEY).await
    }

    pub async fn save_to_storage_as(&self, storage: &dyn Storage, key: &str) -> Result<(), PersistError> {
        let json = self.to_json()?;
        storage.set_item(key, &json).await?;
        debug!(key, bytes = json.len(), "saved filesystem snapshot");
        Ok(())
    }

    pub async fn load_from_storage_as(&mut self, storage: &dyn Storage, key: &str) -> Result<(), PersistError> {
        match storage.get_item(key).await? {
            Some(json) => {
                self.restore_json(&json)?;
                info!(key, "loaded filesystem snapshot");
            }
            None => debug!(key, "no saved filesystem snapshot"),
        }
        Ok(())
    }
}
