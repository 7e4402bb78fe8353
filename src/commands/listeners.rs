// src/commands/listeners.rs
use std::sync::{Arc, PoisonError, RwLock};

/// Callback told the new working directory after a successful `cd`.
pub type DirectoryListener = Arc<dyn Fn(&str) + Send + Sync>;

/// Registry of directory-change listeners, invoked in registration order.
#[derive(Default)]
pub struct DirectoryListeners {
    listeners: RwLock<Vec<DirectoryListener>>,
}

impl DirectoryListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, listener: DirectoryListener) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    /// Call every listener registered so far. The list is copied before
    /// calling out, so a listener may register further listeners; those
    /// are first told about the next change.
    pub fn notify(&self, new_dir: &str) {
        let snapshot: Vec<DirectoryListener> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in snapshot {
            listener(new_dir);
        }
    }
}
