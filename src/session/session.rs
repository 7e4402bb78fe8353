//! Session
//!
//! Owns the shared filesystem and the dispatcher, and tracks what a
//! terminal front end needs to draw: transcript, prompt and input history.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use crate::commands::{Dispatcher, ImportCommand, SharedFs, CLEAR_SENTINEL};
use crate::fs::{PersistError, VirtualFs};
use crate::history::{HistorySource, MockHistorySource, PROJECTS_DIR};
use crate::storage::{MemoryStorage, Storage};

use super::demo::seed_demo_data;
use super::history::CommandHistory;
use super::types::{HistoryDirection, SessionOptions, Submission, TranscriptLine, WELCOME_LINES};

pub struct Session {
    dispatcher: Dispatcher,
    storage: Arc<dyn Storage>,
    storage_key: String,
    transcript: Vec<TranscriptLine>,
    history: CommandHistory,
    prompt_dir: Arc<RwLock<String>>,
}

impl Session {
    /// Build the filesystem, restore the saved snapshot (or seed the demo
    /// tree when that fails) and wire up the dispatcher.
    pub async fn start(options: SessionOptions) -> Self {
        let storage = options
            .storage
            .unwrap_or_else(|| Arc::new(MemoryStorage::new()));
        let source: Arc<dyn HistorySource> = options
            .history_source
            .unwrap_or_else(|| Arc::new(MockHistorySource));

        let mut fs = VirtualFs::new();
        if let Err(e) = fs.mkdir(PROJECTS_DIR) {
            warn!("Could not create {}: {}", PROJECTS_DIR, e);
        }

        if let Err(e) = fs.load_from_storage_as(storage.as_ref(), &options.storage_key).await {
            warn!("Failed to load file system, seeding demo data: {}", e);
            if let Err(e) = seed_demo_data(&mut fs) {
                warn!("Failed to seed demo data: {}", e);
            }
            if let Err(e) = fs.save_to_storage_as(storage.as_ref(), &options.storage_key).await {
                warn!("Failed to save file system: {}", e);
            }
        }

        let prompt_dir = Arc::new(RwLock::new(fs.pwd().to_string()));
        let mut dispatcher = Dispatcher::with_fs(fs);
        dispatcher.register_command(Box::new(ImportCommand::new(
            source,
            storage.clone(),
            options.storage_key.clone(),
        )));

        let tracked = prompt_dir.clone();
        dispatcher.on_directory_change(move |path| {
            *tracked.write().unwrap_or_else(PoisonError::into_inner) = path.to_string();
        });

        let transcript = if options.welcome {
            WELCOME_LINES
                .iter()
                .map(|line| TranscriptLine::Output(line.to_string()))
                .collect()
        } else {
            Vec::new()
        };

        info!(storage_key = %options.storage_key, "session started");
        Self {
            dispatcher,
            storage,
            storage_key: options.storage_key,
            transcript,
            history: CommandHistory::new(),
            prompt_dir,
        }
    }

    /// Echo `line` into the transcript, run it and record what it printed.
    pub async fn submit(&mut self, line: &str) -> Submission {
        self.transcript.push(TranscriptLine::Input(line.to_string()));
        self.history.push(line);
        if line.trim().is_empty() {
            return Submission::Empty;
        }

        let output = self.dispatcher.process_command(line).await;
        self.sync_prompt().await;

        if output == CLEAR_SENTINEL {
            self.transcript.clear();
            return Submission::Cleared;
        }
        self.transcript.push(TranscriptLine::Output(output.clone()));
        Submission::Output(output)
    }

    /// Recall an earlier line for the input box.
    pub fn navigate_history(&mut self, direction: HistoryDirection) -> String {
        self.history.navigate(direction)
    }

    /// Write the current tree to storage.
    pub async fn save(&self) -> Result<(), PersistError> {
        let fs = self.dispatcher.fs();
        let fs = fs.lock().await;
        fs.save_to_storage_as(self.storage.as_ref(), &self.storage_key).await
    }

    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Directory shown in the prompt.
    pub fn current_directory(&self) -> String {
        self.prompt_dir
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn prompt(&self) -> String {
        format!("{}$ ", self.current_directory())
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn fs(&self) -> SharedFs {
        self.dispatcher.fs()
    }

    /// Picks up directory changes that did not go through `cd`, such as
    /// removing the directory the session was in.
    async fn sync_prompt(&self) {
        let fs = self.dispatcher.fs();
        let cwd = fs.lock().await.pwd().to_string();
        let mut dir = self.prompt_dir.write().unwrap_or_else(PoisonError::into_inner);
        if *dir != cwd {
            *dir = cwd;
        }
    }
}
