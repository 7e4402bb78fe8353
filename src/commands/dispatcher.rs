// src/commands/dispatcher.rs
//! Command Dispatcher
//!
//! Splits a command line on whitespace, looks the first word up in the
//! registry and runs it against the shared filesystem. Every outcome is
//! text: unknown commands and handler failures never escape as errors.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::fs::VirtualFs;
use super::listeners::{DirectoryListener, DirectoryListeners};
use super::registry::{create_builtin_registry, CommandRegistry};
use super::types::{Command, CommandContext, CommandOutput, FnCommand, SharedFs};

pub struct Dispatcher {
    fs: SharedFs,
    registry: CommandRegistry,
    listeners: Arc<DirectoryListeners>,
}

impl Dispatcher {
    /// Create a dispatcher with the built-in commands over `fs`.
    pub fn new(fs: SharedFs) -> Self {
        Self {
            fs,
            registry: create_builtin_registry(),
            listeners: Arc::new(DirectoryListeners::new()),
        }
    }

    /// Convenience for wrapping an owned filesystem.
    pub fn with_fs(fs: VirtualFs) -> Self {
        Self::new(Arc::new(Mutex::new(fs)))
    }

    pub fn fs(&self) -> SharedFs {
        self.fs.clone()
    }

    /// Run one command line and return what should be displayed.
    pub async fn process_command(&self, line: &str) -> String {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return String::new();
        };
        let args: Vec<String> = words.map(String::from).collect();

        let Some(command) = self.registry.get(name) else {
            return format!("Command not found: {}. Type 'help' for available commands.", name);
        };

        debug!(command = name, ?args, "dispatch");
        let ctx = CommandContext {
            args,
            fs: self.fs.clone(),
            listeners: self.listeners.clone(),
        };
        match command.execute(ctx).await {
            Ok(output) => output,
            Err(e) => format!("Error: {}", e),
        }
    }

    /// Add a command, replacing any existing one with the same name.
    pub fn register_command(&mut self, command: Box<dyn Command>) {
        self.registry.register(command);
    }

    /// Add a closure-backed command, replacing any existing one with the same name.
    pub fn register_fn<F, Fut>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(Vec<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CommandOutput> + Send + 'static,
    {
        self.registry.register(Box::new(FnCommand::new(name, handler)));
    }

    /// Be told the new working directory after every successful `cd`.
    pub fn on_directory_change<F>(&self, listener: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let listener: DirectoryListener = Arc::new(listener);
        self.listeners.register(listener);
    }

    /// Names of every registered command, sorted.
    pub fn command_names(&self) -> Vec<&str> {
        self.registry.names()
    }
}
