// src/commands/types.rs
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::fs::{FsError, VirtualFs};
use super::listeners::DirectoryListeners;

/// The filesystem as shared between the dispatcher, its commands and the session.
pub type SharedFs = Arc<Mutex<VirtualFs>>;

/// Failure raised by a command handler. The dispatcher renders it as
/// `Error: <message>`.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("{0}")]
    Failed(String),
}

/// What a handler produces: text for the session, or a failure.
pub type CommandOutput = Result<String, CommandError>;

/// Boxed handler future, for commands registered as closures.
pub type HandlerFuture = Pin<Box<dyn Future<Output = CommandOutput> + Send>>;

/// A closure-backed handler taking the positional arguments.
pub type HandlerFn = Arc<dyn Fn(Vec<String>) -> HandlerFuture + Send + Sync>;

/// Everything a command may touch while it runs.
pub struct CommandContext {
    pub args: Vec<String>,
    pub fs: SharedFs,
    pub listeners: Arc<DirectoryListeners>,
}

/// A named command the dispatcher can run.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &str;
    async fn execute(&self, ctx: CommandContext) -> CommandOutput;
}

/// Adapts a closure into a [`Command`].
pub struct FnCommand {
    name: String,
    handler: HandlerFn,
}

impl FnCommand {
    pub fn new<F, Fut>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Vec<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CommandOutput> + Send + 'static,
    {
        let handler: HandlerFn = Arc::new(move |args: Vec<String>| -> HandlerFuture {
            Box::pin(handler(args))
        });
        Self { name: name.into(), handler }
    }
}

#[async_trait]
impl Command for FnCommand {
    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(&self, ctx: CommandContext) -> CommandOutput {
        (self.handler)(ctx.args).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Build a context over `fs` with the given arguments.
    pub fn make_ctx(args: Vec<&str>, fs: VirtualFs) -> CommandContext {
        CommandContext {
            args: args.into_iter().map(String::from).collect(),
            fs: Arc::new(Mutex::new(fs)),
            listeners: Arc::new(DirectoryListeners::new()),
        }
    }
}
