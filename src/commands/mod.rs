// src/commands/mod.rs
pub mod cat;
pub mod cd;
pub mod clear_cmd;
pub mod dispatcher;
pub mod echo;
pub mod find;
pub mod help_cmd;
pub mod import_cmd;
pub mod listeners;
pub mod ls;
pub mod mkdir;
pub mod open;
pub mod pwd;
pub mod registry;
pub mod rm;
pub mod touch;
pub mod types;

pub use clear_cmd::CLEAR_SENTINEL;
pub use dispatcher::Dispatcher;
pub use import_cmd::ImportCommand;
pub use listeners::{DirectoryListener, DirectoryListeners};
pub use registry::CommandRegistry;
pub use types::{Command, CommandContext, CommandError, CommandOutput, FnCommand, SharedFs};
