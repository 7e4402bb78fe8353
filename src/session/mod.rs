//! Shell Session
//!
//! A headless terminal session: bootstraps the filesystem, feeds submitted
//! lines to the dispatcher, and keeps the transcript, command history and
//! prompt directory a front end displays.

pub mod types;
pub mod history;
pub mod demo;
pub mod session;

pub use types::*;
pub use history::CommandHistory;
pub use demo::seed_demo_data;
pub use session::Session;
