//! Conversation Files
//!
//! Chat transcripts stored in the filesystem as JSON documents under the
//! reserved `.chat` extension, and the two ways the shell renders them.

pub mod types;
pub mod render;

pub use types::*;
