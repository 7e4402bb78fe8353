//! File System Types
//!
//! Core types for the virtual file system: the node tree, directory
//! listings and the error taxonomy.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::storage::StorageError;

/// What a failed lookup was looking for. Only affects the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTarget {
    Directory,
    ParentDirectory,
    File,
    Entry,
}

impl LookupTarget {
    fn label(self) -> &'static str {
        match self {
            LookupTarget::Directory => "Directory",
            LookupTarget::ParentDirectory => "Parent directory",
            LookupTarget::File => "File",
            LookupTarget::Entry => "File or directory",
        }
    }
}

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("{} not found: {path}", .target.label())]
    NotFound { target: LookupTarget, path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Not a file: {path}")]
    NotAFile { path: String },

    #[error("Directory already exists: {path}")]
    AlreadyExists { path: String },

    #[error("Directory not empty: {path}. Use -r flag to remove recursively.")]
    DirectoryNotEmpty { path: String },

    #[error("Invalid {node_type} name")]
    InvalidName { node_type: NodeType },

    #[error("Cannot remove root directory")]
    Forbidden,
}

/// Failures while saving or restoring the tree.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("corrupt filesystem snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupt filesystem snapshot: root is not a directory")]
    InvalidRoot,
}

/// Kind of a node, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    File,
    Directory,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::File => write!(f, "file"),
            NodeType::Directory => write!(f, "directory"),
        }
    }
}

/// Payload of a node. Serialized inline with a `"type"` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    File {
        #[serde(default)]
        content: String,
    },
    Directory {
        #[serde(default)]
        children: BTreeMap<String, Node>,
    },
}

/// A file or directory in the tree. Directories own their children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    #[serde(flatten)]
    pub kind: NodeKind,
    /// Opaque to the filesystem, carried through persistence untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl Node {
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File { content: content.into() },
            metadata: None,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory { children: BTreeMap::new() },
            metadata: None,
        }
    }

    pub fn node_type(&self) -> NodeType {
        match self.kind {
            NodeKind::File { .. } => NodeType::File,
            NodeKind::Directory { .. } => NodeType::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut BTreeMap<String, Node>> {
        match &mut self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }
}

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub node_type: NodeType,
}

impl DirEntry {
    pub fn is_directory(&self) -> bool {
        self.node_type == NodeType::Directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FsError::NotFound { target: LookupTarget::ParentDirectory, path: "/a".to_string() };
        assert_eq!(err.to_string(), "Parent directory not found: /a");

        let err = FsError::InvalidName { node_type: NodeType::Directory };
        assert_eq!(err.to_string(), "Invalid directory name");

        let err = FsError::DirectoryNotEmpty { path: "docs".to_string() };
        assert_eq!(err.to_string(), "Directory not empty: docs. Use -r flag to remove recursively.");
    }

    #[test]
    fn test_node_serialization_layout() {
        let mut dir = Node::directory("/");
        dir.children_mut()
            .unwrap()
            .insert("a.txt".to_string(), Node::file("a.txt", "hi"));

        let value = serde_json::to_value(&dir).unwrap();
        assert_eq!(value["type"], "directory");
        assert_eq!(value["children"]["a.txt"]["type"], "file");
        assert_eq!(value["children"]["a.txt"]["content"], "hi");
        assert!(value.get("metadata").is_none());
    }

    #[test]
    fn test_node_deserialize_defaults_and_metadata() {
        let json = r#"{
            "name": "/",
            "type": "directory",
            "children": {
                "empty": {"name": "empty", "type": "file"},
                "sub": {"name": "sub", "type": "directory", "metadata": {"starred": true}}
            }
        }"#;
        let root: Node = serde_json::from_str(json).unwrap();
        let children = root.children().unwrap();
        assert_eq!(children["empty"].content(), Some(""));
        assert!(children["sub"].children().unwrap().is_empty());
        assert_eq!(children["sub"].metadata.as_ref().unwrap()["starred"], Value::Bool(true));
    }
}
