//! Virtual File System Implementation
//!
//! A single in-memory tree rooted at `/` plus a current-directory cursor.
//! All operations are synchronous; persistence lives in `persist.rs`.

use tracing::debug;

use super::types::*;

/// In-memory hierarchical file system with a working directory.
#[derive(Debug, Clone)]
pub struct VirtualFs {
    pub(super) root: Node,
    pub(super) cwd: String,
}

impl VirtualFs {
    /// Create a filesystem containing only the root directory.
    pub fn new() -> Self {
        Self {
            root: Node::directory("/"),
            cwd: "/".to_string(),
        }
    }

    /// The root directory node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Absolute path of the current directory.
    pub fn pwd(&self) -> &str {
        &self.cwd
    }

    /// Change the current directory, returning the new absolute path.
    pub fn cd(&mut self, path: &str) -> Result<String, FsError> {
        let target = self.resolve_path(path);
        match self.node_at(&target) {
            None => Err(FsError::NotFound {
                target: LookupTarget::Directory,
                path: path.to_string(),
            }),
            Some(node) if !node.is_directory() => Err(FsError::NotADirectory {
                path: path.to_string(),
            }),
            Some(_) => {
                debug!(from = %self.cwd, to = %target, "cd");
                self.cwd = target.clone();
                Ok(target)
            }
        }
    }

    /// List the immediate children of a directory (the current one if `path` is absent).
    pub fn ls(&self, path: Option<&str>) -> Result<Vec<DirEntry>, FsError> {
        let target = match path {
            Some(p) if !p.is_empty() => self.resolve_path(p),
            _ => self.cwd.clone(),
        };
        let node = self.node_at(&target).ok_or_else(|| FsError::NotFound {
            target: LookupTarget::Directory,
            path: target.clone(),
        })?;
        let children = node.children().ok_or_else(|| FsError::NotADirectory {
            path: target.clone(),
        })?;

        Ok(children
            .iter()
            .map(|(name, child)| DirEntry {
                name: name.clone(),
                node_type: child.node_type(),
            })
            .collect())
    }

    /// Create an empty directory. The parent must already exist.
    pub fn mkdir(&mut self, path: &str) -> Result<(), FsError> {
        let (parent, name) = self.parent_and_name(path, NodeType::Directory)?;
        let children = self.children_of_parent(&parent)?;

        if children.contains_key(&name) {
            return Err(FsError::AlreadyExists { path: path.to_string() });
        }

        debug!(parent = %parent, name = %name, "mkdir");
        children.insert(name.clone(), Node::directory(name));
        Ok(())
    }

    /// Remove a file or directory. Non-empty directories need `recursive`.
    pub fn rm(&mut self, path: &str, recursive: bool) -> Result<(), FsError> {
        let target = self.resolve_path(path);
        if target == "/" {
            return Err(FsError::Forbidden);
        }

        let (parent, name) = split_parent(&target);
        let not_found = || FsError::NotFound {
            target: LookupTarget::Entry,
            path: path.to_string(),
        };
        let children = self
            .node_at_mut(&parent)
            .and_then(Node::children_mut)
            .ok_or_else(not_found)?;
        let node = children.get(name).ok_or_else(not_found)?;

        if !recursive && node.children().is_some_and(|c| !c.is_empty()) {
            return Err(FsError::DirectoryNotEmpty { path: path.to_string() });
        }

        debug!(path = %target, recursive, "rm");
        children.remove(name);
        self.repair_cwd();
        Ok(())
    }

    /// Create or replace a file.
    ///
    /// Whatever node already has this name is replaced, including a
    /// directory together with its whole subtree.
    pub fn write_file(&mut self, path: &str, content: impl Into<String>) -> Result<(), FsError> {
        let (parent, name) = self.parent_and_name(path, NodeType::File)?;
        let children = self.children_of_parent(&parent)?;

        let replaced = children.insert(name.clone(), Node::file(name.clone(), content));
        if replaced.as_ref().is_some_and(Node::is_directory) {
            debug!(parent = %parent, name = %name, "write_file replaced a directory");
            self.repair_cwd();
        }
        Ok(())
    }

    /// Read a file's content.
    pub fn read_file(&self, path: &str) -> Result<String, FsError> {
        let target = self.resolve_path(path);
        match self.node_at(&target) {
            None => Err(FsError::NotFound {
                target: LookupTarget::File,
                path: path.to_string(),
            }),
            Some(node) => node
                .content()
                .map(str::to_string)
                .ok_or_else(|| FsError::NotAFile { path: path.to_string() }),
        }
    }

    /// Whether any node exists at `path`.
    pub fn exists(&self, path: &str) -> bool {
        self.node_at(&self.resolve_path(path)).is_some()
    }

    /// Resolve `path` against the current directory into a normalized absolute path.
    pub fn resolve_path(&self, path: &str) -> String {
        if path.starts_with('/') {
            normalize_path(path)
        } else {
            normalize_path(&format!("{}/{}", self.cwd, path))
        }
    }

    fn node_at(&self, normalized: &str) -> Option<&Node> {
        let mut current = &self.root;
        for segment in segments(normalized) {
            current = current.children()?.get(segment)?;
        }
        Some(current)
    }

    fn node_at_mut(&mut self, normalized: &str) -> Option<&mut Node> {
        let mut current = &mut self.root;
        for segment in segments(normalized) {
            current = current.children_mut()?.get_mut(segment)?;
        }
        Some(current)
    }

    fn parent_and_name(&self, path: &str, node_type: NodeType) -> Result<(String, String), FsError> {
        let target = self.resolve_path(path);
        let (parent, name) = split_parent(&target);
        if name.is_empty() {
            return Err(FsError::InvalidName { node_type });
        }
        Ok((parent, name.to_string()))
    }

    fn children_of_parent(
        &mut self,
        parent: &str,
    ) -> Result<&mut std::collections::BTreeMap<String, Node>, FsError> {
        let node = self.node_at_mut(parent).ok_or_else(|| FsError::NotFound {
            target: LookupTarget::ParentDirectory,
            path: parent.to_string(),
        })?;
        node.children_mut().ok_or_else(|| FsError::NotADirectory {
            path: parent.to_string(),
        })
    }

    /// Walk the cursor up until it names an existing directory again.
    pub(super) fn repair_cwd(&mut self) {
        while !self.node_at(&self.cwd).is_some_and(Node::is_directory) {
            let (parent, _) = split_parent(&self.cwd);
            debug!(from = %self.cwd, to = %parent, "working directory no longer exists");
            self.cwd = parent;
        }
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Path utilities
// ============================================================================

/// Lexically normalize a path: drop empty and `.` segments, apply `..`
/// (never above root) and rejoin as an absolute path.
pub fn normalize_path(path: &str) -> String {
    let mut resolved: Vec<&str> = Vec::new();
    for part in path.split('/').filter(|p| !p.is_empty()) {
        match part {
            "." => {}
            ".." => {
                resolved.pop();
            }
            _ => resolved.push(part),
        }
    }
    format!("/{}", resolved.join("/"))
}

fn segments(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split('/').filter(|p| !p.is_empty())
}

/// Split a normalized path into its parent path and final segment.
/// Root splits into `("/", "")`.
fn split_parent(normalized: &str) -> (String, &str) {
    match normalized.rfind('/') {
        Some(0) | None => ("/".to_string(), normalized.trim_start_matches('/')),
        Some(pos) => (normalized[..pos].to_string(), &normalized[pos + 1..]),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fs_with_tree() -> VirtualFs {
        let mut fs = VirtualFs::new();
        fs.mkdir("/projects").unwrap();
        fs.mkdir("/projects/web").unwrap();
        fs.write_file("/projects/web/next.chat", "{}").unwrap();
        fs.write_file("/notes.txt", "hello").unwrap();
        fs
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/foo/bar"), "/foo/bar");
        assert_eq!(normalize_path("/foo/bar/"), "/foo/bar");
        assert_eq!(normalize_path("//foo///bar"), "/foo/bar");
        assert_eq!(normalize_path("/a/b/../c/./"), "/a/c");
        assert_eq!(normalize_path("/../.."), "/");
        assert_eq!(normalize_path("/a/../../b"), "/b");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for path in ["/", "/a", "/a/b/c", "/x/./y/../z"] {
            let once = normalize_path(path);
            assert_eq!(normalize_path(&once), once);
        }
    }

    #[test]
    fn test_split_parent() {
        assert_eq!(split_parent("/"), ("/".to_string(), ""));
        assert_eq!(split_parent("/foo"), ("/".to_string(), "foo"));
        assert_eq!(split_parent("/foo/bar"), ("/foo".to_string(), "bar"));
    }

    #[test]
    fn test_cd_and_pwd() {
        let mut fs = fs_with_tree();
        assert_eq!(fs.pwd(), "/");
        assert_eq!(fs.cd("/projects/./web/").unwrap(), "/projects/web");
        assert_eq!(fs.pwd(), "/projects/web");
        assert_eq!(fs.cd("..").unwrap(), "/projects");
        assert_eq!(fs.cd("../../..").unwrap(), "/");
        assert_eq!(fs.cd("projects/web").unwrap(), "/projects/web");
    }

    #[test]
    fn test_cd_errors() {
        let mut fs = fs_with_tree();
        assert_eq!(
            fs.cd("/missing"),
            Err(FsError::NotFound { target: LookupTarget::Directory, path: "/missing".to_string() })
        );
        assert_eq!(
            fs.cd("notes.txt"),
            Err(FsError::NotADirectory { path: "notes.txt".to_string() })
        );
        assert_eq!(fs.pwd(), "/");
    }

    #[test]
    fn test_ls() {
        let mut fs = fs_with_tree();
        let root = fs.ls(None).unwrap();
        let names: Vec<&str> = root.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["notes.txt", "projects"]);
        assert!(root[1].is_directory());

        fs.cd("/projects").unwrap();
        let web = fs.ls(Some("web")).unwrap();
        assert_eq!(web, vec![DirEntry { name: "next.chat".to_string(), node_type: NodeType::File }]);
        assert_eq!(fs.ls(Some("")).unwrap().len(), 1);
    }

    #[test]
    fn test_ls_errors() {
        let fs = fs_with_tree();
        assert!(matches!(fs.ls(Some("/nope")), Err(FsError::NotFound { .. })));
        assert_eq!(
            fs.ls(Some("notes.txt")),
            Err(FsError::NotADirectory { path: "/notes.txt".to_string() })
        );
    }

    #[test]
    fn test_mkdir_relative_to_cwd() {
        let mut fs = fs_with_tree();
        fs.cd("/projects").unwrap();
        fs.mkdir("ai").unwrap();
        assert!(fs.exists("/projects/ai"));
        assert!(!fs.exists("/ai"));
    }

    #[test]
    fn test_mkdir_errors() {
        let mut fs = fs_with_tree();
        assert_eq!(fs.mkdir("/"), Err(FsError::InvalidName { node_type: NodeType::Directory }));
        assert_eq!(
            fs.mkdir("/a/b"),
            Err(FsError::NotFound { target: LookupTarget::ParentDirectory, path: "/a".to_string() })
        );
        assert_eq!(
            fs.mkdir("/notes.txt/sub"),
            Err(FsError::NotADirectory { path: "/notes.txt".to_string() })
        );
        assert_eq!(
            fs.mkdir("/projects"),
            Err(FsError::AlreadyExists { path: "/projects".to_string() })
        );
    }

    #[test]
    fn test_mkdir_then_rm() {
        let mut fs = VirtualFs::new();
        fs.mkdir("/tmp").unwrap();
        assert!(fs.exists("/tmp"));
        fs.rm("/tmp", false).unwrap();
        assert!(!fs.exists("/tmp"));
    }

    #[test]
    fn test_rm_non_empty_directory() {
        let mut fs = fs_with_tree();
        assert_eq!(
            fs.rm("/projects", false),
            Err(FsError::DirectoryNotEmpty { path: "/projects".to_string() })
        );
        fs.rm("/projects", true).unwrap();
        assert!(!fs.exists("/projects"));
        assert!(!fs.exists("/projects/web/next.chat"));
    }

    #[test]
    fn test_rm_errors() {
        let mut fs = fs_with_tree();
        assert_eq!(fs.rm("/", true), Err(FsError::Forbidden));
        assert_eq!(fs.rm("/projects/..", true), Err(FsError::Forbidden));
        assert_eq!(
            fs.rm("ghost", false),
            Err(FsError::NotFound { target: LookupTarget::Entry, path: "ghost".to_string() })
        );
        assert!(matches!(fs.rm("/notes.txt/x", false), Err(FsError::NotFound { .. })));
    }

    #[test]
    fn test_rm_moves_cwd_out_of_removed_subtree() {
        let mut fs = fs_with_tree();
        fs.cd("/projects/web").unwrap();
        fs.rm("/projects", true).unwrap();
        assert_eq!(fs.pwd(), "/");
    }

    #[test]
    fn test_write_and_read_file() {
        let mut fs = VirtualFs::new();
        fs.write_file("/a.txt", "line one\nline two").unwrap();
        assert_eq!(fs.read_file("/a.txt").unwrap(), "line one\nline two");
        fs.write_file("/a.txt", "replaced").unwrap();
        assert_eq!(fs.read_file("a.txt").unwrap(), "replaced");
        fs.write_file("/empty", "").unwrap();
        assert_eq!(fs.read_file("/empty").unwrap(), "");
    }

    #[test]
    fn test_write_file_errors() {
        let mut fs = fs_with_tree();
        assert_eq!(fs.write_file("/", "x"), Err(FsError::InvalidName { node_type: NodeType::File }));
        assert!(matches!(fs.write_file("/none/a.txt", "x"), Err(FsError::NotFound { .. })));
        assert!(matches!(fs.write_file("/notes.txt/a", "x"), Err(FsError::NotADirectory { .. })));
    }

    #[test]
    fn test_write_file_replaces_same_named_directory() {
        let mut fs = fs_with_tree();
        fs.cd("/projects/web").unwrap();
        fs.write_file("/projects", "now a file").unwrap();
        assert_eq!(fs.read_file("/projects").unwrap(), "now a file");
        assert!(!fs.exists("/projects/web"));
        assert_eq!(fs.pwd(), "/");
    }

    #[test]
    fn test_read_file_errors() {
        let fs = fs_with_tree();
        assert_eq!(
            fs.read_file("/x"),
            Err(FsError::NotFound { target: LookupTarget::File, path: "/x".to_string() })
        );
        assert_eq!(
            fs.read_file("/projects"),
            Err(FsError::NotAFile { path: "/projects".to_string() })
        );
    }

    #[test]
    fn test_exists() {
        let fs = fs_with_tree();
        assert!(fs.exists("/"));
        assert!(fs.exists("projects/web/../web/next.chat"));
        assert!(!fs.exists("/notes.txt/sub"));
        assert!(!fs.exists("/nothing"));
    }
}
