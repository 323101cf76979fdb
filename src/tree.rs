//! Source-tree discovery.
//!
//! Nodes live in an arena (a flat `Vec` indexed by `NodeId`) with the parent
//! stored as an index, so the whole tree drops in one piece and relative
//! paths can be rebuilt any number of times after traversal by walking the
//! parent chain. The traversal collects every regular-file node into a
//! growable leaf list; directories are kept only as ancestors for path
//! reconstruction.
//!
//! Depth convention: the source root is depth 0 and its immediate children
//! are depth 1. A `max_depth` of D collects files at depth <= D and never
//! descends past D; 0 means unlimited. Non-recursive runs are exactly depth
//! 1. Symlinks are never followed and never become leaves, which also caps
//! traversal against link loops.

use std::collections::HashMap;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::errors::RandcpError;

pub type NodeId = usize;

/// Regular-file nodes discovered by traversal, in directory order until
/// shuffled. Holds indices into the arena, not owned nodes.
pub type LeafSet = Vec<NodeId>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    RegularFile,
}

#[derive(Debug)]
pub struct Node {
    pub kind: NodeKind,
    /// Base name of the entry, not a full path.
    pub name: OsString,
    /// Arena index of the enclosing directory; `None` only for the root.
    pub parent: Option<NodeId>,
}

/// Arena of nodes. Index 0 is always the traversal root.
#[derive(Debug, Default)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn push(&mut self, kind: NodeKind, name: OsString, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node { kind, name, parent });
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Path of a node relative to the traversal root, rebuilt from the
    /// parent chain. The root node itself contributes no component.
    pub fn path_of(&self, id: NodeId) -> PathBuf {
        let mut parts: Vec<&OsString> = Vec::new();
        let mut cursor = Some(id);
        while let Some(i) = cursor {
            let node = &self.nodes[i];
            if node.parent.is_some() {
                parts.push(&node.name);
            }
            cursor = node.parent;
        }
        parts.iter().rev().collect()
    }
}

/// Walk `source` and build the node arena plus the leaf list.
///
/// Per-entry read failures are logged and skipped; a failure on the source
/// root itself aborts the run.
pub fn build(
    source: &Path,
    recursive: bool,
    max_depth: usize,
) -> Result<(Tree, LeafSet), RandcpError> {
    let effective_depth = if !recursive {
        1
    } else if max_depth == 0 {
        usize::MAX
    } else {
        max_depth
    };

    let mut tree = Tree::default();
    let root_name = source
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| source.as_os_str().to_os_string());
    let root = tree.push(NodeKind::Directory, root_name, None);

    // Maps already-built directory paths to their arena index so each entry
    // can find its parent node.
    let mut dirs: HashMap<PathBuf, NodeId> = HashMap::new();
    dirs.insert(source.to_path_buf(), root);

    let mut leaves = LeafSet::new();

    for entry in WalkDir::new(source)
        .follow_links(false)
        .max_depth(effective_depth)
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| source.to_path_buf());
                if e.depth() == 0 {
                    let source_err = e
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other("traversal error"));
                    return Err(RandcpError::SourceUnreadable {
                        path,
                        source: source_err,
                    });
                }
                warn!(path = %path.display(), error = %e, "Skipping unreadable entry");
                continue;
            }
        };

        if entry.depth() == 0 {
            // the root is already node 0
            continue;
        }

        let Some(parent) = entry.path().parent().and_then(|p| dirs.get(p).copied()) else {
            // parent directory errored out earlier; its subtree is skipped
            warn!(path = %entry.path().display(), "Entry has no tracked parent; skipping");
            continue;
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            let id = tree.push(
                NodeKind::Directory,
                entry.file_name().to_os_string(),
                Some(parent),
            );
            dirs.insert(entry.into_path(), id);
        } else if file_type.is_file() {
            let id = tree.push(
                NodeKind::RegularFile,
                entry.file_name().to_os_string(),
                Some(parent),
            );
            leaves.push(id);
        }
        // symlinks and special files are neither leaves nor descended into
    }

    debug!(
        nodes = tree.len(),
        leaves = leaves.len(),
        "Source tree built"
    );
    Ok((tree, leaves))
}
