//! Tree building, depth/visibility policies, and layout computation.

pub mod layout;
pub(crate) mod walk;

use crate::error::TraversalError;
use std::path::{Path, PathBuf};

pub use layout::{flatten, Row};
pub use walk::{build_tree, is_hidden};

/// Kind of filesystem entry a node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// One entry in the built tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Display name (filename component only).
    pub name: String,
    pub kind: NodeKind,
    /// Ordered children. Always empty for files.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory,
            children: Vec::new(),
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            children: Vec::new(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }
}

/// The built tree. The root itself is not a node; only its descendants are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirTree {
    /// Root path the walk started from.
    pub root: PathBuf,
    /// The root's immediate children.
    pub children: Vec<TreeNode>,
}

impl DirTree {
    /// Total number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.children.iter().map(TreeNode::count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Configuration for tree building.
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    /// Maximum depth to include; `0` means unlimited.
    pub max_depth: usize,
    /// Whether to include entries whose name starts with `.`.
    pub show_hidden: bool,
    /// Whether to follow symbolic links during traversal.
    pub follow_symlinks: bool,
}

/// Abstraction over tree construction so it can be swapped or mocked.
pub trait TreeBuilder {
    fn build_tree(&self, root: &Path, config: &TreeConfig) -> Result<DirTree, TraversalError>;
}

/// Default `TreeBuilder` that delegates to the walkdir-based implementation.
pub struct WalkdirTreeBuilder;

impl TreeBuilder for WalkdirTreeBuilder {
    fn build_tree(&self, root: &Path, config: &TreeConfig) -> Result<DirTree, TraversalError> {
        build_tree(root, config)
    }
}
