use std::path::Path;
use tracing::{debug, trace};
use walkdir::WalkDir;

use super::{DirTree, NodeKind, TreeConfig, TreeNode};
use crate::error::TraversalError;

/// Leading character that marks an entry as hidden.
const HIDDEN_MARKER: char = '.';

/// Outcome of visiting a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Visit {
    /// Entry recorded; a directory's contents are walked next.
    Descend,
    /// Entry omitted; a directory's contents are never read.
    Prune,
}

/// Whether a base name denotes a hidden entry.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_MARKER)
}

/// Insertion points of a walk in progress.
///
/// `top` receives depth-1 entries. `open[d - 1]` is the directory at depth `d`
/// that receives entries at depth `d + 1`. A directory is attached to its own
/// parent when the walk leaves it, which keeps siblings in visit order.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    top: Vec<TreeNode>,
    open: Vec<TreeNode>,
}

impl Frontier {
    /// Apply the depth and visibility policies to one entry and record it.
    ///
    /// Depth is checked first: an entry beyond `max_depth` is pruned whatever
    /// its name.
    pub(crate) fn visit(
        &mut self,
        depth: usize,
        name: &str,
        kind: NodeKind,
        config: &TreeConfig,
    ) -> Visit {
        if config.max_depth > 0 && depth > config.max_depth {
            trace!(name, depth, "pruned: beyond max depth");
            return Visit::Prune;
        }
        if !config.show_hidden && is_hidden(name) {
            trace!(name, depth, "pruned: hidden");
            return Visit::Prune;
        }

        let node = match kind {
            NodeKind::Directory => TreeNode::directory(name),
            NodeKind::File => TreeNode::file(name),
        };
        self.attach(depth, node);
        Visit::Descend
    }

    fn attach(&mut self, depth: usize, node: TreeNode) {
        self.close_to(depth - 1);
        assert_eq!(
            self.open.len(),
            depth - 1,
            "entry {:?} at depth {depth} has no parent in the frontier",
            node.name
        );

        if node.is_dir() {
            self.open.push(node);
        } else {
            self.push_child(node);
        }
    }

    /// Close open directories until only `len` remain.
    fn close_to(&mut self, len: usize) {
        while self.open.len() > len {
            if let Some(dir) = self.open.pop() {
                self.push_child(dir);
            }
        }
    }

    fn push_child(&mut self, node: TreeNode) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.top.push(node),
        }
    }

    pub(crate) fn finish(mut self) -> Vec<TreeNode> {
        self.close_to(0);
        self.top
    }
}

/// Build the tree below `root`.
///
/// Siblings are visited in file-name order. The first traversal error aborts
/// the build and nothing partial is returned.
pub fn build_tree(root: &Path, config: &TreeConfig) -> Result<DirTree, TraversalError> {
    let mut walker = WalkDir::new(root)
        .follow_links(config.follow_symlinks)
        .sort_by_file_name()
        .into_iter();
    let mut frontier = Frontier::default();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| TraversalError::new(root, e))?;
        let depth = entry.depth();
        // Root itself
        if depth == 0 {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        let kind = if entry.file_type().is_dir() {
            NodeKind::Directory
        } else {
            NodeKind::File
        };

        if frontier.visit(depth, &name, kind, config) == Visit::Prune
            && kind == NodeKind::Directory
        {
            walker.skip_current_dir();
        }
    }

    let tree = DirTree {
        root: root.to_path_buf(),
        children: frontier.finish(),
    };
    debug!(
        root = %root.display(),
        nodes = tree.len(),
        max_depth = config.max_depth,
        show_hidden = config.show_hidden,
        "tree built"
    );
    Ok(tree)
}
