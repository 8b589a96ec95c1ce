#![allow(dead_code)]

use std::fs;
use tempfile::TempDir;
use treepager::tree::{DirTree, TreeConfig, TreeNode};

/// TreeConfig with no depth limit and hidden entries excluded.
pub fn default_tree_config() -> TreeConfig {
    TreeConfig {
        max_depth: 0,
        show_hidden: false,
        follow_symlinks: false,
    }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Names of the root's direct children, in order.
pub fn top_names(tree: &DirTree) -> Vec<&str> {
    tree.children.iter().map(|n| n.name.as_str()).collect()
}

/// Every node in pre-order, paired with its depth (1 = direct child of root).
pub fn all_nodes(tree: &DirTree) -> Vec<(usize, &TreeNode)> {
    fn walk<'a>(nodes: &'a [TreeNode], depth: usize, out: &mut Vec<(usize, &'a TreeNode)>) {
        for n in nodes {
            out.push((depth, n));
            walk(&n.children, depth + 1, out);
        }
    }
    let mut out = Vec::new();
    walk(&tree.children, 1, &mut out);
    out
}

/// Find a top-level node by name.
pub fn child<'a>(nodes: &'a [TreeNode], name: &str) -> &'a TreeNode {
    nodes
        .iter()
        .find(|n| n.name == name)
        .unwrap_or_else(|| panic!("no node named {name:?}"))
}
