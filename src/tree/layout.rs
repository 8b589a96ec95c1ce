use super::{DirTree, NodeKind, TreeNode};

/// One display row of a flattened tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub name: &'a str,
    pub kind: NodeKind,
    /// Whether this is the last sibling in its parent group.
    pub is_last: bool,
    /// One flag per ancestor level (depth 1 first): `true` when that ancestor
    /// still has siblings below it, so a vertical guide continues through
    /// this row.
    pub guides: Vec<bool>,
}

/// Flatten a tree into pre-order rows.
pub fn flatten(tree: &DirTree) -> Vec<Row<'_>> {
    let mut rows = Vec::with_capacity(tree.len());
    let mut guides = Vec::new();
    push_siblings(&tree.children, &mut guides, &mut rows);
    rows
}

fn push_siblings<'a>(nodes: &'a [TreeNode], guides: &mut Vec<bool>, rows: &mut Vec<Row<'a>>) {
    let count = nodes.len();
    for (i, node) in nodes.iter().enumerate() {
        let is_last = i + 1 == count;
        rows.push(Row {
            name: &node.name,
            kind: node.kind,
            is_last,
            guides: guides.clone(),
        });

        if !node.children.is_empty() {
            guides.push(!is_last);
            push_siblings(&node.children, guides, rows);
            guides.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample() -> DirTree {
        let mut src = TreeNode::directory("src");
        src.children.push(TreeNode::file("lib.rs"));
        src.children.push(TreeNode::file("main.rs"));
        DirTree {
            root: PathBuf::from("/tmp/project"),
            children: vec![src, TreeNode::file("README.md")],
        }
    }

    #[test]
    fn rows_follow_pre_order() {
        let tree = sample();
        let names: Vec<&str> = flatten(&tree).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["src", "lib.rs", "main.rs", "README.md"]);
    }

    #[test]
    fn last_flags_and_guides() {
        let tree = sample();
        let rows = flatten(&tree);
        assert!(!rows[0].is_last);
        assert!(rows[0].guides.is_empty());
        assert_eq!(rows[1].name, "lib.rs");
        assert_eq!(rows[1].guides, vec![true]);
        assert!(rows[2].is_last);
        assert!(rows[3].is_last);
    }

    #[test]
    fn guide_stops_under_last_ancestor() {
        let mut inner = TreeNode::directory("inner");
        inner.children.push(TreeNode::file("x"));
        let tree = DirTree {
            root: PathBuf::from("."),
            children: vec![TreeNode::file("a"), inner],
        };
        let rows = flatten(&tree);
        assert_eq!(rows[2].name, "x");
        assert_eq!(rows[2].guides, vec![false]);
    }
}
