//! Pruning, flattening and walking normalized trees.

use std::collections::HashSet;

use super::option::TreeNode;

/// A visible node in the flattened tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatNode {
    pub id: String,
    pub name: String,
    /// Depth in tree (0 = root).
    pub depth: usize,
    /// Whether this node has children.
    pub has_children: bool,
    /// Whether this node is currently expanded.
    pub is_expanded: bool,
}

/// Keep the branches that contain a match.
///
/// A node survives if it matches or if any descendant survives. Survivors
/// keep only their surviving children.
pub fn filter_tree(nodes: &[TreeNode], matches: &impl Fn(&TreeNode) -> bool) -> Vec<TreeNode> {
    nodes
        .iter()
        .filter_map(|node| {
            let children = filter_tree(&node.children, matches);
            (matches(node) || !children.is_empty()).then(|| TreeNode {
                id: node.id.clone(),
                name: node.name.clone(),
                children,
            })
        })
        .collect()
}

/// Case-insensitive substring match on the node name.
pub fn name_contains(query: &str) -> impl Fn(&TreeNode) -> bool {
    let needle = query.to_lowercase();
    move |node| node.name.to_lowercase().contains(&needle)
}

/// Depth-first list of the nodes visible under the given expansion set.
pub fn flatten(nodes: &[TreeNode], expanded: &HashSet<String>) -> Vec<FlatNode> {
    let mut out = Vec::new();
    collect_visible(nodes, expanded, 0, &mut out);
    out
}

fn collect_visible(
    nodes: &[TreeNode],
    expanded: &HashSet<String>,
    depth: usize,
    out: &mut Vec<FlatNode>,
) {
    for node in nodes {
        let has_children = node.has_children();
        let is_expanded = expanded.contains(&node.id);

        out.push(FlatNode {
            id: node.id.clone(),
            name: node.name.clone(),
            depth,
            has_children,
            is_expanded,
        });

        if is_expanded && has_children {
            collect_visible(&node.children, expanded, depth + 1, out);
        }
    }
}

/// Recursively collect ids of all nodes that have children.
pub fn collect_expandable_ids(nodes: &[TreeNode], out: &mut HashSet<String>) {
    for node in nodes {
        if node.has_children() {
            out.insert(node.id.clone());
            collect_expandable_ids(&node.children, out);
        }
    }
}

/// Find a node by id anywhere in the tree.
pub fn find<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find(&node.children, id) {
            return Some(found);
        }
    }
    None
}
