//! Tree options and their normalization into a nested tree.

use std::collections::HashSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// One selectable option, as callers supply it.
///
/// Options arrive either flat (linked by `parent_id`) or already nested
/// (with `children` populated).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    /// None when the option carries no children field at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeOption>>,
}

impl TreeOption {
    /// A top-level option.
    pub fn root(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
            children: None,
        }
    }

    /// An option linked to its parent by id.
    pub fn child_of(
        id: impl Into<String>,
        name: impl Into<String>,
        parent_id: impl Into<String>,
    ) -> Self {
        Self {
            parent_id: Some(parent_id.into()),
            ..Self::root(id, name)
        }
    }

    /// Attach nested children.
    pub fn with_children(mut self, children: Vec<TreeOption>) -> Self {
        self.children = Some(children);
        self
    }
}

/// A node of the normalized tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Whether this node has any children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

impl From<&TreeOption> for TreeNode {
    fn from(option: &TreeOption) -> Self {
        Self {
            id: option.id.clone(),
            name: option.name.clone(),
            children: option
                .children
                .iter()
                .flatten()
                .map(TreeNode::from)
                .collect(),
        }
    }
}

/// Whether `options` should be treated as a flat, parent-linked list.
///
/// True when some option names a parent and has no children field.
pub fn is_flat(options: &[TreeOption]) -> bool {
    options
        .iter()
        .any(|o| o.parent_id.is_some() && o.children.is_none())
}

/// Group a flat list under `parent` (None = roots), recursively.
///
/// Sibling order follows input order. Options whose parent id never
/// appears are unreachable and left out.
pub fn build_tree(flat: &[TreeOption], parent: Option<&str>) -> Vec<TreeNode> {
    let mut ancestors = HashSet::new();
    build_level(flat, parent, &mut ancestors)
}

fn build_level<'a>(
    flat: &'a [TreeOption],
    parent: Option<&str>,
    ancestors: &mut HashSet<&'a str>,
) -> Vec<TreeNode> {
    let mut level = Vec::new();
    for option in flat.iter().filter(|o| o.parent_id.as_deref() == parent) {
        // A node reachable from itself would recurse forever.
        if !ancestors.insert(option.id.as_str()) {
            warn!("option {:?} is its own ancestor, skipping", option.id);
            continue;
        }
        let children = build_level(flat, Some(option.id.as_str()), ancestors);
        ancestors.remove(option.id.as_str());
        level.push(TreeNode {
            id: option.id.clone(),
            name: option.name.clone(),
            children,
        });
    }
    level
}

/// Normalize options of either shape into a nested tree.
pub fn normalize(options: &[TreeOption]) -> Vec<TreeNode> {
    if !is_flat(options) {
        debug!("normalizing {} nested options", options.len());
        return options.iter().map(TreeNode::from).collect();
    }

    let known: HashSet<&str> = options.iter().map(|o| o.id.as_str()).collect();
    let orphans = options
        .iter()
        .filter(|o| o.parent_id.as_deref().is_some_and(|p| !known.contains(p)))
        .count();
    if orphans > 0 {
        warn!("{orphans} options reference a missing parent and will not be shown");
    }

    debug!("building tree from {} flat options", options.len());
    build_tree(options, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(nodes: &[TreeNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_build_tree_preserves_sibling_order() {
        let flat = vec![
            TreeOption::child_of("c", "Cherry", "fruit"),
            TreeOption::root("fruit", "Fruit"),
            TreeOption::child_of("a", "Apple", "fruit"),
            TreeOption::root("veg", "Vegetables"),
        ];
        let tree = build_tree(&flat, None);
        assert_eq!(ids(&tree), vec!["fruit", "veg"]);
        assert_eq!(ids(&tree[0].children), vec!["c", "a"]);
        assert!(!tree[1].has_children());
    }

    #[test]
    fn test_build_tree_under_parent() {
        let flat = vec![
            TreeOption::root("a", "A"),
            TreeOption::child_of("b", "B", "a"),
            TreeOption::child_of("c", "C", "b"),
        ];
        let subtree = build_tree(&flat, Some("a"));
        assert_eq!(ids(&subtree), vec!["b"]);
        assert_eq!(ids(&subtree[0].children), vec!["c"]);
    }

    #[test]
    fn test_build_tree_survives_duplicate_id_cycle() {
        let flat = vec![
            TreeOption::root("a", "A"),
            TreeOption::child_of("b", "B", "a"),
            TreeOption::child_of("a", "A again", "b"),
        ];
        let tree = build_tree(&flat, None);
        assert_eq!(ids(&tree), vec!["a"]);
        assert_eq!(ids(&tree[0].children), vec!["b"]);
        assert!(tree[0].children[0].children.is_empty());
    }

    #[test]
    fn test_normalize_nested_input() {
        let nested = vec![
            TreeOption::root("art", "Art").with_children(vec![
                TreeOption::root("oil", "Oil").with_children(vec![]),
            ]),
        ];
        assert!(!is_flat(&nested));
        let tree = normalize(&nested);
        assert_eq!(ids(&tree), vec!["art"]);
        assert_eq!(ids(&tree[0].children), vec!["oil"]);
    }

    #[test]
    fn test_normalize_drops_orphans() {
        let flat = vec![
            TreeOption::root("a", "A"),
            TreeOption::child_of("x", "X", "missing"),
        ];
        assert_eq!(ids(&normalize(&flat)), vec!["a"]);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"[
            {"id": "b", "name": "Apple", "parentId": "a"},
            {"id": "a", "name": "Fruit", "parentId": null}
        ]"#;
        let options: Vec<TreeOption> = serde_json::from_str(json).unwrap();
        assert_eq!(options[0].parent_id.as_deref(), Some("a"));
        assert!(options[0].children.is_none());
        assert!(is_flat(&options));
    }
}
