//! Multi-select state over a searchable tree.

use std::collections::HashSet;
use std::fmt;

use log::debug;

use super::filter::{
    FlatNode, collect_expandable_ids, filter_tree, find, flatten, name_contains,
};
use super::option::{TreeNode, TreeOption, normalize};

type ChangeFn = Box<dyn FnMut(Vec<String>) + Send>;

/// A visible tree row with its selection flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub node: FlatNode,
    pub selected: bool,
}

/// A selected option shown in the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub id: String,
    /// Option name, or the id when the option is not in the tree.
    pub label: String,
}

/// Toggle `id` in `value`, returning the next selection.
///
/// Unselected ids are appended; selected ids are removed. `value` itself is
/// never modified.
pub fn toggled(value: &[String], id: &str) -> Vec<String> {
    if value.iter().any(|v| v == id) {
        value.iter().filter(|v| *v != id).cloned().collect()
    } else {
        let mut next = value.to_vec();
        next.push(id.to_string());
        next
    }
}

/// A searchable, expandable tree where any node can be selected.
///
/// The selection belongs to the caller: every operation that changes it
/// takes the current `value` and reports the complete next selection
/// through the change callback. Selecting a node never selects its parents
/// or children.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use gallery_views::tree::{MultiSelect, TreeOption};
///
/// let options = vec![
///     TreeOption::root("a", "Fruit"),
///     TreeOption::child_of("b", "Apple", "a"),
///     TreeOption::child_of("c", "Banana", "a"),
/// ];
/// let value = Arc::new(Mutex::new(Vec::<String>::new()));
/// let sink = Arc::clone(&value);
/// let mut select = MultiSelect::new(&options, move |next| *sink.lock().unwrap() = next);
///
/// let current = value.lock().unwrap().clone();
/// select.toggle(&current, "a");
/// assert_eq!(*value.lock().unwrap(), vec!["a".to_string()]);
/// ```
pub struct MultiSelect {
    roots: Vec<TreeNode>,
    query: String,
    expanded: HashSet<String>,
    placeholder: String,
    title: Option<String>,
    on_change: ChangeFn,
}

impl MultiSelect {
    /// Create a selector over `options`, reporting selection changes to `on_change`.
    pub fn new(
        options: &[TreeOption],
        on_change: impl FnMut(Vec<String>) + Send + 'static,
    ) -> Self {
        Self {
            roots: normalize(options),
            query: String::new(),
            expanded: HashSet::new(),
            placeholder: "Select...".to_string(),
            title: None,
            on_change: Box::new(on_change),
        }
    }

    /// Set the text shown when nothing is selected.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the title shown above the tree.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the options. Expansion state is kept.
    pub fn set_options(&mut self, options: &[TreeOption]) {
        self.roots = normalize(options);
        self.auto_expand();
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The normalized tree.
    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Placeholder text.
    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    /// Title text.
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Find a node by id in the full tree.
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        find(&self.roots, id)
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Set the search query.
    ///
    /// A non-empty query expands every branch that holds a match. Clearing
    /// the query leaves expansion as it is.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.auto_expand();
    }

    /// The tree pruned to branches matching the query.
    pub fn filtered(&self) -> Vec<TreeNode> {
        if self.query.is_empty() {
            return self.roots.clone();
        }
        filter_tree(&self.roots, &name_contains(&self.query))
    }

    /// Whether a non-empty query matched nothing.
    pub fn has_no_matches(&self) -> bool {
        !self.query.is_empty() && self.filtered().is_empty()
    }

    fn auto_expand(&mut self) {
        if self.query.is_empty() {
            return;
        }
        let before = self.expanded.len();
        collect_expandable_ids(&self.filtered(), &mut self.expanded);
        debug!(
            "query {:?} expanded {} more nodes",
            self.query,
            self.expanded.len() - before
        );
    }

    // -------------------------------------------------------------------------
    // Expand/Collapse
    // -------------------------------------------------------------------------

    /// Flip expansion of one node. Returns whether it is now expanded.
    ///
    /// Never changes the selection.
    pub fn toggle_expanded(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    /// Expand a node by id.
    pub fn expand(&mut self, id: &str) {
        self.expanded.insert(id.to_string());
    }

    /// Collapse a node by id.
    pub fn collapse(&mut self, id: &str) {
        self.expanded.remove(id);
    }

    /// Check if a node is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Expand all expandable nodes.
    pub fn expand_all(&mut self) {
        collect_expandable_ids(&self.roots, &mut self.expanded);
    }

    /// Collapse all nodes.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Visible rows of the filtered tree, marked against `value`.
    pub fn visible(&self, value: &[String]) -> Vec<TreeRow> {
        flatten(&self.filtered(), &self.expanded)
            .into_iter()
            .map(|node| TreeRow {
                selected: value.contains(&node.id),
                node,
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle one node and report the next selection.
    pub fn toggle(&mut self, value: &[String], id: &str) -> Vec<String> {
        let next = toggled(value, id);
        debug!("selection toggled {id:?}: {} -> {} ids", value.len(), next.len());
        (self.on_change)(next.clone());
        next
    }

    /// Remove a chip. Same as toggling its node.
    pub fn remove_chip(&mut self, value: &[String], id: &str) -> Vec<String> {
        self.toggle(value, id)
    }

    /// Deselect everything in one change.
    pub fn clear_all(&mut self) {
        (self.on_change)(Vec::new());
    }

    /// Chips for the selected ids, in selection order.
    pub fn chips(&self, value: &[String]) -> Vec<Chip> {
        value
            .iter()
            .map(|id| Chip {
                id: id.clone(),
                label: self
                    .find(id)
                    .map_or_else(|| id.clone(), |node| node.name.clone()),
            })
            .collect()
    }
}

impl fmt::Debug for MultiSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiSelect")
            .field("roots", &self.roots.len())
            .field("query", &self.query)
            .field("expanded", &self.expanded)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}
