//! Hierarchical multi-select over parent/child options.
//!
//! Options arrive flat or nested and are normalized once per
//! [`MultiSelect::set_options`]. Searching prunes the tree to matching
//! branches and expands them; selection is a flat list of ids owned by the
//! caller.

mod filter;
mod option;
pub mod render;
mod state;

pub use filter::{
    FlatNode, collect_expandable_ids, filter_tree, find, flatten, name_contains,
};
pub use option::{TreeNode, TreeOption, build_tree, is_flat, normalize};
pub use render::render;
pub use state::{Chip, MultiSelect, TreeRow, toggled};
