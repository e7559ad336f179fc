//! View engines for the gallery back office.
//!
//! - [`table`]: search, sort and paginate any in-memory record list.
//! - [`tree`]: select any number of nodes from a searchable category tree.
//!
//! Both are synchronous and side-effect free apart from the callbacks the
//! caller installs. They borrow caller data and never modify it.

pub mod error;
pub mod table;
pub mod text;
pub mod tree;

pub use error::TableError;

pub mod prelude {
    pub use crate::error::TableError;
    pub use crate::table::{Column, Direction, Pagination, Sort, SortValue, Table, TableView};
    pub use crate::tree::{MultiSelect, TreeNode, TreeOption};
}
