//! Tabular view engine: search, sort and paginate an in-memory collection.
//!
//! The engine is generic over the record type. It reads records only through
//! the column projections, the key extractor and the search predicate, and
//! never mutates the data it is given.
//!
//! # Example
//!
//! ```
//! use gallery_views::table::{Column, Pagination, Table};
//! use serde_json::{json, Value};
//!
//! let data: Vec<Value> = (1..=7).map(|i| json!({"id": i.to_string()})).collect();
//! let mut table = Table::new(
//!     vec![Column::new("id", "ID", |r: &Value| r["id"].as_str().unwrap_or("").to_string())],
//!     |r: &Value| r["id"].to_string(),
//! )
//! .pagination(Pagination::new(3).options([3, 5]));
//!
//! assert_eq!(table.view(&data).page_count, 3);
//! table.set_page(3);
//! assert_eq!(table.next_page(&data), 3);
//! assert_eq!(table.view(&data).rows.len(), 1);
//! ```

mod column;
pub mod render;
pub mod search;
mod sort;
mod state;

pub use column::Column;
pub use render::render;
pub use sort::{Direction, Sort, SortValue};
pub use state::{
    DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS, Pagination, Table, TableView, ViewState,
};
