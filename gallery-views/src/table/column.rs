//! Column descriptors for the table view.

use std::fmt;
use std::sync::Arc;

use super::sort::SortValue;

type CellFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
type SortFn<T> = Arc<dyn Fn(&T) -> SortValue + Send + Sync>;

/// A table column definition.
///
/// Columns are supplied once per table and never change during interaction.
/// The `cell` projection is the only way the table reads a record for display.
///
/// # Example
///
/// ```
/// use gallery_views::table::{Column, SortValue};
///
/// struct Artwork {
///     title: String,
///     price: u32,
/// }
///
/// let columns: Vec<Column<Artwork>> = vec![
///     Column::new("title", "Title", |a: &Artwork| a.title.clone()).sortable(),
///     Column::new("price", "Price", |a: &Artwork| format!("${}", a.price))
///         .sort_by(|a: &Artwork| SortValue::from(a.price)),
/// ];
/// assert!(columns[1].is_sortable());
/// ```
pub struct Column<T> {
    /// Unique identifier for this column. Also the sort key.
    pub id: String,
    /// Header text displayed at the top.
    pub header: String,
    /// Fixed display width in terminal columns (None = size to content).
    pub width: Option<usize>,
    cell: CellFn<T>,
    sortable: bool,
    sort_value: Option<SortFn<T>>,
}

impl<T> Column<T> {
    /// Create a new column with the given id, header and cell projection.
    pub fn new(
        id: impl Into<String>,
        header: impl Into<String>,
        cell: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            width: None,
            cell: Arc::new(cell),
            sortable: false,
            sort_value: None,
        }
    }

    /// Make the column sortable by its cell text.
    ///
    /// Cells compare as strings, so "$80" sorts after "$1200". Use
    /// [`Column::sort_by`] for numbers and dates.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Make the column sortable by a typed value.
    ///
    /// Use this when the cell text does not order the way the underlying
    /// value does (prices, dates, counts).
    pub fn sort_by(mut self, value: impl Fn(&T) -> SortValue + Send + Sync + 'static) -> Self {
        self.sortable = true;
        self.sort_value = Some(Arc::new(value));
        self
    }

    /// Set a fixed display width.
    pub fn fixed(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Whether header clicks on this column change the sort.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Project a record to its display text.
    pub fn cell(&self, row: &T) -> String {
        (self.cell)(row)
    }

    /// The value this column compares on.
    pub fn sort_value(&self, row: &T) -> SortValue {
        match &self.sort_value {
            Some(value) => value(row),
            None => SortValue::Text(self.cell(row)),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            width: self.width,
            cell: Arc::clone(&self.cell),
            sortable: self.sortable,
            sort_value: self.sort_value.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("width", &self.width)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}
