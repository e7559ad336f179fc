//! Table view state and the search, sort, paginate pipeline.

use std::fmt;
use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::error::TableError;

use super::column::Column;
use super::search::{SearchFn, default_search};
use super::sort::{Sort, sort_rows};

/// Page size used when the caller does not configure pagination.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered when the caller does not list any.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

type KeyFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
type RowClickFn<T> = Box<dyn FnMut(&T) + Send>;

/// Pagination configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Initial rows per page.
    pub page_size: usize,
    /// Sizes the user may switch between.
    pub page_size_options: Vec<usize>,
}

impl Pagination {
    /// Paginate with the given initial page size and the default size options.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
        }
    }

    /// Replace the offered page sizes.
    pub fn options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.page_size_options = options.into();
        self
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Ephemeral search, sort and page state owned by one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Free-text filter.
    pub search_term: String,
    /// Active sort, if any.
    pub sort: Option<Sort>,
    /// Current page (1-based).
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// The rows a table shows for its current state.
#[derive(Debug, Clone)]
pub struct TableView<'a, T> {
    /// Visible rows, in display order.
    pub rows: Vec<&'a T>,
    /// Number of rows that passed the search filter.
    pub filtered_count: usize,
    /// Current page (1-based). May exceed `page_count`.
    pub page: usize,
    /// Number of pages (0 when nothing matched).
    pub page_count: usize,
    /// Rows per page, or None when pagination is off.
    pub page_size: Option<usize>,
    /// Active sort.
    pub sort: Option<Sort>,
}

impl<T> TableView<'_, T> {
    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 1-based positions of the first and last visible rows within the
    /// filtered set, or None when nothing is visible.
    pub fn showing(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let first = match self.page_size {
            Some(size) => (self.page - 1) * size + 1,
            None => 1,
        };
        Some((first, first + self.rows.len() - 1))
    }
}

/// A searchable, sortable, paginated table over caller-owned records.
///
/// `Table<T>` never owns or mutates the records. Each call to
/// [`Table::view`] recomputes the visible rows from the data it is given:
/// sort the full set, then filter, then take the current page.
///
/// # Example
///
/// ```
/// use gallery_views::table::{Column, Pagination, Table};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Fruit {
///     id: String,
///     name: String,
/// }
///
/// let data = vec![
///     Fruit { id: "1".into(), name: "Banana".into() },
///     Fruit { id: "2".into(), name: "Apple".into() },
/// ];
/// let mut table = Table::new(
///     vec![Column::new("name", "Name", |f: &Fruit| f.name.clone()).sortable()],
///     |f: &Fruit| f.id.clone(),
/// )
/// .pagination(Pagination::new(10));
///
/// table.click_header("name");
/// let names: Vec<_> = table.view(&data).rows.iter().map(|f| f.name.as_str()).collect();
/// assert_eq!(names, ["Apple", "Banana"]);
/// ```
pub struct Table<T> {
    columns: Vec<Column<T>>,
    key: KeyFn<T>,
    search: Arc<SearchFn<T>>,
    searchable: bool,
    search_placeholder: String,
    pagination: Option<Pagination>,
    on_row_click: Option<RowClickFn<T>>,
    class_name: Option<String>,
    state: ViewState,
}

impl<T: Serialize + 'static> Table<T> {
    /// Create a table that searches every top-level field of a record.
    pub fn new(
        columns: Vec<Column<T>>,
        key: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::with_search(columns, key, default_search::<T>)
    }
}

impl<T> Table<T> {
    /// Create a table with a custom search predicate.
    ///
    /// Use this for record types that do not implement `Serialize`.
    pub fn with_search(
        columns: Vec<Column<T>>,
        key: impl Fn(&T) -> String + Send + Sync + 'static,
        search: impl Fn(&T, &str) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            columns,
            key: Arc::new(key),
            search: Arc::new(search),
            searchable: true,
            search_placeholder: "Search...".to_string(),
            pagination: None,
            on_row_click: None,
            class_name: None,
            state: ViewState::default(),
        }
    }

    /// Enable or disable the search box. Disabled tables ignore the term.
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Set the search box label.
    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    /// Replace the search predicate.
    pub fn search_fn(mut self, search: impl Fn(&T, &str) -> bool + Send + Sync + 'static) -> Self {
        self.search = Arc::new(search);
        self
    }

    /// Enable pagination.
    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.state.page_size = pagination.page_size;
        self.state.page = 1;
        self.pagination = Some(pagination);
        self
    }

    /// Set the row click callback. It receives the full record.
    pub fn on_row_click(mut self, handler: impl FnMut(&T) + Send + 'static) -> Self {
        self.on_row_click = Some(Box::new(handler));
        self
    }

    /// Set the container styling hook.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Column definitions.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Find a column by id.
    pub fn column(&self, id: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Row identity for a record.
    pub fn key(&self, row: &T) -> String {
        (self.key)(row)
    }

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Whether the search box is shown.
    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    /// Search box label.
    pub fn placeholder(&self) -> &str {
        &self.search_placeholder
    }

    /// Pagination configuration, if enabled.
    pub fn pagination_config(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    /// Styling hook.
    pub fn class(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    // -------------------------------------------------------------------------
    // Pipeline
    // -------------------------------------------------------------------------

    /// Compute the visible rows for `data`.
    pub fn view<'a>(&self, data: &'a [T]) -> TableView<'a, T> {
        let rows = self.filtered(data);
        let filtered_count = rows.len();
        let page = self.state.page;

        let (rows, page_count, page_size) = match &self.pagination {
            Some(_) => {
                let size = self.state.page_size;
                let start = (page - 1).saturating_mul(size);
                let visible = rows.into_iter().skip(start).take(size).collect();
                (visible, filtered_count.div_ceil(size), Some(size))
            }
            None => {
                let count = usize::from(filtered_count > 0);
                (rows, count, None)
            }
        };

        TableView {
            rows,
            filtered_count,
            page,
            page_count,
            page_size,
            sort: self.state.sort.clone(),
        }
    }

    /// Sort then filter `data`, without paginating.
    pub fn filtered<'a>(&self, data: &'a [T]) -> Vec<&'a T> {
        let mut rows: Vec<&T> = data.iter().collect();

        if let Some(sort) = &self.state.sort
            && let Some(column) = self.column(&sort.key)
        {
            sort_rows(&mut rows, sort.direction, |row| column.sort_value(row));
        }

        let term = self.state.search_term.as_str();
        if self.searchable && !term.is_empty() {
            rows.retain(|row| (self.search)(*row, term));
        }
        rows
    }

    /// Number of pages `data` spans under the current filter.
    pub fn page_count(&self, data: &[T]) -> usize {
        self.view(data).page_count
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Set the search term. Always returns to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
        self.state.page = 1;
        debug!("table search set to {:?}", self.state.search_term);
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Handle a click on a column header.
    ///
    /// Sortable columns cycle ascending, descending, unsorted. Clicks on
    /// unknown or unsortable columns are ignored. Returns the sort state
    /// after the click.
    pub fn click_header(&mut self, column_id: &str) -> Option<&Sort> {
        match self.column(column_id) {
            Some(column) if column.is_sortable() => {
                self.state.sort = Sort::cycle(self.state.sort.as_ref(), column_id);
                debug!("table sort now {:?}", self.state.sort);
            }
            _ => debug!("ignoring header click on {column_id:?}"),
        }
        self.state.sort.as_ref()
    }

    /// Clear the sort, restoring input order.
    pub fn clear_sort(&mut self) {
        self.state.sort = None;
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Jump to a page. Page 0 is treated as page 1; pages past the end are
    /// allowed and show no rows.
    pub fn set_page(&mut self, page: usize) {
        self.state.page = page.max(1);
    }

    /// Move to the next page, stopping at the last page.
    pub fn next_page(&mut self, data: &[T]) -> usize {
        let last = self.page_count(data).max(1);
        self.state.page = self.state.page.saturating_add(1).clamp(1, last);
        self.state.page
    }

    /// Move to the previous page, stopping at the first page.
    pub fn prev_page(&mut self, data: &[T]) -> usize {
        let last = self.page_count(data).max(1);
        self.state.page = self.state.page.saturating_sub(1).clamp(1, last);
        self.state.page
    }

    /// Change the page size. Always returns to the first page.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), TableError> {
        let Some(pagination) = &self.pagination else {
            return Err(TableError::PaginationDisabled);
        };
        if size == 0 {
            return Err(TableError::ZeroPageSize);
        }
        if !pagination.page_size_options.is_empty()
            && !pagination.page_size_options.contains(&size)
        {
            return Err(TableError::UnsupportedPageSize {
                size,
                options: pagination.page_size_options.clone(),
            });
        }
        self.state.page_size = size;
        self.state.page = 1;
        debug!("table page size set to {size}");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Handle a click on the visible row at `index`.
    ///
    /// Returns true if a row was there and the callback fired.
    pub fn click_row(&mut self, data: &[T], index: usize) -> bool {
        let row = self.view(data).rows.get(index).copied();
        match (row, self.on_row_click.as_mut()) {
            (Some(row), Some(handler)) => {
                handler(row);
                true
            }
            _ => false,
        }
    }
}

impl<T> fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns)
            .field("searchable", &self.searchable)
            .field("pagination", &self.pagination)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
