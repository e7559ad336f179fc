//! Error types for view configuration.

use thiserror::Error;

/// Rejected table configuration changes.
///
/// Data never produces errors; only caller-driven configuration does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("page size must be greater than zero")]
    ZeroPageSize,
    #[error("page size {size} is not one of the offered sizes {options:?}")]
    UnsupportedPageSize { size: usize, options: Vec<usize> },
    #[error("table has no pagination configured")]
    PaginationDisabled,
}
