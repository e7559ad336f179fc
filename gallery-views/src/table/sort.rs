//! Sort state and row ordering.

use std::cmp::{Ordering, Reverse};

use serde_json::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Header glyph shown next to the active sort column.
    pub fn indicator(self) -> &'static str {
        match self {
            Direction::Asc => "▲",
            Direction::Desc => "▼",
        }
    }
}

/// The active sort: at most one column at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    /// Column id being sorted on.
    pub key: String,
    /// Sort direction.
    pub direction: Direction,
}

impl Sort {
    /// Compute the sort state after a header click on `column`.
    ///
    /// The clicked column cycles unsorted, ascending, descending, unsorted.
    /// Clicking a different column always starts it at ascending.
    pub fn cycle(current: Option<&Sort>, column: &str) -> Option<Sort> {
        match current {
            Some(sort) if sort.key == column => match sort.direction {
                Direction::Asc => Some(Sort {
                    key: column.to_string(),
                    direction: Direction::Desc,
                }),
                Direction::Desc => None,
            },
            _ => Some(Sort {
                key: column.to_string(),
                direction: Direction::Asc,
            }),
        }
    }
}

/// A comparable value extracted from a record for sorting.
///
/// Values of the same kind compare naturally. Values of different kinds
/// order by kind: null, then booleans, then numbers, then text.
#[derive(Debug, Clone)]
pub enum SortValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Null => 0,
            SortValue::Bool(_) => 1,
            SortValue::Number(_) => 2,
            SortValue::Text(_) => 3,
        }
    }
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Null, SortValue::Null) => Ordering::Equal,
            (SortValue::Bool(a), SortValue::Bool(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortValue {}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        SortValue::Text(value)
    }
}

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        SortValue::Bool(value)
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Number(value)
    }
}

// Integers beyond 2^53 lose precision as f64 and may compare equal.
impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<u32> for SortValue {
    fn from(value: u32) -> Self {
        SortValue::Number(f64::from(value))
    }
}

impl<V: Into<SortValue>> From<Option<V>> for SortValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(SortValue::Null, Into::into)
    }
}

impl From<&Value> for SortValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => SortValue::Null,
            Value::Bool(b) => SortValue::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(SortValue::Null, SortValue::Number),
            Value::String(s) => SortValue::Text(s.clone()),
            other => SortValue::Text(other.to_string()),
        }
    }
}

/// Reorder `rows` in place by the extracted key.
///
/// The sort is stable: rows with equal keys keep their input order in both
/// directions.
pub(crate) fn sort_rows<R>(rows: &mut [R], direction: Direction, key: impl Fn(&R) -> SortValue) {
    match direction {
        Direction::Asc => rows.sort_by_cached_key(|row| key(row)),
        Direction::Desc => rows.sort_by_cached_key(|row| Reverse(key(row))),
    }
}
