//! Plain-text rendering of a table view.

use crate::text::{display_width, pad};

use super::state::{Table, TableView};

/// Message shown in place of rows when nothing is visible.
pub const NO_RESULTS: &str = "No results";

const SEPARATOR: &str = " │ ";

/// Render the table for `data` as lines of text.
///
/// Layout: optional search line, header, rule, rows (or a single
/// "No results" row), and a pager line when pagination is on and
/// something matched.
pub fn render<T>(table: &Table<T>, data: &[T]) -> Vec<String> {
    let view = table.view(data);
    let mut lines = Vec::new();

    if let Some(class) = table.class() {
        lines.push(format!("[{class}]"));
    }
    if table.is_searchable() {
        lines.push(format!(
            "{}: {}",
            table.placeholder(),
            table.state().search_term
        ));
    }

    let headers = header_labels(table, &view);
    let cells: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|row| table.columns().iter().map(|c| c.cell(row)).collect())
        .collect();
    let widths = column_widths(table, &headers, &cells);

    lines.push(join_row(&headers, &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─"),
    );

    if cells.is_empty() {
        lines.push(NO_RESULTS.to_string());
    } else {
        for row in &cells {
            lines.push(join_row(row, &widths));
        }
    }

    if let Some(pager) = pager_line(table, &view) {
        lines.push(pager);
    }
    lines
}

/// Header text per column, with the direction glyph on the active sort column.
fn header_labels<T>(table: &Table<T>, view: &TableView<'_, T>) -> Vec<String> {
    table
        .columns()
        .iter()
        .map(|column| match &view.sort {
            Some(sort) if sort.key == column.id => {
                format!("{} {}", column.header, sort.direction.indicator())
            }
            _ => column.header.clone(),
        })
        .collect()
}

fn column_widths<T>(table: &Table<T>, headers: &[String], cells: &[Vec<String>]) -> Vec<usize> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            column.width.unwrap_or_else(|| {
                cells
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(String::as_str)
                    .map(display_width)
                    .chain(std::iter::once(display_width(&headers[i])))
                    .max()
                    .unwrap_or(0)
            })
        })
        .collect()
}

fn join_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
        .trim_end()
        .to_string()
}

fn pager_line<T>(table: &Table<T>, view: &TableView<'_, T>) -> Option<String> {
    let pagination = table.pagination_config()?;
    if view.filtered_count == 0 {
        return None;
    }
    let showing = match view.showing() {
        Some((first, last)) => format!("{first}-{last} of {}", view.filtered_count),
        None => format!("none of {}", view.filtered_count),
    };
    Some(format!(
        "Page {} of {} · {} · {} per page {:?}",
        view.page,
        view.page_count,
        showing,
        table.state().page_size,
        pagination.page_size_options
    ))
}
