//! Plain-text rendering of the multi-select.

use super::state::MultiSelect;

/// Message shown when a query matches nothing.
pub const NO_MATCHES: &str = "No categories found matching your search";

/// Render the selector as lines of text: title, summary, search, tree.
pub fn render(select: &MultiSelect, value: &[String]) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(title) = select.title_text() {
        lines.push(title.to_string());
    }
    lines.push(summary(select, value));
    if !select.query().is_empty() {
        lines.push(format!("Search: {}", select.query()));
    }

    if select.has_no_matches() {
        lines.push(NO_MATCHES.to_string());
        return lines;
    }

    for row in select.visible(value) {
        let indent = "  ".repeat(row.node.depth);
        let chevron = match (row.node.has_children, row.node.is_expanded) {
            (false, _) => " ",
            (true, true) => "▾",
            (true, false) => "▸",
        };
        let check = if row.selected { "✓" } else { " " };
        lines.push(format!("{indent}{chevron} [{check}] {}", row.node.name));
    }
    lines
}

/// The trigger line: placeholder, or removable chips plus a clear control.
fn summary(select: &MultiSelect, value: &[String]) -> String {
    let chips = select.chips(value);
    if chips.is_empty() {
        return select.placeholder_text().to_string();
    }
    let chips: Vec<String> = chips.iter().map(|c| format!("[{} ×]", c.label)).collect();
    format!("{} (clear all)", chips.join(" "))
}
