use std::sync::{Arc, Mutex};

use gallery_views::tree::{self, MultiSelect, TreeOption, toggled};

type Changes = Arc<Mutex<Vec<Vec<String>>>>;

fn fruit_options() -> Vec<TreeOption> {
    vec![
        TreeOption::root("a", "Fruit"),
        TreeOption::child_of("b", "Apple", "a"),
        TreeOption::child_of("c", "Banana", "a"),
    ]
}

/// A selector that records every change it reports.
fn recording(options: &[TreeOption]) -> (MultiSelect, Changes) {
    let changes: Changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let select = MultiSelect::new(options, move |next| sink.lock().unwrap().push(next));
    (select, changes)
}

fn strings(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn visible_ids(select: &MultiSelect) -> Vec<String> {
    select.visible(&[]).into_iter().map(|r| r.node.id).collect()
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_keeps_parent_of_match() {
    let (mut select, _) = recording(&fruit_options());
    select.set_query("app");

    let filtered = select.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "a");
    assert_eq!(filtered[0].children.len(), 1);
    assert_eq!(filtered[0].children[0].id, "b");

    assert!(select.is_expanded("a"));
    assert_eq!(visible_ids(&select), ["a", "b"]);
}

#[test]
fn test_clearing_query_keeps_expansion() {
    let (mut select, _) = recording(&fruit_options());
    select.set_query("ban");
    select.set_query("");
    assert!(select.is_expanded("a"));
    assert_eq!(visible_ids(&select), ["a", "b", "c"]);
}

#[test]
fn test_clearing_query_does_not_touch_selection() {
    let (mut select, changes) = recording(&fruit_options());
    select.set_query("app");
    select.set_query("");
    assert!(changes.lock().unwrap().is_empty());
}

#[test]
fn test_no_matches_message() {
    let (mut select, _) = recording(&fruit_options());
    select.set_query("kiwi");
    assert!(select.has_no_matches());
    let lines = tree::render(&select, &[]);
    assert_eq!(lines.last().map(String::as_str), Some(tree::render::NO_MATCHES));
}

#[test]
fn test_empty_options() {
    let (mut select, _) = recording(&[]);
    assert!(tree::render(&select, &[]).iter().all(|l| l != tree::render::NO_MATCHES));
    select.set_query("x");
    assert!(select.has_no_matches());
}

#[test]
fn test_nested_options_accepted() {
    let nested = vec![TreeOption::root("art", "Art").with_children(vec![
        TreeOption::root("oil", "Oil painting"),
        TreeOption::root("bronze", "Bronze"),
    ])];
    let (mut select, _) = recording(&nested);
    select.set_query("oil");
    assert_eq!(visible_ids(&select), ["art", "oil"]);
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_selecting_parent_does_not_cascade() {
    let (mut select, changes) = recording(&fruit_options());
    let next = select.toggle(&[], "a");
    assert_eq!(next, strings(&["a"]));
    assert_eq!(*changes.lock().unwrap(), vec![strings(&["a"])]);
}

#[test]
fn test_toggle_twice_restores_value() {
    let (mut select, _) = recording(&fruit_options());
    let value = strings(&["c", "b"]);
    let added = select.toggle(&value, "a");
    assert_eq!(added, strings(&["c", "b", "a"]));
    let restored = select.toggle(&added, "a");
    assert_eq!(restored, value);
}

#[test]
fn test_toggle_removes_every_occurrence() {
    let value = strings(&["b", "a", "b"]);
    assert_eq!(toggled(&value, "b"), strings(&["a"]));
}

#[test]
fn test_expand_does_not_change_selection() {
    let (mut select, changes) = recording(&fruit_options());
    assert!(select.toggle_expanded("a"));
    assert!(!select.toggle_expanded("a"));
    assert!(changes.lock().unwrap().is_empty());
}

#[test]
fn test_clear_all_emits_once() {
    let (mut select, changes) = recording(&fruit_options());
    select.clear_all();
    assert_eq!(*changes.lock().unwrap(), vec![Vec::<String>::new()]);
}

#[test]
fn test_chips_follow_selection_order() {
    let (mut select, changes) = recording(&fruit_options());
    let value = strings(&["c", "zz", "a"]);
    let labels: Vec<_> = select.chips(&value).into_iter().map(|c| c.label).collect();
    assert_eq!(labels, ["Banana", "zz", "Fruit"]);

    let next = select.remove_chip(&value, "zz");
    assert_eq!(next, strings(&["c", "a"]));
    assert_eq!(changes.lock().unwrap().len(), 1);
}

// ============================================================================
// Expansion and rendering
// ============================================================================

#[test]
fn test_expand_all_collapse_all() {
    let options = vec![
        TreeOption::root("a", "A"),
        TreeOption::child_of("b", "B", "a"),
        TreeOption::child_of("c", "C", "b"),
    ];
    let (mut select, _) = recording(&options);
    select.expand_all();
    assert_eq!(visible_ids(&select), ["a", "b", "c"]);
    select.collapse_all();
    assert_eq!(visible_ids(&select), ["a"]);
}

#[test]
fn test_set_options_rebuilds_tree() {
    let (mut select, _) = recording(&fruit_options());
    select.set_query("cherry");
    assert!(select.has_no_matches());
    let mut options = fruit_options();
    options.push(TreeOption::child_of("d", "Cherry", "a"));
    select.set_options(&options);
    assert_eq!(visible_ids(&select), ["a", "d"]);
}

#[test]
fn test_render_tree() {
    let (select, _) = recording(&fruit_options());
    let mut select = select.title("Categories").placeholder("Pick categories");
    select.expand("a");
    let value = strings(&["b"]);

    let lines = tree::render(&select, &value);
    assert_eq!(
        lines,
        [
            "Categories",
            "[Apple ×] (clear all)",
            "▾ [ ] Fruit",
            "    [✓] Apple",
            "    [ ] Banana",
        ]
    );

    let lines = tree::render(&select, &[]);
    assert_eq!(lines[1], "Pick categories");
}
