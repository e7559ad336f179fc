//! `gallery tree`: pick categories or menu entries from an option tree.

use std::io::Write;
use std::sync::{Arc, Mutex};

use gallery_views::tree::{self, MultiSelect, TreeOption};
use log::{info, warn};

use crate::cli::TreeArgs;
use crate::error::CliError;

use super::load_array;

pub fn run(args: &TreeArgs, out: &mut impl Write) -> Result<(), CliError> {
    let options: Vec<TreeOption> = load_array(&args.options)?;
    info!(
        "loaded {} options from {}",
        options.len(),
        args.options.display()
    );

    let value = Arc::new(Mutex::new(args.selected.clone()));
    let sink = Arc::clone(&value);
    let mut select = MultiSelect::new(&options, move |next| {
        if let Ok(mut current) = sink.lock() {
            *current = next;
        }
    });
    if let Some(title) = &args.title {
        select = select.title(title.as_str());
    }
    if let Some(placeholder) = &args.placeholder {
        select = select.placeholder(placeholder.as_str());
    }

    if args.expand_all {
        select.expand_all();
    }
    for id in &args.expand {
        if select.find(id).is_none() {
            warn!("cannot expand unknown option {id:?}");
        }
        select.expand(id);
    }
    if let Some(query) = &args.query {
        select.set_query(query.as_str());
    }

    if args.clear {
        select.clear_all();
    }
    for id in &args.toggle {
        select.toggle(&snapshot(&value), id);
    }

    let selection = snapshot(&value);
    for line in tree::render(&select, &selection) {
        writeln!(out, "{line}")?;
    }
    let json = serde_json::to_string(&selection).map_err(std::io::Error::other)?;
    writeln!(out, "{json}")?;
    Ok(())
}

fn snapshot(value: &Mutex<Vec<String>>) -> Vec<String> {
    value.lock().map(|v| v.clone()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::super::testing::json_file;
    use super::*;

    const CATEGORIES: &str = r#"[
        {"id": "a", "name": "Fruit", "parentId": null},
        {"id": "b", "name": "Apple", "parentId": "a"},
        {"id": "c", "name": "Banana", "parentId": "a"}
    ]"#;

    fn args(options: PathBuf) -> TreeArgs {
        TreeArgs {
            options,
            query: None,
            selected: Vec::new(),
            toggle: Vec::new(),
            expand: Vec::new(),
            expand_all: false,
            clear: false,
            title: None,
            placeholder: None,
        }
    }

    fn run_to_lines(args: &TreeArgs) -> Vec<String> {
        let mut out = Vec::new();
        run(args, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_query_prunes_and_expands() {
        let file = json_file(CATEGORIES);
        let mut args = args(file.path().to_path_buf());
        args.query = Some("app".into());
        let lines = run_to_lines(&args);
        assert!(lines.contains(&"▾ [ ] Fruit".to_string()));
        assert!(lines.iter().any(|l| l.ends_with("Apple")));
        assert!(!lines.iter().any(|l| l.ends_with("Banana")));
        assert_eq!(lines.last().map(String::as_str), Some("[]"));
    }

    #[test]
    fn test_demo_categories_export() {
        let demo = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../demos/categories.json"));
        let mut args = args(demo);
        args.query = Some("post".into());
        let lines = run_to_lines(&args);
        assert!(lines.iter().any(|l| l.ends_with("Paper goods")));
        assert!(lines.iter().any(|l| l.ends_with("Posters")));
        assert!(lines.iter().any(|l| l.ends_with("Postcards")));
        assert!(!lines.iter().any(|l| l.ends_with("Canvas")));
    }

    #[test]
    fn test_toggles_apply_in_order() {
        let file = json_file(CATEGORIES);
        let mut args = args(file.path().to_path_buf());
        args.selected = vec!["c".into()];
        args.toggle = vec!["a".into(), "c".into(), "b".into()];
        let lines = run_to_lines(&args);
        assert_eq!(lines.last().map(String::as_str), Some(r#"["a","b"]"#));
        assert_eq!(lines[0], "[Fruit ×] [Apple ×] (clear all)");
    }

    #[test]
    fn test_clear_then_toggle() {
        let file = json_file(CATEGORIES);
        let mut args = args(file.path().to_path_buf());
        args.selected = vec!["a".into(), "b".into()];
        args.clear = true;
        args.toggle = vec!["c".into()];
        let lines = run_to_lines(&args);
        assert_eq!(lines.last().map(String::as_str), Some(r#"["c"]"#));
    }

    #[test]
    fn test_no_matches() {
        let file = json_file(CATEGORIES);
        let mut args = args(file.path().to_path_buf());
        args.query = Some("kiwi".into());
        let lines = run_to_lines(&args);
        assert!(lines.contains(&tree::render::NO_MATCHES.to_string()));
    }
}
