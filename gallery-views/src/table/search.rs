//! Search predicates for the table view.
//!
//! The default predicate looks at every top-level field of a record's
//! serialized form. Callers who want to match visible columns only, or who
//! want fuzzy matching, pass their own predicate.

use log::trace;
use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::Serialize;
use serde_json::Value;

/// Search predicate signature: `(record, term) -> matches`.
pub type SearchFn<T> = dyn Fn(&T, &str) -> bool + Send + Sync;

/// Default search: does any top-level field contain `term`, ignoring case.
///
/// Records that fail to serialize never match.
pub fn default_search<T: Serialize>(item: &T, term: &str) -> bool {
    let needle = term.to_lowercase();
    field_texts(item)
        .iter()
        .any(|text| text.to_lowercase().contains(&needle))
}

/// String forms of every top-level field of `item`.
///
/// Scalars use their plain text form, nulls read `null`, arrays join their
/// elements with `,`, and nested objects collapse to the opaque tag
/// [`OBJECT_TAG`].
pub fn field_texts<T: Serialize>(item: &T) -> Vec<String> {
    let value = match serde_json::to_value(item) {
        Ok(value) => value,
        Err(err) => {
            trace!("record not searchable: {err}");
            return Vec::new();
        }
    };
    match value {
        Value::Object(map) => map.values().map(value_text).collect(),
        other => vec![value_text(&other)],
    }
}

/// Text a nested object contributes to the default search.
pub const OBJECT_TAG: &str = "[object Object]";

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Object(_) => OBJECT_TAG.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => value_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
    }
}

/// Build a fuzzy search predicate over the text `haystack` extracts.
///
/// Uses nucleo's fuzzy matching with case folding, so `"sflwr"` matches
/// `"Sunflowers"`.
pub fn fuzzy<T: 'static>(
    haystack: impl Fn(&T) -> String + Send + Sync + 'static,
) -> impl Fn(&T, &str) -> bool + Send + Sync + 'static {
    move |item, term| fuzzy_matches(&haystack(item), term)
}

/// Whether `text` fuzzily matches `query`. An empty query matches everything.
pub fn fuzzy_matches(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );
    let mut buf = Vec::new();
    pattern
        .score(Utf32Str::new(text, &mut buf), &mut matcher)
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_search_is_case_insensitive() {
        let record = json!({"id": "1", "name": "Banana"});
        assert!(default_search(&record, "AN"));
        assert!(default_search(&record, "ban"));
        assert!(!default_search(&record, "apple"));
    }

    #[test]
    fn test_default_search_matches_unshown_fields() {
        let record = json!({"id": "42", "name": "Water Lilies", "sku": "WL-1906"});
        assert!(default_search(&record, "wl-19"));
    }

    #[test]
    fn test_field_texts_stringify_every_field() {
        let record = json!({
            "title": "Haystacks",
            "price": 12.5,
            "stock": null,
            "artist": {"name": "Monet"},
            "tags": ["oil", null, "landscape"],
        });
        let mut texts = field_texts(&record);
        texts.sort();
        assert_eq!(
            texts,
            vec!["12.5", "Haystacks", "[object Object]", "null", "oil,,landscape"]
        );
    }

    #[test]
    fn test_default_search_matches_null_and_object_tags() {
        let record = json!({"id": "1", "name": "a", "stock": null, "artist": {"n": "Monet"}});
        assert!(default_search(&record, "null"));
        assert!(default_search(&record, "object"));
        assert!(!default_search(&record, "monet"));
    }

    #[test]
    fn test_fuzzy_matches() {
        assert!(fuzzy_matches("Sunflowers", "sflwr"));
        assert!(fuzzy_matches("Sunflowers", ""));
        assert!(!fuzzy_matches("Sunflowers", "xyz"));
    }
}
