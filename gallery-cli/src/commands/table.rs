//! `gallery table`: browse a collection export.

use std::io::Write;
use std::sync::{Arc, Mutex};

use gallery_views::table::search::{field_texts, fuzzy_matches};
use gallery_views::table::{self, Column, SortValue, Table};
use log::{info, warn};
use serde_json::Value;

use crate::cli::TableArgs;
use crate::config::Config;
use crate::error::CliError;

use super::load_array;

pub fn run(args: &TableArgs, config: &Config, out: &mut impl Write) -> Result<(), CliError> {
    let records: Vec<Value> = load_array(&args.records)?;
    info!(
        "loaded {} records from {}",
        records.len(),
        args.records.display()
    );

    let opened: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&opened);

    let mut table = Table::new(columns(&args.columns, &records), record_key)
        .pagination(config.pagination())
        .on_row_click(move |record: &Value| {
            if let Ok(mut slot) = sink.lock() {
                *slot = Some(record.clone());
            }
        });
    if args.fuzzy {
        table = table.search_fn(|record: &Value, term: &str| {
            fuzzy_matches(&field_texts(record).join(" "), term)
        });
    }

    if let Some(size) = args.page_size {
        table.set_page_size(size)?;
    }
    for id in &args.sort {
        if table.column(id).is_none() {
            return Err(CliError::UnknownColumn(id.clone()));
        }
        table.click_header(id);
    }
    if let Some(term) = &args.search {
        table.set_search(term.as_str());
    }
    table.set_page(args.page);

    for line in table::render(&table, &records) {
        writeln!(out, "{line}")?;
    }

    if let Some(row) = args.open {
        if table.click_row(&records, row) {
            let record = opened.lock().ok().and_then(|slot| slot.clone());
            if let Some(record) = record {
                let pretty = serde_json::to_string_pretty(&record)
                    .unwrap_or_else(|_| record.to_string());
                writeln!(out, "{pretty}")?;
            }
        } else {
            warn!("no visible row {row} on page {}", table.state().page);
            writeln!(out, "No row {row} on this page")?;
        }
    }
    Ok(())
}

/// Build columns from `ID[:Header]` specs, or from the first record's fields.
fn columns(specs: &[String], records: &[Value]) -> Vec<Column<Value>> {
    let specs: Vec<(String, String)> = if specs.is_empty() {
        records
            .first()
            .and_then(Value::as_object)
            .map(|fields| fields.keys().map(|k| (k.clone(), k.clone())).collect())
            .unwrap_or_default()
    } else {
        specs
            .iter()
            .map(|spec| match spec.split_once(':') {
                Some((id, header)) => (id.to_string(), header.to_string()),
                None => (spec.clone(), spec.clone()),
            })
            .collect()
    };

    specs
        .into_iter()
        .map(|(id, header)| {
            let cell_id = id.clone();
            let sort_id = id.clone();
            Column::new(id, header, move |record: &Value| cell_text(record, &cell_id))
                .sort_by(move |record: &Value| {
                    record.get(&sort_id).map_or(SortValue::Null, SortValue::from)
                })
        })
        .collect()
}

/// Display text of one field. Missing fields and nulls are blank.
fn cell_text(record: &Value, field: &str) -> String {
    match record.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Document id when present, else the whole record.
fn record_key(record: &Value) -> String {
    match record.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(id) => id.to_string(),
        None => record.to_string(),
    }
}
