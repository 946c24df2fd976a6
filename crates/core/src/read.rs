//! Payload parsers for the two confirmation read strategies.
//!
//! Each parser is a pure function from a raw response body to normalized
//! rows, so the strategies can be exercised without network access. The web
//! crate decides which endpoint to fetch and in which order.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::confirmations::ConfirmationRow;

/// Errors produced while decoding a read-strategy payload.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses the structured JSON endpoint's response: a JSON array of row
/// objects with possibly historical key spellings.
///
/// Rows come back oldest-first from the spreadsheet, so the result is
/// reversed to put the most recent submission first. A non-array document
/// yields no rows.
pub fn parse_json_rows(body: &str) -> Result<Vec<ConfirmationRow>, ReadError> {
    let document: Value = serde_json::from_str(body)?;

    let mut rows: Vec<ConfirmationRow> = document
        .as_array()
        .map(|items| items.iter().map(row_from_value).collect())
        .unwrap_or_default();

    rows.reverse();
    Ok(rows)
}

/// Parses the public spreadsheet visualization export.
///
/// The export wraps its JSON document in a JS callback
/// (`...setResponse({...});`) which is stripped before parsing. Column
/// labels come from `table.cols` (label, falling back to the column id,
/// then a positional `col{idx}` name) and are zipped against each row's
/// cell values; missing or null cells become the empty string. As with the
/// JSON endpoint, the result is reversed newest-first.
pub fn parse_gviz_rows(body: &str) -> Result<Vec<ConfirmationRow>, ReadError> {
    let document: Value = serde_json::from_str(strip_gviz_wrapper(body))?;

    let table = &document["table"];
    let labels: Vec<String> = table["cols"]
        .as_array()
        .map(|cols| {
            cols.iter()
                .enumerate()
                .map(|(idx, col)| column_label(col, idx))
                .collect()
        })
        .unwrap_or_default();

    let mut rows: Vec<ConfirmationRow> = table["rows"]
        .as_array()
        .map(|raw_rows| {
            raw_rows
                .iter()
                .map(|raw_row| {
                    let mut object = Map::new();
                    for (idx, cell) in raw_row["c"].as_array().into_iter().flatten().enumerate() {
                        let key = labels
                            .get(idx)
                            .cloned()
                            .unwrap_or_else(|| format!("col{idx}"));
                        // Null cells become "" here, before normalization,
                        // so alias resolution sees a present column and does
                        // not fall through to a later legacy one.
                        let value = match &cell["v"] {
                            Value::Null => Value::String(String::new()),
                            value => value.clone(),
                        };
                        object.insert(key, value);
                    }
                    ConfirmationRow::from_raw(&object)
                })
                .collect()
        })
        .unwrap_or_default();

    rows.reverse();
    Ok(rows)
}

/// Strips the JS callback wrapper around the gviz JSON payload.
///
/// Everything up to and including the last `setResponse(` is dropped, as is
/// the trailing `);`. A body without the wrapper is returned unchanged and
/// left for the JSON parser to judge.
fn strip_gviz_wrapper(body: &str) -> &str {
    let start = body
        .rfind("setResponse(")
        .map(|idx| idx + "setResponse(".len())
        .unwrap_or(0);
    let inner = body[start..].trim_end();
    inner.strip_suffix(");").unwrap_or(inner)
}

fn row_from_value(value: &Value) -> ConfirmationRow {
    match value.as_object() {
        Some(object) => ConfirmationRow::from_raw(object),
        None => ConfirmationRow::default(),
    }
}

fn column_label(col: &Value, idx: usize) -> String {
    let label = col["label"].as_str().unwrap_or_default();
    if !label.is_empty() {
        return label.to_string();
    }
    let id = col["id"].as_str().unwrap_or_default();
    if !id.is_empty() {
        return id.to_string();
    }
    format!("col{idx}")
}
