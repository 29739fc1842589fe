//! Decoding of the visualization-query JSON the spreadsheet endpoint returns.
//!
//! The payload arrives wrapped in a JavaScript callback:
//! `google.visualization.Query.setResponse({...});`

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

use crate::modules::portfolio::application::ports::outgoing::{SheetRow, SheetSourceError};

static ENVELOPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"google\.visualization\.Query\.setResponse\(([\s\S]+)\);")
        .expect("valid envelope regex")
});

#[derive(Debug, Deserialize)]
pub struct GvizResponse {
    #[serde(default)]
    pub table: Option<GvizTable>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GvizTable {
    #[serde(default)]
    pub cols: Option<Vec<Option<GvizColumn>>>,
    #[serde(default)]
    pub rows: Option<Vec<GvizRow>>,
}

#[derive(Debug, Deserialize)]
pub struct GvizColumn {
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GvizRow {
    #[serde(default)]
    pub c: Vec<Option<GvizCell>>,
}

#[derive(Debug, Deserialize)]
pub struct GvizCell {
    #[serde(default)]
    pub v: Value,
}

pub fn extract_envelope(body: &str) -> Option<&str> {
    ENVELOPE
        .captures(body)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// `"Profile Pic:"` -> `"profilepic"`. Whitespace and `: _ -` are dropped.
pub fn normalize_label(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, ':' | '_' | '-'))
        .collect()
}

/// A response without `table`, `cols` or `rows` decodes to no rows.
pub fn decode_table(table: Option<GvizTable>) -> Vec<SheetRow> {
    let Some(GvizTable {
        cols: Some(cols),
        rows: Some(rows),
    }) = table
    else {
        return Vec::new();
    };

    let headers: Vec<String> = cols
        .iter()
        .map(|col| {
            col.as_ref()
                .and_then(|c| c.label.as_deref())
                .map(normalize_label)
                .unwrap_or_default()
        })
        .collect();

    debug!(columns = ?headers, "Normalized sheet columns");

    rows.into_iter()
        .map(|row| {
            let cells: HashMap<String, Value> = headers
                .iter()
                .zip(row.c)
                .filter(|(header, _)| !header.is_empty())
                .map(|(header, cell)| {
                    let value = match cell.map(|c| c.v) {
                        None | Some(Value::Null) => Value::String(String::new()),
                        Some(v) => v,
                    };
                    (header.clone(), value)
                })
                .collect();
            SheetRow::from(cells)
        })
        .collect()
}

pub fn parse_response(body: &str) -> Result<Vec<SheetRow>, SheetSourceError> {
    let json = extract_envelope(body).ok_or(SheetSourceError::Envelope)?;
    let response: GvizResponse =
        serde_json::from_str(json).map_err(|e| SheetSourceError::Payload(e.to_string()))?;
    Ok(decode_table(response.table))
}
