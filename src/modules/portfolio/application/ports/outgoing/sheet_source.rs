// src/modules/portfolio/application/ports/outgoing/sheet_source.rs

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

//
// ──────────────────────────────────────────────────────────
// Boundary row
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowError {
    #[error("Unexpected cell shape in column '{column}'")]
    UnexpectedCell { column: String },
}

/// One spreadsheet row keyed by normalized column label.
///
/// Values stay untyped here; the assembler coerces them into domain records
/// and nothing past it sees a `SheetRow`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRow {
    cells: HashMap<String, Value>,
}

impl SheetRow {
    pub fn new(cells: HashMap<String, Value>) -> Self {
        Self { cells }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.cells.insert(key.into(), value);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Cell as text. Absent and null cells read as `""`.
    pub fn text(&self, key: &str) -> Result<String, RowError> {
        match self.cells.get(key) {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Bool(b)) => Ok(b.to_string()),
            Some(Value::Number(n)) => Ok(number_text(n)),
            Some(Value::Array(_)) | Some(Value::Object(_)) => Err(RowError::UnexpectedCell {
                column: key.to_string(),
            }),
        }
    }

    /// First non-empty value among `keys`, tried in order. A structured cell
    /// is passed over when a later alias has text, and reported otherwise.
    pub fn first_text(&self, keys: &[&str]) -> Result<String, RowError> {
        let mut unreadable = None;
        for key in keys {
            match self.text(key) {
                Ok(value) if !value.is_empty() => return Ok(value),
                Ok(_) => {}
                Err(e) => {
                    unreadable.get_or_insert(e);
                }
            }
        }
        match unreadable {
            Some(e) => Err(e),
            None => Ok(String::new()),
        }
    }
}

impl From<HashMap<String, Value>> for SheetRow {
    fn from(cells: HashMap<String, Value>) -> Self {
        Self::new(cells)
    }
}

/// Sheets hand numbers out as doubles; whole values print without a fraction
/// (`2021.0` -> `"2021"`).
fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SheetSourceError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unexpected HTTP status {status}: {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("Response envelope not recognized")]
    Envelope,

    #[error("Malformed payload: {0}")]
    Payload(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Fetches every row of one named sheet.
    async fn fetch_rows(&self, sheet_name: &str) -> Result<Vec<SheetRow>, SheetSourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use serde_json::json;

    fn row() -> SheetRow {
        SheetRow::from(hashmap! {
            "name".to_string() => json!("Ana"),
            "year".to_string() => json!(2021.0),
            "ratio".to_string() => json!(2.5),
            "featured".to_string() => json!(false),
            "empty".to_string() => json!(""),
            "nothing".to_string() => Value::Null,
            "weird".to_string() => json!({"a": 1}),
        })
    }

    #[test]
    fn text_coerces_scalars() {
        let r = row();
        assert_eq!(r.text("name").unwrap(), "Ana");
        assert_eq!(r.text("year").unwrap(), "2021");
        assert_eq!(r.text("ratio").unwrap(), "2.5");
        assert_eq!(r.text("featured").unwrap(), "false");
    }

    #[test]
    fn text_reads_missing_and_null_as_empty() {
        let r = row();
        assert_eq!(r.text("nothing").unwrap(), "");
        assert_eq!(r.text("absent").unwrap(), "");
    }

    #[test]
    fn text_rejects_structured_cells() {
        assert_eq!(
            row().text("weird"),
            Err(RowError::UnexpectedCell {
                column: "weird".to_string()
            })
        );
    }

    #[test]
    fn first_text_skips_empty_aliases() {
        let r = row();
        assert_eq!(r.first_text(&["absent", "empty", "name"]).unwrap(), "Ana");
        assert_eq!(r.first_text(&["absent", "empty"]).unwrap(), "");
    }

    #[test]
    fn first_text_passes_over_structured_alias() {
        let r = row();
        assert_eq!(r.first_text(&["weird", "name"]).unwrap(), "Ana");
        assert_eq!(
            r.first_text(&["weird", "empty"]),
            Err(RowError::UnexpectedCell {
                column: "weird".to_string()
            })
        );
    }
}
