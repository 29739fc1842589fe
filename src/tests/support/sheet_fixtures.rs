use serde_json::Value;

use crate::modules::portfolio::application::ports::outgoing::SheetRow;

/// Row of text cells keyed by already-normalized labels.
pub fn row(pairs: &[(&str, &str)]) -> SheetRow {
    let mut r = SheetRow::default();
    for (key, value) in pairs {
        r.insert(*key, Value::String(value.to_string()));
    }
    r
}
