//! JSON output formatting

use crate::surface::TableRow;
use serde_json::Value;

/// Format result rows as the JSON array the directory returned
pub fn format(rows: &[TableRow]) -> String {
    let items: Vec<Value> = rows
        .iter()
        .map(|row| {
            serde_json::from_str(row.payload())
                .unwrap_or_else(|_| Value::String(row.payload().to_string()))
        })
        .collect();
    serde_json::to_string_pretty(&items)
        .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize results: {}"}}"#, e))
}
