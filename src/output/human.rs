//! Human-readable output formatting

use crate::surface::TableRow;

/// Format result rows for human consumption
pub fn format(rows: &[TableRow]) -> String {
    let mut output = String::new();

    if rows.is_empty() {
        output.push_str("No thing descriptions found\n");
        return output;
    }

    output.push_str(&format!("Found {} thing descriptions\n\n", rows.len()));

    for (i, row) in rows.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} [{}] {}\n",
            i + 1,
            row.thing_id(),
            row.thing_type(),
            row.title()
        ));
    }

    output
}
