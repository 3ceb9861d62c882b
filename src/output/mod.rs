//! Output formatting

pub mod human;
pub mod json;

use crate::cli::OutputFormat;
use crate::surface::TableRow;

/// Format result rows for output
pub fn format_rows(rows: &[TableRow], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => human::format(rows),
        OutputFormat::Json => json::format(rows),
    }
}
