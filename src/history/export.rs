// src/history/export.rs
use crate::models::HistoryEntry;
use crate::utils::format_timestamp;

pub const EXPORT_FILE_NAME: &str = "password_history.csv";
const HEADER: &str = "Password,Generated";

/// Render entries as CSV, in the order given.
///
/// Every value is wrapped in double quotes; embedded quotes are doubled.
/// Rows are joined with `\n` and there is no trailing newline.
pub fn to_csv(entries: &[HistoryEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(HEADER.to_string());
    for entry in entries {
        lines.push(format!(
            "{},{}",
            quote(&entry.password),
            quote(&format_timestamp(entry.timestamp))
        ));
    }
    lines.join("\n")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
