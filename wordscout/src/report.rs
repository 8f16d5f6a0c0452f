//! Renders the final count table as aligned text.

use crate::results::CountTable;

const FILE_HEADER: &str = "FILE";
const TOTAL_LABEL: &str = "TOTAL";

/// Renders the count table, or `None` when nothing matched so the
/// caller can emit its own no-results notice.
///
/// Layout: a header row (`FILE` plus the pattern labels in display
/// order), one row per file key in first-match order, and a `TOTAL` row
/// summing every column when two or more files matched. The file column
/// is left-aligned and sized to the widest of the `FILE` label and the
/// file keys; all count columns share one width, the widest of the
/// labels and the data cells, and are right-aligned.
pub fn render(table: &CountTable) -> Option<String> {
    if table.is_empty() {
        return None;
    }

    let mut key_width = FILE_HEADER.len();
    let mut cell_width = table.labels().iter().map(String::len).max().unwrap_or(0);
    for row in table.rows() {
        key_width = key_width.max(row.key.len());
        for count in &row.counts {
            cell_width = cell_width.max(count.to_string().len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, FILE_HEADER, table.labels(), key_width, cell_width);
    for row in table.rows() {
        let cells: Vec<String> = row.counts.iter().map(u64::to_string).collect();
        push_row(&mut out, &row.key, &cells, key_width, cell_width);
    }
    if table.rows().len() > 1 {
        let cells: Vec<String> = table.totals().iter().map(u64::to_string).collect();
        push_row(&mut out, TOTAL_LABEL, &cells, key_width, cell_width);
    }

    Some(out)
}

fn push_row(out: &mut String, key: &str, cells: &[String], key_width: usize, cell_width: usize) {
    out.push_str(&format!("{:<width$}", key, width = key_width));
    for cell in cells {
        out.push_str(&format!(" | {:>width$}", cell, width = cell_width));
    }
    out.push('\n');
}
