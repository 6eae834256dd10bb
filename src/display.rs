//! Table rendering
//!
//! Fixed-width, left-justified columns. Every field is padded or truncated
//! to the column width; trailing padding at the end of a line is dropped.

use crate::database::Database;
use crate::record::{Field, Record};

/// Prefix placed before the header when rows are numbered
const NUMBERED_HEADER_PREFIX: &str = "    ";

/// Separator printed after a record number
const NUMBER_SEPARATOR: &str = "   ";

/// Pad or truncate `text` to exactly `width` characters
pub fn fit(text: &str, width: usize) -> String {
    let mut cell: String = text.chars().take(width).collect();
    let len = cell.chars().count();
    cell.extend(std::iter::repeat(' ').take(width - len));
    cell
}

/// One record on one line
pub fn format_record(record: &Record, width: usize) -> String {
    let line: String = record.fields().iter().map(|f| fit(f, width)).collect();
    line.trim_end().to_string()
}

/// Column headings on one line
pub fn format_header(width: usize, numbered: bool) -> String {
    let headings: String = Field::ALL.iter().map(|f| fit(f.heading(), width)).collect();
    let prefix = if numbered { NUMBERED_HEADER_PREFIX } else { "" };
    format!("{}{}", prefix, headings.trim_end())
}

/// Header plus every record, optionally prefixed with 1-based numbers
pub fn render_table(database: &Database, width: usize, numbered: bool) -> String {
    let mut out = format_header(width, numbered);
    out.push('\n');

    for (i, record) in database.iter().enumerate() {
        if numbered {
            out.push_str(&(i + 1).to_string());
            out.push_str(NUMBER_SEPARATOR);
        }
        out.push_str(&format_record(record, width));
        out.push('\n');
    }

    out
}
