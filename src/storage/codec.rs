//! Row codec
//!
//! Encoding and decoding between records and text lines.
//!
//! ### Row Format
//! ```text
//! ┌────────┬───┬────────┬───┬────────┬───┬──────────┐
//! │ name   │ , │ date   │ , │ status │ , │ location │
//! └────────┴───┴────────┴───┴────────┴───┴──────────┘
//! ```

use crate::error::{Result, ShelfError};
use crate::record::{Record, Status, FIELD_COUNT};

/// Encode a record as one line (without the line break)
pub fn encode_record(record: &Record, delimiter: char) -> String {
    let mut line = String::with_capacity(
        record.fields().iter().map(|f| f.len() + 1).sum(),
    );

    for (i, field) in record.fields().iter().enumerate() {
        if i > 0 {
            line.push(delimiter);
        }
        line.push_str(field);
    }

    line
}

/// Decode one line into a record
///
/// `line_no` is 1-based and only used for error reporting.
pub fn decode_line(line: &str, line_no: usize, delimiter: char) -> Result<Record> {
    let fields: Vec<&str> = line.split(delimiter).collect();

    if fields.len() != FIELD_COUNT {
        return Err(ShelfError::MalformedRow {
            line: line_no,
            reason: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        });
    }

    let status = Status::parse(fields[2]).map_err(|_| ShelfError::MalformedRow {
        line: line_no,
        reason: format!("status must be IN or OUT, found {:?}", fields[2]),
    })?;

    Ok(Record::new(fields[0], fields[1], status, fields[3]))
}

/// Split file contents into lines
///
/// Splits on `\n`, drops a single trailing empty line and strips a trailing
/// `\r` from each line.
pub fn split_lines(contents: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = contents
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if lines.last() == Some(&"") {
        lines.pop();
    }

    lines
}
