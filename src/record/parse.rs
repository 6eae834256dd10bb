//! Answer parsers
//!
//! Each parser turns one line typed by the user into a typed value or a
//! validation error. None of them loop; `Console::ask` owns the retry.

use crate::error::{Result, ShelfError};

/// Parse a yes/no answer (`y`/`n`, any case) into `true`/`false`
pub fn parse_yes_no(input: &str) -> Result<bool> {
    match input.to_ascii_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        other => Err(ShelfError::InvalidInput(format!("expected y or n, got {:?}", other))),
    }
}

/// Parse a 1-based record number and return the 0-based index
///
/// `len` is the current database length; anything outside `1..=len` fails.
pub fn parse_record_number(input: &str, len: usize) -> Result<usize> {
    let number: usize = input
        .trim()
        .parse()
        .map_err(|_| ShelfError::InvalidRecordNumber { max: len })?;

    if number == 0 || number > len {
        return Err(ShelfError::InvalidRecordNumber { max: len });
    }

    Ok(number - 1)
}

/// Validate a `YYYY/MM/DD` purchase date
///
/// Requires exactly three integer components with month in 1..=12 and day
/// in 1..=31. Returns the date text with whitespace around components removed.
pub fn parse_date(input: &str) -> Result<String> {
    let parts: Vec<&str> = input.trim().split('/').map(str::trim).collect();

    if parts.len() != 3 {
        return Err(ShelfError::InvalidDate(format!(
            "expected YYYY/MM/DD, got {} component(s)",
            parts.len()
        )));
    }

    for part in &parts {
        if !is_integer(part) {
            return Err(ShelfError::InvalidDate(format!("{:?} is not a number", part)));
        }
    }

    // The year is only checked for shape; it may be any size
    if !in_range(parts[1], 12) {
        return Err(ShelfError::InvalidDate(format!("month {} is outside 1-12", parts[1])));
    }
    if !in_range(parts[2], 31) {
        return Err(ShelfError::InvalidDate(format!("day {} is outside 1-31", parts[2])));
    }

    Ok(parts.join("/"))
}

/// Optional sign followed by at least one ASCII digit
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Whether an integer component lies in `1..=max`; too large to parse is out of range
fn in_range(text: &str, max: i64) -> bool {
    text.parse::<i64>().map_or(false, |n| (1..=max).contains(&n))
}

/// Replace every delimiter in free text with a space
pub fn sanitize_text(input: &str, delimiter: char) -> String {
    input.replace(delimiter, " ")
}
