//! Tests for the row codec
//!
//! These tests verify:
//! - Record → line encoding
//! - Line → record decoding and row-shape checks
//! - Line splitting rules (trailing empty line, CRLF)

use shelfdb::storage::{decode_line, encode_record, split_lines};
use shelfdb::{Record, ShelfError, Status};

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_record() {
    let record = Record::new("Drill", "2020/05/01", Status::In, "ShelfA");
    assert_eq!(encode_record(&record, ','), "Drill,2020/05/01,IN,ShelfA");
}

#[test]
fn test_encode_with_other_delimiter() {
    let record = Record::new("Saw", "2019/11/23", Status::Out, "Garage");
    assert_eq!(encode_record(&record, '|'), "Saw|2019/11/23|OUT|Garage");
}

#[test]
fn test_encode_empty_fields() {
    let record = Record::new("", "2019/11/23", Status::Out, "");
    assert_eq!(encode_record(&record, ','), ",2019/11/23,OUT,");
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_decode_line() {
    let record = decode_line("Drill,2020/05/01,IN,ShelfA", 1, ',').unwrap();
    assert_eq!(record, Record::new("Drill", "2020/05/01", Status::In, "ShelfA"));
}

#[test]
fn test_decode_normalizes_status_case() {
    let record = decode_line("Drill,2020/05/01,out,ShelfA", 1, ',').unwrap();
    assert_eq!(record.status, Status::Out);
}

#[test]
fn test_decode_keeps_empty_fields() {
    let record = decode_line(",2020/05/01,IN,", 1, ',').unwrap();
    assert_eq!(record.name, "");
    assert_eq!(record.location, "");
}

#[test]
fn test_decode_too_few_fields() {
    match decode_line("Drill,2020/05/01,IN", 7, ',') {
        Err(ShelfError::MalformedRow { line, .. }) => assert_eq!(line, 7),
        other => panic!("expected MalformedRow, got {:?}", other),
    }
}

#[test]
fn test_decode_too_many_fields() {
    assert!(matches!(
        decode_line("Drill,2020/05/01,IN,Shelf,A", 2, ','),
        Err(ShelfError::MalformedRow { line: 2, .. })
    ));
}

#[test]
fn test_decode_bad_status() {
    assert!(matches!(
        decode_line("Drill,2020/05/01,LENT,ShelfA", 3, ','),
        Err(ShelfError::MalformedRow { line: 3, .. })
    ));
}

#[test]
fn test_decode_blank_line() {
    assert!(matches!(
        decode_line("", 1, ','),
        Err(ShelfError::MalformedRow { .. })
    ));
}

#[test]
fn test_encode_decode_preserves_record() {
    let record = Record::new("Tape measure", "2021/7/3", Status::Out, "Van glovebox");
    let line = encode_record(&record, ',');
    assert_eq!(decode_line(&line, 1, ',').unwrap(), record);
}

// =============================================================================
// Line Splitting Tests
// =============================================================================

#[test]
fn test_split_drops_single_trailing_empty_line() {
    assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
    assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
}

#[test]
fn test_split_keeps_inner_and_second_trailing_empty_line() {
    assert_eq!(split_lines("a\n\nb\n\n"), vec!["a", "", "b", ""]);
}

#[test]
fn test_split_empty_contents() {
    assert!(split_lines("").is_empty());
}

#[test]
fn test_split_strips_carriage_returns() {
    assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
}
