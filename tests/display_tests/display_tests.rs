//! Tests for table rendering

use shelfdb::display::{fit, format_header, format_record, render_table};
use shelfdb::{Database, Record, Status};

const WIDTH: usize = 21;

#[test]
fn test_fit_pads_short_text() {
    assert_eq!(fit("Drill", 8), "Drill   ");
}

#[test]
fn test_fit_truncates_long_text() {
    assert_eq!(fit("Cordless impact driver", 10), "Cordless i");
}

#[test]
fn test_fit_counts_characters_not_bytes() {
    assert_eq!(fit("Säge", 5), "Säge ");
    assert_eq!(fit("Sägeblätter", 4), "Säge");
}

#[test]
fn test_format_record_columns() {
    let record = Record::new("Drill", "2020/05/01", Status::In, "ShelfA");

    let line = format_record(&record, WIDTH);

    assert_eq!(&line[..21], "Drill                ");
    assert_eq!(&line[21..42], "2020/05/01           ");
    assert_eq!(&line[42..63], "IN                   ");
    assert_eq!(&line[63..], "ShelfA");
}

#[test]
fn test_format_record_truncates_each_field() {
    let record = Record::new(
        "A very long item name indeed",
        "2020/05/01",
        Status::Out,
        "The far corner of the basement",
    );

    let line = format_record(&record, WIDTH);

    assert_eq!(&line[..21], "A very long item name");
    assert_eq!(&line[63..], "The far corner of the");
}

#[test]
fn test_last_column_has_no_trailing_padding() {
    let record = Record::new("Drill", "2020/05/01", Status::In, "ShelfA");

    let line = format_record(&record, WIDTH);

    assert_eq!(line.len(), 3 * WIDTH + "ShelfA".len());
    assert!(!line.ends_with(' '));
    assert!(!format_header(WIDTH, false).ends_with(' '));
}

#[test]
fn test_header() {
    assert_eq!(
        format_header(WIDTH, false),
        "Name                 Date Purchased       Status               Location"
    );
    assert_eq!(
        format_header(WIDTH, true),
        "    Name                 Date Purchased       Status               Location"
    );
}

#[test]
fn test_render_numbered_table() {
    let database = Database::from_records(vec![
        Record::new("Drill", "2020/05/01", Status::In, "ShelfA"),
        Record::new("Saw", "2019/11/23", Status::Out, "Garage"),
    ]);

    let table = render_table(&database, WIDTH, true);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("1   Drill"));
    assert!(lines[2].starts_with("2   Saw"));
    assert!(lines[2].ends_with("Garage"));
}

#[test]
fn test_render_unnumbered_table() {
    let database = Database::from_records(vec![Record::new(
        "Drill", "2020/05/01", Status::In, "ShelfA",
    )]);

    let table = render_table(&database, WIDTH, false);

    assert!(table.lines().nth(1).unwrap().starts_with("Drill "));
}

#[test]
fn test_render_empty_table_is_header_only() {
    let table = render_table(&Database::new(), WIDTH, false);
    assert_eq!(table.lines().count(), 1);
}
