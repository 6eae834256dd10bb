//! Record Module
//!
//! The fixed-shape row stored in the database.
//!
//! ## Layout
//! ```text
//! ┌──────────────┬──────────────┬────────┬──────────────┐
//! │ Name (1)     │ Date (2)     │Status  │ Location (4) │
//! │              │ YYYY/MM/DD   │IN|OUT  │              │
//! └──────────────┴──────────────┴────────┴──────────────┘
//! ```
//!
//! The numbers are the 1-based field selectors the user types.

mod parse;

pub use parse::{parse_date, parse_record_number, parse_yes_no, sanitize_text};

use std::fmt;

use crate::error::{Result, ShelfError};

/// Number of fields in every record
pub const FIELD_COUNT: usize = 4;

/// One item in the inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,

    /// Purchase date as entered, `YYYY/MM/DD`
    pub date: String,

    pub status: Status,

    pub location: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        status: Status,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            status,
            location: location.into(),
        }
    }

    /// Text of the selected field
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Date => &self.date,
            Field::Status => self.status.as_str(),
            Field::Location => &self.location,
        }
    }

    /// All four fields in column order
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            self.name.as_str(),
            self.date.as_str(),
            self.status.as_str(),
            self.location.as_str(),
        ]
    }
}

/// Whether an item is on the shelf or lent out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    In,
    Out,
}

impl Status {
    /// Parse `in`/`out` in any letter case
    pub fn parse(input: &str) -> Result<Self> {
        match input.to_ascii_uppercase().as_str() {
            "IN" => Ok(Status::In),
            "OUT" => Ok(Status::Out),
            _ => Err(ShelfError::InvalidStatus(input.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::In => "IN",
            Status::Out => "OUT",
        }
    }

    /// The other status
    pub fn toggled(self) -> Self {
        match self {
            Status::In => Status::Out,
            Status::Out => Status::In,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field selector (1-based for the user)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name = 1,
    Date = 2,
    Status = 3,
    Location = 4,
}

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [Field::Name, Field::Date, Field::Status, Field::Location];

    /// Parse a selector typed by the user ("1".."4")
    pub fn parse(input: &str) -> Result<Self> {
        match input {
            "1" => Ok(Field::Name),
            "2" => Ok(Field::Date),
            "3" => Ok(Field::Status),
            "4" => Ok(Field::Location),
            other => Err(ShelfError::InvalidInput(format!(
                "field must be 1, 2, 3 or 4, got {:?}",
                other
            ))),
        }
    }

    /// Menu label for the field
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Item name",
            Field::Date => "Date bought",
            Field::Status => "Status",
            Field::Location => "Location",
        }
    }

    /// Column heading in table output
    pub fn heading(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Date => "Date Purchased",
            Field::Status => "Status",
            Field::Location => "Location",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Parse `a`/`d` in any letter case
    pub fn parse(input: &str) -> Result<Self> {
        match input.to_ascii_lowercase().as_str() {
            "a" => Ok(SortOrder::Ascending),
            "d" => Ok(SortOrder::Descending),
            other => Err(ShelfError::InvalidInput(format!(
                "expected A or D, got {:?}",
                other
            ))),
        }
    }
}
