//! Menu operations
//!
//! One method per menu entry. Each gathers its answers through the console,
//! touches the database at most once, and ends with a pause.

use std::io::{BufRead, Write};

use crate::display::{format_record, render_table};
use crate::error::{Result, ShelfError};
use crate::record::{
    parse_date, parse_record_number, sanitize_text, Field, Record, SortOrder, Status,
};

use super::Session;

impl<R: BufRead, W: Write> Session<R, W> {
    // =========================================================================
    // Load / Save
    // =========================================================================

    /// Replace the database with the contents of a file
    pub(super) fn load(&mut self) -> Result<()> {
        self.console.say("\nLoading a database file\n")?;
        self.announce_extension()?;

        let report = loop {
            let base = self.console.prompt("Enter filename:")?;
            let path = self.storage.resolve(&base);

            match self.storage.load(&path) {
                Ok((database, report)) => {
                    self.database.replace(database);
                    break report;
                }
                Err(ShelfError::Io(e)) => {
                    tracing::warn!("Could not open {}: {}", path.display(), e);
                    self.console
                        .say(&format!("Error, could not open {}", path.display()))?;
                }
                Err(e @ ShelfError::MalformedRow { .. }) => {
                    tracing::warn!("Rejected {}: {}", path.display(), e);
                    self.console
                        .say(&format!("Error, {} is not a valid database: {}", path.display(), e))?;
                }
                Err(e) => return Err(e),
            }
        };

        self.console.say("Database loaded")?;
        if report.rows_skipped > 0 {
            self.console
                .say(&format!("{} malformed row(s) skipped", report.rows_skipped))?;
        }
        self.console.say("")?;
        self.console.pause()
    }

    /// Write the database to a file; the database itself is not changed
    pub(super) fn save(&mut self) -> Result<()> {
        self.console.say("\nSaving a database file\n")?;
        self.announce_extension()?;

        loop {
            let base = self.console.prompt("Enter filename:")?;
            let path = self.storage.resolve(&base);

            match self.storage.save(&path, &self.database) {
                Ok(_) => break,
                Err(ShelfError::Io(e)) => {
                    tracing::warn!("Could not write {}: {}", path.display(), e);
                    self.console
                        .say(&format!("Error, could not write {}", path.display()))?;
                }
                Err(e) => return Err(e),
            }
        }

        self.console.say("\nFile saved\n")?;
        self.console.pause()
    }

    fn announce_extension(&mut self) -> Result<()> {
        let notice = format!(
            "Filename will have a {} extension added, do not enter it",
            self.storage.extension()
        );
        self.console.say(&notice)
    }

    // =========================================================================
    // Read-only views
    // =========================================================================

    /// Show records whose chosen field matches a value, ignoring case
    pub(super) fn query(&mut self) -> Result<()> {
        self.console.say("\nQuerying the Database\n")?;

        let field = self.ask_field("Which field to query?")?;
        let value = self.console.prompt("What value to look for? ")?;

        let width = self.config.column_width;
        let lines: Vec<String> = self
            .database
            .query(field, &value)
            .into_iter()
            .map(|(_, record)| format_record(record, width))
            .collect();

        for line in &lines {
            self.console.say(line)?;
        }
        self.console.say(&format!("\n{} record(s) found", lines.len()))?;
        self.console.say("")?;
        self.console.pause()
    }

    /// Show the whole database without record numbers
    pub(super) fn display(&mut self) -> Result<()> {
        self.console.say("Display Database\n")?;
        let table = render_table(&self.database, self.config.column_width, false);
        self.console.write(&table)?;
        self.console
            .say(&format!("\n{} records", self.database.len()))?;
        self.console.say("")?;
        self.console.pause()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Sort on a chosen field and direction after confirmation
    pub(super) fn sort(&mut self) -> Result<()> {
        self.console.say("\nSorting the Database\n")?;

        let field = self.ask_field("Which field to sort by?")?;
        let order = self
            .console
            .ask("Ascending(A) or Descending(D)? ", SortOrder::parse)?;

        if self
            .console
            .confirm("\nAre you sure you want to sort the database? (y/n)")?
        {
            self.database.sort(field, order);
            self.console.say("\nDatabase sorted")?;
        } else {
            self.console.say("\nDatabase not sorted")?;
        }

        self.console.say("")?;
        self.console.pause()
    }

    /// Build a new record from validated answers and append it after confirmation
    pub(super) fn insert(&mut self) -> Result<()> {
        self.console.say("\nCreate new record\n")?;
        let delimiter = self.config.delimiter;

        let name = sanitize_text(&self.console.prompt("Item name? ")?, delimiter);
        let date = self.console.ask("Date bought (YYYY/MM/DD) ? ", parse_date)?;
        let status = self.console.ask("Status (IN/OUT)? ", Status::parse)?;
        let location = sanitize_text(&self.console.prompt("Location? ")?, delimiter);

        let record = Record::new(name, date, status, location);

        self.console.say("")?;
        self.console
            .say(&format_record(&record, self.config.column_width))?;

        if self.console.confirm("\nDo you want to add this record? (y/n)")? {
            self.database.push(record);
            self.console.say("\nRecord added")?;
        } else {
            self.console.say("\nNo changes were made")?;
        }

        self.console.say("")?;
        self.console.pause()
    }

    /// Remove one record chosen by number after confirmation
    pub(super) fn delete(&mut self) -> Result<()> {
        self.console.say("\nRemove a record\n")?;

        let index = self.ask_record_number()?;
        if let Some(record) = self.database.get(index) {
            let line = format_record(record, self.config.column_width);
            self.console.say(&line)?;
        }

        if self.console.confirm("Do you want to delete this record? (y/n)")? {
            self.database.remove(index);
            self.console.say("\nRecord removed")?;
        } else {
            self.console.say("\nNo changes were made")?;
        }

        self.console.say("")?;
        self.console.pause()
    }

    /// Toggle a record's status and set a new location; undone if not confirmed
    pub(super) fn edit(&mut self) -> Result<()> {
        self.console.say("\nChange an item's status\n")?;

        let index = self.ask_record_number()?;
        let location = sanitize_text(&self.console.prompt("New location? ")?, self.config.delimiter);

        let Some(previous) = self.database.toggle_status(index, location) else {
            return Ok(());
        };

        if let Some(record) = self.database.get(index) {
            let line = format_record(record, self.config.column_width);
            self.console.say(&line)?;
        }

        let confirmed = match self.console.confirm("Do you want to make the change? (y/n)") {
            Ok(confirmed) => confirmed,
            Err(e) => {
                self.database.revert(previous);
                return Err(e);
            }
        };

        if confirmed {
            self.console.say("\nStatus and location changed")?;
        } else {
            self.database.revert(previous);
            self.console.say("\nStatus and location did NOT change")?;
        }

        self.console.say("")?;
        self.console.pause()
    }

    // =========================================================================
    // Shared prompts
    // =========================================================================

    fn ask_field(&mut self, title: &str) -> Result<Field> {
        self.console.say(title)?;
        for field in Field::ALL {
            self.console
                .say(&format!("{}. {}", field as u8, field.label()))?;
        }
        self.console.ask("Which field? ", Field::parse)
    }

    /// Show the numbered table and ask for a record; returns a 0-based index
    fn ask_record_number(&mut self) -> Result<usize> {
        let table = render_table(&self.database, self.config.column_width, true);
        self.console.write(&table)?;

        let len = self.database.len();
        self.console
            .ask("\nWhich record? ", |answer| parse_record_number(answer, len))
    }
}
