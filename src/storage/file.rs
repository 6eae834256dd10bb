//! Flat file adapter
//!
//! Reads and writes whole database files.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::{Config, RowPolicy};
use crate::database::Database;
use crate::error::Result;
use crate::record::Record;

use super::{decode_line, encode_record, split_lines};

/// Loads and saves database files under one directory
#[derive(Debug, Clone)]
pub struct FlatFile {
    /// Directory base names are resolved against
    data_dir: PathBuf,
    /// Extension appended to every base name
    extension: String,
    delimiter: char,
    row_policy: RowPolicy,
}

/// Outcome of a successful load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows turned into records
    pub records_loaded: usize,

    /// Malformed rows dropped under `RowPolicy::Skip`
    pub rows_skipped: usize,
}

impl FlatFile {
    pub fn new(config: &Config) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            extension: config.extension.clone(),
            delimiter: config.delimiter,
            row_policy: config.row_policy,
        }
    }

    /// Path for a base name typed by the user
    pub fn resolve(&self, base: &str) -> PathBuf {
        self.data_dir.join(format!("{}{}", base, self.extension))
    }

    /// Read a database file
    ///
    /// Under `RowPolicy::Reject` the first malformed row fails the load.
    pub fn load(&self, path: &Path) -> Result<(Database, LoadReport)> {
        let contents = fs::read_to_string(path)?;

        let mut records = Vec::new();
        let mut rows_skipped = 0;

        for (i, line) in split_lines(&contents).into_iter().enumerate() {
            match decode_line(line, i + 1, self.delimiter) {
                Ok(record) => records.push(record),
                Err(e) if self.row_policy == RowPolicy::Skip => {
                    tracing::warn!("Skipping row in {}: {}", path.display(), e);
                    rows_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        let report = LoadReport {
            records_loaded: records.len(),
            rows_skipped,
        };
        tracing::debug!(
            "Loaded {} records from {} ({} skipped)",
            report.records_loaded,
            path.display(),
            report.rows_skipped
        );

        Ok((Database::from_records(records), report))
    }

    /// Write a database file, replacing any existing one
    ///
    /// Returns the number of rows written.
    pub fn save(&self, path: &Path, database: &Database) -> Result<usize> {
        let file: File = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        let mut writer = BufWriter::new(file);
        for record in database {
            self.write_row(&mut writer, record)?;
        }
        writer.flush()?;

        tracing::debug!("Saved {} records to {}", database.len(), path.display());
        Ok(database.len())
    }

    fn write_row<W: Write>(&self, writer: &mut W, record: &Record) -> Result<()> {
        writeln!(writer, "{}", encode_record(record, self.delimiter))?;
        Ok(())
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}
