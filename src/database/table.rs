//! Database implementation
//!
//! Vec-backed record table.

use crate::record::{Field, Record, SortOrder, Status};

/// Ordered, mutable table of records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Database {
    records: Vec<Record>,
}

/// Previous status and location of an edited record, for undo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub index: usize,
    pub status: Status,
    pub location: String,
}

impl Database {
    /// Create a new empty database
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Append a record at the end
    pub fn push(&mut self, record: Record) {
        tracing::debug!("Appending record {:?}", record.name);
        self.records.push(record);
    }

    /// Remove and return the record at `index`, if any
    pub fn remove(&mut self, index: usize) -> Option<Record> {
        if index >= self.records.len() {
            return None;
        }
        let record = self.records.remove(index);
        tracing::debug!("Removed record {} ({:?})", index + 1, record.name);
        Some(record)
    }

    /// Replace the contents wholesale (used by load)
    pub fn replace(&mut self, other: Database) {
        self.records = other.records;
    }

    /// Records whose `field` equals `value`, ignoring case, with their indexes
    pub fn query(&self, field: Field, value: &str) -> Vec<(usize, &Record)> {
        let needle = value.to_lowercase();
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.field(field).to_lowercase() == needle)
            .collect()
    }

    /// Sort on one field by selection sort
    ///
    /// For each position the first minimum of the remaining records is
    /// swapped in. Descending order is the ascending result reversed.
    pub fn sort(&mut self, field: Field, order: SortOrder) {
        let len = self.records.len();

        for i in 0..len {
            let mut min = i;
            for j in (i + 1)..len {
                if self.records[j].field(field) < self.records[min].field(field) {
                    min = j;
                }
            }
            if min != i {
                self.records.swap(i, min);
            }
        }

        if order == SortOrder::Descending {
            self.records.reverse();
        }

        tracing::debug!("Sorted {} records by {:?} ({:?})", len, field, order);
    }

    /// Flip the status and set a new location, returning what to restore on undo
    ///
    /// Returns `None` if `index` is out of range.
    pub fn toggle_status(&mut self, index: usize, location: String) -> Option<Edit> {
        let record = self.records.get_mut(index)?;

        let previous = Edit {
            index,
            status: record.status,
            location: std::mem::replace(&mut record.location, location),
        };
        record.status = record.status.toggled();

        Some(previous)
    }

    /// Put back the fields captured by `toggle_status`
    pub fn revert(&mut self, edit: Edit) {
        if let Some(record) = self.records.get_mut(edit.index) {
            record.status = edit.status;
            record.location = edit.location;
        }
    }
}

impl<'a> IntoIterator for &'a Database {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for Database {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
