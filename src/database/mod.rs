//! Database Module
//!
//! The in-memory record table the menu operates on.
//!
//! ## Responsibilities
//! - Hold records in insertion order (also the display order)
//! - Case-insensitive field queries
//! - Selection sort on one field, ascending or descending
//! - Append, remove and status/location edits by index
//!
//! ## Data Structure Choice
//! A plain `Vec<Record>`: record numbers shown to the user are positions,
//! and every operation is a linear scan over a few hundred rows at most.

mod table;

pub use table::{Database, Edit};
