//! Storage Module
//!
//! Flat-file persistence for the record table.
//!
//! ## Responsibilities
//! - Resolve user-supplied base names to paths (`{data_dir}/{name}{ext}`)
//! - Read a file into a `Database`, checking the shape of every row
//! - Write a `Database` back out, one row per line
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ Drill,2020/05/01,IN,ShelfA\n             │
//! │ Saw,2019/11/23,OUT,Garage\n              │
//! │ ...                                      │
//! └──────────────────────────────────────────┘
//! ```
//! No header, no quoting. Fields never contain the delimiter because
//! user-entered text has it replaced before it reaches the table.

mod codec;
mod file;

pub use codec::{decode_line, encode_record, split_lines};
pub use file::{FlatFile, LoadReport};
