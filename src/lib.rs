//! # ShelfDB
//!
//! A menu-driven flat-file record manager for a small inventory:
//! - Load/save a delimited text file of fixed-shape records
//! - Query, sort, insert, remove and edit records through a text menu
//! - Typed validation of every answer, with the retry loop at the prompt
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Console (stdin/stdout)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Session (menu loop + ops)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  FlatFile   │          │  Database   │
//!   │ (load/save) │─────────▶│ (Vec<Record>)│
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod database;
pub mod storage;
pub mod display;
pub mod console;
pub mod menu;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ShelfError, Result};
pub use config::{Config, RowPolicy};
pub use database::Database;
pub use record::{Field, Record, SortOrder, Status};
pub use session::Session;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ShelfDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
