//! Menu definitions
//!
//! The nine main-menu choices and their parser.

use crate::error::{Result, ShelfError};

/// Main-menu text, printed before every choice
pub const MENU_TEXT: &str = "\
Main Menu

1. Load database
2. Save (close) database
3. Query (search)
4. Display database
5. Sort
6. Enter new item
7. Remove item
8. Change status and location of item
9. Exit";

/// Prompt shown under the menu
pub const MENU_PROMPT: &str = "Choose item from menu: ";

/// A parsed menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    Load = 1,
    Save = 2,
    Query = 3,
    Display = 4,
    Sort = 5,
    Insert = 6,
    Delete = 7,
    Edit = 8,
    Exit = 9,
}

impl MenuChoice {
    /// Parse exactly one of "1".."9"
    pub fn parse(input: &str) -> Result<Self> {
        let choice = match input {
            "1" => MenuChoice::Load,
            "2" => MenuChoice::Save,
            "3" => MenuChoice::Query,
            "4" => MenuChoice::Display,
            "5" => MenuChoice::Sort,
            "6" => MenuChoice::Insert,
            "7" => MenuChoice::Delete,
            "8" => MenuChoice::Edit,
            "9" => MenuChoice::Exit,
            _ => return Err(ShelfError::InvalidChoice),
        };
        Ok(choice)
    }

    /// Whether the choice needs a non-empty database
    pub fn requires_records(&self) -> bool {
        matches!(self, MenuChoice::Query | MenuChoice::Delete | MenuChoice::Edit)
    }
}
