//! Session Module
//!
//! Owns the database for one interactive run and drives the menu loop.
//!
//! ## Responsibilities
//! - Show the menu and read a validated choice
//! - Dispatch exactly one operation per choice
//! - Guard operations that need records against an empty database
//! - End cleanly on "9" or end of input

mod operations;

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::console::Console;
use crate::database::Database;
use crate::error::{Result, ShelfError};
use crate::menu::{MenuChoice, MENU_PROMPT, MENU_TEXT};
use crate::storage::FlatFile;

/// Message shown when an operation needs records and there are none
const EMPTY_DATABASE: &str = "\nDatabase empty, please load a database";

/// One interactive run of the record manager
///
/// The session is the only owner of the database; each operation borrows
/// it mutably for its duration. There is no shared or global state.
pub struct Session<R, W> {
    /// Session configuration
    config: Config,

    /// File adapter for load/save
    storage: FlatFile,

    /// The table currently loaded
    database: Database,

    /// Where prompts go and answers come from
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty database
    pub fn new(config: Config, console: Console<R, W>) -> Result<Self> {
        config.validate()?;
        let storage = FlatFile::new(&config);

        Ok(Self {
            config,
            storage,
            database: Database::new(),
            console,
        })
    }

    /// Start from an existing database instead of an empty one
    pub fn with_database(mut self, database: Database) -> Self {
        self.database = database;
        self
    }

    /// Run the menu loop until Exit or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            let choice = match self.next_choice() {
                Ok(choice) => choice,
                Err(ShelfError::InputClosed) => break,
                Err(e) => return Err(e),
            };

            if choice == MenuChoice::Exit {
                break;
            }

            match self.execute(choice) {
                Ok(()) => {}
                Err(ShelfError::InputClosed) => break,
                Err(e) => return Err(e),
            }
        }

        tracing::debug!("Session finished with {} records in memory", self.database.len());
        Ok(())
    }

    fn next_choice(&mut self) -> Result<MenuChoice> {
        self.console.say("")?;
        self.console.say(MENU_TEXT)?;
        self.console.say("")?;
        self.console.ask(MENU_PROMPT, MenuChoice::parse)
    }

    /// Execute one menu choice
    pub fn execute(&mut self, choice: MenuChoice) -> Result<()> {
        tracing::debug!("Executing {:?}", choice);

        if choice.requires_records() && self.database.is_empty() {
            self.console.prompt(EMPTY_DATABASE)?;
            return Ok(());
        }

        match choice {
            MenuChoice::Load => self.load(),
            MenuChoice::Save => self.save(),
            MenuChoice::Query => self.query(),
            MenuChoice::Display => self.display(),
            MenuChoice::Sort => self.sort(),
            MenuChoice::Insert => self.insert(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Edit => self.edit(),
            MenuChoice::Exit => Ok(()),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Tear down the session, returning the final database and the console
    pub fn finish(self) -> (Database, Console<R, W>) {
        (self.database, self.console)
    }
}
