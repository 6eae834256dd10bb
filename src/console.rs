//! Console
//!
//! Line-oriented prompt/answer channel over any reader/writer pair.
//! Production wires it to stdin/stdout; tests drive it with in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{Result, ShelfError};
use crate::record::parse_yes_no;

/// Prompt shown before waiting for the user to acknowledge output
const PAUSE_PROMPT: &str = "Press Enter";

/// Interactive console
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Read one line without its line ending
    ///
    /// Returns `ShelfError::InputClosed` at end of input.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ShelfError::InputClosed);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Print `question` (no line break) and read the answer
    pub fn prompt(&mut self, question: &str) -> Result<String> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;
        self.read_line()
    }

    /// Ask until `parse` accepts the answer
    ///
    /// Validation errors are printed and the question repeated; any other
    /// error (I/O, end of input) is returned.
    pub fn ask<T, F>(&mut self, question: &str, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> Result<T>,
    {
        loop {
            let answer = self.prompt(question)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_validation() => {
                    tracing::debug!("Rejected answer {:?}: {}", answer, e);
                    self.say(&e.to_string())?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Ask a y/n question
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        self.ask(question, parse_yes_no)
    }

    /// Print a line
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Print text as-is (no added line break)
    pub fn write(&mut self, text: &str) -> Result<()> {
        write!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Wait for the user to press Enter
    pub fn pause(&mut self) -> Result<()> {
        self.prompt(PAUSE_PROMPT)?;
        Ok(())
    }

    /// Give back the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
