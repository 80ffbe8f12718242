//! Input/output abstractions
//!
//! Host collaborator traits for the simulation, the level file loader, and
//! line-oriented terminal I/O with mock implementations for testing.

pub mod controls;
pub mod level_file;

pub use controls::{Canvas, Controls, FrameInput, Key};
pub use level_file::{load_level_file, parse_level, EntityRecord};

use std::io::{self, Write};

/// Trait for reading user input
pub trait InputReader {
    /// Read a line of input from the user with a prompt.
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, io::Error>;
}

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, io::Error> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input))
    }
}

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}
