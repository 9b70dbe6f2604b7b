//! # Console
//!
//! The line-oriented seam between the session and the operator.
//!
//! The [`Session`](crate::lifecycle::Session) never touches stdin or stdout
//! directly. It talks to a [`Console`], which is [`StdConsole`] when running
//! for real and [`mock::ScriptedConsole`] in tests.

pub mod mock;

use crate::input::InputError;
use std::io::{BufRead, Write};

/// Line-based I/O with the operator.
pub trait Console {
    /// Shows `prompt` and returns the next line without its line terminator.
    ///
    /// # Errors
    /// [`InputError::Closed`] once no more input will arrive.
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError>;

    /// Prints one line of output.
    fn write_line(&mut self, line: &str) -> Result<(), InputError>;

    /// Prints several lines in order.
    fn write_lines(&mut self, lines: &[String]) -> Result<(), InputError> {
        for line in lines {
            self.write_line(line)?;
        }
        Ok(())
    }
}

/// Console bound to the process's standard streams.
pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
}

impl StdConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn new() -> Self {
        Self {
            reader: std::io::stdin().lock(),
            writer: std::io::stdout(),
        }
    }
}

impl Default for StdConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    /// Wraps arbitrary streams, e.g. a byte slice and a `Vec<u8>`.
    pub fn with_streams(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Closed(prompt.trim().to_string()));
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> Result<(), InputError> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}
