//! Line-oriented console port used by the ATM menus.

use crate::error::Result;
use std::io::{BufRead, Write};

/// Source of operator input and sink for display lines.
pub trait Console {
    /// Reads the next line without its line terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Displays one line of output.
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// A [`Console`] over any buffered reader and writer.
///
/// Use `stdin().lock()` and `stdout().lock()` interactively, or a
/// `Cursor` and `Vec<u8>` for scripted sessions.
pub struct IoConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        IoConsole { reader, writer }
    }

    /// Consumes the console and returns the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn read_line(&mut self) -> Result<Option<String>> {
        // Prompts are written without waiting for a newline from the reader.
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}
