//! Blocking terminal prompts.

use std::io::{self, BufRead, Write};

use crate::params::{ParameterSource, Prompt};

/// Reads answers line by line from any buffered reader, echoing prompts to a
/// writer. [`StdinSource::terminal`] binds it to the process's stdin/stdout.
pub struct StdinSource<R, W> {
    reader: R,
    writer: W,
}

impl StdinSource<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout, read from stdin.
    pub fn terminal() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdinSource<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> ParameterSource for StdinSource<R, W> {
    fn read(&mut self, prompt: Prompt) -> io::Result<String> {
        write!(self.writer, "{}", prompt.text())?;
        self.writer.flush()?;

        // EOF reads as an empty answer and fails validation.
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
