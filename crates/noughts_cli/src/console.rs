//! Console collaborators: where moves come from and messages go.

use std::io::{self, BufRead, Write};

/// Error from the underlying terminal.
#[derive(Debug, derive_more::Display, derive_more::From)]
#[display("console I/O failed: {_0}")]
pub struct ConsoleError(io::Error);

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Blocking input source and output sink for one player terminal.
pub trait Console {
    /// Shows `prompt` without a trailing newline, then reads the next
    /// entry.
    ///
    /// Returns `Ok(None)` once input is exhausted. Unparseable entries
    /// coerce to 0, which is never a free position, so the selection
    /// loop re-prompts instead of erroring.
    fn read_entry(&mut self, prompt: &str) -> Result<Option<i64>, ConsoleError>;

    /// Writes one line of output.
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;
}

/// Line-oriented console over a reader and writer pair.
///
/// The binary attaches it to stdio; tests drive the same code over
/// in-memory buffers.
#[derive(Debug)]
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl LineConsole<io::BufReader<io::Stdin>, io::Stdout> {
    /// Console attached to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> LineConsole<R, W> {
    /// Creates a console over an arbitrary reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the console, handing back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_entry(&mut self, prompt: &str) -> Result<Option<i64>, ConsoleError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(coerce_entry(&line)))
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Coerces a raw input line to an entry. Unparseable text becomes 0.
fn coerce_entry(line: &str) -> i64 {
    line.trim().parse().unwrap_or(0)
}
