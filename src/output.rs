//! Write trait abstractions for stdout, stderr and files.

use anyhow::{Context, Result};
use std::fmt::{self, Debug, Formatter};
use std::fs::File;
use std::io::{self, ErrorKind::BrokenPipe, LineWriter, Write};
use std::path::Path;

/// `Writer` dynamic dispatches the `Write` trait.
pub type Writer = Box<dyn Write>;

/// `Output` writes to either a file or stream like stdout or stderr.
pub struct Output {
    writer: Writer,
}

impl Debug for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("writer", &"<dyn Write>")
            .finish()
    }
}

impl Default for Output {
    /// Default output is stdout
    fn default() -> Self {
        Self::stdout()
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Output {
    /// Creates an `Output` that writes to a file with error context.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn file(path: &Path) -> Result<Self> {
        let file: Writer = File::create(path)
            .map(|file| Box::new(LineWriter::new(file)))
            .with_context(|| format!("failed to create output file: {}", path.display()))?;

        Ok(Self { writer: file })
    }

    /// Creates an `Output` that writes to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(io::stdout().lock()),
        }
    }

    /// Creates an `Output` that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(io::stderr().lock()),
        }
    }

    /// Writes a chunk to the writer, handling `BrokenPipe` errors gracefully.
    ///
    /// # Errors
    ///
    /// Returns write errors other than `BrokenPipe`.
    pub fn write_chunk(&mut self, chunk: &str) -> Result<()> {
        Self::handle_broken_pipe(self.writer.write_all(chunk.as_bytes()))
    }

    /// Flushes the writer, ensuring all output is written.
    ///
    /// # Errors
    ///
    /// Returns flush errors other than `BrokenPipe`.
    pub fn flush(&mut self) -> Result<()> {
        Self::handle_broken_pipe(self.writer.flush())
    }

    /// Processes the result of a write, handling `BrokenPipe` errors gracefully.
    fn handle_broken_pipe(result: io::Result<()>) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(err) => match err.kind() {
                BrokenPipe => Ok(()),
                _ => Err(err.into()),
            },
        }
    }
}
