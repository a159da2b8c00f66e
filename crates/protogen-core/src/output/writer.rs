//! Terminal output writing to an [`std::io::Write`].

use super::Output;
use crate::error::Result;
use std::io::Write;

/// Output that writes text straight to an underlying writer.
///
/// No buffering and no indentation: each call maps to writes on the
/// wrapped writer, and the first I/O failure is returned as is.
#[derive(Debug)]
pub struct WriterOutput<W: Write> {
    writer: W,
}

impl<W: Write> WriterOutput<W> {
    /// Creates a new output over the given writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the output, returning the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for WriterOutput<W> {
    fn write_lines(&mut self, lines: &[&str]) -> Result<()> {
        for line in lines {
            self.write(line)?;
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    fn start_line(&mut self) -> Result<()> {
        Ok(())
    }

    fn write(&mut self, fragment: &str) -> Result<()> {
        self.writer.write_all(fragment.as_bytes())?;
        Ok(())
    }
}
