//! Indentation decorator.

use super::Output;
use crate::error::Result;

/// Output decorator adding a fixed indent to every logical line.
///
/// Each instance only knows its own increment. Wrapping an indenting
/// output in another one adds the two increments together.
pub struct IndentingOutput<'a> {
    delegate: &'a mut dyn Output,
    prefix: String,
}

impl<'a> IndentingOutput<'a> {
    /// Wraps `delegate`, indenting by `indent` spaces.
    ///
    /// An indent of zero forwards everything unchanged.
    pub fn new(delegate: &'a mut dyn Output, indent: usize) -> Self {
        Self {
            delegate,
            prefix: " ".repeat(indent),
        }
    }

    /// Width of the indent this decorator adds
    pub fn indent(&self) -> usize {
        self.prefix.len()
    }
}

impl Output for IndentingOutput<'_> {
    fn write_lines(&mut self, lines: &[&str]) -> Result<()> {
        let mut line = String::new();
        for l in lines {
            line.clear();
            line.push_str(&self.prefix);
            line.push_str(l);
            self.delegate.write_lines(&[line.as_str()])?;
        }
        Ok(())
    }

    fn start_line(&mut self) -> Result<()> {
        // Outer levels emit their prefixes first
        self.delegate.start_line()?;
        self.delegate.write(&self.prefix)
    }

    fn write(&mut self, fragment: &str) -> Result<()> {
        self.delegate.write(fragment)
    }
}

impl std::fmt::Debug for IndentingOutput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndentingOutput")
            .field("indent", &self.indent())
            .finish_non_exhaustive()
    }
}
