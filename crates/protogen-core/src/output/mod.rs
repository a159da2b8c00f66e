//! Text output contracts.
//!
//! Every element of a proto tree renders itself through the [`Output`]
//! trait. Two implementations are provided:
//!
//! - [`WriterOutput`]: the terminal sink, turning text into bytes on any
//!   [`std::io::Write`]
//! - [`IndentingOutput`]: a decorator prefixing each logical line with a
//!   fixed number of spaces
//!
//! Decorators wrap one another, so an element nested `d` levels deep sees
//! an output that indents by the sum of all enclosing levels without ever
//! knowing its own depth.
//!
//! ## Logical lines
//!
//! Whole lines go through [`Output::write_lines`]. A line assembled from
//! several pieces starts with [`Output::start_line`] (which emits the
//! indentation once), continues with [`Output::write`] calls, and must be
//! terminated by the caller writing its own `\n`.

mod indent;
mod writer;

use crate::error::Result;

pub use indent::IndentingOutput;
pub use writer::WriterOutput;

/// Destination for rendered text.
///
/// An output is used by one renderer at a time; a render call must finish
/// (or fail) before anything else touches the same output.
pub trait Output {
    /// Write each line followed by a newline, in order.
    ///
    /// Stops at the first failure. Lines already written stay written.
    fn write_lines(&mut self, lines: &[&str]) -> Result<()>;

    /// Begin a logical line that will be composed from inline writes.
    fn start_line(&mut self) -> Result<()>;

    /// Write a fragment without a trailing newline.
    fn write(&mut self, fragment: &str) -> Result<()>;

    /// Write a single line followed by a newline.
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.write_lines(&[line])
    }
}

/// An element that can serialize itself to an [`Output`].
pub trait Renderer {
    /// Write the textual representation of this element.
    fn render(&self, out: &mut dyn Output) -> Result<()>;

    /// Render into a freshly allocated string
    fn render_to_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.render(&mut WriterOutput::new(&mut buf))?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Render every element in order, stopping at the first error.
pub fn render_all<'a, R, I>(out: &mut dyn Output, elements: I) -> Result<()>
where
    R: Renderer + 'a,
    I: IntoIterator<Item = &'a R>,
{
    for element in elements {
        element.render(out)?;
    }
    Ok(())
}

/// Render every element in order, one indentation level deeper than `out`.
///
/// The decorator lives only for the duration of this call.
pub fn render_nested<'a, R, I>(out: &mut dyn Output, indent: usize, elements: I) -> Result<()>
where
    R: Renderer + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut nested = IndentingOutput::new(out, indent);
    render_all(&mut nested, elements)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use std::io;

    /// A sink that accepts `limit` writes and rejects everything after.
    pub(crate) struct FailingWriter {
        pub(crate) written: Vec<u8>,
        remaining: usize,
    }

    impl FailingWriter {
        pub(crate) fn new(limit: usize) -> Self {
            Self {
                written: Vec::new(),
                remaining: limit,
            }
        }

        pub(crate) fn text(&self) -> String {
            String::from_utf8_lossy(&self.written).into_owned()
        }
    }

    impl io::Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            self.remaining -= 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Line(&'static str);

    impl Renderer for Line {
        fn render(&self, out: &mut dyn Output) -> Result<()> {
            out.write_line(self.0)
        }
    }

    struct Block(Vec<Line>);

    impl Renderer for Block {
        fn render(&self, out: &mut dyn Output) -> Result<()> {
            out.write_line("{")?;
            render_nested(out, 2, &self.0)?;
            out.write_line("}")
        }
    }

    #[test]
    fn test_render_all_preserves_order() {
        let lines = vec![Line("b"), Line("a"), Line("b")];
        let mut buf = Vec::new();
        render_all(&mut WriterOutput::new(&mut buf), &lines).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "b\na\nb\n");
    }

    #[test]
    fn test_render_nested() {
        let block = Block(vec![Line("one"), Line("two")]);
        assert_eq!(block.render_to_string().unwrap(), "{\n  one\n  two\n}\n");
    }

    #[test]
    fn test_render_is_repeatable() {
        let block = Block(vec![Line("x")]);
        assert_eq!(
            block.render_to_string().unwrap(),
            block.render_to_string().unwrap()
        );
    }

    #[test]
    fn test_first_failure_aborts() {
        // "{" and its newline are two writes; the third write fails
        let block = Block(vec![Line("one"), Line("two")]);
        let mut sink = FailingWriter::new(2);
        let err = block.render(&mut WriterOutput::new(&mut sink)).unwrap_err();

        assert!(matches!(err, Error::Io(_)));
        assert_eq!(sink.text(), "{\n");
    }
}
