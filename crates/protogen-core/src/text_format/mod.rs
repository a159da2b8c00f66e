//! Text-format message values.
//!
//! A [`MessageValue`] is an aggregate written in protobuf text format,
//! used as the value of a custom option:
//!
//! ```text
//! option (my.option) = {
//!   name: "value";
//! };
//! ```
//!
//! The value renders inline: it opens with `{` on the current line and
//! leaves the closing `}` unterminated so the enclosing statement can
//! finish the line.

mod field;

use crate::error::Result;
use crate::output::{render_nested, Output, Renderer};
use crate::proto::INDENT;

pub use field::{Terminator, TextField};

/// Ordered set of `name: value` fields rendered as `{ ... }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageValue {
    fields: Vec<TextField>,
}

impl MessageValue {
    /// Creates an empty message value
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends fields in order
    pub fn add_fields(&mut self, fields: impl IntoIterator<Item = TextField>) -> &mut Self {
        self.fields.extend(fields);
        self
    }

    /// Consuming variant of [`MessageValue::add_fields`]
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = TextField>) -> Self {
        self.add_fields(fields);
        self
    }

    /// Returns the fields in insertion order
    pub fn fields(&self) -> &[TextField] {
        &self.fields
    }
}

impl Renderer for MessageValue {
    fn render(&self, out: &mut dyn Output) -> Result<()> {
        out.write("{\n")?;
        render_nested(out, INDENT, &self.fields)?;
        out.start_line()?;
        out.write("}")
    }
}
