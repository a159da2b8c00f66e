//! Message definitions.

use super::{Field, INDENT};
use crate::error::Result;
use crate::output::{render_nested, Output, Renderer};

/// A `message Name { ... }` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    name: String,
    fields: Vec<Field>,
}

impl Message {
    /// Creates a message with no fields
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends fields in order. Duplicates are kept.
    pub fn add_fields(&mut self, fields: impl IntoIterator<Item = Field>) -> &mut Self {
        self.fields.extend(fields);
        self
    }

    /// Consuming variant of [`Message::add_fields`]
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.add_fields(fields);
        self
    }

    /// Returns the message name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fields in insertion order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

impl Renderer for Message {
    fn render(&self, out: &mut dyn Output) -> Result<()> {
        out.write_line(&format!("message {} {{", self.name))?;
        render_nested(out, INDENT, &self.fields)?;
        out.write_lines(&["}", ""])
    }
}
