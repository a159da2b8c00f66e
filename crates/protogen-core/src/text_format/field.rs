//! Single `name: value` entry of a text-format message.

use crate::error::Result;
use crate::output::{Output, Renderer};
use crate::proto::Constant;

/// Character closing a text-format field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Terminator {
    /// Nothing after the value
    #[default]
    None,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
}

impl Terminator {
    /// Returns the terminator text
    pub fn as_str(&self) -> &'static str {
        match self {
            Terminator::None => "",
            Terminator::Semicolon => ";",
            Terminator::Comma => ",",
        }
    }
}

/// A field of a [`MessageValue`](super::MessageValue).
///
/// The value is any [`Constant`], including another message value.
#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    name: String,
    value: Constant,
    terminator: Terminator,
}

impl TextField {
    /// Creates a field with the given value
    pub fn new(name: impl Into<String>, value: impl Into<Constant>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            terminator: Terminator::None,
        }
    }

    /// Creates a string-valued field
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, Constant::String(value.into()))
    }

    /// Ends the field with `;`
    pub fn end_semicolon(mut self) -> Self {
        self.terminator = Terminator::Semicolon;
        self
    }

    /// Ends the field with `,`. A semicolon, once set, takes precedence.
    pub fn end_comma(mut self) -> Self {
        if self.terminator != Terminator::Semicolon {
            self.terminator = Terminator::Comma;
        }
        self
    }

    /// Returns the field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field value
    pub fn value(&self) -> &Constant {
        &self.value
    }

    /// Returns the terminator
    pub fn terminator(&self) -> Terminator {
        self.terminator
    }
}

impl Renderer for TextField {
    fn render(&self, out: &mut dyn Output) -> Result<()> {
        out.start_line()?;
        out.write(&self.name)?;
        out.write(": ")?;
        self.value.render(out)?;
        out.write(self.terminator.as_str())?;
        out.write("\n")
    }
}
