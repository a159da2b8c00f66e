//! Option statements.

use super::Constant;
use crate::error::Result;
use crate::output::{Output, Renderer};

/// An `option name = value;` statement.
///
/// Names containing a `.` are custom options and render parenthesized,
/// e.g. `option (google.api.http) = { ... };`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtoOption {
    name: String,
    value: Constant,
}

impl ProtoOption {
    /// Creates a new option
    pub fn new(name: impl Into<String>, value: impl Into<Constant>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the option name as given
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the option value
    pub fn value(&self) -> &Constant {
        &self.value
    }

    fn display_name(&self) -> String {
        if self.name.contains('.') {
            format!("({})", self.name)
        } else {
            self.name.clone()
        }
    }
}

impl Renderer for ProtoOption {
    fn render(&self, out: &mut dyn Output) -> Result<()> {
        out.start_line()?;
        out.write(&format!("option {} = ", self.display_name()))?;
        self.value.render(out)?;
        out.write(";\n")
    }
}
