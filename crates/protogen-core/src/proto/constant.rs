//! Scalar and aggregate option values.

use crate::error::Result;
use crate::output::{Output, Renderer};
use crate::text_format::MessageValue;

/// Value of an option or text-format field.
///
/// Renders inline, without starting or ending a line.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    /// Double-quoted string. Contents are written verbatim, with no escaping.
    String(String),
    /// `true` or `false`
    Bool(bool),
    /// Decimal number with trailing zeros trimmed
    Float(f64),
    /// Base-10 integer
    Int(i64),
    /// Text-format aggregate
    Message(MessageValue),
}

impl Renderer for Constant {
    fn render(&self, out: &mut dyn Output) -> Result<()> {
        match self {
            Constant::String(s) => out.write(&format!("\"{}\"", s)),
            Constant::Bool(b) => out.write(if *b { "true" } else { "false" }),
            Constant::Float(f) => out.write(&format_float(*f)),
            Constant::Int(i) => out.write(&i.to_string()),
            Constant::Message(m) => m.render(out),
        }
    }
}

/// Six decimal places, then trailing zeros and a dangling point removed
fn format_float(value: f64) -> String {
    let formatted = format!("{:.6}", value);
    if !formatted.contains('.') {
        return formatted;
    }
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

impl From<&str> for Constant {
    fn from(value: &str) -> Self {
        Constant::String(value.to_string())
    }
}

impl From<String> for Constant {
    fn from(value: String) -> Self {
        Constant::String(value)
    }
}

impl From<bool> for Constant {
    fn from(value: bool) -> Self {
        Constant::Bool(value)
    }
}

impl From<f64> for Constant {
    fn from(value: f64) -> Self {
        Constant::Float(value)
    }
}

impl From<i64> for Constant {
    fn from(value: i64) -> Self {
        Constant::Int(value)
    }
}

impl From<i32> for Constant {
    fn from(value: i32) -> Self {
        Constant::Int(value.into())
    }
}

impl From<MessageValue> for Constant {
    fn from(value: MessageValue) -> Self {
        Constant::Message(value)
    }
}
