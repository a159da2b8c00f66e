//! Message fields.

use crate::error::Result;
use crate::output::{Output, Renderer};

/// Cardinality label written before a field's type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldLabel {
    /// No label (proto3 singular fields, map fields)
    #[default]
    None,
    /// `optional`
    Optional,
    /// `required` (proto2 only)
    Required,
    /// `repeated`
    Repeated,
}

impl FieldLabel {
    /// Returns the label keyword followed by a space, or nothing
    fn prefix(&self) -> &'static str {
        match self {
            FieldLabel::None => "",
            FieldLabel::Optional => "optional ",
            FieldLabel::Required => "required ",
            FieldLabel::Repeated => "repeated ",
        }
    }
}

/// Type, number and modifiers of a [`Field`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldParams {
    /// Scalar keyword or message/enum type name
    pub field_type: String,
    /// Field number
    pub number: i32,
    /// Cardinality label
    pub label: FieldLabel,
    /// Comment written after the field on the same line
    pub inline_comment: Option<String>,
}

impl FieldParams {
    /// Creates params for an unlabeled field
    pub fn new(field_type: impl Into<String>, number: i32) -> Self {
        Self {
            field_type: field_type.into(),
            number,
            ..Default::default()
        }
    }

    /// Sets the cardinality label
    pub fn label(mut self, label: FieldLabel) -> Self {
        self.label = label;
        self
    }

    /// Marks the field as repeated
    pub fn repeated(self) -> Self {
        self.label(FieldLabel::Repeated)
    }

    /// Marks the field as optional
    pub fn optional(self) -> Self {
        self.label(FieldLabel::Optional)
    }

    /// Marks the field as required
    pub fn required(self) -> Self {
        self.label(FieldLabel::Required)
    }

    /// Sets the inline comment
    pub fn inline_comment(mut self, comment: impl Into<String>) -> Self {
        self.inline_comment = Some(comment.into());
        self
    }
}

/// A single `type name = number;` line inside a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    params: FieldParams,
}

impl Field {
    /// Creates a new field
    pub fn new(name: impl Into<String>, params: FieldParams) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Returns the field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field parameters
    pub fn params(&self) -> &FieldParams {
        &self.params
    }
}

impl Renderer for Field {
    fn render(&self, out: &mut dyn Output) -> Result<()> {
        let mut line = format!(
            "{}{} {} = {};",
            self.params.label.prefix(),
            self.params.field_type,
            self.name,
            self.params.number
        );
        if let Some(comment) = &self.params.inline_comment {
            line.push_str(" // ");
            line.push_str(comment);
        }
        out.write_line(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular() {
        let field = Field::new("id", FieldParams::new("int64", 1));
        assert_eq!(field.render_to_string().unwrap(), "int64 id = 1;\n");
    }

    #[test]
    fn test_repeated_with_comment() {
        let field = Field::new(
            "tags",
            FieldParams::new("string", 7)
                .repeated()
                .inline_comment("@gotags: yaml:\"tags\""),
        );
        assert_eq!(
            field.render_to_string().unwrap(),
            "repeated string tags = 7; // @gotags: yaml:\"tags\"\n"
        );
    }

    #[test]
    fn test_optional_and_required() {
        let optional = Field::new("a", FieldParams::new("int32", 1).optional());
        let required = Field::new("b", FieldParams::new("string", 2).required());
        assert_eq!(optional.render_to_string().unwrap(), "optional int32 a = 1;\n");
        assert_eq!(required.render_to_string().unwrap(), "required string b = 2;\n");
    }

    #[test]
    fn test_last_label_wins() {
        let params = FieldParams::new("bool", 3).repeated().optional();
        assert_eq!(params.label, FieldLabel::Optional);
    }
}
