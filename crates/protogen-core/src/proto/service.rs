//! Service definitions.

use super::{Method, INDENT};
use crate::error::Result;
use crate::output::{render_nested, Output, Renderer};

/// A `service Name { ... }` block
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    name: String,
    methods: Vec<Method>,
}

impl Service {
    /// Creates a service with no methods
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Appends methods in order
    pub fn add_methods(&mut self, methods: impl IntoIterator<Item = Method>) -> &mut Self {
        self.methods.extend(methods);
        self
    }

    /// Consuming variant of [`Service::add_methods`]
    pub fn with_methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.add_methods(methods);
        self
    }

    /// Returns the service name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the methods in insertion order
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }
}

impl Renderer for Service {
    fn render(&self, out: &mut dyn Output) -> Result<()> {
        out.write_line(&format!("service {} {{", self.name))?;
        render_nested(out, INDENT, &self.methods)?;
        out.write_lines(&["}", ""])
    }
}
