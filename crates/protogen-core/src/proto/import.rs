//! Import statements.

use crate::error::Result;
use crate::output::{Output, Renderer};

/// Modifier of an import statement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportKind {
    /// `import "path";`
    #[default]
    Default,
    /// `import public "path";`
    Public,
    /// `import weak "path";`
    Weak,
}

impl ImportKind {
    fn prefix(&self) -> &'static str {
        match self {
            ImportKind::Default => "",
            ImportKind::Public => "public ",
            ImportKind::Weak => "weak ",
        }
    }
}

/// An `import "path";` line. Files keep imports unique by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    path: String,
    kind: ImportKind,
}

impl Import {
    /// Creates a plain import
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: ImportKind::Default,
        }
    }

    /// Creates a public import
    pub fn public(path: impl Into<String>) -> Self {
        Self::new(path).with_kind(ImportKind::Public)
    }

    /// Creates a weak import
    pub fn weak(path: impl Into<String>) -> Self {
        Self::new(path).with_kind(ImportKind::Weak)
    }

    /// Sets the import modifier
    pub fn with_kind(mut self, kind: ImportKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the imported path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the import modifier
    pub fn kind(&self) -> ImportKind {
        self.kind
    }
}

impl Renderer for Import {
    fn render(&self, out: &mut dyn Output) -> Result<()> {
        out.write_line(&format!("import {}\"{}\";", self.kind.prefix(), self.path))
    }
}
