//! Proto file vocabulary.
//!
//! Each element of a `.proto` file is a small value type implementing
//! [`Renderer`](crate::output::Renderer). Container elements own their
//! children in insertion order and render them one [`INDENT`] level
//! deeper than themselves:
//!
//! - [`File`]: syntax header, package, imports, options, messages, services
//! - [`Message`]: fields
//! - [`Service`]: methods
//! - [`Method`]: options
//!
//! ## Building
//!
//! Containers offer `add_*` methods for chained mutation of an existing
//! value, and consuming `with_*` methods for building a tree in a single
//! expression:
//!
//! ```
//! use protogen_core::proto::{Field, FieldParams, File, Message};
//!
//! let mut file = File::new("example");
//! file.add_messages([Message::new("Ping").with_fields([
//!     Field::new("id", FieldParams::new("string", 1)),
//! ])]);
//!
//! let mut out = Vec::new();
//! file.write_to(&mut out)?;
//! # Ok::<(), protogen_core::Error>(())
//! ```

mod constant;
mod field;
mod file;
mod import;
mod message;
mod method;
mod option;
mod service;

use crate::error::{Error, Result};

pub use constant::Constant;
pub use field::{Field, FieldLabel, FieldParams};
pub use file::File;
pub use import::{Import, ImportKind};
pub use message::Message;
pub use method::{Method, MethodParams};
pub use option::ProtoOption;
pub use service::Service;

/// Spaces added per nesting level
pub const INDENT: usize = 2;

/// Proto syntax version
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Syntax {
    /// Proto2 syntax
    Proto2,
    /// Proto3 syntax
    #[default]
    Proto3,
}

impl Syntax {
    /// Returns the syntax declaration string
    pub fn as_str(&self) -> &'static str {
        match self {
            Syntax::Proto2 => "proto2",
            Syntax::Proto3 => "proto3",
        }
    }
}

impl TryFrom<&str> for Syntax {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "" | "proto2" => Ok(Syntax::Proto2),
            "proto3" => Ok(Syntax::Proto3),
            _ => Err(Error::UnsupportedSyntax {
                syntax: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax() {
        assert_eq!(Syntax::try_from("").unwrap(), Syntax::Proto2);
        assert_eq!(Syntax::try_from("proto2").unwrap(), Syntax::Proto2);
        assert_eq!(Syntax::try_from("proto3").unwrap(), Syntax::Proto3);
        assert!(Syntax::try_from("proto4").is_err());
        assert_eq!(Syntax::default().as_str(), "proto3");
    }
}
