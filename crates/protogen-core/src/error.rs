//! Error types for the protogen-core library.
//!
//! Building a tree never fails. Errors only arise while rendering it to a
//! sink, or while importing a compiled descriptor.

use thiserror::Error;

/// Result type alias for protogen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all protogen operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The output sink rejected a write
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse FileDescriptorProto bytes
    #[error("failed to parse FileDescriptorProto: {0}")]
    DescriptorParse(#[from] prost::DecodeError),

    /// Unsupported proto syntax version
    #[error("unsupported proto syntax: '{syntax}'")]
    UnsupportedSyntax {
        /// The unsupported syntax string
        syntax: String,
    },

    /// Descriptor content that cannot be expressed as a proto file
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),
}

impl Error {
    /// Creates a new invalid descriptor error
    pub fn invalid_descriptor(msg: impl Into<String>) -> Self {
        Self::InvalidDescriptor(msg.into())
    }

    /// Returns true if the error came from the output sink
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedSyntax {
            syntax: "proto4".to_string(),
        };
        assert!(err.to_string().contains("unsupported proto syntax"));
        assert!(err.to_string().contains("proto4"));
    }

    #[test]
    fn test_is_io() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(err.is_io());
        assert!(!Error::invalid_descriptor("missing type").is_io());
    }
}
