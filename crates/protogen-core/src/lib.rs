//! # protogen-core
//!
//! A library for generating Protocol Buffer `.proto` source files from code.
//!
//! Callers build a tree of proto elements with chained builder calls,
//! then write the tree to any [`std::io::Write`]. The output is
//! consistently indented, two spaces per nesting level.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`output`]: The [`Output`] sink contract, the indentation decorator
//!   and the [`Renderer`] trait every element implements
//! - [`proto`]: File, import, option, message, field, service and method
//!   elements
//! - [`text_format`]: Text-format aggregates used as option values
//! - [`descriptor`]: Building a [`File`] from a compiled `FileDescriptorProto`
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```
//! use protogen_core::proto::{
//!     Field, FieldParams, File, Import, Message, Method, MethodParams, ProtoOption, Service,
//! };
//!
//! let file = File::new("shop")
//!     .with_imports([Import::new("google/protobuf/timestamp.proto")])
//!     .with_options([ProtoOption::new("go_package", "example.com/shop")])
//!     .with_messages([Message::new("Order").with_fields([
//!         Field::new("id", FieldParams::new("string", 1)),
//!         Field::new("items", FieldParams::new("string", 2).repeated()),
//!     ])])
//!     .with_services([Service::new("Orders").with_methods([Method::new(
//!         "Get",
//!         MethodParams::new("GetOrderRequest", "Order"),
//!     )])]);
//!
//! let mut out = Vec::new();
//! file.write_to(&mut out)?;
//! assert!(String::from_utf8_lossy(&out).contains("  repeated string items = 2;\n"));
//! # Ok::<(), protogen_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod descriptor;
pub mod error;
pub mod output;
pub mod proto;
pub mod text_format;

// Re-export primary types for convenience
pub use error::{Error, Result};
pub use output::{IndentingOutput, Output, Renderer, WriterOutput};
pub use proto::File;

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
