//! Proto files, the root of the element tree.

use super::{Import, Message, ProtoOption, Service, Syntax};
use crate::error::Result;
use crate::output::{render_all, Output, Renderer, WriterOutput};
use std::collections::HashSet;
use std::io::Write;
use tracing::{debug, trace};

/// A complete `.proto` file.
///
/// Sections render in a fixed order regardless of the order they were
/// added in: syntax header, package, imports, options, messages, services.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    package: String,
    syntax: Syntax,
    imports: Vec<Import>,
    options: Vec<ProtoOption>,
    messages: Vec<Message>,
    services: Vec<Service>,
}

impl File {
    /// Creates an empty proto3 file for the given package
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            syntax: Syntax::default(),
            imports: Vec::new(),
            options: Vec::new(),
            messages: Vec::new(),
            services: Vec::new(),
        }
    }

    /// Sets the syntax version written in the header
    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Appends imports, skipping any whose path is already present
    pub fn add_imports(&mut self, imports: impl IntoIterator<Item = Import>) -> &mut Self {
        let mut seen: HashSet<String> = self.imports.iter().map(|i| i.path().to_string()).collect();
        for import in imports {
            if seen.insert(import.path().to_string()) {
                self.imports.push(import);
            } else {
                trace!("Skipping duplicate import: {}", import.path());
            }
        }
        self
    }

    /// Consuming variant of [`File::add_imports`]
    pub fn with_imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.add_imports(imports);
        self
    }

    /// Appends file-level options in order
    pub fn add_options(&mut self, options: impl IntoIterator<Item = ProtoOption>) -> &mut Self {
        self.options.extend(options);
        self
    }

    /// Consuming variant of [`File::add_options`]
    pub fn with_options(mut self, options: impl IntoIterator<Item = ProtoOption>) -> Self {
        self.add_options(options);
        self
    }

    /// Appends messages in order
    pub fn add_messages(&mut self, messages: impl IntoIterator<Item = Message>) -> &mut Self {
        self.messages.extend(messages);
        self
    }

    /// Consuming variant of [`File::add_messages`]
    pub fn with_messages(mut self, messages: impl IntoIterator<Item = Message>) -> Self {
        self.add_messages(messages);
        self
    }

    /// Appends services in order
    pub fn add_services(&mut self, services: impl IntoIterator<Item = Service>) -> &mut Self {
        self.services.extend(services);
        self
    }

    /// Consuming variant of [`File::add_services`]
    pub fn with_services(mut self, services: impl IntoIterator<Item = Service>) -> Self {
        self.add_services(services);
        self
    }

    /// Returns the package name
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Returns the syntax version
    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    /// Returns the imports in insertion order
    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    /// Returns the file options in insertion order
    pub fn options(&self) -> &[ProtoOption] {
        &self.options
    }

    /// Returns the messages in insertion order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the services in insertion order
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Write the file to `writer`.
    ///
    /// On error the writer may hold a truncated prefix of the file.
    pub fn write_to(&self, writer: impl Write) -> Result<()> {
        let mut output = WriterOutput::new(writer);
        self.render(&mut output)
    }
}

impl Renderer for File {
    fn render(&self, out: &mut dyn Output) -> Result<()> {
        debug!(
            package = %self.package,
            imports = self.imports.len(),
            options = self.options.len(),
            messages = self.messages.len(),
            services = self.services.len(),
            "Rendering proto file"
        );

        let syntax_line = format!("syntax = \"{}\";", self.syntax.as_str());
        let package_line = format!("package {};", self.package);
        out.write_lines(&[syntax_line.as_str(), "", package_line.as_str(), ""])?;

        render_all(out, &self.imports)?;
        if !self.imports.is_empty() {
            out.write_line("")?;
        }

        render_all(out, &self.options)?;
        if !self.options.is_empty() {
            out.write_line("")?;
        }

        render_all(out, &self.messages)?;
        render_all(out, &self.services)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::FailingWriter;
    use crate::proto::{Field, FieldParams, Method, MethodParams};
    use crate::text_format::{MessageValue, TextField};
    use crate::Error;
    use pretty_assertions::assert_eq;

    fn write(file: &File) -> String {
        let mut buf = Vec::new();
        file.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn full_file() -> File {
        let mut file = File::new("unit");
        file.add_imports([Import::new("subpath1/path1"), Import::new("subpath2/path2")])
            .add_options([
                ProtoOption::new("option1", "value1"),
                ProtoOption::new("option2", "value2"),
            ])
            .add_messages([
                Message::new("Message1").with_fields([
                    Field::new(
                        "Field1",
                        FieldParams::new("bool", 1001).inline_comment("@gotags: yaml:\"field1\""),
                    ),
                    Field::new("Field2", FieldParams::new("string", 1002).repeated()),
                ]),
                Message::new("Message2").with_fields([
                    Field::new("Field3", FieldParams::new("number", 1001)),
                    Field::new("Field4", FieldParams::new("string", 1002)),
                ]),
            ])
            .add_services([
                Service::new("Service1").with_methods([
                    Method::new("Method1", MethodParams::new("Request1", "Response1")),
                    Method::new("Method2", MethodParams::new("Request2", "Response2")),
                ]),
                Service::new("Service2").with_methods([
                    Method::new("Method3", MethodParams::new("Request3", "Response3")),
                    Method::new("Method4", MethodParams::new("Request4", "Response4")),
                ]),
            ]);
        file
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(
            write(&File::new("unit")),
            "syntax = \"proto3\";\n\npackage unit;\n\n"
        );
    }

    #[test]
    fn test_proto2_header() {
        let file = File::new("legacy").with_syntax(Syntax::Proto2);
        assert!(write(&file).starts_with("syntax = \"proto2\";\n"));
    }

    #[test]
    fn test_full_file() {
        assert_eq!(
            write(&full_file()),
            r#"syntax = "proto3";

package unit;

import "subpath1/path1";
import "subpath2/path2";

option option1 = "value1";
option option2 = "value2";

message Message1 {
  bool Field1 = 1001; // @gotags: yaml:"field1"
  repeated string Field2 = 1002;
}

message Message2 {
  number Field3 = 1001;
  string Field4 = 1002;
}

service Service1 {
  rpc Method1 (Request1) returns (Response1) {
  }
  rpc Method2 (Request2) returns (Response2) {
  }
}

service Service2 {
  rpc Method3 (Request3) returns (Response3) {
  }
  rpc Method4 (Request4) returns (Response4) {
  }
}

"#
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let file = full_file();
        assert_eq!(write(&file), write(&file));
    }

    #[test]
    fn test_duplicate_imports_are_dropped() {
        let mut file = File::new("unit");
        file.add_imports([Import::new("b.proto"), Import::new("a.proto")])
            .add_imports([Import::public("b.proto"), Import::new("c.proto")])
            .add_imports([Import::new("c.proto")]);

        let paths: Vec<_> = file.imports().iter().map(|i| i.path()).collect();
        assert_eq!(paths, ["b.proto", "a.proto", "c.proto"]);
        assert_eq!(file.imports()[0].kind(), crate::proto::ImportKind::Default);
    }

    #[test]
    fn test_options_only() {
        let file = File::new("unit").with_options([ProtoOption::new(
            "my.ext",
            MessageValue::new().with_fields([
                TextField::string("a", "x"),
                TextField::string("b", "y"),
            ]),
        )]);

        assert_eq!(
            write(&file),
            "syntax = \"proto3\";\n\npackage unit;\n\noption (my.ext) = {\n  a: \"x\"\n  b: \"y\"\n};\n\n"
        );
    }

    #[test]
    fn test_first_write_failure_aborts() {
        let file = full_file();
        let expected = write(&file);

        for limit in [0, 1, 5, 20] {
            let mut sink = FailingWriter::new(limit);
            let err = file.write_to(&mut sink).unwrap_err();
            assert!(matches!(err, Error::Io(_)));

            let partial = sink.text();
            assert!(expected.starts_with(&partial));
            assert!(partial.len() < expected.len());
        }
    }

    #[test]
    fn test_failure_skips_remaining_children() {
        let file = full_file();
        let expected = write(&file);
        let services_start = expected.find("service Service1").unwrap();

        // Header, imports, options and both messages take 36 writes
        let mut sink = FailingWriter::new(36);
        assert!(file.write_to(&mut sink).is_err());
        assert_eq!(sink.text(), &expected[..services_start]);
    }

    #[test]
    fn test_write_to_file() {
        use std::io::Read;

        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        full_file().write_to(tmp.as_file_mut()).unwrap();

        let mut content = String::new();
        tmp.reopen().unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, write(&full_file()));
    }
}
