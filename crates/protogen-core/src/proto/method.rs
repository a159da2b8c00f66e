//! RPC methods.

use super::{ProtoOption, INDENT};
use crate::error::Result;
use crate::output::{render_nested, Output, Renderer};

/// Request and response types of a [`Method`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodParams {
    /// Request message type
    pub request_name: String,
    /// Response message type
    pub response_name: String,
    /// Client sends a stream of requests
    pub client_streaming: bool,
    /// Server sends a stream of responses
    pub server_streaming: bool,
}

impl MethodParams {
    /// Creates unary method params
    pub fn new(request_name: impl Into<String>, response_name: impl Into<String>) -> Self {
        Self {
            request_name: request_name.into(),
            response_name: response_name.into(),
            ..Default::default()
        }
    }

    /// Marks the request as streamed
    pub fn client_streaming(mut self) -> Self {
        self.client_streaming = true;
        self
    }

    /// Marks the response as streamed
    pub fn server_streaming(mut self) -> Self {
        self.server_streaming = true;
        self
    }
}

/// An `rpc Name (Request) returns (Response) { ... }` block
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    name: String,
    params: MethodParams,
    options: Vec<ProtoOption>,
}

impl Method {
    /// Creates a method with no options
    pub fn new(name: impl Into<String>, params: MethodParams) -> Self {
        Self {
            name: name.into(),
            params,
            options: Vec::new(),
        }
    }

    /// Appends options in order
    pub fn add_options(&mut self, options: impl IntoIterator<Item = ProtoOption>) -> &mut Self {
        self.options.extend(options);
        self
    }

    /// Consuming variant of [`Method::add_options`]
    pub fn with_options(mut self, options: impl IntoIterator<Item = ProtoOption>) -> Self {
        self.add_options(options);
        self
    }

    /// Returns the method name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the request/response params
    pub fn params(&self) -> &MethodParams {
        &self.params
    }

    /// Returns the options in insertion order
    pub fn options(&self) -> &[ProtoOption] {
        &self.options
    }
}

fn stream_prefix(streaming: bool) -> &'static str {
    if streaming {
        "stream "
    } else {
        ""
    }
}

impl Renderer for Method {
    fn render(&self, out: &mut dyn Output) -> Result<()> {
        let p = &self.params;
        out.write_line(&format!(
            "rpc {} ({}{}) returns ({}{}) {{",
            self.name,
            stream_prefix(p.client_streaming),
            p.request_name,
            stream_prefix(p.server_streaming),
            p.response_name
        ))?;
        render_nested(out, INDENT, &self.options)?;
        out.write_line("}")
    }
}
