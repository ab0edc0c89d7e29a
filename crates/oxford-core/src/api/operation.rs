//! Static descriptions of remote operations.
//!
//! An [`Operation`] says everything the request builder needs to know about
//! one command's HTTP shape. Descriptors are `const` values in
//! [`super::catalog`]; nothing about them is decided at runtime.

use std::fmt;

/// A family of operations sharing a base path and a subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Face detection, identification and person groups (`face/v0`)
    Face,
    /// Image analysis, thumbnails and OCR (`vision/v1`)
    Vision,
}

impl Service {
    /// Key under `apikeys` in the config file.
    pub fn name(self) -> &'static str {
        match self {
            Service::Face => "face",
            Service::Vision => "vision",
        }
    }

    /// Path segments between the base URL and the operation path.
    pub fn version_path(self) -> &'static [&'static str] {
        match self {
            Service::Face => &["face", "v0"],
            Service::Vision => &["vision", "v1"],
        }
    }

    /// Field name for image URLs in JSON bodies.
    ///
    /// The two families disagree on casing and each expects its own.
    pub fn url_field(self) -> &'static str {
        match self {
            Service::Face => "url",
            Service::Vision => "Url",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// What an operation accepts as its request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// No body
    Empty,
    /// An image: raw bytes or a `{"url": ...}` reference
    Image,
    /// A JSON object of named fields
    Json,
}

/// What a successful response carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// A JSON document, possibly empty
    Json,
    /// Raw bytes to be written to a file
    Binary,
}

/// A query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Bool(bool),
    Int(u32),
    Text(String),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The API only understands lowercase booleans.
            QueryValue::Bool(true) => f.write_str("true"),
            QueryValue::Bool(false) => f.write_str("false"),
            QueryValue::Int(n) => write!(f, "{n}"),
            QueryValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(value)
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

/// Compile-time default for a query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryDefault {
    Bool(bool),
    Int(u32),
    Text(&'static str),
    /// Only sent when the caller supplies a value
    Unset,
}

impl QueryDefault {
    pub fn value(self) -> Option<QueryValue> {
        match self {
            QueryDefault::Bool(b) => Some(QueryValue::Bool(b)),
            QueryDefault::Int(n) => Some(QueryValue::Int(n)),
            QueryDefault::Text(s) => Some(QueryValue::Text(s.to_string())),
            QueryDefault::Unset => None,
        }
    }
}

/// A query parameter an operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParam {
    pub name: &'static str,
    pub default: QueryDefault,
}

/// Static metadata describing one remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Command-style name used in logs and errors (e.g. "face detect")
    pub name: &'static str,
    pub service: Service,
    pub method: HttpMethod,
    /// Path below the service version, with `{placeholder}` segments
    pub path: &'static str,
    /// Accepted query parameters, in the order they are sent
    pub query: &'static [QueryParam],
    pub body: BodyKind,
    pub response: ResponseKind,
    /// Status code that means success
    pub success_status: u16,
}

impl Operation {
    /// Names of the `{placeholder}` segments in the path, in order.
    pub fn path_params(&self) -> impl Iterator<Item = &'static str> {
        self.path.split('/').filter_map(placeholder)
    }
}

/// The name inside a `{name}` path segment.
pub(crate) fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}
