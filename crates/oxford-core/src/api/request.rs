//! Request construction from an operation descriptor and a call.
//!
//! Building is pure: it reads the config and the call, and produces an
//! [`ApiRequest`] without touching the network.

use super::operation::{placeholder, BodyKind, HttpMethod, Operation, QueryValue, ResponseKind};
use crate::config::Config;
use crate::error::{ConfigError, OxfordError, Result};
use crate::input::ImageSource;
use reqwest::Url;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Header carrying the service-specific subscription key.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_OCTET_STREAM: &str = "application/octet-stream";

/// Request body supplied by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Empty,
    Image(ImageSource),
    Json(Value),
}

impl Payload {
    /// Serialize a body struct into a JSON payload.
    pub fn json<T: Serialize>(body: &T) -> serde_json::Result<Self> {
        serde_json::to_value(body).map(Payload::Json)
    }
}

/// Per-invocation values for one operation: path parameters, query
/// overrides and the body.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    path_params: Vec<(&'static str, String)>,
    query: Vec<(&'static str, QueryValue)>,
    payload: Payload,
}

impl Default for Call {
    fn default() -> Self {
        Self::new()
    }
}

impl Call {
    pub fn new() -> Self {
        Self {
            path_params: Vec::new(),
            query: Vec::new(),
            payload: Payload::Empty,
        }
    }

    /// Substitute `value` for `{name}` in the operation path.
    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// Override the default of a declared query parameter.
    pub fn query(mut self, name: &'static str, value: impl Into<QueryValue>) -> Self {
        self.query.push((name, value.into()));
        self
    }

    /// Like [`Call::query`], skipping `None`.
    pub fn query_opt(self, name: &'static str, value: Option<impl Into<QueryValue>>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    pub fn image(mut self, image: ImageSource) -> Self {
        self.payload = Payload::Image(image);
        self
    }

    pub fn payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }
}

/// A fully shaped HTTP request, ready for the dispatcher.
#[derive(Clone)]
pub struct ApiRequest {
    pub operation: &'static str,
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Vec<u8>>,
    pub response: ResponseKind,
    pub success_status: u16,
}

impl ApiRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Query pairs in the order they will be sent.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}

// Keeps the subscription key out of debug logs.
impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case(SUBSCRIPTION_KEY_HEADER) {
                    (*name, "<redacted>")
                } else {
                    (*name, value.as_str())
                }
            })
            .collect();
        f.debug_struct("ApiRequest")
            .field("operation", &self.operation)
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &headers)
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}

/// Turns operation descriptors plus calls into [`ApiRequest`]s.
pub struct RequestBuilder<'a> {
    config: &'a Config,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn build(&self, op: &Operation, call: Call) -> Result<ApiRequest> {
        let key = self.config.api_key(op.service)?;
        let url = self.url(op, &call)?;

        let mut headers = vec![(SUBSCRIPTION_KEY_HEADER, key.to_string())];
        let body = match (op.body, call.payload) {
            (BodyKind::Empty, Payload::Empty) => None,
            (BodyKind::Image, Payload::Image(ImageSource::Local { bytes, .. })) => {
                headers.push(("Content-Type", CONTENT_TYPE_OCTET_STREAM.to_string()));
                Some(bytes)
            }
            (BodyKind::Image, Payload::Image(ImageSource::Remote(image_url))) => {
                headers.push(("Content-Type", CONTENT_TYPE_JSON.to_string()));
                let mut reference = serde_json::Map::new();
                reference.insert(op.service.url_field().to_string(), Value::String(image_url));
                Some(encode_json(op, &Value::Object(reference))?)
            }
            (BodyKind::Json, Payload::Json(value)) => {
                if !value.is_object() {
                    return Err(OxfordError::invalid_request(
                        op.name,
                        "JSON body must be an object",
                    ));
                }
                headers.push(("Content-Type", CONTENT_TYPE_JSON.to_string()));
                Some(encode_json(op, &value)?)
            }
            (expected, _) => {
                return Err(OxfordError::invalid_request(
                    op.name,
                    format!("expected {} body", body_kind_label(expected)),
                ))
            }
        };

        tracing::debug!(operation = op.name, method = %op.method, url = %url, "Built request");

        Ok(ApiRequest {
            operation: op.name,
            method: op.method,
            url,
            headers,
            body,
            response: op.response,
            success_status: op.success_status,
        })
    }

    /// Base URL + service version + operation path, with query parameters.
    fn url(&self, op: &Operation, call: &Call) -> Result<Url> {
        let mut url = Url::parse(&self.config.oxford_url).map_err(|e| {
            ConfigError::ValidationError(format!("oxford_url is not a URL: {e}"))
        })?;

        for (name, _) in &call.path_params {
            if !op.path_params().any(|declared| declared == *name) {
                return Err(OxfordError::invalid_request(
                    op.name,
                    format!("unknown path parameter {name}"),
                ));
            }
        }

        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                ConfigError::ValidationError("oxford_url cannot be used as a base URL".into())
            })?;
            segments.pop_if_empty();
            segments.extend(op.service.version_path());
            for segment in op.path.split('/') {
                match placeholder(segment) {
                    Some(name) => {
                        let value = call
                            .path_params
                            .iter()
                            .rev()
                            .find(|(n, _)| *n == name)
                            .map(|(_, v)| v.as_str())
                            .filter(|v| !v.is_empty())
                            .ok_or_else(|| {
                                OxfordError::invalid_request(
                                    op.name,
                                    format!("missing path parameter {name}"),
                                )
                            })?;
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }

        for (name, _) in &call.query {
            if !op.query.iter().any(|param| param.name == *name) {
                return Err(OxfordError::invalid_request(
                    op.name,
                    format!("unknown query parameter {name}"),
                ));
            }
        }

        let pairs: Vec<(&str, String)> = op
            .query
            .iter()
            .filter_map(|param| {
                let supplied = call
                    .query
                    .iter()
                    .rev()
                    .find(|(name, _)| *name == param.name)
                    .map(|(_, value)| value.clone());
                supplied
                    .or_else(|| param.default.value())
                    .map(|value| (param.name, value.to_string()))
            })
            .collect();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }
}

fn encode_json(op: &Operation, value: &Value) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| OxfordError::invalid_request(op.name, e.to_string()))
}

fn body_kind_label(kind: BodyKind) -> &'static str {
    match kind {
        BodyKind::Empty => "no",
        BodyKind::Image => "an image",
        BodyKind::Json => "a JSON",
    }
}
