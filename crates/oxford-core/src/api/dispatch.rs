//! Sending requests and classifying responses.
//!
//! Each request is sent exactly once. The outcome is one of:
//!
//! - the expected status: the body goes to the caller,
//! - any other status: [`OxfordError::Service`] with the service's message,
//! - no usable response at all: [`OxfordError::Transport`].

use super::operation::ResponseKind;
use super::request::ApiRequest;
use crate::error::{OxfordError, Result};
use crate::output;
use futures_util::StreamExt;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Error bodies come in two shapes depending on API generation:
/// `{"code": .., "message": ..}` and `{"error": {"code": .., "message": ..}}`.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<NestedError>,
}

#[derive(Deserialize)]
struct NestedError {
    message: Option<String>,
}

/// Issues [`ApiRequest`]s over a shared HTTP client.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: reqwest::Client,
}

impl Dispatcher {
    /// Build a dispatcher with transport defaults for timeouts and redirects.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent())
            .build()
            .map_err(OxfordError::Transport)?;
        Ok(Self { client })
    }

    /// Send the request and return the response if its status is the
    /// operation's success status.
    pub async fn send(&self, request: ApiRequest) -> Result<reqwest::Response> {
        let operation = request.operation;
        let expected = request.success_status;

        let mut builder = self
            .client
            .request(request.method.as_reqwest(), request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        tracing::debug!(operation, method = %request.method, url = %request.url, "Sending request");
        let response = builder.send().await.map_err(OxfordError::Transport)?;

        let status = response.status();
        tracing::debug!(operation, status = status.as_u16(), "Received response");
        if status.as_u16() == expected {
            return Ok(response);
        }

        let body = response.bytes().await.map_err(OxfordError::Transport)?;
        Err(OxfordError::Service {
            status: status.as_u16(),
            message: service_error_message(status, &body),
        })
    }

    /// Send a JSON operation and decode its body.
    ///
    /// An empty success body (deletes, updates, training) decodes to
    /// [`Value::Null`].
    pub async fn call_json(&self, request: ApiRequest) -> Result<Value> {
        let operation = request.operation;
        expect_kind(&request, ResponseKind::Json)?;

        let response = self.send(request).await?;
        let body = response.bytes().await.map_err(OxfordError::Transport)?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&body).map_err(|e| OxfordError::malformed(operation, e.to_string()))
    }

    /// Send a binary operation and stream its body into `dest`.
    ///
    /// Returns the number of bytes written. On failure `dest` is left as it
    /// was before the call.
    pub async fn call_to_file(&self, request: ApiRequest, dest: &Path) -> Result<u64> {
        expect_kind(&request, ResponseKind::Binary)?;

        let response = self.send(request).await?;
        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(OxfordError::Transport));
        output::write_binary(stream, dest).await
    }
}

fn user_agent() -> &'static str {
    concat!("oxford/", env!("CARGO_PKG_VERSION"))
}

fn expect_kind(request: &ApiRequest, kind: ResponseKind) -> Result<()> {
    if request.response == kind {
        Ok(())
    } else {
        Err(OxfordError::invalid_request(
            request.operation,
            format!("operation returns {:?}, not {kind:?}", request.response),
        ))
    }
}

/// The user-facing text for a failed response.
///
/// Prefers the service's own `message`; falls back to the status line and
/// whatever text the body held.
pub(crate) fn service_error_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        let message = parsed
            .message
            .or_else(|| parsed.error.and_then(|nested| nested.message));
        if let Some(message) = message {
            return message;
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {text}")
    }
}
