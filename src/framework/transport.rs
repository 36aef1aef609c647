//! # Transport
//!
//! The HTTP boundary. A [`Transport`] performs one POST and reports either a
//! JSON body, the absence of any response, or a raw [`TransportFailure`].
//! Normalization happens one layer up, in [`RequestClient`](crate::framework::RequestClient).

use crate::framework::error::TransportFailure;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";

/// A fully prepared POST request.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Value,
}

impl TransportRequest {
    /// Looks up a header value by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Performs a single POST.
///
/// `Ok(None)` means the transport produced no response object at all.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, request: TransportRequest) -> Result<Option<Value>, TransportFailure>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("insurance-sdk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an existing client, keeping its connection settings.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(url = %request.url))]
    async fn post(&self, request: TransportRequest) -> Result<Option<Value>, TransportFailure> {
        let body = serde_json::to_vec(&request.body)
            .map_err(|e| TransportFailure::message(e.to_string()))?;

        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }

        let response = builder
            .body(body)
            .send()
            .await
            .map_err(|e| TransportFailure::message(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportFailure::message(e.to_string()))?;
        debug!(status = status.as_u16(), len = bytes.len(), "Response received");

        if !status.is_success() {
            return Err(TransportFailure::response(status.as_u16(), decode_error_body(&bytes)));
        }
        if bytes.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| TransportFailure::message(format!("invalid JSON response: {e}")))
    }
}

// Non-JSON error bodies are kept as text so the server's wording still surfaces.
fn decode_error_body(bytes: &[u8]) -> Option<Value> {
    if bytes.is_empty() {
        return None;
    }
    match serde_json::from_slice(bytes) {
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(String::from_utf8_lossy(bytes).into_owned())),
    }
}
