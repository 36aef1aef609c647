//! # Request Layer
//!
//! [`RequestClient`] turns one logical operation into one authenticated POST and
//! normalizes the outcome. Managers never talk to it directly; they hold a
//! [`Caller`], which is the request client with a credential already bound.
//!
//! There are no retries, no timeouts and no backoff here. A single failed call
//! is a single reported failure.

use crate::framework::endpoint::Endpoint;
use crate::framework::error::ApiError;
use crate::framework::transport::{Transport, TransportRequest, AUTHORIZATION, CONTENT_TYPE};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use url::Url;

/// Opaque bearer token.
///
/// Cheap to clone and shared read-only between every caller built from the
/// same client. `Debug` never prints the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(Arc<str>);

impl Credential {
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(Arc::from(token.as_ref()))
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Issues single remote calls against one base URL.
#[derive(Clone)]
pub struct RequestClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl RequestClient {
    pub fn new(base_url: &Url, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// The absolute URL for an endpoint: `<base-url><path>`.
    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Performs the call and returns the parsed body verbatim.
    ///
    /// A missing payload is sent as `{}`. The `Authorization` header is only
    /// attached when a credential is present. Every failure is logged at
    /// `warn` before it is returned.
    #[instrument(skip(self, payload, credential), fields(path = endpoint.path()))]
    pub async fn call(
        &self,
        endpoint: Endpoint,
        payload: Option<Value>,
        credential: Option<&Credential>,
    ) -> Result<Value, ApiError> {
        let body = payload.unwrap_or_else(|| Value::Object(Map::new()));
        debug!(?body, "Sending request");

        let mut headers = vec![(CONTENT_TYPE, "application/json".to_string())];
        if let Some(credential) = credential {
            headers.push((AUTHORIZATION, credential.bearer()));
        }

        let request = TransportRequest {
            url: self.url_for(endpoint),
            headers,
            body,
        };

        match self.transport.post(request).await {
            Ok(Some(value)) => Ok(value),
            Ok(None) => {
                warn!(error = %ApiError::NoResponse, "Request failed");
                Err(ApiError::NoResponse)
            }
            Err(failure) => {
                warn!(error = %failure, "Request failed");
                Err(failure.normalize())
            }
        }
    }
}

/// The call function injected into resource managers.
#[async_trait]
pub trait Caller: Send + Sync {
    async fn call(&self, endpoint: Endpoint, payload: Option<Value>) -> Result<Value, ApiError>;
}

/// A [`RequestClient`] bound to the credential of its enclosing client.
#[derive(Clone)]
pub struct AuthenticatedCaller {
    client: RequestClient,
    credential: Option<Credential>,
}

impl AuthenticatedCaller {
    pub fn new(client: RequestClient, credential: Option<Credential>) -> Self {
        Self { client, credential }
    }
}

#[async_trait]
impl Caller for AuthenticatedCaller {
    async fn call(&self, endpoint: Endpoint, payload: Option<Value>) -> Result<Value, ApiError> {
        self.client
            .call(endpoint, payload, self.credential.as_ref())
            .await
    }
}
