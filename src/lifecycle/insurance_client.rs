use crate::application::ApplicationSession;
use crate::clients::ApplicationClient;
use crate::framework::{AuthenticatedCaller, Caller, Credential, HttpTransport, RequestClient, Transport};
use crate::lifecycle::config::{ClientConfig, ConfigError};
use std::sync::Arc;
use tracing::info;

/// Entry point of the SDK.
///
/// Builds the transport once, binds the configured credential and hands out
/// managers that share both.
///
/// ```rust,no_run
/// use insurance_sdk::lifecycle::{ClientConfig, InsuranceClient};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ClientConfig::new("https://api.example.com")?.with_token("tok");
/// let client = InsuranceClient::new(config)?;
///
/// let mut app = client.application(None);
/// app.create(insurance_sdk::model::ApplicationCreate::new("TRAVEL_BASIC")).await?;
/// app.submit().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct InsuranceClient {
    caller: Arc<dyn Caller>,
}

impl InsuranceClient {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let transport = HttpTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Builds the client over a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        info!(base_url = %config.base_url, authenticated = config.token.is_some(), "Client configured");
        let request = RequestClient::new(&config.base_url, transport);
        let credential = config.token.as_deref().map(Credential::new);
        Self {
            caller: Arc::new(AuthenticatedCaller::new(request, credential)),
        }
    }

    /// Stateless manager for applications.
    pub fn applications(&self) -> ApplicationClient {
        ApplicationClient::new(self.caller.clone())
    }

    /// Session bound to one application, optionally starting from a known id.
    pub fn application(&self, id: Option<String>) -> ApplicationSession {
        ApplicationSession::new(self.applications(), id)
    }
}
