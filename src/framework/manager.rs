//! # ResourceManager Trait
//!
//! Provides a common interface for resource-specific managers, adding default
//! `get`, `list`, `create` and `update` methods built on top of a generic
//! [`ResourceClient`].
use crate::framework::{Outcome, Resource, ResourceClient, ResourceError, ResourceHandle};
use async_trait::async_trait;
use serde_json::Value;

/// Trait for resource-specific managers to inherit the standard operations.
///
/// A manager wraps a [`ResourceClient`] and maps [`ResourceError`] into its
/// own error type. Resource-specific operations are written as inherent
/// methods on the manager.
///
/// # Example
///
/// ```rust
/// use insurance_sdk::framework::{
///     Endpoint, ResourceClient, ResourceError, ResourceManager, Resource,
/// };
/// use serde_json::{Map, Value};
///
/// enum Quote {}
///
/// impl Resource for Quote {
///     const NAME: &'static str = "quote";
///     const ID_FIELD: &'static str = "quote_id";
///     const GET: Endpoint = Endpoint::GetApplication;
///     const LIST: Endpoint = Endpoint::ListApplications;
///     const CREATE: Endpoint = Endpoint::CreateApplication;
///     const UPDATE: Endpoint = Endpoint::UpdateApplication;
///     type Create = Map<String, Value>;
///     type Update = Map<String, Value>;
///     type Query = Map<String, Value>;
///     fn explicit_id(_: &Map<String, Value>) -> Option<&str> { None }
/// }
///
/// struct QuoteManager { inner: ResourceClient<Quote> }
///
/// impl ResourceManager<Quote> for QuoteManager {
///     type Error = String;
///     fn inner(&self) -> &ResourceClient<Quote> { &self.inner }
///     fn map_error(e: ResourceError) -> String { e.to_string() }
/// }
/// ```
#[async_trait]
pub trait ResourceManager<R: Resource>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<R>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: ResourceError) -> Self::Error;

    /// Fetch the resource, adopting `id` as the current id first when given.
    #[tracing::instrument(skip(self, handle))]
    async fn get(
        &self,
        handle: &ResourceHandle,
        id: Option<&str>,
    ) -> Result<Outcome, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(handle, id).await.map_err(Self::map_error)
    }

    /// List resources matching `query`, passed through verbatim.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: R::Query) -> Result<Value, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(&query).await.map_err(Self::map_error)
    }

    /// Create a resource and return its first handle.
    #[tracing::instrument(skip(self, params))]
    async fn create(&self, params: R::Create) -> Result<Outcome, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().create(&params).await.map_err(Self::map_error)
    }

    /// Update the resource behind `handle`.
    #[tracing::instrument(skip(self, handle, update))]
    async fn update(
        &self,
        handle: &ResourceHandle,
        update: R::Update,
    ) -> Result<Outcome, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .update(handle, &update)
            .await
            .map_err(Self::map_error)
    }
}
