//! # Generic Resource Client
//!
//! Every remote resource (applications today; policies, products and quotes
//! follow the same shape) is managed through one [`ResourceClient<R>`].
//!
//! ## Explicit identity
//!
//! The client itself holds no per-resource state. The identity of "the current
//! resource" lives in a [`ResourceHandle`] value that the caller passes in, and
//! every operation returns the next handle inside an [`Outcome`]. The update
//! rules are:
//!
//! - an id supplied explicitly by the caller is adopted *before* the call;
//! - a non-empty `id` string in a create response is adopted after the call;
//! - a non-empty `status` string in a response is mirrored after the call.
//!
//! Status is never inferred locally. The client mirrors the remote state
//! machine, it does not enforce it. On failure no new handle is produced, so
//! whatever the caller held stays valid.

use crate::framework::endpoint::Endpoint;
use crate::framework::error::ResourceError;
use crate::framework::request::Caller;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Describes one kind of remote resource.
pub trait Resource: Send + Sync + 'static {
    /// Human readable name used in logs and errors.
    const NAME: &'static str;

    /// Payload field carrying the resource id.
    const ID_FIELD: &'static str;

    const GET: Endpoint;
    const LIST: Endpoint;
    const CREATE: Endpoint;
    const UPDATE: Endpoint;

    type Create: Serialize + Debug + Send + Sync;
    type Update: Serialize + Debug + Send + Sync;
    type Query: Serialize + Debug + Send + Sync;

    /// The id the caller explicitly asked an update to target, if any.
    fn explicit_id(update: &Self::Update) -> Option<&str>;
}

/// The last known id and status of one remote resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceHandle {
    id: Option<String>,
    status: Option<String>,
}

impl ResourceHandle {
    /// A handle with an optional initial id and no status.
    pub fn new(id: Option<String>) -> Self {
        Self { id, status: None }
    }

    pub fn for_id(id: impl Into<String>) -> Self {
        Self::new(Some(id.into()))
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Replaces the id. No remote call, no validation.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adopts the response `id`, if it carries one.
    pub fn adopt_id(mut self, response: &Value) -> Self {
        if let Some(id) = non_empty_str(response, "id") {
            self.id = Some(id.to_string());
        }
        self
    }

    /// Mirrors the response `status`, if it carries one.
    pub fn mirror_status(mut self, response: &Value) -> Self {
        if let Some(status) = non_empty_str(response, "status") {
            self.status = Some(status.to_string());
        }
        self
    }

    /// Applies both response rules.
    pub fn absorb(self, response: &Value) -> Self {
        self.adopt_id(response).mirror_status(response)
    }
}

fn non_empty_str<'a>(response: &'a Value, field: &str) -> Option<&'a str> {
    response
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Result of a handle-scoped operation: the next handle plus the raw response.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub handle: ResourceHandle,
    pub response: Value,
}

impl Outcome {
    pub fn new(handle: ResourceHandle, response: Value) -> Self {
        Self { handle, response }
    }
}

/// Generic get / list / create / update over any [`Resource`].
///
/// Cloning is cheap: the client only holds the shared [`Caller`].
pub struct ResourceClient<R: Resource> {
    caller: Arc<dyn Caller>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            caller: self.caller.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<R> {
    pub fn new(caller: Arc<dyn Caller>) -> Self {
        Self {
            caller,
            _resource: PhantomData,
        }
    }

    /// Fetches the resource, adopting `id` first when given.
    #[instrument(skip(self, handle), fields(resource = R::NAME))]
    pub async fn get(
        &self,
        handle: &ResourceHandle,
        id: Option<&str>,
    ) -> Result<Outcome, ResourceError> {
        let handle = match id {
            Some(id) => handle.clone().with_id(id),
            None => handle.clone(),
        };
        let response = self.perform(&handle, R::GET, Map::new()).await?;
        Ok(Outcome::new(handle.mirror_status(&response), response))
    }

    /// Lists resources. Never reads or needs a handle.
    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn list(&self, query: &R::Query) -> Result<Value, ResourceError> {
        let payload = serde_json::to_value(query)?;
        Ok(self.caller.call(R::LIST, Some(payload)).await?)
    }

    /// Creates a resource. No id is sent; the response decides the new handle.
    #[instrument(skip(self, params), fields(resource = R::NAME))]
    pub async fn create(&self, params: &R::Create) -> Result<Outcome, ResourceError> {
        debug!(?params, "create called");
        let payload = to_object(params)?;
        let response = self
            .caller
            .call(R::CREATE, Some(Value::Object(payload)))
            .await?;

        if is_falsy(&response) {
            return Err(ResourceError::EmptyResponse);
        }

        let handle = ResourceHandle::default().absorb(&response);
        info!(id = ?handle.id(), status = ?handle.status(), "Created");
        Ok(Outcome::new(handle, response))
    }

    /// Updates the resource. Unset fields are omitted, not cleared.
    #[instrument(skip(self, handle, update), fields(resource = R::NAME))]
    pub async fn update(
        &self,
        handle: &ResourceHandle,
        update: &R::Update,
    ) -> Result<Outcome, ResourceError> {
        debug!(?update, "update called");
        let handle = match R::explicit_id(update) {
            Some(id) => handle.clone().with_id(id),
            None => handle.clone(),
        };
        let fields = to_object(update)?;
        let response = self.perform(&handle, R::UPDATE, fields).await?;
        Ok(Outcome::new(handle.mirror_status(&response), response))
    }

    /// Calls an id-scoped endpoint with the handle's id plus `fields`.
    ///
    /// This is the building block for resource-specific operations. It does
    /// not touch the handle; callers decide what to mirror. Without a current
    /// id the id field is left out and the server decides.
    pub async fn perform(
        &self,
        handle: &ResourceHandle,
        endpoint: Endpoint,
        mut fields: Map<String, Value>,
    ) -> Result<Value, ResourceError> {
        match handle.id() {
            Some(id) => {
                fields.insert(R::ID_FIELD.to_string(), Value::String(id.to_string()));
            }
            None => debug!(resource = R::NAME, "No current id, sending without one"),
        }
        Ok(self.caller.call(endpoint, Some(Value::Object(fields))).await?)
    }
}

fn to_object<T: Serialize>(value: &T) -> Result<Map<String, Value>, ResourceError> {
    Ok(serde_json::from_value(serde_json::to_value(value)?)?)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
