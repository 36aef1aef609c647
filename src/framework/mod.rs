//! Generic building blocks for talking to the remote service.
//!
//! # Main Components
//!
//! - [`RequestClient`] - One authenticated POST, one normalized outcome
//! - [`Transport`] / [`HttpTransport`] - The HTTP boundary
//! - [`Caller`] - The call function injected into managers
//! - [`ResourceClient`] - Generic get / list / create / update over a [`Resource`]
//! - [`ResourceManager`] - Default operations for resource-specific managers
//! - [`ApiError`] - The normalized error contract
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test managers without a network.

pub mod endpoint;
pub mod error;
pub mod manager;
pub mod mock;
pub mod request;
pub mod resource;
pub mod transport;

pub use endpoint::Endpoint;
pub use error::{ApiError, FailedResponse, ResourceError, TransportFailure};
pub use manager::ResourceManager;
pub use request::{AuthenticatedCaller, Caller, Credential, RequestClient};
pub use resource::{Outcome, Resource, ResourceClient, ResourceHandle};
pub use transport::{HttpTransport, Transport, TransportRequest};
