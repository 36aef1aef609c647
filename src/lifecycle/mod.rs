//! # Client Lifecycle
//!
//! This module is the boundary between an application and the SDK: it reads
//! configuration, builds the transport, binds the credential and hands out
//! managers.
//!
//! ```rust,ignore
//! let client = InsuranceClient::new(ClientConfig::from_env()?)?;
//!
//! // Stateless: thread handles yourself
//! let created = client.applications().create(ApplicationCreate::new("P1")).await?;
//! let submitted = client.applications().submit(&created.handle).await?;
//!
//! // Stateful: the session threads the handle for you
//! let mut app = client.application(Some(created.handle.id().unwrap().to_string()));
//! app.confirm().await?;
//! ```
//!
//! Every manager handed out by one [`InsuranceClient`] shares the same
//! transport and the same read-only credential.

pub mod config;
pub mod insurance_client;
pub mod tracing;

pub use self::config::*;
pub use self::insurance_client::*;
pub use self::tracing::*;
