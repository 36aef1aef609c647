//! Payment handoff building blocks: signed payloads, forms and form sinks.
//!
//! The remote calls live on [`ApplicationClient`](crate::clients::ApplicationClient);
//! this module only shapes what they return.

pub mod error;
pub mod form;
pub mod sink;

pub use error::*;
pub use form::*;
pub use sink::*;
