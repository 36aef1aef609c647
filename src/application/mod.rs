//! Application-specific resource logic: the [`Resource`](crate::framework::Resource)
//! implementation, its error type and the stateful session.

pub mod entity;
pub mod error;
pub mod session;

pub use error::*;
pub use session::*;
