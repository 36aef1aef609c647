//! Type-safe managers built on [`ResourceClient`](crate::framework::ResourceClient).

pub mod application_client;
pub mod payment;

pub use application_client::*;
