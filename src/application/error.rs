//! Error types for the Application manager.

use crate::framework::{ApiError, ResourceError};
use crate::payment::PaymentError;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during application operations.
#[derive(Debug, Clone, Error)]
pub enum ApplicationError {
    /// A normalized failure from the request layer, unchanged.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Creation returned no usable body.
    #[error("no response")]
    EmptyResponse,

    /// The request payload could not be encoded.
    #[error("could not encode application payload: {0}")]
    Encode(#[source] Arc<serde_json::Error>),

    /// The payment handoff failed locally.
    #[error(transparent)]
    Payment(#[from] PaymentError),
}

impl From<ResourceError> for ApplicationError {
    fn from(e: ResourceError) -> Self {
        match e {
            ResourceError::Api(e) => ApplicationError::Api(e),
            ResourceError::EmptyResponse => ApplicationError::EmptyResponse,
            ResourceError::Encode(e) => ApplicationError::Encode(Arc::new(e)),
        }
    }
}

// serde_json::Error has no equality; encode failures compare by message.
impl PartialEq for ApplicationError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Api(a), Self::Api(b)) => a == b,
            (Self::EmptyResponse, Self::EmptyResponse) => true,
            (Self::Encode(a), Self::Encode(b)) => a.to_string() == b.to_string(),
            (Self::Payment(a), Self::Payment(b)) => a == b,
            _ => false,
        }
    }
}
