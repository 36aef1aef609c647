//! # Framework Errors
//!
//! This module defines the error types shared by every resource manager.
//!
//! - [`TransportFailure`] is the raw failure shape a [`Transport`](crate::framework::Transport)
//!   reports. It may carry a message, a failed response, both, or neither.
//! - [`ApiError`] is the single normalized error the request layer hands to callers.
//!   Transport-specific shapes never leak past [`TransportFailure::normalize`].
//! - [`ResourceError`] adds the few local failures the generic resource client can
//!   produce on its own.

use serde_json::Value;
use std::fmt;

/// A response that came back with a non-success status.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedResponse {
    pub status: u16,
    /// The response body, when the server sent one.
    pub data: Option<Value>,
}

/// Raw failure reported by a transport, before normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportFailure {
    pub message: Option<String>,
    pub response: Option<FailedResponse>,
}

impl TransportFailure {
    /// A conventional error carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            response: None,
        }
    }

    /// A failed response without a message of its own.
    pub fn response(status: u16, data: Option<Value>) -> Self {
        Self {
            message: None,
            response: Some(FailedResponse { status, data }),
        }
    }

    /// Collapses the failure into the normalized [`ApiError`].
    ///
    /// Precedence: message, then `response.data`, then the bare response,
    /// then the failure itself.
    pub fn normalize(self) -> ApiError {
        if let Some(message) = self.message {
            return ApiError::Transport(message);
        }
        match self.response {
            Some(FailedResponse {
                data: Some(data), ..
            }) => ApiError::Remote(data),
            Some(FailedResponse { status, data: None }) => ApiError::Response { status },
            None => ApiError::Unclassified(self),
        }
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, &self.response) {
            (Some(message), _) => f.write_str(message),
            (None, Some(response)) => write!(f, "request failed with status {}", response.status),
            (None, None) => f.write_str("transport failure"),
        }
    }
}

/// The normalized error produced by the request layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The transport produced no response at all.
    #[error("no response")]
    NoResponse,

    /// A conventional error object; its message is kept unchanged.
    #[error("{0}")]
    Transport(String),

    /// A structured error body supplied by the server, verbatim.
    #[error("remote error: {0}")]
    Remote(Value),

    /// A failed response that carried no body.
    #[error("request failed with status {status}")]
    Response { status: u16 },

    /// A failure matching none of the known shapes.
    #[error("unclassified transport failure: {0}")]
    Unclassified(TransportFailure),
}

/// Errors produced by the generic [`ResourceClient`](crate::framework::ResourceClient).
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Creation returned a falsy body.
    #[error("no response")]
    EmptyResponse,

    /// The payload could not be encoded as a JSON object.
    #[error("could not encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}
