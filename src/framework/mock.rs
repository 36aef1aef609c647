//! # Mock Framework & Testing Guide
//!
//! Two in-memory doubles let you test managers and the request layer without a
//! network:
//!
//! | Double | Replaces | Use Case |
//! |--------|----------|----------|
//! | [`MockCaller`] | [`Caller`] | Unit testing manager logic (handles, payloads, errors) |
//! | [`MockTransport`] | [`Transport`] | Testing [`RequestClient`](crate::framework::RequestClient) headers and normalization |
//!
//! For full HTTP round trips, drive [`HttpTransport`](crate::framework::HttpTransport)
//! against a `wiremock` server; see `tests/http_transport_test.rs`.
//!
//! ## Pattern: Manager Logic Test
//!
//! ```rust
//! use insurance_sdk::clients::ApplicationClient;
//! use insurance_sdk::framework::mock::MockCaller;
//! use insurance_sdk::framework::{Endpoint, ResourceHandle, ResourceManager};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockCaller::new();
//!     mock.expect(Endpoint::GetApplication)
//!         .return_ok(json!({"id": "A1", "status": "draft"}));
//!
//!     let client = ApplicationClient::new(mock.caller());
//!     let outcome = client.get(&ResourceHandle::default(), Some("A1")).await.unwrap();
//!
//!     assert_eq!(outcome.handle.status(), Some("draft"));
//!     assert_eq!(mock.calls()[0].payload, Some(json!({"application_id": "A1"})));
//!     mock.verify();
//! }
//! ```
//!
//! ## Testing Failure Scenarios
//!
//! Errors that are hard to provoke against a live service are one line here:
//!
//! ```rust
//! use insurance_sdk::framework::mock::MockCaller;
//! use insurance_sdk::framework::{ApiError, Endpoint};
//! use serde_json::json;
//!
//! let mock = MockCaller::new();
//! mock.expect(Endpoint::SubmitApplication)
//!     .return_err(ApiError::Remote(json!({"code": "INVALID_STEP"})));
//! ```

use crate::framework::endpoint::Endpoint;
use crate::framework::error::{ApiError, TransportFailure};
use crate::framework::request::Caller;
use crate::framework::transport::{Transport, TransportRequest};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// CALLER DOUBLE
// =============================================================================

/// An expected call and the response to hand back.
struct Expectation {
    endpoint: Endpoint,
    response: Result<Value, ApiError>,
}

/// A call observed by [`MockCaller`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: Endpoint,
    pub payload: Option<Value>,
}

/// A [`Caller`] that answers from a queue of expectations.
///
/// Expectations are consumed in order. A call to a different endpoint than
/// the next expectation, or a call with none left, panics.
#[derive(Clone, Default)]
pub struct MockCaller {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockCaller {
    /// Creates a new mock caller with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a shareable caller for the code under test.
    pub fn caller(&self) -> Arc<dyn Caller> {
        Arc::new(self.clone())
    }

    /// Expects a call to `endpoint`.
    pub fn expect(&self, endpoint: Endpoint) -> CallExpectationBuilder {
        CallExpectationBuilder {
            endpoint,
            expectations: self.expectations.clone(),
        }
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

#[async_trait]
impl Caller for MockCaller {
    async fn call(&self, endpoint: Endpoint, payload: Option<Value>) -> Result<Value, ApiError> {
        lock(&self.calls).push(RecordedCall {
            endpoint,
            payload,
        });

        let expectation = lock(&self.expectations).pop_front();
        match expectation {
            Some(exp) if exp.endpoint == endpoint => exp.response,
            Some(exp) => panic!(
                "Unexpected call to {}, expected {}",
                endpoint, exp.endpoint
            ),
            None => panic!("Unexpected call to {}, no expectations left", endpoint),
        }
    }
}

/// Builder for call expectations.
pub struct CallExpectationBuilder {
    endpoint: Endpoint,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl CallExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Value) {
        lock(&self.expectations).push_back(Expectation {
            endpoint: self.endpoint,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        lock(&self.expectations).push_back(Expectation {
            endpoint: self.endpoint,
            response: Err(error),
        });
    }
}

// =============================================================================
// TRANSPORT DOUBLE
// =============================================================================

type TransportResult = Result<Option<Value>, TransportFailure>;

/// A [`Transport`] that replays scripted outcomes and records requests.
#[derive(Clone, Default)]
pub struct MockTransport {
    outcomes: Arc<Mutex<VecDeque<TransportResult>>>,
    requests: Arc<Mutex<Vec<TransportRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful JSON body.
    pub fn respond_ok(&self, value: Value) {
        lock(&self.outcomes).push_back(Ok(Some(value)));
    }

    /// Queues the absence of any response.
    pub fn respond_none(&self) {
        lock(&self.outcomes).push_back(Ok(None));
    }

    /// Queues a raw failure.
    pub fn respond_err(&self, failure: TransportFailure) {
        lock(&self.outcomes).push_back(Err(failure));
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<TransportRequest> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(&self, request: TransportRequest) -> TransportResult {
        let url = request.url.clone();
        lock(&self.requests).push(request);
        let outcome = lock(&self.outcomes).pop_front();
        match outcome {
            Some(outcome) => outcome,
            None => panic!("Unexpected request to {}, no outcomes left", url),
        }
    }
}
