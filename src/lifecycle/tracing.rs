//! # Observability & Tracing
//!
//! The SDK logs through the `tracing` crate and never installs a subscriber on
//! its own. Applications that do not already have one can call
//! [`setup_tracing`].
//!
//! ## What Gets Traced
//!
//! - **Requests**: one span per remote call, carrying the endpoint path
//! - **Failures**: every failed call is reported at `warn` before it is returned
//! - **State**: ids adopted on create and status changes on submit/confirm at `info`
//! - **Payloads**: request bodies at `debug`
//!
//! Credentials are never recorded.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Failures only
//! RUST_LOG=warn cargo test
//!
//! # Request bodies
//! RUST_LOG=insurance_sdk=debug cargo test
//! ```
//!
//! With `RUST_LOG=debug` a failed submit looks like:
//!
//! ```text
//! DEBUG submit:call: Sending request body=Object {"application_id": String("A1")}
//!  WARN submit:call: Request failed error=request failed with status 422
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
