//! Error types for the payment handoff.

use thiserror::Error;

/// Local failures while turning a signed payload into a submitted form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaymentError {
    /// The signed payload has no destination URL.
    #[error("payment payload has no {0} field")]
    MissingPaymentUrl(&'static str),

    /// The signed payload is not a flat string map.
    #[error("invalid payment payload: {0}")]
    InvalidPayload(String),

    /// The host cannot render or submit a form.
    #[error("no rendering environment available to submit the payment form")]
    NoRenderingEnvironment,

    /// The sink was driven out of order.
    #[error("form sink error: {0}")]
    Sink(String),
}
