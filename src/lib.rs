//! # Insurance SDK
//!
//! > **A client for managing insurance applications and handing them off to payment.**
//!
//! The crate is built from two abstractions:
//!
//! - a **request layer** that turns a logical operation into one authenticated
//!   POST and normalizes every failure shape into [`ApiError`](framework::ApiError);
//! - a **resource manager** pattern that binds a sequence of remote operations to
//!   one resource identity, tracked as an explicit
//!   [`ResourceHandle`](framework::ResourceHandle).
//!
//! On top of the application manager sits the **payment handoff**, which turns a
//! server-issued signed payload into a form a browser can submit.
//!
//! ## 🏗️ Design
//!
//! ### Explicit identity
//! Managers hold no per-resource state. Every handle-scoped operation takes the
//! current handle and returns an [`Outcome`](framework::Outcome) with the next
//! one. A failed call returns no handle, so whatever the caller held stays valid.
//! [`ApplicationSession`](application::ApplicationSession) threads the handle for
//! callers who prefer a stateful object.
//!
//! ### One error contract
//! Transports report raw [`TransportFailure`](framework::TransportFailure)s. The
//! request layer collapses them, in a fixed precedence, into
//! [`ApiError`](framework::ApiError). Managers propagate it unchanged.
//!
//! ### No retries
//! One operation is one round trip. Retry, timeout and sequencing policy belong
//! to the caller.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Request client, transports, the generic [`ResourceClient`](framework::ResourceClient)
//! and the [`ResourceManager`](framework::ResourceManager) trait.
//!
//! ### 2. The Boundary ([`lifecycle`])
//! [`InsuranceClient`](lifecycle::InsuranceClient), configuration and tracing setup.
//!
//! ### 3. The Interface ([`clients`])
//! [`ApplicationClient`](clients::ApplicationClient): CRUD, lifecycle
//! transitions, package catalog and payment handoff.
//!
//! ### 4. The Implementation ([`application`], [`model`], [`payment`])
//! The application resource, its payloads and errors, and the form building
//! blocks used by the payment handoff.
//!
//! ## 🚀 Quick Start
//!
//! ```rust,no_run
//! use insurance_sdk::lifecycle::{ClientConfig, InsuranceClient};
//! use insurance_sdk::model::ApplicationCreate;
//! use insurance_sdk::payment::HtmlFormSink;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = InsuranceClient::new(ClientConfig::from_env()?)?;
//! let mut app = client.application(None);
//!
//! app.create(ApplicationCreate::new("TRAVEL_BASIC")).await?;
//! app.select_package("GOLD").await?;
//! app.submit().await?;
//!
//! let mut page = HtmlFormSink::new();
//! app.redirect_to_payment("https://shop.example/done", &mut page).await?;
//! let html = page.into_html();
//! # Ok(())
//! # }
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod application;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod payment;
