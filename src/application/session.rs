//! # Application Session
//!
//! [`ApplicationClient`] is stateless: every operation takes a handle and
//! returns the next one. [`ApplicationSession`] owns a single handle and
//! threads it for the caller, which is the convenient shape when one piece of
//! code drives one application from creation to payment.
//!
//! Methods take `&mut self`, so calls on one session are serialized by the
//! borrow checker. A failed call leaves the held id and status untouched.

use crate::application::ApplicationError;
use crate::clients::{ApplicationClient, ApplicationHandle};
use crate::framework::ResourceManager;
use crate::model::{ApplicationCreate, ApplicationQuery, ApplicationUpdate};
use crate::payment::{FormSink, PaymentHashPayload, SubmittableForm};
use serde_json::Value;

/// One application driven through its lifecycle.
#[derive(Clone)]
pub struct ApplicationSession {
    client: ApplicationClient,
    handle: ApplicationHandle,
}

impl ApplicationSession {
    pub fn new(client: ApplicationClient, id: Option<String>) -> Self {
        Self {
            client,
            handle: ApplicationHandle::new(id),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.handle.id()
    }

    pub fn status(&self) -> Option<&str> {
        self.handle.status()
    }

    pub fn handle(&self) -> &ApplicationHandle {
        &self.handle
    }

    /// Replaces the current id without a remote call.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.handle = self.handle.clone().with_id(id);
    }

    pub async fn get(&mut self, id: Option<&str>) -> Result<Value, ApplicationError> {
        let outcome = self.client.get(&self.handle, id).await?;
        self.handle = outcome.handle;
        Ok(outcome.response)
    }

    /// Lists applications. Does not read or change the current id.
    pub async fn list(&self, query: ApplicationQuery) -> Result<Value, ApplicationError> {
        self.client.list(query).await
    }

    /// Creates an application. A response without `id` or `status` keeps the
    /// values held before.
    pub async fn create(&mut self, params: ApplicationCreate) -> Result<Value, ApplicationError> {
        let outcome = self.client.create(params).await?;
        self.handle = self.handle.clone().absorb(&outcome.response);
        Ok(outcome.response)
    }

    pub async fn update(&mut self, update: ApplicationUpdate) -> Result<Value, ApplicationError> {
        let outcome = self.client.update(&self.handle, update).await?;
        self.handle = outcome.handle;
        Ok(outcome.response)
    }

    pub async fn submit(&mut self) -> Result<Value, ApplicationError> {
        let outcome = self.client.submit(&self.handle).await?;
        self.handle = outcome.handle;
        Ok(outcome.response)
    }

    pub async fn confirm(&mut self) -> Result<Value, ApplicationError> {
        let outcome = self.client.confirm(&self.handle).await?;
        self.handle = outcome.handle;
        Ok(outcome.response)
    }

    pub async fn get_packages(&self) -> Result<Value, ApplicationError> {
        self.client.get_packages(&self.handle).await
    }

    pub async fn get_package(&self) -> Result<Value, ApplicationError> {
        self.client.get_package(&self.handle).await
    }

    pub async fn select_package(&self, package_code: &str) -> Result<Value, ApplicationError> {
        self.client.select_package(&self.handle, package_code).await
    }

    pub async fn fetch_signed_payload(
        &self,
        frontend_return_url: &str,
    ) -> Result<PaymentHashPayload, ApplicationError> {
        self.client
            .fetch_signed_payload(&self.handle, frontend_return_url)
            .await
    }

    pub async fn build_form(
        &self,
        frontend_return_url: &str,
    ) -> Result<SubmittableForm, ApplicationError> {
        self.client
            .build_form(&self.handle, frontend_return_url)
            .await
    }

    pub async fn redirect_to_payment<S: FormSink + ?Sized>(
        &self,
        frontend_return_url: &str,
        sink: &mut S,
    ) -> Result<(), ApplicationError> {
        self.client
            .redirect_to_payment(&self.handle, frontend_return_url, sink)
            .await
    }
}
