//! # Payment Handoff
//!
//! A two-stage pipeline on top of the application's identity:
//!
//! 1. [`fetch_signed_payload`](ApplicationClient::fetch_signed_payload) asks the
//!    service for the signed field set of the current application.
//! 2. [`build_form`](ApplicationClient::build_form) turns it into a
//!    [`SubmittableForm`].
//!
//! [`redirect_to_payment`](ApplicationClient::redirect_to_payment) composes both
//! and hands the form to a [`FormSink`].
use crate::application::ApplicationError;
use crate::clients::{ApplicationClient, ApplicationHandle};
use crate::framework::{Endpoint, ResourceManager};
use crate::payment::{FormSink, PaymentHashPayload, SubmittableForm};
use serde_json::{Map, Value};
use tracing::{info, instrument};

impl ApplicationClient {
    /// Fetches the signed payment payload for the application.
    #[instrument(skip(self), fields(id = ?handle.id()))]
    pub async fn fetch_signed_payload(
        &self,
        handle: &ApplicationHandle,
        frontend_return_url: &str,
    ) -> Result<PaymentHashPayload, ApplicationError> {
        let mut fields = Map::new();
        fields.insert(
            "frontend_return_url".to_string(),
            Value::String(frontend_return_url.to_string()),
        );
        let response = self
            .inner()
            .perform(handle, Endpoint::PaymentHash, fields)
            .await?;
        Ok(PaymentHashPayload::try_from(response)?)
    }

    /// Fetches the signed payload and builds a fresh form from it.
    #[instrument(skip(self), fields(id = ?handle.id()))]
    pub async fn build_form(
        &self,
        handle: &ApplicationHandle,
        frontend_return_url: &str,
    ) -> Result<SubmittableForm, ApplicationError> {
        let payload = self.fetch_signed_payload(handle, frontend_return_url).await?;
        Ok(SubmittableForm::try_from(payload)?)
    }

    /// Builds the form and submits it through `sink`.
    ///
    /// Fails with [`PaymentError::NoRenderingEnvironment`](crate::payment::PaymentError::NoRenderingEnvironment)
    /// before any request is made when the sink cannot render.
    #[instrument(skip(self, sink), fields(id = ?handle.id()))]
    pub async fn redirect_to_payment<S: FormSink + ?Sized>(
        &self,
        handle: &ApplicationHandle,
        frontend_return_url: &str,
        sink: &mut S,
    ) -> Result<(), ApplicationError> {
        sink.ensure_available()?;
        let form = self.build_form(handle, frontend_return_url).await?;
        form.submit_to(sink)?;
        info!(action = %form.action, fields = form.fields.len(), "Payment form submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockCaller;
    use crate::framework::ApiError;
    use crate::payment::{FormMethod, HeadlessSink, HtmlFormSink, PaymentError};
    use serde_json::json;

    #[derive(Default)]
    struct RecordingSink {
        events: Vec<String>,
    }

    impl FormSink for RecordingSink {
        fn create_form(&mut self, action: &str, method: FormMethod) -> Result<(), PaymentError> {
            self.events.push(format!("form {method} {action}"));
            Ok(())
        }

        fn add_hidden_field(&mut self, name: &str, value: &str) -> Result<(), PaymentError> {
            self.events.push(format!("field {name}={value}"));
            Ok(())
        }

        fn submit(&mut self) -> Result<(), PaymentError> {
            self.events.push("submit".to_string());
            Ok(())
        }
    }

    fn hash_body() -> Value {
        json!({
            "payment_url": "https://pay.example/x",
            "amount": "100",
            "ref": "R1"
        })
    }

    #[tokio::test]
    async fn test_fetch_signed_payload_sends_id_and_return_url() {
        let mock = MockCaller::new();
        mock.expect(Endpoint::PaymentHash).return_ok(hash_body());
        let client = ApplicationClient::new(mock.caller());

        let payload = client
            .fetch_signed_payload(&ApplicationHandle::for_id("A1"), "https://shop.example/done")
            .await
            .unwrap();

        assert_eq!(payload.get("payment_url"), Some("https://pay.example/x"));
        assert_eq!(
            mock.calls()[0].payload,
            Some(json!({
                "frontend_return_url": "https://shop.example/done",
                "application_id": "A1"
            }))
        );
    }

    #[tokio::test]
    async fn test_build_form() {
        let mock = MockCaller::new();
        mock.expect(Endpoint::PaymentHash).return_ok(hash_body());
        let client = ApplicationClient::new(mock.caller());

        let form = client
            .build_form(&ApplicationHandle::for_id("A1"), "https://shop.example/done")
            .await
            .unwrap();

        assert_eq!(form.action, "https://pay.example/x");
        assert_eq!(
            form.fields,
            vec![
                ("amount".to_string(), "100".to_string()),
                ("ref".to_string(), "R1".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_redirect_drives_sink_in_order() {
        let mock = MockCaller::new();
        mock.expect(Endpoint::PaymentHash).return_ok(hash_body());
        let client = ApplicationClient::new(mock.caller());
        let mut sink = RecordingSink::default();

        client
            .redirect_to_payment(&ApplicationHandle::for_id("A1"), "https://shop.example/done", &mut sink)
            .await
            .unwrap();

        assert_eq!(
            sink.events,
            [
                "form POST https://pay.example/x",
                "field amount=100",
                "field ref=R1",
                "submit"
            ]
        );
    }

    #[tokio::test]
    async fn test_redirect_renders_html() {
        let mock = MockCaller::new();
        mock.expect(Endpoint::PaymentHash).return_ok(hash_body());
        let client = ApplicationClient::new(mock.caller());
        let mut sink = HtmlFormSink::new();

        client
            .redirect_to_payment(&ApplicationHandle::for_id("A1"), "https://shop.example/done", &mut sink)
            .await
            .unwrap();

        assert!(sink.html().unwrap().contains("name=\"ref\" value=\"R1\""));
    }

    #[tokio::test]
    async fn test_redirect_headless_fails_before_any_call() {
        let mock = MockCaller::new();
        let client = ApplicationClient::new(mock.caller());

        let err = client
            .redirect_to_payment(&ApplicationHandle::for_id("A1"), "https://shop.example/done", &mut HeadlessSink)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApplicationError::Payment(PaymentError::NoRenderingEnvironment)
        );
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_payload_without_url_is_rejected() {
        let mock = MockCaller::new();
        mock.expect(Endpoint::PaymentHash)
            .return_ok(json!({"amount": "100"}));
        let client = ApplicationClient::new(mock.caller());

        let err = client
            .build_form(&ApplicationHandle::for_id("A1"), "https://shop.example/done")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Payment(PaymentError::MissingPaymentUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_hash_failure_propagates() {
        let mock = MockCaller::new();
        mock.expect(Endpoint::PaymentHash)
            .return_err(ApiError::Transport("connection reset".into()));
        let client = ApplicationClient::new(mock.caller());

        let err = client
            .fetch_signed_payload(&ApplicationHandle::for_id("A1"), "https://shop.example/done")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApplicationError::Api(ApiError::Transport("connection reset".into()))
        );
    }
}
