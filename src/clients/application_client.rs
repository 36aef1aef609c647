//! # Application Client
//!
//! Provides a high-level API for the remote insurance application resource.
//! It wraps a `ResourceClient<Application>` and adds the lifecycle and
//! package-catalog operations on top of the standard ones from
//! [`ResourceManager`].
use crate::application::ApplicationError;
use crate::framework::{
    Caller, Endpoint, Outcome, ResourceClient, ResourceError, ResourceHandle, ResourceManager,
};
use crate::model::Application;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Handle for one remote application.
pub type ApplicationHandle = ResourceHandle;

/// Client for the Application resource.
#[derive(Clone)]
pub struct ApplicationClient {
    inner: ResourceClient<Application>,
}

impl ApplicationClient {
    pub fn new(caller: Arc<dyn Caller>) -> Self {
        Self {
            inner: ResourceClient::new(caller),
        }
    }
}

impl ResourceManager<Application> for ApplicationClient {
    type Error = ApplicationError;

    fn inner(&self) -> &ResourceClient<Application> {
        &self.inner
    }

    fn map_error(e: ResourceError) -> Self::Error {
        ApplicationError::from(e)
    }
}

impl ApplicationClient {
    /// Submits the application. Ordering rules are enforced server-side.
    #[instrument(skip(self), fields(id = ?handle.id()))]
    pub async fn submit(&self, handle: &ApplicationHandle) -> Result<Outcome, ApplicationError> {
        self.transition(handle, Endpoint::SubmitApplication).await
    }

    /// Confirms the application.
    #[instrument(skip(self), fields(id = ?handle.id()))]
    pub async fn confirm(&self, handle: &ApplicationHandle) -> Result<Outcome, ApplicationError> {
        self.transition(handle, Endpoint::ConfirmApplication).await
    }

    async fn transition(
        &self,
        handle: &ApplicationHandle,
        endpoint: Endpoint,
    ) -> Result<Outcome, ApplicationError> {
        let response = self.inner.perform(handle, endpoint, Map::new()).await?;
        let next = handle.clone().mirror_status(&response);
        if next.status() != handle.status() {
            info!(status = ?next.status(), "Status changed");
        }
        Ok(Outcome::new(next, response))
    }

    /// Packages available to the application.
    #[instrument(skip(self), fields(id = ?handle.id()))]
    pub async fn get_packages(&self, handle: &ApplicationHandle) -> Result<Value, ApplicationError> {
        debug!("Sending request");
        Ok(self
            .inner
            .perform(handle, Endpoint::GetPackages, Map::new())
            .await?)
    }

    /// The package currently attached to the application.
    #[instrument(skip(self), fields(id = ?handle.id()))]
    pub async fn get_package(&self, handle: &ApplicationHandle) -> Result<Value, ApplicationError> {
        debug!("Sending request");
        Ok(self
            .inner
            .perform(handle, Endpoint::GetPackage, Map::new())
            .await?)
    }

    /// Selects a package and returns the updated application body.
    ///
    /// Unlike the other mutating operations, the returned status is not
    /// mirrored; callers that need it should follow up with `get`.
    #[instrument(skip(self), fields(id = ?handle.id()))]
    pub async fn select_package(
        &self,
        handle: &ApplicationHandle,
        package_code: &str,
    ) -> Result<Value, ApplicationError> {
        debug!("Sending request");
        let mut fields = Map::new();
        fields.insert(
            "package_code".to_string(),
            Value::String(package_code.to_string()),
        );
        Ok(self
            .inner
            .perform(handle, Endpoint::SelectPackage, fields)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockCaller;
    use crate::framework::ApiError;
    use crate::model::{ApplicationCreate, ApplicationFields, ApplicationUpdate};
    use serde_json::json;

    fn setup() -> (MockCaller, ApplicationClient) {
        let mock = MockCaller::new();
        let client = ApplicationClient::new(mock.caller());
        (mock, client)
    }

    #[tokio::test]
    async fn test_get_adopts_explicit_id() {
        let (mock, client) = setup();
        mock.expect(Endpoint::GetApplication)
            .return_ok(json!({"id": "X9", "status": "draft"}));

        let previous = ApplicationHandle::for_id("OLD");
        let outcome = client.get(&previous, Some("X9")).await.unwrap();

        assert_eq!(outcome.handle.id(), Some("X9"));
        assert_eq!(outcome.handle.status(), Some("draft"));
        assert_eq!(mock.calls()[0].payload, Some(json!({"application_id": "X9"})));
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_uses_current_id() {
        let (mock, client) = setup();
        mock.expect(Endpoint::GetApplication).return_ok(json!({"id": "A1"}));

        let outcome = client
            .get(&ApplicationHandle::for_id("A1"), None)
            .await
            .unwrap();

        assert_eq!(outcome.handle.id(), Some("A1"));
        assert_eq!(outcome.handle.status(), None);
        assert_eq!(outcome.response, json!({"id": "A1"}));
    }

    #[tokio::test]
    async fn test_get_without_id_sends_request_without_id() {
        let (mock, client) = setup();
        mock.expect(Endpoint::GetApplication)
            .return_ok(json!({"id": "A7", "status": "draft"}));

        let outcome = client
            .get(&ApplicationHandle::default(), None)
            .await
            .unwrap();

        assert_eq!(mock.calls()[0].payload, Some(json!({})));
        assert_eq!(outcome.handle.id(), None);
        assert_eq!(outcome.handle.status(), Some("draft"));
        mock.verify();
    }

    #[tokio::test]
    async fn test_submit_without_id_leaves_sequencing_to_server() {
        let (mock, client) = setup();
        mock.expect(Endpoint::SubmitApplication)
            .return_err(ApiError::Remote(json!({"code": "APPLICATION_REQUIRED"})));

        let err = client.submit(&ApplicationHandle::default()).await.unwrap_err();

        assert_eq!(
            err,
            ApplicationError::Api(ApiError::Remote(json!({"code": "APPLICATION_REQUIRED"})))
        );
        assert_eq!(mock.calls()[0].payload, Some(json!({})));
        mock.verify();
    }

    #[tokio::test]
    async fn test_list_is_stateless_and_verbatim() {
        let (mock, client) = setup();
        let body = json!({"items": [{"id": "A1"}], "total": 1});
        mock.expect(Endpoint::ListApplications).return_ok(body.clone());

        let mut query = Map::new();
        query.insert("status".into(), json!("draft"));
        query.insert("page".into(), json!(2));
        let listed = client.list(query).await.unwrap();

        assert_eq!(listed, body);
        assert_eq!(
            mock.calls()[0].payload,
            Some(json!({"status": "draft", "page": 2}))
        );
    }

    #[tokio::test]
    async fn test_create_adopts_id_and_status() {
        let (mock, client) = setup();
        mock.expect(Endpoint::CreateApplication)
            .return_ok(json!({"id": "A1", "status": "draft"}));

        let params = ApplicationCreate::new("P1").with_fields(ApplicationFields {
            package_code: Some("GOLD".into()),
            ..Default::default()
        });
        let outcome = client.create(params).await.unwrap();

        assert_eq!(outcome.handle.id(), Some("A1"));
        assert_eq!(outcome.handle.status(), Some("draft"));
        assert_eq!(
            mock.calls()[0].payload,
            Some(json!({"product_id": "P1", "package_code": "GOLD"}))
        );
    }

    #[tokio::test]
    async fn test_create_rejects_falsy_response() {
        let (mock, client) = setup();
        mock.expect(Endpoint::CreateApplication).return_ok(Value::Null);

        let err = client.create(ApplicationCreate::new("P1")).await.unwrap_err();
        assert_eq!(err, ApplicationError::EmptyResponse);
        assert_ne!(err, ApplicationError::Api(ApiError::NoResponse));
        assert_eq!(err.to_string(), "no response");
    }

    #[tokio::test]
    async fn test_update_adopts_explicit_id_before_call() {
        let (mock, client) = setup();
        mock.expect(Endpoint::UpdateApplication)
            .return_ok(json!({"status": "in_progress"}));

        let update = ApplicationUpdate::new(ApplicationFields {
            step: Some(3),
            ..Default::default()
        })
        .for_application("B2");
        let outcome = client
            .update(&ApplicationHandle::for_id("A1"), update)
            .await
            .unwrap();

        assert_eq!(outcome.handle.id(), Some("B2"));
        assert_eq!(outcome.handle.status(), Some("in_progress"));
        assert_eq!(
            mock.calls()[0].payload,
            Some(json!({"application_id": "B2", "step": 3}))
        );
    }

    #[tokio::test]
    async fn test_update_omits_unset_fields() {
        let (mock, client) = setup();
        mock.expect(Endpoint::UpdateApplication).return_ok(json!({}));

        client
            .update(&ApplicationHandle::for_id("A1"), ApplicationUpdate::default())
            .await
            .unwrap();

        assert_eq!(mock.calls()[0].payload, Some(json!({"application_id": "A1"})));
    }

    #[tokio::test]
    async fn test_submit_and_confirm_mirror_status() {
        let (mock, client) = setup();
        mock.expect(Endpoint::SubmitApplication)
            .return_ok(json!({"status": "submitted"}));
        mock.expect(Endpoint::ConfirmApplication)
            .return_ok(json!({"status": "confirmed"}));

        let handle = ApplicationHandle::for_id("A1");
        let submitted = client.submit(&handle).await.unwrap();
        assert_eq!(submitted.handle.status(), Some("submitted"));

        let confirmed = client.confirm(&submitted.handle).await.unwrap();
        assert_eq!(confirmed.handle.status(), Some("confirmed"));
        assert_eq!(confirmed.handle.id(), Some("A1"));

        for call in mock.calls() {
            assert_eq!(call.payload, Some(json!({"application_id": "A1"})));
        }
        mock.verify();
    }

    #[tokio::test]
    async fn test_server_sequencing_error_propagates_unchanged() {
        let (mock, client) = setup();
        mock.expect(Endpoint::ConfirmApplication)
            .return_err(ApiError::Remote(json!({"code": "INVALID_STEP"})));

        let err = client
            .confirm(&ApplicationHandle::for_id("A1"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApplicationError::Api(ApiError::Remote(json!({"code": "INVALID_STEP"})))
        );
    }

    #[tokio::test]
    async fn test_package_queries_are_id_scoped() {
        let (mock, client) = setup();
        mock.expect(Endpoint::GetPackages)
            .return_ok(json!([{"code": "GOLD"}, {"code": "SILVER"}]));
        mock.expect(Endpoint::GetPackage).return_ok(json!({"code": "GOLD"}));

        let handle = ApplicationHandle::for_id("A1");
        let packages = client.get_packages(&handle).await.unwrap();
        let package = client.get_package(&handle).await.unwrap();

        assert_eq!(packages.as_array().map(Vec::len), Some(2));
        assert_eq!(package, json!({"code": "GOLD"}));
        let calls = mock.calls();
        assert_eq!(calls[0].endpoint, Endpoint::GetPackages);
        assert_eq!(calls[1].endpoint, Endpoint::GetPackage);
        assert_eq!(calls[1].payload, Some(json!({"application_id": "A1"})));
    }

    #[tokio::test]
    async fn test_select_package_sends_code() {
        let (mock, client) = setup();
        mock.expect(Endpoint::SelectPackage)
            .return_ok(json!({"id": "A1", "package_code": "GOLD"}));

        let body = client
            .select_package(&ApplicationHandle::for_id("A1"), "GOLD")
            .await
            .unwrap();

        assert_eq!(body["package_code"], "GOLD");
        assert_eq!(
            mock.calls()[0].payload,
            Some(json!({"package_code": "GOLD", "application_id": "A1"}))
        );
    }
}
