use insurance_sdk::framework::{ApiError, Credential, Endpoint, HttpTransport, RequestClient};
use serde_json::json;
use std::sync::Arc;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request_client(base: &str) -> RequestClient {
    let transport = HttpTransport::new().expect("Failed to build HTTP client");
    RequestClient::new(&Url::parse(base).unwrap(), Arc::new(transport))
}

#[tokio::test]
async fn test_post_json_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/applications/get"))
        .and(header("content-type", "application/json"))
        .and(header("authorization", "Bearer tok-123"))
        .and(body_json(json!({"application_id": "A1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "A1", "status": "draft"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = request_client(&format!("{}/v1", server.uri()));
    let token = Credential::new("tok-123");
    let body = client
        .call(
            Endpoint::GetApplication,
            Some(json!({"application_id": "A1"})),
            Some(&token),
        )
        .await
        .unwrap();

    assert_eq!(body, json!({"id": "A1", "status": "draft"}));
}

#[tokio::test]
async fn test_no_credential_sends_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/applications/list"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = request_client(&server.uri());
    client
        .call(Endpoint::ListApplications, None, None)
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_structured_error_body_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/applications/submit"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"code": "INVALID_STEP"})),
        )
        .mount(&server)
        .await;

    let err = request_client(&server.uri())
        .call(Endpoint::SubmitApplication, None, None)
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::Remote(json!({"code": "INVALID_STEP"})));
}

#[tokio::test]
async fn test_plain_text_error_body_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = request_client(&server.uri())
        .call(Endpoint::ConfirmApplication, None, None)
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::Remote(json!("Bad Gateway")));
}

#[tokio::test]
async fn test_error_status_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = request_client(&server.uri())
        .call(Endpoint::GetPackages, None, None)
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::Response { status: 503 });
}

#[tokio::test]
async fn test_empty_success_body_is_no_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = request_client(&server.uri())
        .call(Endpoint::GetPackage, None, None)
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::NoResponse);
    assert_eq!(err.to_string(), "no response");
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    // Nothing listens on the discard port.
    let err = request_client("http://127.0.0.1:9")
        .call(Endpoint::GetApplication, None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)), "unexpected error: {err:?}");
}
