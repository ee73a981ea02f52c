//! Tests for the request dispatcher: retries, response codes and logging.

mod common;

use std::time::Duration;

use common::{LogCapture, builder, connected_client, fast_retries, mount_probe, setup_mock_server};
use pytrilium::{Method, RequestBody, RetryPolicy, StatusCode};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const WARNING: &str = "possible invalid response code";

#[tokio::test]
async fn test_request_returns_valid_response() {
    let server = setup_mock_server().await;
    let client = connected_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/etapi/notes"))
        .and(query_param("search", "#todo"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"results":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .request(Method::GET, "/notes", RequestBody::Empty, &[("search", "#todo")])
        .await
        .unwrap();

    assert!(response.is_valid());
    assert_eq!(response.text(), r#"{"results":[]}"#);
}

#[tokio::test]
async fn test_endpoint_without_leading_slash() {
    let server = setup_mock_server().await;
    let client = connected_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/etapi/calendar/years/2024"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.get("calendar/years/2024").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_text_body_is_sent_with_content_type() {
    let server = setup_mock_server().await;
    let client = connected_client(&server).await;

    Mock::given(method("PUT"))
        .and(path("/etapi/notes/abc/content"))
        .and(header("Content-Type", "text/plain; charset=utf-8"))
        .and(body_string("<p>hi</p>"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .request(
            Method::PUT,
            "/notes/abc/content",
            RequestBody::Text("<p>hi</p>".to_string()),
            &[],
        )
        .await
        .unwrap();
    assert!(response.is_valid());
}

#[tokio::test]
async fn test_unexpected_status_is_returned_and_logged_once() {
    let server = setup_mock_server().await;
    mount_probe(&server).await;
    let logs = LogCapture::default();
    let client = builder(&server)
        .log_dispatch(logs.dispatch())
        .build()
        .await
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/etapi/notes/missing"))
        .respond_with(common::etapi_error(404, "NOTE_NOT_FOUND", "Note 'missing' not found."))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.get("/notes/missing").await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(!response.is_valid());
    assert!(response.text().contains("NOTE_NOT_FOUND"));
    assert_eq!(logs.count(WARNING), 1);
    assert!(logs.contents().contains("404"));
    assert!(logs.contents().contains("NOTE_NOT_FOUND"));
}

#[tokio::test]
async fn test_valid_status_is_not_logged() {
    let server = setup_mock_server().await;
    mount_probe(&server).await;
    let logs = LogCapture::default();
    let client = builder(&server)
        .log_dispatch(logs.dispatch())
        .build()
        .await
        .unwrap();

    client.get("/app-info").await.unwrap();
    assert_eq!(logs.count(WARNING), 0);
}

#[tokio::test]
async fn test_retryable_status_is_retried_up_to_budget() {
    let server = setup_mock_server().await;
    mount_probe(&server).await;
    let client = builder(&server)
        .retry_policy(fast_retries(2))
        .build()
        .await
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/etapi/notes/busy"))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .expect(3)
        .mount(&server)
        .await;

    let response = client.get("/notes/busy").await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.text(), "busy");
}

#[tokio::test]
async fn test_default_budget_is_six_attempts() {
    let server = setup_mock_server().await;
    mount_probe(&server).await;
    let client = builder(&server)
        .retry_policy(RetryPolicy::default().backoff_factor(Duration::ZERO))
        .build()
        .await
        .unwrap();

    Mock::given(method("DELETE"))
        .and(path("/etapi/notes/flaky"))
        .respond_with(ResponseTemplate::new(502))
        .expect(6)
        .mount(&server)
        .await;

    let response = client.notes().delete("flaky").await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_retry_recovers_after_transient_failures() {
    let server = setup_mock_server().await;
    let client = connected_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/etapi/notes/abc/content"))
        .respond_with(ResponseTemplate::new(504))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/etapi/notes/abc/content"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>ok</p>"))
        .expect(1)
        .mount(&server)
        .await;

    let content = client.notes().content("abc").await.unwrap();
    assert_eq!(content, "<p>ok</p>");
}

#[tokio::test]
async fn test_post_is_not_retried_on_status() {
    let server = setup_mock_server().await;
    let client = connected_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/etapi/branches"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .request(
            Method::POST,
            "/branches",
            RequestBody::Json(b"{}".to_vec()),
            &[],
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_non_retryable_status_is_sent_once() {
    let server = setup_mock_server().await;
    let client = connected_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/etapi/notes/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.get("/notes/broken").await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_exhausted_retries_log_final_response_once() {
    let server = setup_mock_server().await;
    mount_probe(&server).await;
    let logs = LogCapture::default();
    let client = builder(&server)
        .retry_policy(fast_retries(3))
        .log_dispatch(logs.dispatch())
        .build()
        .await
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/etapi/notes/down"))
        .respond_with(ResponseTemplate::new(502))
        .expect(4)
        .mount(&server)
        .await;

    client.get("/notes/down").await.unwrap();
    assert_eq!(logs.count(WARNING), 1);
}
