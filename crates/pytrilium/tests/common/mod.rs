//! Common test utilities for ETAPI tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pytrilium::{ClientBuilder, RetryPolicy, TriliumClient};
use tracing::{Dispatch, Level};
use tracing_subscriber::fmt::MakeWriter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token every test client starts with.
pub const TEST_TOKEN: &str = "test-etapi-token";

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Mount a successful `/app-info` response so the liveness probe passes.
pub async fn mount_probe(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/etapi/app-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(app_info_json()))
        .mount(server)
        .await;
}

/// Builder pointed at the mock server, with retries that do not sleep.
pub fn builder(server: &MockServer) -> ClientBuilder {
    TriliumClient::builder()
        .url(server.uri())
        .token(TEST_TOKEN)
        .retry_policy(fast_retries(5))
}

/// Retry policy with `retries` retries and no backoff.
pub fn fast_retries(retries: u32) -> RetryPolicy {
    RetryPolicy::default()
        .max_retries(retries)
        .backoff_factor(Duration::ZERO)
}

/// Mount the probe and build a client against the mock server.
pub async fn connected_client(server: &MockServer) -> TriliumClient {
    mount_probe(server).await;
    builder(server).build().await.unwrap()
}

/// A minimal `/app-info` body.
pub fn app_info_json() -> serde_json::Value {
    serde_json::json!({
        "appVersion": "0.63.7",
        "dbVersion": 228,
        "syncVersion": 32,
        "buildDate": "2024-01-01T00:00:00Z",
        "buildRevision": "abc123",
        "dataDirectory": "/home/trilium/trilium-data",
        "clipperProtocolVersion": "1.0",
        "utcDateTime": "2024-01-01T00:00:00.000Z"
    })
}

/// A note as ETAPI returns it.
#[allow(dead_code)] // Not all test files use this
pub fn note_json(note_id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "noteId": note_id,
        "title": title,
        "type": "text",
        "mime": "text/html",
        "isProtected": false,
        "blobId": "blob1",
        "attributes": [],
        "parentNoteIds": ["root"],
        "childNoteIds": [],
        "parentBranchIds": [format!("root_{note_id}")],
        "childBranchIds": [],
        "dateCreated": "2024-01-01 10:00:00.000+0100",
        "dateModified": "2024-01-01 10:00:00.000+0100",
        "utcDateCreated": "2024-01-01 09:00:00.000Z",
        "utcDateModified": "2024-01-01 09:00:00.000Z"
    })
}

/// A branch as ETAPI returns it.
#[allow(dead_code)] // Not all test files use this
pub fn branch_json(branch_id: &str, note_id: &str, parent_note_id: &str) -> serde_json::Value {
    serde_json::json!({
        "branchId": branch_id,
        "noteId": note_id,
        "parentNoteId": parent_note_id,
        "prefix": null,
        "notePosition": 10,
        "isExpanded": false,
        "utcDateModified": "2024-01-01 09:00:00.000Z"
    })
}

/// An ETAPI error body.
#[allow(dead_code)] // Not all test files use this
pub fn etapi_error(status: u16, code: &str, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({
        "status": status,
        "code": code,
        "message": message
    }))
}

/// Collects formatted log output so tests can count records.
#[derive(Clone, Default)]
#[allow(dead_code)] // Not all test files use this
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)] // Not all test files use this
impl LogCapture {
    /// A dispatch writing WARN and above into this capture.
    pub fn dispatch(&self) -> Dispatch {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::WARN)
            .with_ansi(false)
            .with_writer(self.clone())
            .finish();
        Dispatch::new(subscriber)
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Number of records containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .count()
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
