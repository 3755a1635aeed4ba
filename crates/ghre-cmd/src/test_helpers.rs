//! Shared test utilities for the export command.
//!
//! Provides a harness wiring a factory to a wiremock server and a scratch
//! output directory, plus helpers for mounting paginated listings.

use std::path::PathBuf;
use std::time::Duration;

use ghre_core::Config;
use ghre_core::iostreams::TestOutput;
use serde_json::Value;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::factory::Factory;

/// Token configured by [`TestHarness::new`].
pub const TEST_TOKEN: &str = "ghp_test_token_123";

/// A fully-configured test harness with factory, output capture, and mock server.
#[derive(Debug)]
pub struct TestHarness {
    /// The factory configured for testing.
    pub factory: Factory,
    /// Captured stdout/stderr output.
    pub output: TestOutput,
    /// Wiremock mock server for API requests.
    pub server: MockServer,
    /// Directory the export is written into.
    pub output_dir: TempDir,
}

impl TestHarness {
    /// Create a harness with a test token and no pause between organizations.
    pub async fn new() -> Self {
        Self::with_token(Some(TEST_TOKEN)).await
    }

    /// Create a harness with the given credential, or none.
    pub async fn with_token(token: Option<&str>) -> Self {
        let server = MockServer::start().await;
        let output_dir = tempfile::tempdir().expect("create temp dir");
        let config = Config::default()
            .with_token(token.map(Into::into))
            .with_org_delay(Duration::ZERO)
            .with_output_dir(output_dir.path());
        let (factory, output) = Factory::test(config);
        let factory = factory
            .with_http_client(reqwest::Client::new())
            .with_api_url(format!("{}/", server.uri()));

        Self {
            factory,
            output,
            server,
            output_dir,
        }
    }

    /// Get captured stdout as a string.
    pub fn stdout(&self) -> String {
        self.output.stdout()
    }

    /// Path the export for `user` lands at.
    pub fn export_path(&self, user: &str) -> PathBuf {
        self.output_dir.path().join(format!("{user}-repositories.tsv"))
    }

    /// Read the export for `user`.
    pub fn read_export(&self, user: &str) -> String {
        std::fs::read_to_string(self.export_path(user)).expect("read export file")
    }
}

// --- Wiremock helpers ---

/// Serve `items` as page 1 of `url_path`, followed by an empty page 2.
///
/// An empty `items` only mounts page 1.
pub async fn mock_listing(server: &MockServer, url_path: &str, items: Vec<Value>) {
    let has_items = !items.is_empty();
    mock_page(server, url_path, 1, Value::Array(items)).await;
    if has_items {
        mock_page(server, url_path, 2, Value::Array(Vec::new())).await;
    }
}

/// Serve `body` for one page number of `url_path`.
pub async fn mock_page(server: &MockServer, url_path: &str, page: u32, body: Value) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .and(query_param("page", page.to_string()))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Answer every request to `url_path` with `status` and a JSON body.
pub async fn mock_status(server: &MockServer, url_path: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

// --- Fixtures ---

/// A repository listing entry with the fields the API usually returns.
pub fn repo_fixture(full_name: &str, description: Option<&str>) -> Value {
    serde_json::json!({
        "id": 1,
        "name": full_name.rsplit('/').next().unwrap_or(full_name),
        "full_name": full_name,
        "html_url": format!("https://github.com/{full_name}"),
        "homepage": null,
        "description": description,
        "fork": false,
        "created_at": "2020-01-01T00:00:00Z",
    })
}

/// An organization listing entry.
pub fn org_fixture(login: &str) -> Value {
    serde_json::json!({
        "login": login,
        "id": 1,
        "url": format!("https://api.github.com/orgs/{login}"),
        "description": null,
    })
}
