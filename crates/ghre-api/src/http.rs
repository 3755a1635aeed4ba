//! HTTP client construction.
//!
//! Provides the default headers every GitHub REST request carries.

use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::debug;

/// Media type requested from the REST API.
pub const ACCEPT_JSON: &str = "application/vnd.github.v3+json";

/// Options for constructing an HTTP client.
#[derive(Debug)]
pub struct HttpClientOptions {
    /// Application version for User-Agent.
    pub app_version: String,
}

/// Build a reqwest client with the default GitHub headers.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed.
pub fn build_client(opts: &HttpClientOptions) -> anyhow::Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_str(&format!("ghre/{}", opts.app_version))?,
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT_JSON));

    debug!(app_version = %opts.app_version, "Building HTTP client");

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()?;

    Ok(client)
}

/// Format an authorization header value from a token.
pub fn auth_header_value(token: &str) -> String {
    format!("token {token}")
}
