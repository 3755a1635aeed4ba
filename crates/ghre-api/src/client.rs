//! GitHub REST client with page-number pagination.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::errors::ApiError;
use crate::http::auth_header_value;
use ghre_core::instance;

/// Number of items requested per page.
pub const PER_PAGE: u32 = 100;

/// GitHub API client wrapping reqwest with auth and error handling.
///
/// Tokens are stored as [`SecretString`] to prevent accidental logging or
/// exposure through `Debug` output.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    hostname: String,
    token: Option<SecretString>,
    /// Optional base URL override for testing (e.g., `"http://127.0.0.1:PORT/"`).
    api_url_override: Option<String>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("hostname", &self.hostname)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("api_url_override", &self.api_url_override)
            .finish_non_exhaustive()
    }
}

/// A single decoded GET response.
#[derive(Debug, Clone)]
pub struct JsonResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Decoded body, or the raw text of a non-JSON error body.
    pub body: Value,
}

impl JsonResponse {
    /// Canonical reason phrase for the status, or `""` if unknown.
    pub fn reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }

    /// Convert into an [`ApiError::Http`] carrying status, reason, and body.
    pub fn into_error(self) -> ApiError {
        let reason = self.reason().to_string();
        let body = match self.body {
            Value::String(text) => text,
            other => other.to_string(),
        };
        ApiError::Http {
            status: self.status.as_u16(),
            reason,
            body,
        }
    }
}

impl Client {
    /// Create a new API client for a specific hostname.
    pub fn new(http: reqwest::Client, hostname: &str, token: Option<SecretString>) -> Self {
        Self {
            http,
            hostname: instance::normalize_hostname(hostname),
            token,
            api_url_override: None,
        }
    }

    /// Route all requests to `url` instead of the real GitHub API.
    ///
    /// The URL should include the trailing slash, e.g.,
    /// `"http://127.0.0.1:8080/"`.
    #[must_use]
    pub fn with_url_override(mut self, url: String) -> Self {
        self.api_url_override = Some(url);
        self
    }

    /// Issue one GET request and decode its body.
    ///
    /// Non-200 statuses are NOT errors here; the caller decides. A body that
    /// is not JSON is an error on a 200 response and is kept as a string
    /// otherwise, so it can be reported. A blank body carries no page at
    /// all and is always an error.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, an undecodable 200 body, or a
    /// blank non-200 body.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<JsonResponse, ApiError> {
        let url = self.resolve_rest_url(path);
        let mut req = self.http.get(&url).query(query);
        if let Some(ref token) = self.token {
            req = req.header(
                reqwest::header::AUTHORIZATION,
                auth_header_value(token.expose_secret()),
            );
        }

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        let body = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) if status == StatusCode::OK => return Err(e.into()),
            Err(_) if text.trim().is_empty() => {
                return Err(JsonResponse {
                    status,
                    body: Value::String(String::new()),
                }
                .into_error());
            }
            Err(_) => Value::String(text),
        };

        Ok(JsonResponse { status, body })
    }

    /// Collect every page of a JSON-array endpoint.
    ///
    /// Requests `per_page=100` starting at `page=1` and stops at the first
    /// empty page. For each response the order of checks is: emptiness,
    /// then status, then decoding; a non-empty page with a status other
    /// than 200 aborts the whole collection.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-200 page, or a page that
    /// does not decode into `T`.
    pub async fn get_paginated<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let mut items = Vec::new();
        let mut page: u32 = 1;

        loop {
            let query = [("per_page", PER_PAGE.to_string()), ("page", page.to_string())];
            let resp = self.get(path, &query).await?;

            if is_empty_page(&resp.body) {
                debug!(path, page, total = items.len(), "Reached empty page");
                break;
            }

            if resp.status != StatusCode::OK {
                return Err(resp.into_error());
            }

            let batch: Vec<T> = serde_json::from_value(resp.body)?;
            debug!(path, page, count = batch.len(), "Fetched page");
            page += 1;
            items.extend(batch);
        }

        Ok(items)
    }

    fn resolve_rest_url(&self, path: &str) -> String {
        if path.starts_with("https://") || path.starts_with("http://") {
            path.to_string()
        } else {
            let base = match self.api_url_override {
                Some(ref url) => url.clone(),
                None => instance::rest_url(&self.hostname),
            };
            format!("{base}{}", path.trim_start_matches('/'))
        }
    }
}

/// Whether a decoded page carries no items.
///
/// An empty array ends pagination, as does any falsy JSON value: `null`,
/// `false`, zero, `{}`, and `""`.
pub fn is_empty_page(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64().is_some_and(|v| v.abs() < f64::EPSILON),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::String(text) => text.is_empty(),
    }
}
