//! Factory for shared command dependencies.
//!
//! Holds the resolved [`Config`] and the output streams, and builds the API
//! client from them. Test mode swaps in captured output and a mock-server
//! base URL.

use ghre_api::client::Client;
use ghre_api::http::{HttpClientOptions, build_client};
use ghre_core::Config;
use ghre_core::iostreams::{IOStreams, TestOutput};

/// Shared factory providing dependencies to the export command.
pub struct Factory {
    /// Application version.
    pub app_version: String,
    /// I/O streams.
    pub io: IOStreams,
    config: Config,

    // Test overrides
    http_override: Option<reqwest::Client>,
    api_url_override: Option<String>,
}

impl std::fmt::Debug for Factory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Factory")
            .field("app_version", &self.app_version)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Factory {
    /// Create a factory bound to the real terminal.
    pub fn new(app_version: String, config: Config) -> Self {
        Self {
            app_version,
            io: IOStreams::system(),
            config,
            http_override: None,
            api_url_override: None,
        }
    }

    /// Create a test factory with captured I/O.
    ///
    /// Returns the factory and a `TestOutput` for reading captured
    /// stdout/stderr.
    pub fn test(config: Config) -> (Self, TestOutput) {
        let (io, output) = IOStreams::test_with_output();

        let factory = Self {
            app_version: "test".to_string(),
            io,
            config,
            http_override: None,
            api_url_override: None,
        };

        (factory, output)
    }

    /// Set a custom reqwest HTTP client (e.g., backed by wiremock).
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_override = Some(client);
        self
    }

    /// Set an API URL override (wiremock server URI with trailing slash).
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url_override = Some(url.into());
        self
    }

    /// The resolved configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build an API client for the configured host and credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn api_client(&self) -> anyhow::Result<Client> {
        let http = if let Some(ref client) = self.http_override {
            client.clone()
        } else {
            let opts = HttpClientOptions {
                app_version: self.app_version.clone(),
            };
            build_client(&opts)?
        };

        let mut client = Client::new(http, self.config.hostname(), self.config.token().cloned());
        if let Some(ref url) = self.api_url_override {
            client = client.with_url_override(url.clone());
        }
        Ok(client)
    }
}
