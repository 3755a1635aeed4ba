//! Runtime configuration for an export run.
//!
//! Everything the exporter needs from the environment is resolved once at
//! process start into a [`Config`] value, which is then handed to the
//! factory and the API client. Nothing below this layer reads the
//! environment again.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use tracing::debug;

use crate::errors::ConfigError;
use crate::instance;

/// Environment variables consulted for the API credential, in priority order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Default pause between consecutive organization fetches.
pub const DEFAULT_ORG_DELAY: Duration = Duration::from_secs(5);

/// Suffix appended to the username to form the output file name.
pub const OUTPUT_FILE_SUFFIX: &str = "-repositories.tsv";

/// Resolved settings for a single export run.
#[derive(Clone)]
pub struct Config {
    hostname: String,
    token: Option<SecretString>,
    token_source: Option<&'static str>,
    org_delay: Duration,
    output_dir: Option<PathBuf>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("hostname", &self.hostname)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_source", &self.token_source)
            .field("org_delay", &self.org_delay)
            .field("output_dir", &self.output_dir)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hostname: instance::GITHUB_COM.to_string(),
            token: None,
            token_source: None,
            org_delay: DEFAULT_ORG_DELAY,
            output_dir: None,
        }
    }
}

impl Config {
    /// Build a config from the process environment.
    ///
    /// Only the credential is read here; host, delay, and output directory
    /// come from CLI flags and are applied with the `with_*` builders.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some((token, source)) = token_from_lookup(lookup) {
            debug!(source, "Using API credential from environment");
            config.token = Some(SecretString::from(token));
            config.token_source = Some(source);
        }
        config
    }

    /// Set the GitHub hostname.
    #[must_use]
    pub fn with_hostname(mut self, hostname: &str) -> Self {
        self.hostname = instance::normalize_hostname(hostname);
        self
    }

    /// Set (or clear) the API credential.
    #[must_use]
    pub fn with_token(mut self, token: Option<SecretString>) -> Self {
        self.token = token;
        self.token_source = None;
        self
    }

    /// Set the pause between organization fetches.
    #[must_use]
    pub fn with_org_delay(mut self, delay: Duration) -> Self {
        self.org_delay = delay;
        self
    }

    /// Set the directory the TSV file is written to.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// The normalized GitHub hostname.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// The API credential, if any.
    pub fn token(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }

    /// Name of the environment variable the credential was read from.
    pub fn token_source(&self) -> Option<&'static str> {
        self.token_source
    }

    /// Pause between organization fetches.
    pub fn org_delay(&self) -> Duration {
        self.org_delay
    }

    /// Directory for the output file.
    ///
    /// Defaults to the directory containing the running executable.
    pub fn output_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(ref dir) = self.output_dir {
            return Ok(dir.clone());
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(std::path::Path::to_path_buf))
            .ok_or_else(|| ConfigError::Missing("output directory".to_string()))
    }

    /// Full path of the TSV file for `user`.
    pub fn output_path(&self, user: &str) -> Result<PathBuf, ConfigError> {
        Ok(self.output_dir()?.join(output_file_name(user)))
    }
}

/// File name of the export for `user`.
pub fn output_file_name(user: &str) -> String {
    format!("{user}{OUTPUT_FILE_SUFFIX}")
}

/// Parse an organization delay given in whole or fractional seconds.
pub fn parse_org_delay(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| ConfigError::Invalid {
            key: "org-delay".to_string(),
            value: raw.to_string(),
        })
}

/// Find the first non-empty credential among [`TOKEN_ENV_VARS`].
///
/// Returns the token and the name of the variable it came from.
pub fn token_from_lookup<F>(lookup: F) -> Option<(String, &'static str)>
where
    F: Fn(&str) -> Option<String>,
{
    TOKEN_ENV_VARS.iter().find_map(|&key| {
        lookup(key)
            .filter(|value| !value.is_empty())
            .map(|value| (value, key))
    })
}
