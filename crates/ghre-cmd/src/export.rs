//! `ghre <username>`: export a user's repositories to a TSV file.
//!
//! Collects the user's own repositories, then the repositories of every
//! organization the user publicly belongs to, and writes them all as one
//! table named `<username>-repositories.tsv`.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use ghre_api::queries::org::fetch_user_orgs;
use ghre_api::queries::repo::{fetch_org_repos, fetch_user_repos, repos_to_table};
use ghre_core::config::parse_org_delay;
use ghre_core::{Config, ios_println};

use crate::factory::Factory;

/// Export every repository visible for a user and their organizations.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// GitHub username to export.
    #[arg(value_name = "USERNAME")]
    pub username: String,

    /// Directory to write the TSV into [default: the executable's directory].
    #[arg(long, env = "GHRE_OUTPUT_DIR", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// GitHub host to query.
    #[arg(long, env = "GH_HOST", value_name = "HOST")]
    pub hostname: Option<String>,

    /// Seconds to wait between organizations [default: 5].
    #[arg(long, env = "GHRE_ORG_DELAY", value_name = "SECONDS", value_parser = parse_org_delay)]
    pub org_delay: Option<Duration>,
}

impl ExportArgs {
    /// Layer the command-line overrides on top of `config`.
    #[must_use]
    pub fn configure(&self, mut config: Config) -> Config {
        if let Some(ref host) = self.hostname {
            config = config.with_hostname(host);
        }
        if let Some(delay) = self.org_delay {
            config = config.with_org_delay(delay);
        }
        if let Some(ref dir) = self.output_dir {
            config = config.with_output_dir(dir);
        }
        config
    }

    /// Run the export.
    ///
    /// Requests are strictly sequential: the user's repositories, the
    /// user's organizations, then each organization's repositories in
    /// listing order. Any failure aborts before the file is written.
    ///
    /// # Errors
    ///
    /// Returns an error if any listing fails or the file cannot be written.
    pub async fn run(&self, factory: &Factory) -> Result<()> {
        let ios = &factory.io;
        let config = factory.config();
        let client = factory.api_client()?;
        let user = self.username.as_str();

        debug!(
            user,
            host = config.hostname(),
            token_source = config.token_source().unwrap_or("none"),
            "Starting export"
        );

        ios_println!(ios, "Getting repos for {user}");
        let mut repos = fetch_user_repos(&client, user)
            .await
            .with_context(|| format!("failed to list repositories for user {user}"))?;
        ios_println!(ios, "Found {} results for user {user}", repos.len());

        let orgs = fetch_user_orgs(&client, user)
            .await
            .with_context(|| format!("failed to list organizations for user {user}"))?;
        debug!(user, count = orgs.len(), "Fetched organizations");

        let mut pacer = OrgPacer::new(config.org_delay());
        for org in &orgs {
            pacer.wait().await;
            ios_println!(ios, "Getting repos for {}", org.login);
            let org_repos = fetch_org_repos(&client, &org.login)
                .await
                .with_context(|| format!("failed to list repositories for organization {}", org.login))?;
            info!(org = %org.login, count = org_repos.len(), "Fetched organization repositories");
            repos.extend(org_repos);
        }

        let table = repos_to_table(&repos);
        let path = config.output_path(user)?;
        table
            .write_tsv(&path)
            .with_context(|| format!("failed to save export for user {user}"))?;

        let cs = ios.color_scheme();
        ios_println!(
            ios,
            "{} Wrote {} rows to {}",
            cs.success_icon(),
            table.row_count(),
            path.display()
        );

        Ok(())
    }
}

/// Spaces out organization fetches.
///
/// The first call returns immediately; every later call sleeps for the
/// configured delay, so nothing waits after the last organization.
#[derive(Debug)]
pub struct OrgPacer {
    delay: Duration,
    started: bool,
}

impl OrgPacer {
    /// Create a pacer with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay, started: false }
    }

    /// Wait before the next organization.
    pub async fn wait(&mut self) {
        if !self.started {
            self.started = true;
            return;
        }
        if self.delay.is_zero() {
            return;
        }
        debug!(delay_ms = self.delay.as_millis(), "Pausing between organizations");
        tokio::time::sleep(self.delay).await;
    }
}
