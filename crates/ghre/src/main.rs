//! ghre - export a GitHub user's repositories to a TSV file.
//!
//! Lists the user's repositories and those of every organization the user
//! publicly belongs to, and writes them as `<username>-repositories.tsv`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ghre_cmd::export::ExportArgs;
use ghre_cmd::factory::Factory;
use ghre_core::{Config, ios_eprintln};

/// Process exit codes. Usage errors exit with clap's own code 2.
mod exit_codes {
    pub const OK: i32 = 0;
    pub const ERROR: i32 = 1;
}

/// Export a GitHub user's and their organizations' repositories to TSV.
#[derive(Debug, Parser)]
#[command(
    name = "ghre",
    version,
    about = "Export GitHub repositories to a TSV file",
    long_about = "Export every repository of a GitHub user, and of each organization the user \
                  publicly belongs to, into <USERNAME>-repositories.tsv.\n\n\
                  Set GITHUB_TOKEN or GH_TOKEN to authenticate and raise the rate limit."
)]
struct Cli {
    #[command(flatten)]
    export: ExportArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("GHRE_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = cli.export.configure(Config::from_env());
    let factory = Factory::new(env!("CARGO_PKG_VERSION").to_string(), config);

    let exit_code = match cli.export.run(&factory).await {
        Ok(()) => exit_codes::OK,
        Err(e) => {
            tracing::debug!("{e:?}");
            let cs = factory.io.color_scheme();
            ios_eprintln!(factory.io, "{} {e:#}", cs.error("X"));
            exit_codes::ERROR
        }
    };

    std::process::exit(exit_code);
}
