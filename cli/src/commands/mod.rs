//! Subcommand implementations.

pub mod live;
pub mod search;

use std::io::Write;

use anyhow::{Context, Result};
use blog_search_frontend::LiveSearchClient;

use crate::cli::{Cli, Commands};

pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.search.to_config();
    tracing::info!(
        api_base = %config.api_base,
        debounce_ms = config.debounce.as_millis() as u64,
        locale = %config.locale,
        "starting live-search client"
    );
    let client =
        LiveSearchClient::with_defaults(config).context("failed to build HTTP client")?;

    match cli.command {
        Commands::Search { query } => search::run(&client, &query).await,
        Commands::Live => live::run(&client).await,
    }
}

/// Print one container snapshot followed by a separator line.
fn print_container(id: &str, html: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "<!-- #{id} -->")?;
    writeln!(stdout, "{}", html.trim())?;
    stdout.flush().context("failed to flush stdout")
}
