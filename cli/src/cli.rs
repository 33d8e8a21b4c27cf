//! Command-line arguments.

use std::time::Duration;

use blog_search_frontend::{
    config::{DEFAULT_API_BASE, DEFAULT_MIN_QUERY_CHARS},
    FailureMode, ResponseOrdering, SearchConfig,
};
use blog_search_shared::DateLocale;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// `--failure-mode` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FailureModeArg {
    /// Leave the results empty.
    Silent,
    /// Show an alert in place of the results.
    Inline,
    /// Push an error toast.
    Toast,
}

impl From<FailureModeArg> for FailureMode {
    fn from(value: FailureModeArg) -> Self {
        match value {
            FailureModeArg::Silent => FailureMode::Silent,
            FailureModeArg::Inline => FailureMode::Inline,
            FailureModeArg::Toast => FailureMode::Toast,
        }
    }
}

/// `--ordering` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderingArg {
    /// Drop responses to superseded searches.
    LatestRequest,
    /// Render every response as it arrives.
    LastResponse,
}

impl From<OrderingArg> for ResponseOrdering {
    fn from(value: OrderingArg) -> Self {
        match value {
            OrderingArg::LatestRequest => ResponseOrdering::LatestRequestWins,
            OrderingArg::LastResponse => ResponseOrdering::LastResponseWins,
        }
    }
}

#[derive(Parser)]
#[command(name = "bs-cli", version, about = "Blog live-search client")]
pub struct Cli {
    #[command(flatten)]
    pub search: SearchArgs,
    #[command(subcommand)]
    pub command: Commands,
}

/// Client settings shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Blog server base URL.
    #[arg(long, global = true, env = "BLOG_SEARCH_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
    /// Settle delay after the last input line, in milliseconds.
    #[arg(long, global = true, default_value_t = 300)]
    pub debounce_ms: u64,
    /// Shortest trimmed query that reaches the server.
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_QUERY_CHARS)]
    pub min_chars: usize,
    /// Locale for result dates (`en-US`, `en_GB.UTF-8`, `de`, ...).
    /// Defaults to `LANG`.
    #[arg(long, global = true)]
    pub locale: Option<String>,
    /// What to show when a search fails.
    #[arg(long, global = true, value_enum, default_value_t = FailureModeArg::Silent)]
    pub failure_mode: FailureModeArg,
    /// Which response renders when searches overlap.
    #[arg(long, global = true, value_enum, default_value_t = OrderingArg::LatestRequest)]
    pub ordering: OrderingArg,
}

impl SearchArgs {
    /// Client settings: flags over environment over defaults.
    pub fn to_config(&self) -> SearchConfig {
        let base = SearchConfig::from_env();
        SearchConfig {
            api_base: self.api_base.clone(),
            debounce: Duration::from_millis(self.debounce_ms),
            min_query_chars: self.min_chars,
            locale: self
                .locale
                .as_deref()
                .map(DateLocale::from_tag_or_default)
                .unwrap_or(base.locale),
            failure_mode: self.failure_mode.into(),
            ordering: self.ordering.into(),
            ..base
        }
    }
}

/// Subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run one search immediately and print the rendered results.
    Search {
        /// Query text, sent as typed.
        query: String,
    },
    /// Treat every stdin line as an input event and print the results
    /// container whenever it changes.
    Live,
}
