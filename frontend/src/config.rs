//! Configuration for the live-search client

use std::{env, time::Duration};

use blog_search_shared::DateLocale;

/// Base URL of the blog server when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Path of the search endpoint, appended to the API base.
pub const SEARCH_PATH: &str = "/api/v1/search";

/// Settle delay between the last keystroke and the search.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Trimmed queries shorter than this never reach the server.
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;

/// Environment variable overriding [`DEFAULT_API_BASE`].
pub const API_BASE_ENV: &str = "BLOG_SEARCH_API_BASE";

/// What the results container shows after a failed search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureMode {
    /// Leave the container empty.
    #[default]
    Silent,
    /// Render an alert inside the results container.
    Inline,
    /// Leave the container empty and push an error toast.
    Toast,
}

/// Which completed response is allowed to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
    /// Responses to superseded requests are dropped.
    #[default]
    LatestRequestWins,
    /// Every completed response renders, so a slow early request can
    /// overwrite newer results.
    LastResponseWins,
}

/// Settings shared by every part of the live-search client.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Scheme, host and port of the blog server, without trailing slash.
    pub api_base: String,
    /// Endpoint path appended to `api_base`.
    pub search_path: String,
    /// Quiet period after the last keystroke before searching.
    pub debounce: Duration,
    /// Shortest trimmed query that reaches the server.
    pub min_query_chars: usize,
    /// Locale used for dates in result cards.
    pub locale: DateLocale,
    /// What a failed search leaves on screen.
    pub failure_mode: FailureMode,
    /// Which of several overlapping responses renders.
    pub ordering: ResponseOrdering,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            search_path: SEARCH_PATH.to_string(),
            debounce: DEFAULT_DEBOUNCE,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            locale: DateLocale::default(),
            failure_mode: FailureMode::default(),
            ordering: ResponseOrdering::default(),
        }
    }
}

impl SearchConfig {
    /// Defaults overlaid with `BLOG_SEARCH_API_BASE` and the viewer locale
    /// from `LANG`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(base) = env::var(API_BASE_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
        {
            config.api_base = base;
        }
        if let Ok(lang) = env::var("LANG") {
            config.locale = DateLocale::from_tag_or_default(&lang);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_hosting_page() {
        let config = SearchConfig::default();
        assert_eq!(config.debounce, Duration::from_millis(300));
        assert_eq!(config.min_query_chars, 2);
        assert_eq!(config.search_path, "/api/v1/search");
        assert_eq!(config.failure_mode, FailureMode::Silent);
        assert_eq!(config.ordering, ResponseOrdering::LatestRequestWins);
    }
}
