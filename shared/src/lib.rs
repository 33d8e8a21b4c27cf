//! Wire types for the blog search endpoint, shared by the live-search
//! client and the hosts that embed it.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

mod date;
mod envelope;

pub use date::{parse_post_date, DateLocale};
pub use envelope::{decode_search_response, DecodeError};

/// Number of content characters kept when a post has no explicit excerpt.
pub const EXCERPT_CHARS: usize = 150;

/// Suffix appended to a truncated content excerpt.
pub const ELLIPSIS: &str = "...";

/// Shown in the attribution line when the server sends no author.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Post author as exposed by the API. Only the username is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Login name shown in the attribution line.
    pub username: String,
}

/// Post category. Decoded from search results but not rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// URL-safe identifier.
    #[serde(default)]
    pub slug: String,
}

/// One post in a search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Database id.
    #[serde(default)]
    pub id: Option<i64>,
    /// Path segment of the post page, `/post/<slug>`.
    pub slug: String,
    /// Headline, rendered as the card link text.
    pub title: String,
    /// Hand-written summary. Blank values count as absent.
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Full body, used for the excerpt fallback.
    #[serde(default)]
    pub content: String,
    /// `None` when the server sends `null`.
    #[serde(default)]
    pub author: Option<Author>,
    /// ISO-8601 timestamp as sent by the server, kept raw until rendering.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Cover image URL.
    #[serde(default)]
    pub featured_image: Option<String>,
    /// Category, when the post has one.
    #[serde(default)]
    pub category: Option<Category>,
    /// Page views so far.
    #[serde(default)]
    pub view_count: Option<u64>,
    /// Last edit, raw ISO-8601.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Publication time, raw ISO-8601.
    #[serde(default)]
    pub published_at: Option<String>,
}

impl Post {
    /// Text shown under the title of a result card.
    ///
    /// A non-blank `excerpt` is returned verbatim. Otherwise the first
    /// [`EXCERPT_CHARS`] characters of `content` are returned followed by
    /// [`ELLIPSIS`].
    pub fn display_excerpt(&self) -> Cow<'_, str> {
        match self.excerpt.as_deref() {
            Some(excerpt) if !excerpt.trim().is_empty() => Cow::Borrowed(excerpt),
            _ => {
                let mut truncated: String = self.content.chars().take(EXCERPT_CHARS).collect();
                truncated.push_str(ELLIPSIS);
                Cow::Owned(truncated)
            },
        }
    }

    /// Username for the attribution line.
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map(|author| author.username.as_str())
            .unwrap_or(UNKNOWN_AUTHOR)
    }
}

/// Pagination block attached to search responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page, starting at 1.
    pub page: u32,
    /// Number of pages.
    pub pages: u32,
    /// Page size.
    pub per_page: u32,
    /// Matching posts across all pages.
    pub total: u64,
    /// A later page exists.
    #[serde(default)]
    pub has_next: bool,
    /// An earlier page exists.
    #[serde(default)]
    pub has_prev: bool,
}

/// Payload of `GET /api/v1/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matches in server order.
    pub posts: Vec<Post>,
    /// Query as echoed by the server.
    #[serde(default)]
    pub query: Option<String>,
    /// Paging details, absent from older servers.
    #[serde(default)]
    pub pagination: Option<Pagination>,
}
