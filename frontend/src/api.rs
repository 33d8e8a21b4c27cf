//! Blog API access: the HTTP seam and the search request.

use async_trait::async_trait;
use blog_search_shared::{decode_search_response, DecodeError, SearchResponse};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use thiserror::Error;

use crate::config::SearchConfig;

/// Failure of one request to the blog API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx status code.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The body was not the expected JSON.
    #[error("Parse error: {0}")]
    Decode(String),
    /// The server answered 2xx but flagged the call as unsuccessful.
    #[error("Request rejected: {0}")]
    Rejected(String),
}

impl From<DecodeError> for ApiError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Rejected(message) => Self::Rejected(message),
            other => Self::Decode(other.to_string()),
        }
    }
}

/// Fetch a URL and decode its JSON body.
///
/// Implementations map transport failures to [`ApiError::Network`] and any
/// non-2xx status to [`ApiError::Status`].
#[async_trait]
pub trait HttpJsonClient: Send + Sync {
    /// `GET` the URL and return the decoded body.
    async fn get_json(&self, url: &str) -> Result<Value, ApiError>;
}

/// [`HttpJsonClient`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestJsonClient {
    client: reqwest::Client,
}

impl ReqwestJsonClient {
    /// Client that sends `Content-Type: application/json` on every request.
    pub fn new() -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self::with_client(client))
    }

    /// Wrap an already configured `reqwest` client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn fetch(&self, url: &str) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl HttpJsonClient for ReqwestJsonClient {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        let result = self.fetch(url).await;
        if let Err(err) = &result {
            tracing::error!(url, error = %err, "API request failed");
        }
        result
    }
}

/// Search endpoint URL with the query percent-encoded as `q`.
pub fn search_url(config: &SearchConfig, query: &str) -> String {
    format!(
        "{}{}?q={}",
        config.api_base.trim_end_matches('/'),
        config.search_path,
        urlencoding::encode(query)
    )
}

/// 搜索文章
///
/// GET the search endpoint for `query` and decode the result list.
pub async fn search_posts<H>(
    client: &H,
    config: &SearchConfig,
    query: &str,
) -> Result<SearchResponse, ApiError>
where
    H: HttpJsonClient + ?Sized,
{
    let body = client.get_json(&search_url(config, query)).await?;
    Ok(decode_search_response(body)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    struct StaticClient(Result<Value, ApiError>);

    #[async_trait]
    impl HttpJsonClient for StaticClient {
        async fn get_json(&self, _url: &str) -> Result<Value, ApiError> {
            self.0.clone()
        }
    }

    #[test]
    fn query_is_percent_encoded() {
        let config = SearchConfig {
            api_base: "https://blog.example/".to_string(),
            ..SearchConfig::default()
        };
        assert_eq!(
            search_url(&config, "rust & go"),
            "https://blog.example/api/v1/search?q=rust%20%26%20go"
        );
    }

    #[test]
    fn query_is_sent_untrimmed() {
        let config = SearchConfig::default();
        assert!(search_url(&config, " ab ").ends_with("?q=%20ab%20"));
    }

    #[tokio::test]
    async fn rejected_envelope_maps_to_rejected() {
        let client = StaticClient(Ok(json!({
            "success": false,
            "message": "Search query is required",
            "data": null
        })));
        let err = search_posts(&client, &SearchConfig::default(), "ab")
            .await
            .expect_err("envelope should be rejected");
        assert_eq!(err, ApiError::Rejected("Search query is required".to_string()));
    }

    #[tokio::test]
    async fn status_errors_propagate() {
        let client = StaticClient(Err(ApiError::Status(503)));
        let err = search_posts(&client, &SearchConfig::default(), "ab")
            .await
            .expect_err("status should fail");
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }
}
