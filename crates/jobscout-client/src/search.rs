use std::time::Duration;

use jobscout_core::error::AppError;
use jobscout_core::models::SearchHit;
use jobscout_core::traits::SearchProvider;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const TAVILY_ENDPOINT: &str = "https://api.tavily.com/search";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Hard cap on the result count requested per query, regardless of config.
pub const MAX_RESULTS_PER_QUERY: usize = 20;

/// Snippet text is truncated to this many characters.
pub const SNIPPET_MAX_CHARS: usize = 200;

/// Tavily Search API client.
///
/// One HTTP POST per query. The API key is threaded in explicitly rather
/// than read from the environment here.
#[derive(Clone)]
pub struct TavilySearcher {
    client: Client,
    api_key: String,
    endpoint: String,
    timeout_secs: u64,
}

impl TavilySearcher {
    pub fn new(api_key: &str) -> Result<Self, AppError> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(api_key: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            endpoint: TAVILY_ENDPOINT.to_string(),
            timeout_secs: timeout.as_secs(),
        })
    }

    /// Point the client at a different endpoint (tests hit a local server).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn build_request(&self, query: &str, max_results: usize, days_back: u32) -> TavilyRequest {
        TavilyRequest {
            api_key: self.api_key.clone(),
            query: query.to_string(),
            search_depth: "basic",
            max_results: max_results.min(MAX_RESULTS_PER_QUERY),
            days: days_back,
        }
    }
}

// ---- Tavily API types ----

#[derive(Serialize)]
struct TavilyRequest {
    api_key: String,
    query: String,
    search_depth: &'static str,
    max_results: usize,
    days: u32,
}

#[derive(Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Deserialize)]
struct TavilyResult {
    #[serde(default)]
    url: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

impl From<TavilyResult> for SearchHit {
    fn from(r: TavilyResult) -> Self {
        SearchHit {
            url: r.url,
            title: r.title,
            description: r.content.chars().take(SNIPPET_MAX_CHARS).collect(),
        }
    }
}

/// Pull the `detail` field out of a Tavily error body, falling back to the
/// raw body text.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str().map(String::from)))
        .unwrap_or_else(|| body.to_string())
}

impl SearchProvider for TavilySearcher {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
        days_back: u32,
    ) -> Result<Vec<SearchHit>, AppError> {
        let request = self.build_request(query, max_results, days_back);
        tracing::debug!(
            "POST {} (max_results={}, days={})",
            self.endpoint,
            request.max_results,
            request.days
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout(self.timeout_secs)
                } else if e.is_connect() {
                    AppError::NetworkError(format!("Connection failed: {e}"))
                } else {
                    AppError::HttpError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => AppError::AuthError,
                429 => AppError::RateLimitExceeded,
                code => AppError::ApiError {
                    status_code: code,
                    message: error_detail(&body),
                },
            });
        }

        let parsed: TavilyResponse = response
            .json()
            .await
            .map_err(|e| AppError::HttpError(format!("Failed to parse response body: {e}")))?;

        Ok(parsed.results.into_iter().map(SearchHit::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_count_capped_at_twenty() {
        let searcher = TavilySearcher::new("tvly-test").unwrap();
        let request = searcher.build_request("\"engineer\" remote", 25, 7);

        assert_eq!(request.max_results, 20);
        assert_eq!(request.days, 7);
        assert_eq!(request.search_depth, "basic");
    }

    #[test]
    fn test_requested_count_below_cap_passes_through() {
        let searcher = TavilySearcher::new("tvly-test").unwrap();
        let request = searcher.build_request("q", 5, 14);

        assert_eq!(request.max_results, 5);
        assert_eq!(request.days, 14);
    }

    #[test]
    fn test_snippet_truncated_to_200_chars() {
        let long = "x".repeat(321);
        let hit: SearchHit = TavilyResult {
            url: "https://a.example/1".into(),
            title: "Engineer".into(),
            content: long,
        }
        .into();

        assert_eq!(hit.description.chars().count(), 200);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // Multi-byte chars: counting bytes instead of chars would panic or
        // split a code point.
        let content = "é".repeat(250);
        let hit: SearchHit = TavilyResult {
            url: String::new(),
            title: String::new(),
            content,
        }
        .into();

        assert_eq!(hit.description.chars().count(), 200);
    }

    #[test]
    fn test_missing_response_fields_default_to_empty() {
        let parsed: TavilyResponse = serde_json::from_str(r#"{"results": [{}]}"#).unwrap();
        let hit: SearchHit = parsed.results.into_iter().next().unwrap().into();

        assert_eq!(hit.url, "");
        assert_eq!(hit.title, "");
        assert_eq!(hit.description, "");
    }

    #[test]
    fn test_error_detail_prefers_detail_field() {
        assert_eq!(
            error_detail(r#"{"detail": "quota exhausted"}"#),
            "quota exhausted"
        );
        assert_eq!(error_detail("plain text body"), "plain text body");
        assert_eq!(error_detail(r#"{"other": 1}"#), r#"{"other": 1}"#);
    }

    // ---- status mapping against a local one-shot server ----

    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    /// Bind a fresh local port and serve exactly one canned HTTP response.
    /// Returns the endpoint URL to point the client at.
    async fn spawn_one_shot_server(status: u16, body: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            // Read the request until the Content-Length body has arrived.
            loop {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    let headers = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
                    let content_length = headers
                        .lines()
                        .find_map(|l| l.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if buf.len() >= pos + 4 + content_length {
                        break;
                    }
                }
            }
            let response = format!(
                "HTTP/1.1 {status} Status\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
        });
        format!("http://{addr}")
    }

    async fn search_against(status: u16, body: &'static str) -> Result<Vec<SearchHit>, AppError> {
        let endpoint = spawn_one_shot_server(status, body).await;
        let searcher = TavilySearcher::new("tvly-test")
            .unwrap()
            .with_endpoint(endpoint);
        searcher.search("\"engineer\" remote", 5, 7).await
    }

    #[tokio::test]
    async fn test_status_401_maps_to_auth_error() {
        let err = search_against(401, r#"{"detail": "invalid api key"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AuthError));
    }

    #[tokio::test]
    async fn test_status_429_maps_to_rate_limit() {
        let err = search_against(429, r#"{"detail": "too many requests"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::RateLimitExceeded));
    }

    #[tokio::test]
    async fn test_other_status_maps_to_api_error_with_detail() {
        let err = search_against(500, r#"{"detail": "server exploded"}"#)
            .await
            .unwrap_err();
        match err {
            AppError::ApiError {
                status_code,
                message,
            } => {
                assert_eq!(status_code, 500);
                assert_eq!(message, "server exploded");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_body_maps_to_hits() {
        let hits = search_against(
            200,
            r#"{"results": [{"url": "https://boards.greenhouse.io/acme/1", "title": "Engineer", "content": "Build things"}]}"#,
        )
        .await
        .unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].url, "https://boards.greenhouse.io/acme/1");
        assert_eq!(hits[0].description, "Build things");
    }
}
