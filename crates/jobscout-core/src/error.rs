use thiserror::Error;

/// Application-wide error types for jobscout.
#[derive(Error, Debug)]
pub enum AppError {
    /// Config file missing or unreadable.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// HTTP request failed for a reason other than the ones below.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Search API rejected the API key (HTTP 401).
    #[error("Invalid Tavily API key")]
    AuthError,

    /// Search API rate limit hit (HTTP 429).
    #[error("Tavily rate limit exceeded")]
    RateLimitExceeded,

    /// Search API returned a non-success status other than 401/429.
    #[error("API error (HTTP {status_code}): {message}")]
    ApiError { status_code: u16, message: String },

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Network/connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// File read/write failed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
