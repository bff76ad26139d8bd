//! Error types for the feed ingestion

/// Result type alias for feed ingestion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching the feed or writing the snapshot
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed parsing failed
    #[error("Feed parsing failed: {0}")]
    Feed(#[from] feed_rs::parser::ParseFeedError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing failed
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
