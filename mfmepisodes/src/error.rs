//! Error types for the episode repository
//!
//! Only loading the snapshot can fail. Lookups for episodes that do not
//! exist return `Option::None` rather than an error, since an unknown
//! ordinal or slug is an expected outcome of user-supplied paths.

/// Result type alias for episode repository operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading the episode snapshot
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error reading the snapshot file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}
