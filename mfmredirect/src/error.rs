//! Error types for redirect configuration loading

/// Result type alias for redirect operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading the redirect configuration
///
/// All of these are configuration errors: they are raised once, while the
/// redirect table is built at startup, and are fatal. A table is never
/// partially loaded.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error while reading the rules file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing failed
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Source path does not start with '/'
    #[error("Invalid redirect source: {0}")]
    InvalidSource(String),

    /// Destination is not a syntactically valid absolute URL
    #[error("Invalid redirect destination: {0}")]
    InvalidDestination(String),
}

impl Error {
    /// Create an invalid-source error
    pub fn invalid_source(msg: impl Into<String>) -> Self {
        Self::InvalidSource(msg.into())
    }

    /// Create an invalid-destination error
    pub fn invalid_destination(msg: impl Into<String>) -> Self {
        Self::InvalidDestination(msg.into())
    }
}
