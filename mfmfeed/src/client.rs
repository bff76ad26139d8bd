//! HTTP client for the podcast RSS feed
//!
//! This module fetches and parses the show's RSS feed. Fetching is the
//! only network activity in the whole pipeline; everything downstream
//! works on the parsed feed in memory.
//!
//! # Example
//!
//! ```no_run
//! use mfmfeed::FeedClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FeedClient::new().await?;
//!     let feed = client.fetch_feed().await?;
//!     println!("{} entries", feed.entries.len());
//!     Ok(())
//! }
//! ```

use crate::error::Result;
use crate::ingest::{build_snapshot, CustomPathOverrides};
use feed_rs::model::Feed;
use mfmepisodes::Episode;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default RSS feed URL of the show
pub const DEFAULT_FEED_URL: &str = "https://listen.style/p/magicalfm/rss";

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "MagicalFM/0.1.0 (mfmfeed)";

/// RSS feed HTTP client
///
/// The client is stateless: every call to [`fetch_feed`](Self::fetch_feed)
/// downloads and parses the feed again. The ingestion runs out of band
/// and rarely, so there is nothing worth caching here.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    feed_url: String,
    timeout: Duration,
}

impl FeedClient {
    /// Create a new client with default settings
    pub async fn new() -> Result<Self> {
        Self::builder().build().await
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client with a custom reqwest::Client
    ///
    /// Useful for sharing HTTP connection pools or custom proxy settings
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            feed_url: DEFAULT_FEED_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Get the feed URL
    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Get the internal HTTP client
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Download and parse the RSS feed
    ///
    /// Non-success HTTP statuses are errors; a 404 page is never handed
    /// to the feed parser.
    pub async fn fetch_feed(&self) -> Result<Feed> {
        debug!("Fetching feed from {}", self.feed_url);

        let bytes = self
            .client
            .get(&self.feed_url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(feed_rs::parser::parse(bytes.as_ref())?)
    }

    /// Fetch the feed and build the episode snapshot from it
    pub async fn fetch_episodes(&self, overrides: &CustomPathOverrides) -> Result<Vec<Episode>> {
        let feed = self.fetch_feed().await?;
        Ok(build_snapshot(&feed, overrides))
    }
}

/// Builder for configuring a FeedClient
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    feed_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            feed_url: DEFAULT_FEED_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the feed URL
    pub fn feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client
    pub async fn build(self) -> Result<FeedClient> {
        let client = if let Some(client) = self.client {
            client
        } else {
            Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.timeout)
                .build()?
        };

        Ok(FeedClient {
            client,
            feed_url: self.feed_url,
            timeout: self.timeout,
        })
    }
}
