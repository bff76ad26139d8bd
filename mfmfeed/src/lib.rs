//! RSS feed ingestion for MagicalFM
//!
//! This crate turns the show's RSS feed into the episode snapshot the
//! site serves from. It runs out of band (a maintainer or CI job runs
//! the `fetch_episodes` example), writes `episodes.json`, and the server
//! picks the new snapshot up on its next start.
//!
//! # Pipeline
//!
//! 1. [`FeedClient`] downloads and parses the feed
//! 2. [`ingest::build_snapshot`] normalizes every entry: ordinal out of
//!    the title, display title, Japanese publication date, audio URL,
//!    optional custom page path from [`CustomPathOverrides`]
//! 3. [`ingest::write_snapshot`] writes the pretty-printed JSON
//!
//! # Example
//!
//! ```no_run
//! use mfmfeed::{CustomPathOverrides, FeedClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FeedClient::new().await?;
//!     let episodes = client.fetch_episodes(&CustomPathOverrides::default()).await?;
//!     mfmfeed::ingest::write_snapshot(&episodes, "content/episodes.json")?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod ingest;

#[cfg(feature = "mfmconfig")]
pub mod config_ext;

// Re-exports
pub use client::{ClientBuilder, FeedClient, DEFAULT_FEED_URL};
pub use error::{Error, Result};
pub use ingest::{
    build_snapshot, episode_from_entry, extract_episode_number, normalize_title, write_snapshot,
    CustomPathOverrides,
};

#[cfg(feature = "mfmconfig")]
pub use config_ext::{FeedConfigExt, DEFAULT_CUSTOM_PATHS_FILE};
