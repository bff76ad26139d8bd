//! Read-only episode repository for MagicalFM
//!
//! This crate loads the episode snapshot produced by the feed ingestion
//! step and answers the queries the site needs: latest-N listings,
//! pagination, and lookups by ordinal or page slug.
//!
//! # Design
//!
//! - **Snapshot in, queries out**: the JSON snapshot is parsed once at
//!   startup and never mutated. New episodes appear by re-running the
//!   ingestion and restarting.
//! - **Presentation at the edge**: every episode leaving the store has
//!   its description pushed through the allow-list HTML sanitizer and
//!   its publication date formatted in Japanese. Both passes are
//!   idempotent, so pre-normalized snapshots are served unchanged.
//! - **Order is data**: the snapshot's newest-first order is preserved;
//!   the store does no sorting of its own.
//!
//! # Example
//!
//! ```no_run
//! use mfmepisodes::EpisodeStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = EpisodeStore::load("content/episodes.json")?;
//!
//! for episode in store.latest(3) {
//!     println!("{} ({})", episode.title, episode.pub_date);
//! }
//! # Ok(())
//! # }
//! ```

pub mod dates;
pub mod error;
pub mod models;
pub mod sanitize;
pub mod store;

#[cfg(feature = "mfmconfig")]
pub mod config_ext;

// Re-exports
pub use dates::{format_japanese_date, JAPANESE_DATE_FORMAT};
pub use error::{Error, Result};
pub use models::Episode;
pub use sanitize::sanitize_html;
pub use store::EpisodeStore;

#[cfg(feature = "mfmconfig")]
pub use config_ext::{EpisodesConfigExt, DEFAULT_API_PAGE_SIZE, DEFAULT_EPISODES_FILE};
