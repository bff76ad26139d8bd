//! Example: Fetch the RSS feed and write the episode snapshot
//!
//! Run with: cargo run -p mfmfeed --example fetch_episodes
//! Or with a specific feed URL: cargo run -p mfmfeed --example fetch_episodes -- https://example.com/rss

use mfmconfig::get_config;
use mfmepisodes::EpisodesConfigExt;
use mfmfeed::{CustomPathOverrides, FeedClient, FeedConfigExt};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = get_config();

    // Feed URL from the command line or the configuration
    let feed_url = match env::args().nth(1) {
        Some(url) => url,
        None => config.get_feed_url()?,
    };

    println!("Fetching feed from {}...\n", feed_url);

    let client = FeedClient::builder().feed_url(&feed_url).build().await?;

    let overrides = CustomPathOverrides::load(config.get_custom_paths_file()?)?;
    if !overrides.is_empty() {
        println!("{} custom path override(s) loaded", overrides.len());
    }

    let episodes = client.fetch_episodes(&overrides).await?;

    println!("Fetched {} episode(s)", episodes.len());
    for episode in episodes.iter().take(5) {
        println!("  {} ({})", episode.title, episode.pub_date);
    }
    if episodes.len() > 5 {
        println!("  ...");
    }

    let snapshot_path = config.get_episodes_file()?;
    mfmfeed::write_snapshot(&episodes, &snapshot_path)?;

    println!("\nSnapshot written to {}", snapshot_path);

    Ok(())
}
