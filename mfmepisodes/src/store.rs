//! Read-only episode repository backed by the JSON snapshot
//!
//! The snapshot is written by the feed ingestion step with episodes in
//! newest-first order, and that order is preserved verbatim here. The
//! store never mutates after loading; refreshing content means running
//! the ingestion again and restarting.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::dates::format_japanese_date;
use crate::error::Result;
use crate::models::Episode;
use crate::sanitize::sanitize_html;

// ============================================================================
// EpisodeStore
// ============================================================================

/// In-memory episode collection with presentation-ready accessors
///
/// Every episode returned by a query has its description sanitized and
/// its publication date formatted for display. Both transformations are
/// idempotent, so a snapshot that was already normalized at ingestion
/// comes through unchanged.
#[derive(Debug, Clone, Default)]
pub struct EpisodeStore {
    episodes: Vec<Episode>,
}

impl EpisodeStore {
    /// Load the snapshot from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let store = Self::from_json_str(&json)?;
        info!("Loaded {} episodes from {}", store.len(), path.display());
        Ok(store)
    }

    /// Parse a snapshot from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let episodes: Vec<Episode> = serde_json::from_str(json)?;
        Ok(Self { episodes })
    }

    /// Build a store from episodes already in memory
    pub fn from_episodes(episodes: Vec<Episode>) -> Self {
        Self { episodes }
    }

    /// Number of episodes in the snapshot
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// Check if the snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// The most recent episodes, up to `count`
    ///
    /// Snapshot order is newest-first, so this is a prefix of the
    /// collection. Asking for more than exist returns them all.
    pub fn latest(&self, count: usize) -> Vec<Episode> {
        self.episodes.iter().take(count).map(Self::present).collect()
    }

    /// One page of episodes
    ///
    /// Pages are 1-based; page 0 is treated as page 1. A page past the
    /// end of the collection is empty rather than an error, as is a
    /// `limit` of zero.
    pub fn page(&self, page: usize, limit: usize) -> Vec<Episode> {
        let start = page.saturating_sub(1).saturating_mul(limit);
        self.episodes
            .iter()
            .skip(start)
            .take(limit)
            .map(Self::present)
            .collect()
    }

    /// Look up an episode by its ordinal
    pub fn by_number(&self, number: u32) -> Option<Episode> {
        self.episodes
            .iter()
            .find(|episode| episode.number == number)
            .map(Self::present)
    }

    /// Look up an episode by its page slug
    ///
    /// The slug is the custom path when one is set, otherwise the
    /// ordinal in decimal.
    pub fn by_slug(&self, slug: &str) -> Option<Episode> {
        self.episodes
            .iter()
            .find(|episode| episode.slug() == slug)
            .map(Self::present)
    }

    /// Every episode ordinal, in snapshot order
    ///
    /// Duplicates and zero ordinals are reported as stored; it is the
    /// caller's business whether those matter.
    pub fn numbers(&self) -> Vec<u32> {
        self.episodes.iter().map(|episode| episode.number).collect()
    }

    /// Prepare an episode for display
    fn present(episode: &Episode) -> Episode {
        let mut episode = episode.clone();
        episode.description = sanitize_html(&episode.description);
        episode.pub_date = format_japanese_date(&episode.pub_date);
        episode
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(number: u32) -> Episode {
        Episode {
            title: format!("#{}: Episode {}", number, number),
            description: format!("<p>Notes for {}</p>", number),
            pub_date: "2024-03-05T10:30:00+09:00".to_string(),
            number,
            audio_url: format!("https://cdn.example.com/{}.mp3", number),
            custom_path: None,
        }
    }

    fn store_of(numbers: &[u32]) -> EpisodeStore {
        EpisodeStore::from_episodes(numbers.iter().map(|n| episode(*n)).collect())
    }

    #[test]
    fn test_latest_returns_newest_first_prefix() {
        let store = store_of(&[5, 3, 1]);
        let latest = store.latest(2);
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].number, 5);
        assert_eq!(latest[1].number, 3);
    }

    #[test]
    fn test_latest_clamps_to_available() {
        let store = store_of(&[5, 3, 1]);
        assert_eq!(store.latest(10).len(), 3);
        assert!(store.latest(0).is_empty());
    }

    #[test]
    fn test_page_slices_without_overlap() {
        let store = store_of(&[9, 8, 7, 6, 5]);
        let first: Vec<u32> = store.page(1, 2).iter().map(|e| e.number).collect();
        let second: Vec<u32> = store.page(2, 2).iter().map(|e| e.number).collect();
        let third: Vec<u32> = store.page(3, 2).iter().map(|e| e.number).collect();
        assert_eq!(first, vec![9, 8]);
        assert_eq!(second, vec![7, 6]);
        assert_eq!(third, vec![5]);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let store = store_of(&[9, 8, 7]);
        assert!(store.page(4, 2).is_empty());
        assert!(store.page(100, 12).is_empty());
    }

    #[test]
    fn test_page_zero_is_treated_as_page_one() {
        let store = store_of(&[9, 8, 7]);
        assert_eq!(store.page(0, 2), store.page(1, 2));
    }

    #[test]
    fn test_zero_limit_yields_empty_page() {
        let store = store_of(&[9, 8, 7]);
        assert!(store.page(1, 0).is_empty());
    }

    #[test]
    fn test_by_number_finds_episode() {
        let store = store_of(&[5, 3, 1]);
        assert_eq!(store.by_number(3).unwrap().number, 3);
        assert!(store.by_number(4).is_none());
    }

    #[test]
    fn test_by_slug_uses_custom_path_when_set() {
        let mut special = episode(7);
        special.custom_path = Some("anniversary".to_string());
        let store = EpisodeStore::from_episodes(vec![special, episode(6)]);

        assert_eq!(store.by_slug("anniversary").unwrap().number, 7);
        assert_eq!(store.by_slug("6").unwrap().number, 6);
        // The custom path replaces the numeric slug, it does not add to it
        assert!(store.by_slug("7").is_none());
    }

    #[test]
    fn test_numbers_keeps_duplicates_and_zeros() {
        let store = store_of(&[5, 0, 5, 2]);
        assert_eq!(store.numbers(), vec![5, 0, 5, 2]);
    }

    #[test]
    fn test_queries_sanitize_descriptions() {
        let mut raw = episode(1);
        raw.description = "<p>Hi</p><script>alert('x')</script>".to_string();
        let store = EpisodeStore::from_episodes(vec![raw]);

        let episode = store.by_number(1).unwrap();
        assert_eq!(episode.description, "<p>Hi</p>");
    }

    #[test]
    fn test_queries_format_dates() {
        let store = store_of(&[1]);
        let episode = store.by_number(1).unwrap();
        assert_eq!(episode.pub_date, "2024年3月5日");
    }

    #[test]
    fn test_presentation_is_stable_across_calls() {
        let store = store_of(&[2, 1]);
        assert_eq!(store.latest(2), store.latest(2));
        assert_eq!(store.page(1, 2), store.latest(2));
    }

    #[test]
    fn test_from_json_str_reads_snapshot_shape() {
        let json = r##"[
            {
                "title": "#2: Second",
                "description": "<p>Two</p>",
                "pubDate": "2024年2月2日",
                "number": 2,
                "audioUrl": "https://cdn.example.com/2.mp3"
            },
            {
                "title": "#1: First",
                "description": "<p>One</p>",
                "pubDate": "2024年1月1日",
                "number": 1,
                "audioUrl": "https://cdn.example.com/1.mp3",
                "customPath": "pilot"
            }
        ]"##;
        let store = EpisodeStore::from_json_str(json).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.numbers(), vec![2, 1]);
        assert_eq!(store.by_slug("pilot").unwrap().number, 1);
    }

    #[test]
    fn test_malformed_snapshot_is_an_error() {
        assert!(EpisodeStore::from_json_str("{not json").is_err());
        assert!(EpisodeStore::from_json_str(r#"{"episodes": []}"#).is_err());
    }
}
