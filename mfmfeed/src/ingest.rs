//! Turning a parsed feed into the episode snapshot
//!
//! The ingestion walks the feed entries in the order the feed lists them
//! (newest first for every podcast host we care about) and produces the
//! records the site serves. Three normalizations happen here, once, so
//! the serving path never has to repeat them:
//!
//! - the episode ordinal is pulled out of the entry title
//! - the title is rewritten to the display form `#<number>: <title>`
//! - the publication date is formatted in Japanese, in JST

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use chrono::{FixedOffset, Utc};
use feed_rs::model::{Entry, Feed};
use mfmepisodes::{Episode, JAPANESE_DATE_FORMAT};
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::Result;

/// JST is UTC+9 with no daylight saving
const JST_UTC_OFFSET_SECS: i32 = 9 * 3600;

// ============================================================================
// Title parsing
// ============================================================================

/// Extract the episode ordinal from a feed entry title
///
/// Titles look like `12: タイトル` or `#12: タイトル`; the ordinal is the
/// first digit run directly followed by a colon. Entries without one
/// (announcements, bonus tracks) map to 0.
pub fn extract_episode_number(title: &str) -> u32 {
    parse_episode_number(title).unwrap_or(0)
}

fn parse_episode_number(title: &str) -> Option<u32> {
    let re = Regex::new(r"(\d+):").ok()?;
    let captures = re.captures(title)?;
    captures.get(1)?.as_str().parse().ok()
}

/// Normalize a feed entry title to the display form `#<number>: <title>`
///
/// Titles already starting with `#` are taken verbatim. Otherwise the
/// part after the first colon becomes the display title; when there is
/// no colon the whole title is kept.
pub fn normalize_title(title: &str, number: u32) -> String {
    if title.starts_with('#') {
        return title.to_string();
    }
    let rest = match title.split_once(':') {
        Some((_, rest)) => rest.trim(),
        None => title.trim(),
    };
    format!("#{}: {}", number, rest)
}

// ============================================================================
// Custom path overrides
// ============================================================================

/// Optional mapping from feed entry id to a page path
///
/// A small YAML file next to the snapshot lets individual episodes get a
/// memorable page path instead of their ordinal:
///
/// ```yaml
/// overrides:
///   "ep-50": anniversary
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomPathOverrides {
    #[serde(default)]
    overrides: HashMap<String, String>,
}

impl CustomPathOverrides {
    /// Load overrides from a YAML file
    ///
    /// A missing file simply means no overrides; a present but malformed
    /// file is an error, so a typo never silently drops every override.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No custom path overrides at {}", path.display());
            return Ok(Self::default());
        }
        let yaml = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&yaml)?)
    }

    /// Look up the override for a feed entry id
    pub fn get(&self, entry_id: &str) -> Option<&str> {
        self.overrides.get(entry_id).map(String::as_str)
    }

    /// Add an override
    pub fn insert(&mut self, entry_id: impl Into<String>, path: impl Into<String>) {
        self.overrides.insert(entry_id.into(), path.into());
    }

    /// Number of overrides
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Check if there are no overrides
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

// ============================================================================
// Entry conversion
// ============================================================================

/// Convert one feed entry into an episode record
///
/// Missing pieces degrade instead of failing: no enclosure means an
/// empty audio URL, no description means empty show notes, no publish
/// date means now.
pub fn episode_from_entry(entry: &Entry, overrides: &CustomPathOverrides) -> Episode {
    let raw_title = entry
        .title
        .as_ref()
        .map(|t| t.content.clone())
        .unwrap_or_default();
    let number = extract_episode_number(&raw_title);

    // Prefer the full content body over the plain summary
    let description = entry
        .content
        .as_ref()
        .and_then(|c| c.body.clone())
        .or_else(|| entry.summary.as_ref().map(|s| s.content.clone()))
        .unwrap_or_default();

    // The enclosure surfaces as a media object; some hosts only link it
    let audio_url = entry
        .media
        .first()
        .and_then(|m| m.content.first())
        .and_then(|c| c.url.as_ref())
        .map(|u| u.to_string())
        .or_else(|| {
            entry
                .links
                .iter()
                .find(|l| {
                    l.media_type
                        .as_deref()
                        .is_some_and(|t| t.starts_with("audio/"))
                })
                .map(|l| l.href.clone())
        })
        .unwrap_or_default();

    let jst = FixedOffset::east_opt(JST_UTC_OFFSET_SECS).expect("UTC+9 is a valid offset");
    let published = entry.published.unwrap_or_else(Utc::now);
    let pub_date = published
        .with_timezone(&jst)
        .format(JAPANESE_DATE_FORMAT)
        .to_string();

    Episode {
        title: normalize_title(&raw_title, number),
        description,
        pub_date,
        number,
        audio_url,
        custom_path: overrides.get(&entry.id).map(String::from),
    }
}

/// Build the snapshot from a parsed feed
///
/// Feed order is kept verbatim. Entries sharing a nonzero ordinal are
/// all kept but logged, since the ordinal lookup on the serving side
/// will only ever find the first of them.
pub fn build_snapshot(feed: &Feed, overrides: &CustomPathOverrides) -> Vec<Episode> {
    let mut seen = HashSet::new();
    let mut episodes = Vec::with_capacity(feed.entries.len());

    for entry in &feed.entries {
        let episode = episode_from_entry(entry, overrides);
        if episode.number != 0 && !seen.insert(episode.number) {
            warn!("Duplicate episode number {} in feed", episode.number);
        }
        episodes.push(episode);
    }

    episodes
}

/// Write the snapshot as pretty-printed JSON
pub fn write_snapshot(episodes: &[Episode], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(episodes)?;
    fs::write(path, json)?;
    info!("Wrote {} episodes to {}", episodes.len(), path.display());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>MagicalFM</title>
    <link>https://magicalfm.example</link>
    <description>podcast</description>
    <item>
      <title>12: ゲスト回</title>
      <guid>ep-12</guid>
      <pubDate>Tue, 05 Mar 2024 01:30:00 GMT</pubDate>
      <description>short notes</description>
      <content:encoded><![CDATA[<p>long <strong>notes</strong></p>]]></content:encoded>
      <enclosure url="https://cdn.example.com/12.mp3" length="1" type="audio/mpeg" />
    </item>
    <item>
      <title>#11: ふりかえり</title>
      <guid>ep-11</guid>
      <pubDate>Mon, 26 Feb 2024 20:00:00 GMT</pubDate>
      <description>summary only</description>
      <enclosure url="https://cdn.example.com/11.mp3" length="1" type="audio/mpeg" />
    </item>
    <item>
      <title>おしらせ</title>
      <guid>ep-extra</guid>
    </item>
  </channel>
</rss>
"#;

    fn fixture_feed() -> Feed {
        feed_rs::parser::parse(FIXTURE.as_bytes()).unwrap()
    }

    #[test]
    fn test_extract_episode_number() {
        assert_eq!(extract_episode_number("12: タイトル"), 12);
        assert_eq!(extract_episode_number("#12: タイトル"), 12);
        assert_eq!(extract_episode_number("Episode 5: intro"), 5);
        assert_eq!(extract_episode_number("タイトルのみ"), 0);
        // The digits must sit directly before a colon
        assert_eq!(extract_episode_number("第3回 こんにちは"), 0);
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("12: ゲスト回", 12), "#12: ゲスト回");
        assert_eq!(normalize_title("#12: ゲスト回", 12), "#12: ゲスト回");
        // Extra colons stay part of the display title
        assert_eq!(normalize_title("12: part: two", 12), "#12: part: two");
        // No colon keeps the whole title
        assert_eq!(normalize_title("おしらせ", 0), "#0: おしらせ");
    }

    #[test]
    fn test_episode_from_entry_full_item() {
        let feed = fixture_feed();
        let episode = episode_from_entry(&feed.entries[0], &CustomPathOverrides::default());

        assert_eq!(episode.number, 12);
        assert_eq!(episode.title, "#12: ゲスト回");
        assert_eq!(episode.audio_url, "https://cdn.example.com/12.mp3");
        // content:encoded wins over the plain description
        assert_eq!(episode.description, "<p>long <strong>notes</strong></p>");
        // 01:30 UTC is 10:30 in JST, same day
        assert_eq!(episode.pub_date, "2024年3月5日");
        assert_eq!(episode.custom_path, None);
    }

    #[test]
    fn test_publication_date_crossing_midnight_in_jst() {
        let feed = fixture_feed();
        let episode = episode_from_entry(&feed.entries[1], &CustomPathOverrides::default());
        // 20:00 UTC on Feb 26 is already Feb 27 in JST
        assert_eq!(episode.pub_date, "2024年2月27日");
    }

    #[test]
    fn test_summary_is_the_description_fallback() {
        let feed = fixture_feed();
        let episode = episode_from_entry(&feed.entries[1], &CustomPathOverrides::default());
        assert_eq!(episode.description, "summary only");
    }

    #[test]
    fn test_sparse_entry_degrades_instead_of_failing() {
        let feed = fixture_feed();
        let episode = episode_from_entry(&feed.entries[2], &CustomPathOverrides::default());

        assert_eq!(episode.number, 0);
        assert_eq!(episode.title, "#0: おしらせ");
        assert_eq!(episode.audio_url, "");
        assert_eq!(episode.description, "");
        // Missing publish dates fall back to the current time
        assert!(episode.pub_date.contains('年'));
    }

    #[test]
    fn test_overrides_attach_by_entry_id() {
        let mut overrides = CustomPathOverrides::default();
        overrides.insert("ep-12", "guest-special");

        let feed = fixture_feed();
        let snapshot = build_snapshot(&feed, &overrides);

        assert_eq!(snapshot[0].custom_path.as_deref(), Some("guest-special"));
        assert_eq!(snapshot[1].custom_path, None);
    }

    #[test]
    fn test_build_snapshot_keeps_feed_order() {
        let feed = fixture_feed();
        let snapshot = build_snapshot(&feed, &CustomPathOverrides::default());

        let numbers: Vec<u32> = snapshot.iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![12, 11, 0]);
    }

    #[test]
    fn test_overrides_parse_from_yaml() {
        let overrides: CustomPathOverrides = serde_yaml::from_str(
            r#"
overrides:
  ep-50: anniversary
  ep-51: qa-special
"#,
        )
        .unwrap();
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides.get("ep-50"), Some("anniversary"));
        assert_eq!(overrides.get("ep-99"), None);
    }

    #[test]
    fn test_empty_overrides_document_is_valid() {
        let overrides: CustomPathOverrides = serde_yaml::from_str("overrides: {}").unwrap();
        assert!(overrides.is_empty());
    }
}
