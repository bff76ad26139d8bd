//! Episode record model
//!
//! Episodes are produced once by the feed ingestion step and stored in a
//! JSON snapshot. The field names on the wire are camelCase to match that
//! snapshot format.

use serde::{Deserialize, Serialize};

// ============================================================================
// Episode
// ============================================================================

/// A single podcast episode from the local snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Display title, normalized to `#<number>: <title>` at ingestion
    pub title: String,

    /// Show notes as HTML; must be sanitized before rendering
    pub description: String,

    /// Publication date as a display string
    pub pub_date: String,

    /// Episode ordinal extracted from the feed title, 0 when none was found
    pub number: u32,

    /// Direct URL of the audio enclosure, empty when the feed had none
    pub audio_url: String,

    /// Optional page path that overrides the numeric identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_path: Option<String>,
}

impl Episode {
    /// Stable identifier used in per-episode page paths
    ///
    /// The custom path wins when one is set; otherwise the ordinal in
    /// decimal.
    pub fn slug(&self) -> String {
        match &self.custom_path {
            Some(path) => path.clone(),
            None => self.number.to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(number: u32, custom_path: Option<&str>) -> Episode {
        Episode {
            title: format!("#{}: Test", number),
            description: String::new(),
            pub_date: "2024年1月1日".to_string(),
            number,
            audio_url: String::new(),
            custom_path: custom_path.map(String::from),
        }
    }

    #[test]
    fn test_slug_uses_number_by_default() {
        assert_eq!(episode(42, None).slug(), "42");
    }

    #[test]
    fn test_slug_prefers_custom_path() {
        assert_eq!(episode(42, Some("anniversary")).slug(), "anniversary");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r##"{
            "title": "#1: Hello",
            "description": "<p>Notes</p>",
            "pubDate": "2024年1月1日",
            "number": 1,
            "audioUrl": "https://cdn.example.com/1.mp3"
        }"##;
        let episode: Episode = serde_json::from_str(json).unwrap();
        assert_eq!(episode.number, 1);
        assert_eq!(episode.audio_url, "https://cdn.example.com/1.mp3");
        assert_eq!(episode.custom_path, None);
    }

    #[test]
    fn test_serialize_skips_missing_custom_path() {
        let json = serde_json::to_string(&episode(7, None)).unwrap();
        assert!(!json.contains("customPath"));

        let json = serde_json::to_string(&episode(7, Some("special"))).unwrap();
        assert!(json.contains(r#""customPath":"special""#));
    }
}
