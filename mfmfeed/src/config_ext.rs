//! Extension integrating the feed configuration into mfmconfig
//!
//! This module provides the `FeedConfigExt` trait which adds feed
//! related accessors to `mfmconfig::Config`.
//!
//! # Auto-persist of defaults
//!
//! Getters persist the default value into the configuration when it is not
//! set yet, so a freshly written config.yaml documents every knob.

use anyhow::Result;
use mfmconfig::Config;
use serde_yaml::Value;
use std::path::Path;

use crate::client::DEFAULT_FEED_URL;

/// Default name of the custom path overrides file inside the content directory
pub const DEFAULT_CUSTOM_PATHS_FILE: &str = "custom_paths.yaml";

/// Extension trait for the feed configuration in mfmconfig
pub trait FeedConfigExt {
    /// URL of the show's RSS feed
    fn get_feed_url(&self) -> Result<String>;

    /// Set the URL of the show's RSS feed
    fn set_feed_url(&self, url: String) -> Result<()>;

    /// Absolute path of the custom path overrides file
    ///
    /// A relative configured value is resolved against the content
    /// directory; the default is `custom_paths.yaml` in that directory.
    fn get_custom_paths_file(&self) -> Result<String>;

    /// Set the custom path overrides file (absolute, or relative to the content directory)
    fn set_custom_paths_file(&self, path: String) -> Result<()>;
}

impl FeedConfigExt for Config {
    fn get_feed_url(&self) -> Result<String> {
        match self.get_value(&["feed", "url"]) {
            Ok(Value::String(s)) if !s.is_empty() => Ok(s),
            _ => {
                self.set_feed_url(DEFAULT_FEED_URL.to_string())?;
                Ok(DEFAULT_FEED_URL.to_string())
            }
        }
    }

    fn set_feed_url(&self, url: String) -> Result<()> {
        self.set_value(&["feed", "url"], Value::String(url))
    }

    fn get_custom_paths_file(&self) -> Result<String> {
        let configured = match self.get_value(&["content", "custom_paths_file"]) {
            Ok(Value::String(s)) if !s.is_empty() => s,
            _ => {
                self.set_custom_paths_file(DEFAULT_CUSTOM_PATHS_FILE.to_string())?;
                DEFAULT_CUSTOM_PATHS_FILE.to_string()
            }
        };

        if Path::new(&configured).is_absolute() {
            Ok(configured)
        } else {
            let content_dir = self.get_content_dir()?;
            Ok(Path::new(&content_dir)
                .join(configured)
                .to_string_lossy()
                .to_string())
        }
    }

    fn set_custom_paths_file(&self, path: String) -> Result<()> {
        self.set_value(&["content", "custom_paths_file"], Value::String(path))
    }
}
