//! Extension integrating the episode configuration into mfmconfig
//!
//! This module provides the `EpisodesConfigExt` trait which adds episode
//! related accessors to `mfmconfig::Config`.
//!
//! # Auto-persist of defaults
//!
//! Getters persist the default value into the configuration when it is not
//! set yet, so a freshly written config.yaml documents every knob.
//!
//! # Example
//!
//! ```no_run
//! use mfmconfig::get_config;
//! use mfmepisodes::{EpisodeStore, EpisodesConfigExt};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = get_config();
//! let store = EpisodeStore::load(config.get_episodes_file()?)?;
//! println!("{} episode(s)", store.len());
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use mfmconfig::Config;
use serde_yaml::Value;
use std::path::Path;

/// Default name of the episode snapshot file inside the content directory
pub const DEFAULT_EPISODES_FILE: &str = "episodes.json";

/// Default number of episodes per page in listings
pub const DEFAULT_API_PAGE_SIZE: usize = 12;

/// Extension trait for the episode configuration in mfmconfig
pub trait EpisodesConfigExt {
    /// Absolute path of the episode snapshot file
    ///
    /// A relative configured value is resolved against the content
    /// directory; the default is `episodes.json` in that directory.
    fn get_episodes_file(&self) -> Result<String>;

    /// Set the episode snapshot file (absolute, or relative to the content directory)
    fn set_episodes_file(&self, path: String) -> Result<()>;

    /// Episodes per page for paginated listings
    fn get_api_page_size(&self) -> Result<usize>;

    /// Set the episodes per page for paginated listings
    fn set_api_page_size(&self, size: usize) -> Result<()>;
}

impl EpisodesConfigExt for Config {
    fn get_episodes_file(&self) -> Result<String> {
        let configured = match self.get_value(&["content", "episodes_file"]) {
            Ok(Value::String(s)) if !s.is_empty() => s,
            _ => {
                self.set_episodes_file(DEFAULT_EPISODES_FILE.to_string())?;
                DEFAULT_EPISODES_FILE.to_string()
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

    fn set_episodes_file(&self, path: String) -> Result<()> {
        self.set_value(&["content", "episodes_file"], Value::String(path))
    }

    fn get_api_page_size(&self) -> Result<usize> {
        match self.get_value(&["api", "page_size"]) {
            Ok(Value::Number(n)) if n.is_u64() => Ok(n.as_u64().unwrap() as usize),
            _ => {
                self.set_api_page_size(DEFAULT_API_PAGE_SIZE)?;
                Ok(DEFAULT_API_PAGE_SIZE)
            }
        }
    }

    fn set_api_page_size(&self, size: usize) -> Result<()> {
        self.set_value(&["api", "page_size"], Value::Number((size as u64).into()))
    }
}
