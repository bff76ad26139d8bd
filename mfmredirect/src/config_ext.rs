//! Extension integrating the redirect configuration into mfmconfig
//!
//! This module provides the `RedirectConfigExt` trait which adds redirect
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
//! use mfmredirect::{RedirectConfigExt, RedirectTable};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = get_config();
//! let table = RedirectTable::load(config.get_redirects_file()?)?;
//! println!("{} redirect rule(s)", table.len());
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use mfmconfig::Config;
use serde_yaml::Value;
use std::path::Path;

/// Default name of the redirect rules file inside the content directory
pub const DEFAULT_REDIRECTS_FILE: &str = "redirects.yaml";

/// Extension trait for the redirect configuration in mfmconfig
pub trait RedirectConfigExt {
    /// Absolute path of the redirect rules file
    ///
    /// A relative configured value is resolved against the content
    /// directory; the default is `redirects.yaml` in that directory.
    fn get_redirects_file(&self) -> Result<String>;

    /// Set the redirect rules file (absolute, or relative to the content directory)
    fn set_redirects_file(&self, path: String) -> Result<()>;
}

impl RedirectConfigExt for Config {
    fn get_redirects_file(&self) -> Result<String> {
        let configured = match self.get_value(&["content", "redirects_file"]) {
            Ok(Value::String(s)) if !s.is_empty() => s,
            _ => {
                self.set_redirects_file(DEFAULT_REDIRECTS_FILE.to_string())?;
                DEFAULT_REDIRECTS_FILE.to_string()
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

    fn set_redirects_file(&self, path: String) -> Result<()> {
        self.set_value(&["content", "redirects_file"], Value::String(path))
    }
}
