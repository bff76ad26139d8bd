//! Data model for declarative redirect rules
//!
//! Rules are declared in a YAML file shaped like:
//!
//! ```yaml
//! redirects:
//!   - source: /old
//!     destination: https://example.com/new
//!     permanent: true
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// HTTP status for a permanent redirect (301 Moved Permanently)
pub const STATUS_MOVED_PERMANENTLY: u16 = 301;

/// HTTP status for a temporary redirect (302 Found)
pub const STATUS_FOUND: u16 = 302;

/// A single declarative redirect rule
///
/// Maps a site-relative source path to an absolute destination URL. The
/// `permanent` flag selects the HTTP status used when the rule is served
/// and defaults to `false` when absent from the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RedirectRule {
    /// Site-relative path to match, must start with '/'
    pub source: String,
    /// Absolute URL the client is redirected to
    pub destination: String,
    /// Whether the move is permanent (301) or temporary (302)
    #[serde(default)]
    pub permanent: bool,
}

impl RedirectRule {
    /// Create a new temporary redirect rule
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            permanent: false,
        }
    }

    /// Create a new permanent redirect rule
    pub fn permanent(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            permanent: true,
        }
    }

    /// Check the rule against the schema
    ///
    /// A valid rule has a source starting with '/' and a destination that
    /// parses as an absolute URL.
    pub fn validate(&self) -> Result<()> {
        if !self.source.starts_with('/') {
            return Err(Error::invalid_source(format!(
                "'{}' must start with '/'",
                self.source
            )));
        }

        if let Err(err) = Url::parse(&self.destination) {
            return Err(Error::invalid_destination(format!(
                "'{}' is not an absolute URL ({})",
                self.destination, err
            )));
        }

        Ok(())
    }

    /// HTTP status code to answer with when this rule matches
    pub fn status_code(&self) -> u16 {
        if self.permanent {
            STATUS_MOVED_PERMANENTLY
        } else {
            STATUS_FOUND
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permanent_defaults_to_false() {
        let yaml = "source: /old\ndestination: https://example.com/new\n";
        let rule: RedirectRule = serde_yaml::from_str(yaml).unwrap();
        assert!(!rule.permanent);
        assert_eq!(rule.status_code(), STATUS_FOUND);
    }

    #[test]
    fn test_status_codes() {
        let temporary = RedirectRule::new("/a", "https://example.com/a");
        assert_eq!(temporary.status_code(), 302);

        let permanent = RedirectRule::permanent("/b", "https://example.com/b");
        assert_eq!(permanent.status_code(), 301);
    }

    #[test]
    fn test_validate_accepts_well_formed_rule() {
        let rule = RedirectRule::permanent("/podcast", "https://example.com/podcast");
        assert!(rule.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_relative_source() {
        let rule = RedirectRule::new("old", "https://example.com/new");
        assert!(matches!(rule.validate(), Err(Error::InvalidSource(_))));
    }

    #[test]
    fn test_validate_rejects_relative_destination() {
        let rule = RedirectRule::new("/old", "/new");
        assert!(matches!(
            rule.validate(),
            Err(Error::InvalidDestination(_))
        ));
    }
}
