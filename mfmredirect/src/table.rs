//! Read-only lookup table over the declared redirect rules
//!
//! The table is built once during application startup and injected into the
//! request path. Construction either validates every rule or fails with the
//! first schema violation, so a partially loaded table cannot exist.

use crate::error::Result;
use crate::models::RedirectRule;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Wire format of the redirect configuration file
#[derive(Debug, Deserialize)]
struct RedirectFile {
    redirects: Vec<RedirectRule>,
}

/// Immutable source-path → rule mapping
///
/// Lookups are exact matches on the request path. When the configuration
/// declares two rules with the same source, the one written last wins.
///
/// # Example
///
/// ```
/// use mfmredirect::RedirectTable;
///
/// let yaml = r#"
/// redirects:
///   - source: /old
///     destination: https://example.com/new
///     permanent: true
/// "#;
///
/// let table = RedirectTable::from_yaml_str(yaml)?;
/// assert!(table.has_redirect("/old"));
/// assert!(!table.has_redirect("/other"));
/// # Ok::<(), mfmredirect::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RedirectTable {
    rules: HashMap<String, RedirectRule>,
}

impl RedirectTable {
    /// Load the table from a YAML rules file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rules file
    ///
    /// # Errors
    ///
    /// Fails on IO errors, YAML syntax errors, or any rule violating the
    /// schema. A failed load leaves no table behind.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Build the table from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: RedirectFile = serde_yaml::from_str(yaml)?;
        Self::from_rules(file.redirects)
    }

    /// Build the table from already constructed rules
    ///
    /// Every rule is validated. Duplicate sources resolve last-write-wins,
    /// matching the declaration order of the configuration file.
    pub fn from_rules(rules: impl IntoIterator<Item = RedirectRule>) -> Result<Self> {
        let mut map = HashMap::new();
        for rule in rules {
            rule.validate()?;
            if let Some(previous) = map.insert(rule.source.clone(), rule) {
                warn!(
                    source = %previous.source,
                    "Duplicate redirect source, keeping the rule declared last"
                );
            }
        }
        Ok(Self { rules: map })
    }

    /// Look up the rule for a request path
    ///
    /// Returns `None` when the path has no configured redirect; the request
    /// should then proceed to normal routing.
    pub fn resolve(&self, path: &str) -> Option<&RedirectRule> {
        self.rules.get(path)
    }

    /// Check whether a request path has a configured redirect
    pub fn has_redirect(&self, path: &str) -> bool {
        self.rules.contains_key(path)
    }

    /// Number of loaded rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over the loaded rules (in no particular order)
    pub fn rules(&self) -> impl Iterator<Item = &RedirectRule> {
        self.rules.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_configured_rule() {
        let yaml = r#"
redirects:
  - source: /old
    destination: https://example.com/new
    permanent: true
"#;
        let table = RedirectTable::from_yaml_str(yaml).unwrap();

        let rule = table.resolve("/old").unwrap();
        assert_eq!(rule.destination, "https://example.com/new");
        assert_eq!(rule.status_code(), 301);
    }

    #[test]
    fn test_unmatched_path_passes_through() {
        let yaml = r#"
redirects:
  - source: /old
    destination: https://example.com/new
"#;
        let table = RedirectTable::from_yaml_str(yaml).unwrap();

        assert!(!table.has_redirect("/other"));
        assert!(table.resolve("/other").is_none());
    }

    #[test]
    fn test_duplicate_source_last_write_wins() {
        let yaml = r#"
redirects:
  - source: /dup
    destination: https://example.com/first
  - source: /dup
    destination: https://example.com/second
    permanent: true
"#;
        let table = RedirectTable::from_yaml_str(yaml).unwrap();

        assert_eq!(table.len(), 1);
        let rule = table.resolve("/dup").unwrap();
        assert_eq!(rule.destination, "https://example.com/second");
        assert!(rule.permanent);
    }

    #[test]
    fn test_invalid_destination_fails_whole_load() {
        let yaml = r#"
redirects:
  - source: /good
    destination: https://example.com/good
  - source: /bad
    destination: not-a-url
"#;
        assert!(RedirectTable::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_invalid_source_fails_whole_load() {
        let yaml = r#"
redirects:
  - source: missing-slash
    destination: https://example.com/
"#;
        assert!(RedirectTable::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(RedirectTable::from_yaml_str("redirects: [oops").is_err());
        assert!(RedirectTable::from_yaml_str("something_else: 1").is_err());
    }

    #[test]
    fn test_empty_rule_list_is_valid() {
        let table = RedirectTable::from_yaml_str("redirects: []").unwrap();
        assert!(table.is_empty());
        assert!(!table.has_redirect("/"));
    }
}
