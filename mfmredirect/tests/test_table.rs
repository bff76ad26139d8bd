use mfmredirect::{RedirectRule, RedirectTable};

fn write_rules(dir: &tempfile::TempDir, yaml: &str) -> std::path::PathBuf {
    let path = dir.path().join("redirects.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_rules(
        &dir,
        r#"
redirects:
  - source: /old
    destination: https://example.com/new
    permanent: true
  - source: /podcast
    destination: https://podcasts.example.com/magicalfm
"#,
    );

    let table = RedirectTable::load(&path).unwrap();
    assert_eq!(table.len(), 2);

    // Permanent rule answers 301 with the configured destination
    let rule = table.resolve("/old").unwrap();
    assert_eq!(rule.destination, "https://example.com/new");
    assert_eq!(rule.status_code(), 301);

    // Rules without a permanent flag answer 302
    assert_eq!(table.resolve("/podcast").unwrap().status_code(), 302);

    // Everything else falls through to normal routing
    assert!(!table.has_redirect("/other"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.yaml");
    assert!(RedirectTable::load(&missing).is_err());
}

#[test]
fn test_invalid_rule_leaves_no_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_rules(
        &dir,
        r#"
redirects:
  - source: /fine
    destination: https://example.com/fine
  - source: /broken
    destination: ''
"#,
    );

    assert!(RedirectTable::load(&path).is_err());
}

#[test]
fn test_from_rules_validates_each_rule() {
    let rules = vec![
        RedirectRule::permanent("/a", "https://example.com/a"),
        RedirectRule::new("b-without-slash", "https://example.com/b"),
    ];
    assert!(RedirectTable::from_rules(rules).is_err());
}
