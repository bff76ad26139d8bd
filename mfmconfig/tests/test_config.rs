use mfmconfig::Config;
use serde_yaml::Value;
use tempfile::TempDir;

fn load_in_temp_dir() -> (TempDir, Config) {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = Config::load_config(temp_dir.path().to_str().unwrap()).unwrap();
    (temp_dir, config)
}

#[test]
fn test_defaults_when_no_external_config() {
    let (_temp_dir, config) = load_in_temp_dir();

    assert_eq!(config.get_http_port(), 4321);
    assert_eq!(config.get_base_url(), "http://localhost");
    assert_eq!(config.get_log_min_level().unwrap(), "INFO");
    assert!(config.get_log_enable_console().unwrap());
}

#[test]
fn test_external_config_overrides_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let external = "host:\n  http_port: 9090\n  base_url: https://magical.fm\n";
    std::fs::write(temp_dir.path().join("config.yaml"), external).unwrap();

    let config = Config::load_config(temp_dir.path().to_str().unwrap()).unwrap();

    assert_eq!(config.get_http_port(), 9090);
    assert_eq!(config.get_base_url(), "https://magical.fm");
    // Defaults not mentioned in the external file survive the merge
    assert_eq!(config.get_log_min_level().unwrap(), "INFO");
}

#[test]
fn test_set_value_persists_to_disk() {
    let temp_dir = tempfile::tempdir().unwrap();
    {
        let config = Config::load_config(temp_dir.path().to_str().unwrap()).unwrap();
        config.set_http_port(8123).unwrap();
    }

    // A fresh load picks up the persisted value
    let reloaded = Config::load_config(temp_dir.path().to_str().unwrap()).unwrap();
    assert_eq!(reloaded.get_http_port(), 8123);
}

#[test]
fn test_get_value_missing_path_is_error() {
    let (_temp_dir, config) = load_in_temp_dir();
    assert!(config.get_value(&["no", "such", "path"]).is_err());
}

#[test]
fn test_keys_are_lowercased() {
    let temp_dir = tempfile::tempdir().unwrap();
    let external = "HOST:\n  HTTP_PORT: 7777\n";
    std::fs::write(temp_dir.path().join("config.yaml"), external).unwrap();

    let config = Config::load_config(temp_dir.path().to_str().unwrap()).unwrap();
    assert_eq!(config.get_http_port(), 7777);
}

#[test]
fn test_managed_dir_is_created_and_persisted() {
    let (temp_dir, config) = load_in_temp_dir();

    let dir = config.get_content_dir().unwrap();
    assert!(std::path::Path::new(&dir).is_dir());
    assert!(dir.starts_with(temp_dir.path().to_str().unwrap()));

    // The default is written back into the configuration
    match config.get_value(&["content", "directory"]).unwrap() {
        Value::String(s) => assert_eq!(s, "content"),
        other => panic!("expected a string, got {:?}", other),
    }
}
