// tests/config_test.rs
use auto_semver::config::{load_config, Config, Overrides, LOCAL_CONFIG_FILE};
use auto_semver::domain::{IncrementTarget, TagParseMode};
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[defaults]
remote = "upstream"
highest_value = "minor"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.defaults.remote, "upstream");
    assert_eq!(config.defaults.highest_value, IncrementTarget::Minor);
    assert!(!config.behavior.skip_malformed_tags);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");
    assert!(load_config(Some(path.to_str().unwrap())).is_err());
}

#[test]
fn test_invalid_toml_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[defaults\nremote = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("Configuration parse error"));
}

#[test]
#[serial]
fn test_local_config_file_is_discovered() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        "[behavior]\nskip_malformed_tags = true\n",
    )
    .unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let loaded = load_config(None);
    std::env::set_current_dir(original).unwrap();

    let run = loaded.unwrap().resolve(Overrides::default());
    assert_eq!(run.parse_mode, TagParseMode::SkipMalformed);
}

#[test]
fn test_cli_overrides_file_values() {
    let config: Config = toml::from_str(
        r#"
[defaults]
remote = "upstream"
highest_value = "minor"
"#,
    )
    .unwrap();

    let run = config.resolve(Overrides {
        remote: Some("origin".to_string()),
        highest_value: None,
        skip_malformed: false,
    });
    assert_eq!(run.remote, "origin");
    assert_eq!(run.highest_value, IncrementTarget::Minor);
    assert_eq!(run.parse_mode, TagParseMode::Strict);
}
