// tests/config_test.rs
use release_notes::config::{load_config, Backend, Config, CONFIG_FILE_NAME};
use release_notes::domain::Category;
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.history.backend, Backend::Git2);
    assert_eq!(config.history.query_timeout_secs, 10);
    assert_eq!(config.history.bump_marker, "^🔖 Bump version");
    assert_eq!(config.history.root_hash_length, 8);
    assert_eq!(config.footer.docker_image, "groovycodexyz/taschengeld");
    assert_eq!(config.footer.platforms.len(), 2);
    assert!(config.patterns.is_empty());
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[history]
backend = "cli"
query_timeout_secs = 3

[footer]
docker_image = "example/app"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.history.backend, Backend::Cli);
    assert_eq!(config.history.query_timeout_secs, 3);
    // unspecified keys keep their defaults
    assert_eq!(config.history.root_hash_length, 8);
    assert_eq!(config.footer.docker_image, "example/app");
    assert_eq!(config.footer.docs_url, "https://taschengeld.groovycode.xyz");
}

#[test]
#[serial]
fn test_fixture_file() {
    let config =
        load_config(Some("tests/fixtures/release-notes.toml")).expect("Failed to load fixture");
    assert_eq!(config.footer.platforms, vec!["linux/amd64".to_string()]);

    let overrides = config.pattern_overrides().unwrap();
    assert_eq!(overrides.len(), 1);
    assert_eq!(overrides[0].0, Category::Docs);
    assert_eq!(overrides[0].1[0], r"^docs(?:\([^)]+\))?: (.+)");
}

#[test]
fn test_malformed_file_is_config_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[history\nbackend = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_local_file_is_discovered() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "[history]\nroot_hash_length = 12\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(temp_dir.path()).unwrap();
    let result = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    assert_eq!(result.unwrap().history.root_hash_length, 12);
}
