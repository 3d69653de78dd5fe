// tests/config_test.rs
use relkit::config::{load_config, Config};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.version.tag_prefix, "v");
    assert_eq!(config.version.pr_version_prefix, "pr-");
    assert_eq!(config.version.dev_chart_version, "0.42.42-dev");
    assert_eq!(config.version.edge_label, "edge");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[version]
tag_prefix = "release-"
dev_chart_version = "0.0.0-dev"

[recipes]
namespace = "recipe-system"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.version.tag_prefix, "release-");
    assert_eq!(config.version.dev_chart_version, "0.0.0-dev");
    assert_eq!(config.recipes.namespace, "recipe-system");
    // Untouched sections keep their defaults
    assert_eq!(config.recipes.configmap, "test-recipes");
    assert_eq!(config.version.edge_label, "edge");
}

#[test]
fn test_load_missing_explicit_path_fails() {
    let result = load_config(Some("/nonexistent/relkit.toml"));
    assert!(result.is_err());
}

#[test]
fn test_load_malformed_toml_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[version\ntag_prefix = ").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(
        message.contains("Configuration error"),
        "expected configuration error, got: {}",
        message
    );
}

#[test]
fn test_report_prefix_config() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[report]\nstrip_prefix = \"/home/runner/work/repo/repo\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(
        config.report.strip_prefix.as_deref(),
        Some("/home/runner/work/repo/repo")
    );
}
