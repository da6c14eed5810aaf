//! Configuration loading and validation.

use sumview::config::{Config, ConfigError};

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("does-not-exist.toml");
    // load_from on a missing path is an error; load() handles the
    // fallback, which load_from callers opt out of.
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ReadError { .. })
    ));
}

#[test]
fn partial_file_keeps_defaults_for_omitted_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[service]
base_url = "http://localhost:9000"
"#,
    )
    .expect("write");

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.service.base_url, "http://localhost:9000");
    assert_eq!(config.service.route, "/summarize_file");
    assert_eq!(config.service.summary_detail, 0);
    assert_eq!(config.service.api_key_env, "SUMVIEW_API_KEY");
    assert_eq!(config.service.timeout_seconds, 120);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[service\nbase_url = ").expect("write");

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn non_http_base_url_fails_validation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[service]
base_url = "ftp://example.com"
"#,
    )
    .expect("write");

    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("base_url"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn zero_timeout_fails_validation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[service]
timeout_seconds = 0
"#,
    )
    .expect("write");

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}
