// Configuration loading and validation

use std::io::Write;

use quote_overlay::config::{Config, LogFormat};
use quote_overlay::constants::{DEFAULT_MAX_BODY_SIZE, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS};

#[test]
fn test_empty_document_yields_defaults() {
    let config = Config::from_yaml_with_env("").expect("empty config should load");
    assert_eq!(config.server.address, "0.0.0.0");
    assert_eq!(config.server.port, DEFAULT_PORT);
    assert_eq!(config.server.request_timeout, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(config.server.max_body_size, DEFAULT_MAX_BODY_SIZE);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(config.fonts.default_font.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_full_document_is_parsed() {
    let yaml = r#"
server:
  address: "127.0.0.1"
  port: 9000
  request_timeout: 5
  max_body_size: 1048576
fonts:
  directories: ["./fonts", "/opt/fonts"]
  default_font: "Lato"
  system_paths: []
logging:
  format: pretty
"#;
    let config = Config::from_yaml_with_env(yaml).expect("valid config");
    assert_eq!(config.server.listen_address(), "127.0.0.1:9000");
    assert_eq!(config.server.request_timeout, 5);
    assert_eq!(config.server.max_body_size, 1_048_576);
    assert_eq!(config.fonts.directories, vec!["./fonts", "/opt/fonts"]);
    assert_eq!(config.fonts.default_font.as_deref(), Some("Lato"));
    assert!(config.fonts.system_paths.is_empty());
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
fn test_environment_variables_are_substituted() {
    std::env::set_var("QUOTE_OVERLAY_UNIT_PORT", "9100");
    let yaml = r#"
server:
  port: ${QUOTE_OVERLAY_UNIT_PORT}
"#;
    let config = Config::from_yaml_with_env(yaml).expect("substituted config");
    assert_eq!(config.server.port, 9100);
}

#[test]
fn test_missing_environment_variable_is_an_error() {
    let yaml = r#"
fonts:
  default_font: ${QUOTE_OVERLAY_UNIT_NEVER_SET}
"#;
    let err = Config::from_yaml_with_env(yaml).unwrap_err();
    assert!(err.contains("QUOTE_OVERLAY_UNIT_NEVER_SET"));
}

#[test]
fn test_invalid_yaml_is_an_error() {
    assert!(Config::from_yaml_with_env("server: [not, a, map").is_err());
}

#[test]
fn test_from_file_reads_yaml() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "server:\n  port: 8123\nlogging:\n  format: compact").expect("write config");

    let config = Config::from_file(file.path()).expect("config from file");
    assert_eq!(config.server.port, 8123);
    assert_eq!(config.logging.format, LogFormat::Compact);
}

#[test]
fn test_from_file_missing_path_is_an_error() {
    let err = Config::from_file("/definitely/not/here/config.yaml").unwrap_err();
    assert!(err.starts_with("Failed to read config file"));
}

#[test]
fn test_validation_rejects_bad_values() {
    let mut config = Config::default();
    config.server.port = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.server.request_timeout = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.server.max_body_size = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.fonts.directories.push("  ".to_string());
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.fonts.default_font = Some(String::new());
    assert!(config.validate().is_err());
}
