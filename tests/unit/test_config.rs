//! Unit tests for the config module
//!
//! Tests cover:
//! - Loading from an explicit file
//! - Defaults for missing sections
//! - Parse errors mapped to the config exit code

use std::io::Write;
use strsafe::config::{Config, LoggingConfig};
use strsafe::errors::{get_exit_code, EXIT_CONFIG_ERROR};
use strsafe::{IndexUnit, ReverseMode};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_explicit_file() {
    let file = write_config(
        r#"
        [defaults]
        index_unit = "bytes"
        reverse_mode = "graphemes"
        "#,
    );
    let config = Config::load(file.path().to_str()).unwrap();
    assert_eq!(config.defaults.index_unit, IndexUnit::Bytes);
    assert_eq!(config.defaults.reverse_mode, ReverseMode::Graphemes);
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_load_logging_section() {
    let file = write_config("[logging]\nlevel = \"strsafe=trace\"\njson = true\n");
    let config = Config::load(file.path().to_str()).unwrap();
    assert_eq!(config.logging.level, "strsafe=trace");
    assert!(config.logging.json);
    assert_eq!(config.defaults.index_unit, IndexUnit::Chars);
}

#[test]
fn test_load_malformed_file() {
    let file = write_config("[defaults\nindex_unit = ");
    let err = Config::load(file.path().to_str()).unwrap_err();
    assert_eq!(get_exit_code(&err), EXIT_CONFIG_ERROR);
}

#[test]
fn test_load_unknown_reverse_mode() {
    let file = write_config("[defaults]\nreverse_mode = \"words\"\n");
    assert!(Config::load(file.path().to_str()).is_err());
}
