//! Tests for loading and saving demo configuration files
//!
//! These tests verify:
//! - Save/load through real files
//! - Validation of loaded files
//! - Error messages carry the offending path

use merch::config_file::{DemoConfig, Timing};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_save_and_load_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demo.json");

    let config = DemoConfig {
        timing: Timing {
            thinking_ms: 1200,
            ..Timing::default()
        },
        chunk_size: 5,
        default_prompt: "Who sells hoodies?".to_string(),
        seed: Some(11),
    };
    config.save_to_file(&path).unwrap();

    let loaded = DemoConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_minimal_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("minimal.json");
    fs::write(&path, "{}").unwrap();

    let loaded = DemoConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, DemoConfig::default());
}

#[test]
fn test_invalid_file_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{ "chunk_size": 0 }"#).unwrap();

    let loaded = DemoConfig::load_from_file(&path).unwrap();
    let err = loaded.validate().unwrap_err();
    assert!(err.to_string().contains("chunk_size"));
}

#[test]
fn test_malformed_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = DemoConfig::load_from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse configuration JSON"));
}

#[test]
fn test_missing_file_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = DemoConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_saved_file_is_pretty_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pretty.json");
    DemoConfig::default().save_to_file(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\n  \"timing\""));
    assert!(text.contains("\"chunk_interval_ms\": 15"));
}
