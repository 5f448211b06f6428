use std::collections::HashMap;

use sentiment_core::config::ClientConfig;
use sentiment_core::consts::{DEFAULT_TIMEOUT_SECS, ENDPOINT_ENV, LEGACY_ENDPOINT_ENV};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_default_config() {
    let c = ClientConfig::default();
    assert_eq!(c.endpoint, None);
    assert_eq!(c.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert!(c.user_agent.starts_with("sentiment/"));
}

#[test]
fn test_load_partial_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sentiment.toml");
    std::fs::write(&path, "endpoint = \"http://localhost:5001/predict\"\n").unwrap();

    let c = ClientConfig::load(&path).unwrap();
    assert_eq!(c.endpoint.as_deref(), Some("http://localhost:5001/predict"));
    assert_eq!(c.timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_load_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "timeout_secs = \"soon\"\n").unwrap();
    assert!(ClientConfig::load(&path).is_err());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ClientConfig::load(&dir.path().join("nope.toml")).is_err());
}

#[test]
fn test_toml_roundtrip_without_endpoint() {
    let c = ClientConfig::default();
    let text = c.to_toml().unwrap();
    assert!(!text.contains("endpoint"));
    let back: ClientConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, c);
}

// ---------------------------------------------------------------------------
// Endpoint precedence
// ---------------------------------------------------------------------------

#[test]
fn test_env_overrides_file() {
    let c = ClientConfig {
        endpoint: Some("http://file/predict".into()),
        ..Default::default()
    }
    .with_env_from(env(&[(ENDPOINT_ENV, "http://env/predict")]));
    assert_eq!(c.endpoint.as_deref(), Some("http://env/predict"));
}

#[test]
fn test_primary_env_beats_legacy() {
    let c = ClientConfig::default().with_env_from(env(&[
        (LEGACY_ENDPOINT_ENV, "http://legacy/predict"),
        (ENDPOINT_ENV, "http://primary/predict"),
    ]));
    assert_eq!(c.endpoint.as_deref(), Some("http://primary/predict"));
}

#[test]
fn test_legacy_env_used_alone() {
    let c = ClientConfig::default()
        .with_env_from(env(&[(LEGACY_ENDPOINT_ENV, "http://legacy/predict")]));
    assert_eq!(c.endpoint.as_deref(), Some("http://legacy/predict"));
}

#[test]
fn test_blank_env_ignored() {
    let c = ClientConfig {
        endpoint: Some("http://file/predict".into()),
        ..Default::default()
    }
    .with_env_from(env(&[(ENDPOINT_ENV, "  ")]));
    assert_eq!(c.endpoint.as_deref(), Some("http://file/predict"));
}

#[test]
fn test_override_beats_env() {
    let c = ClientConfig::default()
        .with_env_from(env(&[(ENDPOINT_ENV, "http://env/predict")]))
        .with_endpoint_override(Some("http://flag/predict".into()));
    assert_eq!(c.endpoint.as_deref(), Some("http://flag/predict"));
}

#[test]
fn test_no_override_keeps_value() {
    let c = ClientConfig {
        endpoint: Some("http://file/predict".into()),
        ..Default::default()
    }
    .with_endpoint_override(None);
    assert_eq!(c.endpoint.as_deref(), Some("http://file/predict"));
}
