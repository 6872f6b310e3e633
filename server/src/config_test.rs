use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.activities_api_url.as_str(), "http://127.0.0.1:8000/");
    assert_eq!(cfg.request_timeout, Duration::from_secs(DEFAULT_ACTIVITIES_API_TIMEOUT_SECS));
    assert_eq!(cfg.connect_timeout, Duration::from_secs(DEFAULT_ACTIVITIES_API_CONNECT_TIMEOUT_SECS));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("ACTIVITIES_API_URL", " https://school.example/api "),
        ("ACTIVITIES_API_TIMEOUT_SECS", "42"),
        ("ACTIVITIES_API_CONNECT_TIMEOUT_SECS", "3"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.activities_api_url.as_str(), "https://school.example/api");
    assert_eq!(cfg.request_timeout, Duration::from_secs(42));
    assert_eq!(cfg.connect_timeout, Duration::from_secs(3));
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn from_lookup_rejects_out_of_range_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { var: "PORT", .. }));
}

#[test]
fn from_lookup_rejects_relative_backend_url() {
    let err = ServerConfig::from_lookup(lookup(&[("ACTIVITIES_API_URL", "/activities")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl { .. }));
}

#[test]
fn from_lookup_rejects_opaque_backend_url() {
    let err = ServerConfig::from_lookup(lookup(&[("ACTIVITIES_API_URL", "mailto:office@school.example")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidUrl {
            value: "mailto:office@school.example".to_owned(),
            reason: "cannot carry a path".to_owned(),
        }
    );
}
