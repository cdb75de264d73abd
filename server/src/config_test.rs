use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api.base_url(), DEFAULT_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        ApiTimeouts { request_secs: DEFAULT_API_TIMEOUT_SECS, connect_secs: DEFAULT_API_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BLOG_API_BASE_URL", "https://api.example.test/"),
        ("BLOG_API_TIMEOUT_SECS", "30"),
        ("BLOG_API_CONNECT_TIMEOUT_SECS", " 2 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api.base_url(), "https://api.example.test");
    assert_eq!(cfg.timeouts, ApiTimeouts { request_secs: 30, connect_secs: 2 });
    assert_eq!(cfg.timeouts.request(), Duration::from_secs(30));
}

#[test]
fn from_lookup_blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", ""), ("BLOG_API_BASE_URL", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api.base_url(), DEFAULT_BASE_URL);
}

#[test]
fn from_lookup_invalid_port_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "abc")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "abc".to_owned(), expected: "port number" });
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn from_lookup_invalid_timeout_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("BLOG_API_CONNECT_TIMEOUT_SECS", "-1")])).unwrap_err();
    assert!(err.to_string().contains("BLOG_API_CONNECT_TIMEOUT_SECS"));
}

#[test]
fn timeout_defaults_come_from_the_transport() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_TIMEOUT_SECS);
    assert_eq!(cfg.timeouts.connect_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
}
