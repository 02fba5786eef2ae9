use std::collections::HashMap;

use super::*;

fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    Settings::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn defaults_when_nothing_set() {
    let s = settings_from(&[]).unwrap();
    assert_eq!(s.host, DEFAULT_HOST);
    assert_eq!(s.port, DEFAULT_PORT);
    assert_eq!(s.environment, "production");
    assert_eq!(s.api_title, DEFAULT_API_TITLE);
    assert_eq!(s.api_version, env!("CARGO_PKG_VERSION"));
    assert_eq!(s.rate_limit_per_hour, 3);
    assert_eq!(s.webhook.url, None);
    assert_eq!(s.webhook.timeout, Duration::from_secs(10));
    assert_eq!(s.webhook.max_retries, 3);
    assert!(!s.webhook.signature_enabled());
    assert_eq!(s.log_format, LogFormat::Text);
    assert_eq!(
        s.allowed_origins,
        AllowedOrigins::List(vec!["http://localhost:5173".into(), "http://localhost:3000".into()])
    );
    assert!(!s.is_development());
}

#[test]
fn overrides_are_parsed() {
    let s = settings_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("ENVIRONMENT", "Development"),
        ("RATE_LIMIT_PER_HOUR", "10"),
        ("WEBHOOK_URL", "https://hooks.example.test/contact"),
        ("WEBHOOK_TIMEOUT_SECS", "5"),
        ("WEBHOOK_SECRET", "s3cret"),
        ("WEBHOOK_MAX_RETRIES", "1"),
        ("LOG_FORMAT", "JSON"),
    ])
    .unwrap();
    assert_eq!(s.bind_addr(), ("127.0.0.1", 8080));
    assert!(s.is_development());
    assert_eq!(s.rate_limit_per_hour, 10);
    assert_eq!(s.webhook.url.as_deref(), Some("https://hooks.example.test/contact"));
    assert_eq!(s.webhook.timeout, Duration::from_secs(5));
    assert!(s.webhook.signature_enabled());
    assert_eq!(s.webhook.max_retries, 1);
    assert_eq!(s.log_format, LogFormat::Json);
}

#[test]
fn blank_values_count_as_unset() {
    let s = settings_from(&[("PORT", "  "), ("WEBHOOK_URL", "")]).unwrap();
    assert_eq!(s.port, DEFAULT_PORT);
    assert_eq!(s.webhook.url, None);
}

#[test]
fn wildcard_origin_allows_any() {
    let s = settings_from(&[("ALLOWED_ORIGINS", "https://a.test, *")]).unwrap();
    assert_eq!(s.allowed_origins, AllowedOrigins::Any);
}

#[test]
fn origin_list_is_trimmed() {
    let s = settings_from(&[("ALLOWED_ORIGINS", " https://a.test ,,https://b.test ")]).unwrap();
    assert_eq!(s.allowed_origins, AllowedOrigins::List(vec!["https://a.test".into(), "https://b.test".into()]));
}

#[test]
fn rate_limit_out_of_range_is_rejected() {
    assert_eq!(
        settings_from(&[("RATE_LIMIT_PER_HOUR", "0")]).unwrap_err(),
        ConfigError::OutOfRange { key: "RATE_LIMIT_PER_HOUR", value: 0, min: 1, max: 100 }
    );
    assert!(settings_from(&[("RATE_LIMIT_PER_HOUR", "101")]).is_err());
}

#[test]
fn webhook_timeout_and_retries_are_bounded() {
    assert!(settings_from(&[("WEBHOOK_TIMEOUT_SECS", "31")]).is_err());
    assert!(settings_from(&[("WEBHOOK_MAX_RETRIES", "11")]).is_err());
    assert!(settings_from(&[("WEBHOOK_TIMEOUT_SECS", "30"), ("WEBHOOK_MAX_RETRIES", "10")]).is_ok());
}

#[test]
fn unparseable_numbers_name_the_key() {
    let err = settings_from(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::Parse { key: "PORT", value: "eighty".into() });
    assert!(err.to_string().starts_with("PORT"));
}

#[test]
fn webhook_url_must_be_http() {
    let err = settings_from(&[("WEBHOOK_URL", "ftp://example.test")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "WEBHOOK_URL", .. }));
}

#[test]
fn unknown_log_format_is_rejected() {
    let err = settings_from(&[("LOG_FORMAT", "xml")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "LOG_FORMAT", .. }));
}

#[test]
fn ipv6_host_resolves_for_bind() {
    use std::net::ToSocketAddrs;

    let s = settings_from(&[("HOST", "::"), ("PORT", "4000")]).unwrap();
    let addr = s.bind_addr().to_socket_addrs().unwrap().next().unwrap();
    assert!(addr.is_ipv6());
    assert_eq!(addr.port(), 4000);
}
