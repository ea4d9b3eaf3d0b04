use super::*;

fn overrides(auth: Option<&str>, submission: Option<&str>) -> EnvOverrides {
    EnvOverrides {
        auth_base_url: auth.map(str::to_owned),
        submission_base_url: submission.map(str::to_owned),
    }
}

// =============================================================================
// resolve: override tier
// =============================================================================

#[test]
fn override_wins_over_hostname() {
    let config = ApiConfig::resolve(
        &overrides(Some("https://auth.example.edu/api"), Some("https://sub.example.edu/api")),
        "localhost",
    );
    assert_eq!(config.auth_base_url, "https://auth.example.edu/api");
    assert_eq!(config.submission_base_url, "https://sub.example.edu/api");
}

#[test]
fn override_trailing_slash_is_trimmed() {
    let config = ApiConfig::resolve(&overrides(Some("https://auth.example.edu/api/"), None), "portal.local");
    assert_eq!(config.auth_base_url, "https://auth.example.edu/api");
}

#[test]
fn empty_override_falls_through() {
    let config = ApiConfig::resolve(&overrides(Some(""), Some("   ")), "localhost");
    assert_eq!(config.auth_base_url, "http://localhost:8081/api");
    assert_eq!(config.submission_base_url, "http://localhost:8082/api");
}

#[test]
fn overrides_resolve_independently() {
    let config = ApiConfig::resolve(&overrides(None, Some("https://sub.example.edu/api")), "10.0.0.5");
    assert_eq!(config.auth_base_url, "http://10.0.0.5:8081/api");
    assert_eq!(config.submission_base_url, "https://sub.example.edu/api");
}

// =============================================================================
// resolve: loopback and same-host tiers
// =============================================================================

#[test]
fn loopback_hosts_use_localhost_ports() {
    for host in ["localhost", "127.0.0.1", "LOCALHOST", "[::1]"] {
        let config = ApiConfig::resolve(&EnvOverrides::default(), host);
        assert_eq!(config.auth_base_url, "http://localhost:8081/api", "host {host:?}");
        assert_eq!(config.submission_base_url, "http://localhost:8082/api", "host {host:?}");
    }
}

#[test]
fn lan_host_is_reused_with_service_ports() {
    let config = ApiConfig::resolve(&EnvOverrides::default(), "192.168.1.20");
    assert_eq!(config.auth_base_url, "http://192.168.1.20:8081/api");
    assert_eq!(config.submission_base_url, "http://192.168.1.20:8082/api");
}

#[test]
fn named_host_is_reused_with_service_ports() {
    let config = ApiConfig::resolve(&EnvOverrides::default(), "portal.campus.edu");
    assert_eq!(config.auth_base_url, "http://portal.campus.edu:8081/api");
}

// =============================================================================
// is_loopback / auth_url
// =============================================================================

#[test]
fn is_loopback_detects_loopback_literals() {
    assert!(is_loopback("localhost"));
    assert!(is_loopback("127.0.0.1"));
    assert!(is_loopback("127.1.2.3"));
    assert!(is_loopback("::1"));
    assert!(!is_loopback("0.0.0.0"));
    assert!(!is_loopback("example.com"));
    assert!(!is_loopback("localhost.example.com"));
}

#[test]
fn auth_url_appends_path() {
    let config = ApiConfig::resolve(&EnvOverrides::default(), "localhost");
    assert_eq!(config.auth_url("/auth/login"), "http://localhost:8081/api/auth/login");
}

#[cfg(not(feature = "csr"))]
#[test]
fn from_environment_outside_browser_uses_localhost() {
    let config = ApiConfig::from_environment();
    let expected = ApiConfig::resolve(&EnvOverrides::from_build_env(), "localhost");
    assert_eq!(config, expected);
}
