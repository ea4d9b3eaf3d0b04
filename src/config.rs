//! Backend base URL configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portal talks to two backends: the auth service and the submission
//! service. Each base URL resolves once at start-up, in order:
//!
//! 1. a non-empty build-time override (`PORTAL_API_URL`,
//!    `PORTAL_SUBMISSION_API_URL`);
//! 2. `http://localhost:{port}/api` when the page is served from loopback;
//! 3. `http://{hostname}:{port}/api` otherwise, so another device on the same
//!    network reaches the backend on the machine serving the page.
//!
//! The resolved [`ApiConfig`] is provided through Leptos context by `App`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::IpAddr;

pub const AUTH_SERVICE_PORT: u16 = 8081;
pub const SUBMISSION_SERVICE_PORT: u16 = 8082;

/// Explicit base URL overrides, normally captured from the build environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub auth_base_url: Option<String>,
    pub submission_base_url: Option<String>,
}

impl EnvOverrides {
    /// Overrides baked in at compile time, like a bundler's `import.meta.env`.
    pub fn from_build_env() -> Self {
        Self {
            auth_base_url: option_env!("PORTAL_API_URL").map(str::to_owned),
            submission_base_url: option_env!("PORTAL_SUBMISSION_API_URL").map(str::to_owned),
        }
    }
}

/// Resolved backend locations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Auth service root, e.g. `http://localhost:8081/api`. No trailing slash.
    pub auth_base_url: String,
    /// Submission service root. Resolved for completeness; no request uses it yet.
    pub submission_base_url: String,
}

impl ApiConfig {
    /// Resolve both base URLs for a page served from `hostname`.
    pub fn resolve(overrides: &EnvOverrides, hostname: &str) -> Self {
        Self {
            auth_base_url: resolve_base_url(overrides.auth_base_url.as_deref(), hostname, AUTH_SERVICE_PORT),
            submission_base_url: resolve_base_url(
                overrides.submission_base_url.as_deref(),
                hostname,
                SUBMISSION_SERVICE_PORT,
            ),
        }
    }

    /// Resolve from build-time overrides and the current page location.
    pub fn from_environment() -> Self {
        let config = Self::resolve(&EnvOverrides::from_build_env(), &current_hostname());
        log::debug!("auth service at {}", config.auth_base_url);
        config
    }

    /// Join an auth-service path such as `/auth/login` onto the base URL.
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}{path}", self.auth_base_url)
    }
}

fn resolve_base_url(override_url: Option<&str>, hostname: &str, port: u16) -> String {
    if let Some(url) = override_url.map(str::trim).filter(|u| !u.is_empty()) {
        return url.trim_end_matches('/').to_owned();
    }
    if is_loopback(hostname) {
        return format!("http://localhost:{port}/api");
    }
    format!("http://{hostname}:{port}/api")
}

/// `localhost` or any loopback IP literal (`127.0.0.0/8`, `::1`).
pub fn is_loopback(hostname: &str) -> bool {
    if hostname.eq_ignore_ascii_case("localhost") {
        return true;
    }
    let bare = hostname.trim_start_matches('[').trim_end_matches(']');
    bare.parse::<IpAddr>().is_ok_and(|ip| ip.is_loopback())
}

/// Hostname of the page, or `localhost` outside a browser.
fn current_hostname() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "localhost".to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        "localhost".to_owned()
    }
}
