//! REST client for the auth service.
//!
//! Browser builds (`csr`): HTTP via `gloo-net` (fetch).
//! Native builds: HTTP via `reqwest`, so the same contract is exercised by
//! integration tests against a mock backend.
//!
//! ERROR HANDLING
//! ==============
//! Both transports reduce a reply to [`RawResponse`] and share the settle
//! step, so a non-2xx status always becomes [`ApiError::Rejected`] whose
//! display text is the server's body, or a fixed fallback when the body is
//! empty. Persisting the returned identity is the caller's job.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::types::{AuthResponse, LoginRequest, RegisterRequest};
use crate::config::ApiConfig;
use crate::state::session::TOKEN_KEY;
use crate::util::storage::{KeyValueStore, NamespacedStore};

pub const REGISTER_ENDPOINT: &str = "/auth/register";
pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const HEALTH_ENDPOINT: &str = "/auth/health";

pub const REGISTER_FAILED: &str = "Registration failed";
pub const LOGIN_FAILED: &str = "Login failed";
pub const SERVICE_UNAVAILABLE: &str = "Backend service is not available";

/// Failure of an auth-service call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The request never produced a response (DNS, CORS, connection refused).
    #[error("request failed: {0}")]
    Transport(String),
    /// A body could not be encoded or decoded as JSON.
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Status code and body text of a settled HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// Same rule as `fetch`'s `Response.ok`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Create an account via `POST {auth}/auth/register`.
///
/// # Errors
///
/// [`ApiError::Rejected`] carrying the server's text (or `"Registration failed"`
/// when the body is empty) on a non-2xx status; transport and JSON errors as-is.
pub async fn register(config: &ApiConfig, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    let raw = post_json(&config.auth_url(REGISTER_ENDPOINT), request).await?;
    settle_auth(raw, REGISTER_FAILED)
}

/// Sign in via `POST {auth}/auth/login`.
///
/// # Errors
///
/// [`ApiError::Rejected`] carrying the server's text (or `"Login failed"`) on a
/// non-2xx status; transport and JSON errors as-is.
pub async fn login(config: &ApiConfig, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    let raw = post_json(&config.auth_url(LOGIN_ENDPOINT), request).await?;
    settle_auth(raw, LOGIN_FAILED)
}

/// Probe `GET {auth}/auth/health` and return its raw body text.
///
/// # Errors
///
/// [`ApiError::Rejected`] with `"Backend service is not available"` on a
/// non-2xx status.
pub async fn check_health(config: &ApiConfig) -> Result<String, ApiError> {
    let raw = get_text(&config.auth_url(HEALTH_ENDPOINT)).await?;
    settle_health(raw)
}

/// Authorization header for the persisted token, ready to merge into an
/// outgoing request. Empty when no token is stored or storage is unreadable.
pub fn auth_header<S: KeyValueStore>(store: &NamespacedStore<S>) -> Vec<(&'static str, String)> {
    match store.get(TOKEN_KEY) {
        Ok(Some(token)) => vec![bearer_header(&token)],
        Ok(None) => Vec::new(),
        Err(e) => {
            log::warn!("token unreadable, sending no auth header: {e}");
            Vec::new()
        }
    }
}

fn bearer_header(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

fn failure_message(body: String, fallback: &str) -> String {
    if body.is_empty() { fallback.to_owned() } else { body }
}

fn settle_auth(raw: RawResponse, fallback: &str) -> Result<AuthResponse, ApiError> {
    if !raw.is_success() {
        return Err(ApiError::Rejected {
            status: raw.status,
            message: failure_message(raw.body, fallback),
        });
    }
    Ok(serde_json::from_str(&raw.body)?)
}

fn settle_health(raw: RawResponse) -> Result<String, ApiError> {
    if !raw.is_success() {
        return Err(ApiError::Rejected {
            status: raw.status,
            message: SERVICE_UNAVAILABLE.to_owned(),
        });
    }
    Ok(raw.body)
}

async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<RawResponse, ApiError> {
    let payload = serde_json::to_string(body)?;
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(url)
            .header("Content-Type", "application/json")
            .body(payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
    #[cfg(not(feature = "csr"))]
    {
        let resp = reqwest::Client::new()
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

async fn get_text(url: &str) -> Result<RawResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
    #[cfg(not(feature = "csr"))]
    {
        let resp = reqwest::get(url)
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}
