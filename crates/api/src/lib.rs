//! Vassa API client utilities.
//!
//! This module provides a lightweight client for the property-listing
//! backend. It focuses on:
//!
//! - Constructing an HTTP client with sensible defaults
//! - Validating the configured API base URL for safety
//! - Building requests with a consistent User-Agent and Accept headers
//!
//! The only backend operation the navigation shell needs is logout, exposed
//! through the [`AuthService`] trait in [`auth`].
//!
//! # Example
//!
//! ```ignore
//! use vassa_api::{ApiClient, AuthService, HttpAuthService};
//! use vassa_util::SessionStore;
//! use std::sync::Arc;
//!
//! async fn sign_out() -> anyhow::Result<()> {
//!     let client = ApiClient::new("https://api.vassaproperties.com")?;
//!     let auth = HttpAuthService::new(client, Arc::new(SessionStore::new()));
//!     auth.logout().await?;
//!     Ok(())
//! }
//! ```

use std::env;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, RequestBuilder, Url, header};
use tracing::debug;

pub mod auth;

pub use auth::{AuthError, AuthService, HttpAuthService};

/// Environment variable holding the API base URL.
pub const API_BASE_ENV: &str = "VASSA_API_BASE";

/// Default public API base.
pub const DEFAULT_API_BASE: &str = "https://api.vassaproperties.com";

/// Hostnames allowed for local development regardless of scheme.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];

#[derive(Debug, Clone)]
/// Thin wrapper around a configured `reqwest::Client` for backend access.
///
/// The client pre-configures default headers and builds requests against a
/// validated base URL.
pub struct ApiClient {
    pub base_url: String,
    pub http: Client,
    pub user_agent: String,
}

impl ApiClient {
    /// Construct an [`ApiClient`] for the given base URL.
    ///
    /// Non-localhost hosts must use HTTPS.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        validate_base_url(&base_url)?;

        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(default_headers)
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .build()
            .context("build http client")?;

        Ok(Self {
            base_url,
            http,
            user_agent: format!("vassa-nav/{}; {}", env!("CARGO_PKG_VERSION"), env::consts::OS),
        })
    }

    /// Construct a client from `VASSA_API_BASE`, falling back to the public API.
    pub fn new_from_env() -> Result<Self> {
        let base_url = env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.into());
        Self::new(base_url)
    }

    /// Build a `reqwest::RequestBuilder` for a method and API-relative path.
    ///
    /// The resulting request includes the configured User-Agent and base
    /// headers, and is resolved relative to `self.base_url`.
    pub fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "building request");

        self.http.request(method, url).header(header::USER_AGENT, &self.user_agent)
    }
}

/// Validate that a base URL is acceptable for use by the client.
///
/// Rules:
/// - `localhost` or `127.0.0.1`: any scheme is allowed
/// - otherwise: scheme must be HTTPS
pub fn validate_base_url(base: &str) -> Result<()> {
    let parsed_base_url = Url::parse(base).map_err(|e| anyhow!("Invalid {} URL '{}': {}", API_BASE_ENV, base, e))?;

    let host_name = parsed_base_url
        .host_str()
        .ok_or_else(|| anyhow!("{} must include a host", API_BASE_ENV))?;

    if LOCALHOST_DOMAINS
        .iter()
        .any(|&allowed| host_name.eq_ignore_ascii_case(allowed))
    {
        return Ok(());
    }

    if parsed_base_url.scheme() != "https" {
        return Err(anyhow!(
            "{} must use https for non-localhost hosts; got '{}://'",
            API_BASE_ENV,
            parsed_base_url.scheme()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localhost_allows_plain_http() {
        assert!(validate_base_url("http://localhost:8080").is_ok());
        assert!(validate_base_url("http://127.0.0.1:3000").is_ok());
    }

    #[test]
    fn remote_hosts_require_https() {
        assert!(validate_base_url("http://api.vassaproperties.com").is_err());
        assert!(validate_base_url("https://api.vassaproperties.com").is_ok());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(validate_base_url("not a url").is_err());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
