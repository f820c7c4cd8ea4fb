//! Runtime configuration for the navigation shell.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use url::Url;
use vassa_api::{DEFAULT_API_BASE, validate_base_url};
use vassa_types::Route;

/// Scroll offset (in content rows) past which the landing bar turns opaque.
pub const DEFAULT_SCROLL_THRESHOLD: u32 = 50;
/// Terminal width (in columns) below which the link bar collapses into the mobile panel.
pub const DEFAULT_MOBILE_BREAKPOINT: u16 = 96;
/// Terminal width below which the call-to-action button is hidden entirely.
pub const DEFAULT_COMPACT_BREAKPOINT: u16 = 60;
pub const DEFAULT_LOGOUT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_RELOAD_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(3);
pub const DEFAULT_SITE_URL: &str = "https://vassaproperties.com";

/// Knobs the host passes to the shell at startup.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Backend origin for the logout call.
    pub api_base_url: String,
    /// Public site origin used to build absolute links for detached opens.
    pub site_url: String,
    pub scroll_threshold: u32,
    pub mobile_breakpoint: u16,
    pub compact_breakpoint: u16,
    /// Upper bound on a single logout call before it is reported as failed.
    pub logout_timeout: Duration,
    /// Delay between a successful logout and the view reload.
    pub reload_delay: Duration,
    pub notification_ttl: Duration,
    pub initial_route: Route,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            compact_breakpoint: DEFAULT_COMPACT_BREAKPOINT,
            logout_timeout: DEFAULT_LOGOUT_TIMEOUT,
            reload_delay: DEFAULT_RELOAD_DELAY,
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
            initial_route: Route::Landing,
        }
    }
}

impl ShellConfig {
    /// Checks the URLs and breakpoints before the shell starts.
    pub fn validate(&self) -> Result<()> {
        validate_base_url(&self.api_base_url)?;
        let site = Url::parse(&self.site_url).with_context(|| format!("invalid site url '{}'", self.site_url))?;
        if site.host_str().is_none() {
            bail!("site url '{}' must include a host", self.site_url);
        }
        if self.compact_breakpoint > self.mobile_breakpoint {
            bail!(
                "compact breakpoint ({}) must not exceed the mobile breakpoint ({})",
                self.compact_breakpoint,
                self.mobile_breakpoint
            );
        }
        Ok(())
    }

    /// Absolute URL for a route on the public site.
    pub fn absolute_url(&self, route: &Route) -> String {
        format!("{}{}", self.site_url.trim_end_matches('/'), route.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_joins_without_double_slash() {
        let config = ShellConfig {
            site_url: "https://vassaproperties.com/".into(),
            ..ShellConfig::default()
        };
        assert_eq!(config.absolute_url(&Route::Contact), "https://vassaproperties.com/contact");
        assert_eq!(config.absolute_url(&Route::Landing), "https://vassaproperties.com/");
    }

    #[test]
    fn validation_rejects_bad_urls_and_inverted_breakpoints() {
        assert!(ShellConfig::default().validate().is_ok());

        let plain_http = ShellConfig {
            api_base_url: "http://api.vassaproperties.com".into(),
            ..ShellConfig::default()
        };
        assert!(plain_http.validate().is_err());

        let bad_site = ShellConfig {
            site_url: "vassa".into(),
            ..ShellConfig::default()
        };
        assert!(bad_site.validate().is_err());

        let inverted = ShellConfig {
            compact_breakpoint: 120,
            ..ShellConfig::default()
        };
        assert!(inverted.validate().is_err());
    }
}
