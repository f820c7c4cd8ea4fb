use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vassa_api::{API_BASE_ENV, ApiClient, HttpAuthService};
use vassa_tui::ShellConfig;
use vassa_types::Route;
use vassa_util::{SESSION_PATH_ENV, SessionStore, expand_tilde};

/// Environment variable overriding the log file location.
const LOG_PATH_ENV: &str = "VASSA_LOG_PATH";

/// Terminal navigation shell for Vassa Properties.
#[derive(Debug, Parser)]
#[command(name = "vassa", version, about)]
struct Args {
    /// Backend API origin used for logout.
    #[arg(long, env = API_BASE_ENV, default_value = vassa_api::DEFAULT_API_BASE)]
    api_base: String,

    /// Public site origin used when copying links.
    #[arg(long, env = "VASSA_SITE_URL", default_value = vassa_tui::DEFAULT_SITE_URL)]
    site_url: String,

    /// Session file shared with the login flow.
    #[arg(long, env = SESSION_PATH_ENV)]
    session_path: Option<String>,

    /// Log file; the terminal is owned by the UI, so logs never go to stderr.
    #[arg(long, env = LOG_PATH_ENV)]
    log_path: Option<String>,

    /// Route to open at startup, e.g. `/about`.
    #[arg(long, default_value = "/")]
    route: String,

    /// Rows scrolled on the landing page before the bar turns opaque.
    #[arg(long, default_value_t = vassa_tui::DEFAULT_SCROLL_THRESHOLD)]
    scroll_threshold: u32,

    /// Terminal width below which links collapse into the mobile menu.
    #[arg(long, default_value_t = vassa_tui::DEFAULT_MOBILE_BREAKPOINT)]
    mobile_breakpoint: u16,

    /// Terminal width below which the call-to-action is hidden.
    #[arg(long, default_value_t = vassa_tui::DEFAULT_COMPACT_BREAKPOINT)]
    compact_breakpoint: u16,

    /// Seconds before an unanswered logout is reported as failed.
    #[arg(long, default_value_t = vassa_tui::DEFAULT_LOGOUT_TIMEOUT.as_secs())]
    logout_timeout_secs: u64,

    /// Milliseconds between a successful logout and the view reload.
    #[arg(long, default_value_t = vassa_tui::DEFAULT_RELOAD_DELAY.as_millis() as u64)]
    reload_delay_ms: u64,
}

impl Args {
    fn shell_config(&self) -> ShellConfig {
        ShellConfig {
            api_base_url: self.api_base.clone(),
            site_url: self.site_url.clone(),
            scroll_threshold: self.scroll_threshold,
            mobile_breakpoint: self.mobile_breakpoint,
            compact_breakpoint: self.compact_breakpoint,
            logout_timeout: Duration::from_secs(self.logout_timeout_secs),
            reload_delay: Duration::from_millis(self.reload_delay_ms),
            initial_route: Route::from_path(&self.route),
            ..ShellConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_path.as_deref())?;

    let config = args.shell_config();
    config.validate()?;

    let store = Arc::new(match args.session_path.as_deref() {
        Some(path) => SessionStore::at_path(expand_tilde(path)),
        None => SessionStore::new(),
    });
    let client = ApiClient::new(config.api_base_url.clone())?;
    let auth = Arc::new(HttpAuthService::new(client, Arc::clone(&store)));

    info!(session = %store.path().display(), route = %config.initial_route, "starting vassa");
    vassa_tui::run(config, store, auth).await
}

fn default_log_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("vassa")
        .join("vassa.log")
}

fn init_tracing(log_path: Option<&str>) -> Result<()> {
    let path = log_path.map(expand_tilde).unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
