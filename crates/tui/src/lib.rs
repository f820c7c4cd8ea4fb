//! # Vassa navigation shell
//!
//! Terminal rendition of the Vassa Properties site chrome: the top
//! navigation bar, the collapsible mobile menu, the authenticated user menu
//! with its logout flow, the login/register modal, and toast notifications.
//!
//! ## Architecture
//!
//! - `app` holds all view state and reduces host messages (`Msg`).
//! - Components under `ui::components` render state and translate input
//!   into `Effect`s; they never perform I/O.
//! - `cmd` executes effects: routing, clipboard, notifications, and the
//!   async logout call through the [`vassa_api::AuthService`] collaborator.
//! - `ui::runtime` owns the terminal and the event loop.

mod app;
mod cmd;
pub mod config;
mod router;
mod session;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use vassa_api::AuthService;
use vassa_util::SessionStore;

pub use config::{
    DEFAULT_COMPACT_BREAKPOINT, DEFAULT_LOGOUT_TIMEOUT, DEFAULT_MOBILE_BREAKPOINT, DEFAULT_NOTIFICATION_TTL,
    DEFAULT_RELOAD_DELAY, DEFAULT_SCROLL_THRESHOLD, DEFAULT_SITE_URL, ShellConfig,
};

/// Runs the navigation shell until the user quits.
///
/// The session store is shared with the auth collaborator: a successful
/// logout clears it, and the shell observes the change through the store's
/// subscription channel.
///
/// # Errors
///
/// Returns an error when the configuration is invalid or the terminal cannot
/// be set up or restored.
pub async fn run(config: ShellConfig, store: Arc<SessionStore>, auth: Arc<dyn AuthService>) -> Result<()> {
    config.validate()?;
    let app = app::App::new(config, store, auth);
    ui::runtime::run_app(app).await
}
