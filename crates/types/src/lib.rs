//! Shared types for the Vassa navigation shell.
//!
//! The TUI, API and CLI crates exchange these values: the session record and
//! the identity derived from it, application routes, and the `Msg`/`Effect`
//! vocabulary that drives the shell's event loop.

use std::time::Duration;

pub mod route;
pub mod session;

pub use route::Route;
pub use session::{DetailKind, Identity, SessionRecord, UserProfile};

/// Visual theme of the navigation bar.
///
/// `Transparent` (light text over the hero backdrop) is only ever used at the
/// top of the landing route; everywhere else the bar is `Opaque`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavTheme {
    Transparent,
    #[default]
    Opaque,
}

/// Overlays the shell can open on top of the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Login,
    Register,
}

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

/// A transient, user-visible message. Delivery is fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }
}

/// Result of the external logout call, as reported back to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoutOutcome {
    Succeeded,
    Failed(String),
    TimedOut,
}

/// Messages that can be sent to update the application state.
///
/// This enum defines the host events and background completions that can
/// trigger state changes in the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick (notification expiry)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// Page content scrolled to an absolute offset, in rows
    Scrolled(u32),
    /// The router moved to a new location
    RouteChanged(Route),
    /// The session store reported a write or a clear
    SessionChanged,
    /// Coarse invalidation: re-read the session and reset local view state
    Reload,
    /// The logout task finished
    LogoutCompleted(LogoutOutcome),
}

/// Side effects that can be triggered by state changes.
///
/// Components return these instead of performing I/O; the runtime turns them
/// into commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Navigate in place to a route
    Navigate(Route),
    /// Modifier-activated link: keep the current view and hand the link off
    OpenDetached(Route),
    /// Start the external logout call
    LogoutRequested,
    /// Deliver `Msg::Reload` after the given delay
    ScheduleReload(Duration),
    /// Emit a notification through the sink
    Notify(Notification),
    /// Display a modal view
    ShowModal(Modal),
    /// Hide any open modal
    CloseModal,
    /// Request to copy text to the system clipboard
    CopyToClipboard(String),
}
