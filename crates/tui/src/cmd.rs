//! # Command Execution Layer
//!
//! Translates [`Effect`]s into work. This is the boundary where the shell's
//! state touches the outside world:
//! - Following links (in place, or detached to the clipboard)
//! - Calling the auth collaborator to log out, bounded by a timeout
//! - Scheduling the post-logout reload
//! - Showing notifications and modals
//!
//! Effects that complete synchronously may produce follow-up [`Msg`]s
//! (`CommandBatch::immediate`); anything asynchronous is spawned and handed
//! back as a `JoinHandle` for the runtime to poll (`CommandBatch::pending`).
//! State updates stay in `App::update`; this module only performs side effects.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use vassa_api::AuthService;
use vassa_types::{Effect, LogoutOutcome, Msg, Notification};

use crate::app::App;

/// Result of executing a batch of effects.
#[derive(Debug, Default)]
pub struct CommandBatch {
    /// Messages to feed back into the app right away.
    pub immediate: Vec<Msg>,
    /// Spawned tasks that resolve to a message.
    pub pending: Vec<JoinHandle<Msg>>,
}

/// Execute `effects` against `app`.
pub fn run_from_effects(app: &mut App, effects: Vec<Effect>) -> CommandBatch {
    let mut batch = CommandBatch::default();
    for effect in effects {
        match effect {
            Effect::Navigate(route) => {
                if app.router.navigate(route.clone()) {
                    batch.immediate.push(Msg::RouteChanged(route));
                }
            }
            Effect::OpenDetached(route) => {
                let url = app.ctx.config.absolute_url(&route);
                info!(%url, "link opened detached");
                if execute_clipboard_set(app, &url) {
                    app.notifications.push(Notification::info(format!("Link copied: {url}")));
                }
            }
            Effect::CopyToClipboard(text) => {
                if execute_clipboard_set(app, &text) {
                    app.notifications.push(Notification::info("Copied to clipboard"));
                }
            }
            Effect::LogoutRequested => {
                if let Some(handle) = start_logout(app) {
                    batch.pending.push(handle);
                }
            }
            Effect::ScheduleReload(delay) => {
                debug!(delay_ms = delay.as_millis() as u64, "reload scheduled");
                batch.pending.push(tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    Msg::Reload
                }));
            }
            Effect::Notify(notification) => app.notifications.push(notification),
            Effect::ShowModal(modal) => {
                app.user_menu.close();
                app.mobile_menu.close();
                app.auth_modal.open(modal);
            }
            Effect::CloseModal => app.auth_modal.close(),
        }
    }
    batch
}

/// Closes the user menu, moves the flow to Pending and spawns the call.
/// Returns `None` when a logout is already in flight.
fn start_logout(app: &mut App) -> Option<JoinHandle<Msg>> {
    app.user_menu.close();
    if !app.logout.begin() {
        debug!("logout already pending; request ignored");
        return None;
    }
    let auth = Arc::clone(&app.ctx.auth);
    let timeout = app.ctx.config.logout_timeout;
    info!(timeout_ms = timeout.as_millis() as u64, "logout started");
    let handle = tokio::spawn(async move { Msg::LogoutCompleted(run_logout(auth, timeout).await) });
    app.logout.attach(handle.abort_handle());
    Some(handle)
}

/// Calls the collaborator once, bounded by `timeout`. No retries.
pub async fn run_logout(auth: Arc<dyn AuthService>, timeout: Duration) -> LogoutOutcome {
    match tokio::time::timeout(timeout, auth.logout()).await {
        Ok(Ok(())) => LogoutOutcome::Succeeded,
        Ok(Err(error)) => LogoutOutcome::Failed(error.to_string()),
        Err(_) => LogoutOutcome::TimedOut,
    }
}

/// Writes `text` to the system clipboard. Failures become an error toast.
fn execute_clipboard_set(app: &mut App, text: &str) -> bool {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_owned())) {
        Ok(()) => true,
        Err(error) => {
            warn!(%error, "clipboard unavailable");
            app.notifications.push(Notification::error(format!("Clipboard unavailable: {text}")));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::app_with_session;
    use crate::config::ShellConfig;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use vassa_api::AuthError;
    use vassa_types::{Identity, Modal, NotificationLevel, Route, SessionRecord};
    use vassa_util::SessionStore;

    enum Behaviour {
        Succeed,
        Reject,
        Hang,
    }

    /// Stand-in for the HTTP service: success clears the store like the real one.
    struct StubAuth {
        store: Arc<SessionStore>,
        behaviour: Behaviour,
    }

    #[async_trait]
    impl AuthService for StubAuth {
        async fn logout(&self) -> Result<(), AuthError> {
            match self.behaviour {
                Behaviour::Succeed => {
                    self.store.clear()?;
                    Ok(())
                }
                Behaviour::Reject => Err(AuthError::Rejected(StatusCode::INTERNAL_SERVER_ERROR)),
                Behaviour::Hang => std::future::pending().await,
            }
        }
    }

    fn asha(behaviour: Behaviour) -> App {
        let store = Arc::new(SessionStore::ephemeral());
        store.write(&SessionRecord::for_user("Asha")).unwrap();
        let auth = Arc::new(StubAuth {
            store: Arc::clone(&store),
            behaviour,
        });
        let mut app = App::new(ShellConfig::default(), store, auth);
        app.update(&Msg::Resize(120, 40));
        app
    }

    /// Awaits every pending task and feeds its message back through the app and
    /// the executor until nothing is left.
    async fn drain(app: &mut App, mut batch: CommandBatch) {
        loop {
            let mut effects = Vec::new();
            for msg in batch.immediate.drain(..) {
                effects.extend(app.update(&msg));
            }
            for handle in batch.pending.drain(..) {
                let msg = handle.await.unwrap();
                effects.extend(app.update(&msg));
            }
            if effects.is_empty() {
                return;
            }
            batch = run_from_effects(app, effects);
        }
    }

    fn levels(app: &App) -> Vec<NotificationLevel> {
        app.notifications.toasts().map(|toast| toast.notification.level).collect()
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn successful_logout_notifies_then_reloads_as_anonymous() {
        let mut app = asha(Behaviour::Succeed);
        app.user_menu.toggle();

        let batch = run_from_effects(&mut app, vec![Effect::LogoutRequested]);
        assert!(!app.user_menu.is_open(), "menu closes before the call resolves");
        assert!(app.logout.is_pending());
        assert_eq!(batch.pending.len(), 1);

        drain(&mut app, batch).await;
        let messages: Vec<&str> = app.notifications.toasts().map(|toast| toast.notification.message.as_str()).collect();
        assert_eq!(messages, vec!["Logged out successfully!"]);
        assert_eq!(app.identity(), Identity::Anonymous);
        assert!(!app.logout.is_pending());
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn reload_waits_for_the_configured_delay() {
        let mut app = asha(Behaviour::Succeed);
        let batch = run_from_effects(&mut app, vec![Effect::ScheduleReload(Duration::from_millis(1000))]);
        let started = tokio::time::Instant::now();
        drain(&mut app, batch).await;
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn failed_logout_keeps_asha_signed_in() {
        let mut app = asha(Behaviour::Reject);
        app.user_menu.toggle();

        let batch = run_from_effects(&mut app, vec![Effect::LogoutRequested]);
        assert!(!app.user_menu.is_open());
        drain(&mut app, batch).await;

        assert_eq!(levels(&app), vec![NotificationLevel::Error]);
        assert_eq!(app.identity().name(), Some("Asha"));
        assert!(!app.logout.is_pending());
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn hung_logout_times_out_as_a_failure() {
        let mut app = asha(Behaviour::Hang);
        let batch = run_from_effects(&mut app, vec![Effect::LogoutRequested]);
        drain(&mut app, batch).await;

        assert_eq!(levels(&app), vec![NotificationLevel::Error]);
        assert_eq!(app.identity().name(), Some("Asha"));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn second_logout_while_pending_is_ignored() {
        let mut app = asha(Behaviour::Hang);
        let first = run_from_effects(&mut app, vec![Effect::LogoutRequested]);
        let second = run_from_effects(&mut app, vec![Effect::LogoutRequested]);
        assert_eq!(first.pending.len(), 1);
        assert!(second.pending.is_empty());
        app.teardown();
    }

    #[tokio::test(flavor = "current_thread")]
    async fn teardown_aborts_an_in_flight_logout() {
        let mut app = asha(Behaviour::Hang);
        let mut batch = run_from_effects(&mut app, vec![Effect::LogoutRequested]);
        app.teardown();
        let handle = batch.pending.remove(0);
        assert!(handle.await.unwrap_err().is_cancelled());
        assert_eq!(app.ctx.subscriptions.active_count(), 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn navigate_emits_route_changed_once() {
        let (mut app, _) = app_with_session(None);
        let batch = run_from_effects(&mut app, vec![Effect::Navigate(Route::About)]);
        assert_eq!(batch.immediate, vec![Msg::RouteChanged(Route::About)]);
        let again = run_from_effects(&mut app, vec![Effect::Navigate(Route::About)]);
        assert!(again.immediate.is_empty());
        assert_eq!(app.router.current_path(), "/about");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn detached_open_does_not_navigate() {
        let (mut app, _) = app_with_session(None);
        let batch = run_from_effects(&mut app, vec![Effect::OpenDetached(Route::Contact)]);
        assert!(batch.immediate.is_empty());
        assert_eq!(app.current_route(), &Route::Landing);
        // Either the copy confirmation or the clipboard error, depending on the host.
        assert_eq!(app.notifications.len(), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn show_modal_closes_menus_and_keeps_modals_exclusive() {
        let (mut app, _) = app_with_session(None);
        app.update(&Msg::Resize(80, 40));
        app.mobile_menu.toggle();
        run_from_effects(&mut app, vec![Effect::ShowModal(Modal::Login)]);
        assert!(!app.mobile_menu.is_open());
        assert!(app.auth_modal.is_login_open());

        run_from_effects(&mut app, vec![Effect::ShowModal(Modal::Register)]);
        assert!(app.auth_modal.is_register_open() && !app.auth_modal.is_login_open());

        run_from_effects(&mut app, vec![Effect::CloseModal]);
        assert!(!app.auth_modal.is_open());
    }
}
