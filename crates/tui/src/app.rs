//! Application state and update logic for the navigation shell.
//!
//! `App` owns every piece of view state plus the shared context (config,
//! session snapshot, auth collaborator, listener registry). `update` is the
//! pure-ish reducer for host [`Msg`]s; anything effectful is returned as an
//! [`Effect`] and executed by `cmd`.

use std::sync::Arc;
use std::time::Instant;

use ratatui::layout::Position;
use tracing::{debug, info};
use vassa_api::AuthService;
use vassa_types::{Effect, Identity, Msg, NavTheme, Route};
use vassa_util::SessionStore;

use crate::config::ShellConfig;
use crate::router::RouterState;
use crate::session::SessionContext;
use crate::ui::components::auth_modal::AuthModalState;
use crate::ui::components::mobile_menu::MobileMenuState;
use crate::ui::components::nav_bar::{NavBarState, ScrollThemeState};
use crate::ui::components::notifications::NotificationsState;
use crate::ui::components::page::{PageState, page_lines};
use crate::ui::components::user_menu::{LogoutFlow, UserMenuState};
use crate::ui::subscriptions::{ListenerKind, Subscription, Subscriptions};
use crate::ui::theme::{self, Theme};

/// Rows taken by the bar at the top of the screen.
pub const NAV_BAR_HEIGHT: u16 = 3;
/// Rows taken by the hints strip at the bottom.
pub const HINTS_HEIGHT: u16 = 1;

/// Cross-cutting shared context owned by the App.
pub struct SharedCtx {
    pub config: ShellConfig,
    pub session: SessionContext,
    pub auth: Arc<dyn AuthService>,
    pub subscriptions: Subscriptions,
}

impl std::fmt::Debug for SharedCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedCtx")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("subscriptions", &self.subscriptions)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct App {
    pub ctx: SharedCtx,
    pub router: RouterState,
    pub scroll_theme: ScrollThemeState,
    pub nav_bar: NavBarState,
    pub user_menu: UserMenuState,
    pub logout: LogoutFlow,
    pub mobile_menu: MobileMenuState,
    pub auth_modal: AuthModalState,
    pub notifications: NotificationsState,
    pub page: PageState,
    /// Last known terminal size (columns, rows).
    pub terminal_size: (u16, u16),
    pub should_quit: bool,
    /// Held from mount to teardown, whether or not the user menu is open.
    outside_pointer: Option<Subscription>,
}

impl App {
    pub fn new(config: ShellConfig, store: Arc<SessionStore>, auth: Arc<dyn AuthService>) -> Self {
        let subscriptions = Subscriptions::new();
        let outside_pointer = Some(subscriptions.acquire(ListenerKind::OutsidePointer));
        let initial_route = config.initial_route.clone();

        let mut scroll_theme = ScrollThemeState::new(config.scroll_threshold);
        scroll_theme.set_route(&initial_route, &subscriptions);
        let mut page = PageState::default();
        page.reset(page_lines(&initial_route).len() as u32);

        let notifications = NotificationsState::new(config.notification_ttl);
        let session = SessionContext::new(store);
        info!(route = %initial_route, authenticated = session.identity().is_authenticated(), "shell mounted");

        Self {
            ctx: SharedCtx {
                config,
                session,
                auth,
                subscriptions,
            },
            router: RouterState::new(initial_route),
            scroll_theme,
            nav_bar: NavBarState::new(),
            user_menu: UserMenuState::new(),
            logout: LogoutFlow::new(),
            mobile_menu: MobileMenuState::new(),
            auth_modal: AuthModalState::new(),
            notifications,
            page,
            terminal_size: (0, 0),
            should_quit: false,
            outside_pointer,
        }
    }

    pub fn identity(&self) -> Identity {
        self.ctx.session.identity()
    }

    pub fn nav_theme(&self) -> NavTheme {
        self.scroll_theme.theme()
    }

    /// Palette for the bar under the current scroll theme.
    pub fn theme(&self) -> &'static dyn Theme {
        theme::for_nav(self.nav_theme())
    }

    pub fn current_route(&self) -> &Route {
        self.router.current()
    }

    /// Whether the desktop link bar is shown (terminal at or past the mobile breakpoint).
    pub fn is_wide(&self) -> bool {
        self.terminal_size.0 >= self.ctx.config.mobile_breakpoint
    }

    /// Handles a host message and returns follow-up effects.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {
                self.notifications.expire(Instant::now());
                Vec::new()
            }
            Msg::Resize(width, height) => {
                self.terminal_size = (*width, *height);
                if self.mobile_menu.on_resize(*width, self.ctx.config.mobile_breakpoint) {
                    debug!(width, "terminal widened past the breakpoint; mobile menu closed");
                }
                let viewport = height.saturating_sub(NAV_BAR_HEIGHT + HINTS_HEIGHT);
                if self.page.update_viewport_height(u32::from(viewport)) {
                    self.scroll_theme.on_scroll(self.page.offset());
                }
                Vec::new()
            }
            Msg::Scrolled(offset) => {
                self.scroll_theme.on_scroll(*offset);
                Vec::new()
            }
            Msg::RouteChanged(route) => {
                self.scroll_theme.set_route(route, &self.ctx.subscriptions);
                self.page.reset(page_lines(route).len() as u32);
                self.user_menu.close();
                self.mobile_menu.close();
                Vec::new()
            }
            Msg::SessionChanged => {
                self.ctx.session.refresh();
                let identity = self.identity();
                if identity.is_authenticated() {
                    // Sign-in happens in the modal's collaborator; the store change is the completion signal.
                    if self.auth_modal.is_open() {
                        self.auth_modal.close();
                    }
                } else {
                    self.user_menu.close();
                }
                Vec::new()
            }
            Msg::Reload => {
                info!("reloading view state");
                self.ctx.session.refresh();
                self.user_menu.close();
                self.mobile_menu.close();
                self.auth_modal.close();
                self.nav_bar.clear_focus();
                self.logout.reset();
                let route = self.router.current().clone();
                self.page.reset(page_lines(&route).len() as u32);
                self.scroll_theme.set_route(&route, &self.ctx.subscriptions);
                Vec::new()
            }
            Msg::LogoutCompleted(outcome) => self.logout.complete(outcome, self.ctx.config.reload_delay),
        }
    }

    /// Forwards the page's scroll offset to the scroll theme.
    pub fn on_page_scrolled(&mut self) -> Vec<Effect> {
        let offset = self.page.offset();
        self.update(&Msg::Scrolled(offset))
    }

    /// Delivers a pointer-down to the outside-click listener, if one is registered.
    /// Returns whether the user menu closed as a result.
    pub fn dispatch_pointer_down(&mut self, position: Position) -> bool {
        if !self.ctx.subscriptions.is_active(ListenerKind::OutsidePointer) {
            return false;
        }
        self.user_menu.on_pointer_down(position)
    }

    /// Unmounts the shell: aborts an in-flight logout and releases every listener.
    pub fn teardown(&mut self) {
        self.logout.abort();
        self.scroll_theme.release();
        self.outside_pointer = None;
        debug!(remaining = self.ctx.subscriptions.active_count(), "shell torn down");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use vassa_api::AuthError;
    use vassa_types::{LogoutOutcome, Modal, Notification, SessionRecord};

    pub(crate) struct NoopAuth;

    #[async_trait]
    impl AuthService for NoopAuth {
        async fn logout(&self) -> Result<(), AuthError> {
            Ok(())
        }
    }

    pub(crate) fn app_with_session(record: Option<SessionRecord>) -> (App, Arc<SessionStore>) {
        let store = Arc::new(SessionStore::ephemeral());
        if let Some(record) = record {
            store.write(&record).unwrap();
        }
        let mut app = App::new(ShellConfig::default(), Arc::clone(&store), Arc::new(NoopAuth));
        app.update(&Msg::Resize(120, 40));
        (app, store)
    }

    #[test]
    fn mount_acquires_both_listeners_on_landing() {
        let (app, _) = app_with_session(None);
        assert!(app.ctx.subscriptions.is_active(ListenerKind::OutsidePointer));
        assert!(app.ctx.subscriptions.is_active(ListenerKind::Scroll));
        assert_eq!(app.nav_theme(), NavTheme::Transparent);
    }

    #[test]
    fn teardown_releases_every_listener() {
        let (mut app, _) = app_with_session(None);
        app.teardown();
        assert_eq!(app.ctx.subscriptions.active_count(), 0);
        assert!(!app.dispatch_pointer_down(Position::new(0, 0)));
    }

    #[test]
    fn scrolling_past_the_threshold_turns_the_bar_opaque() {
        let (mut app, _) = app_with_session(None);
        app.page.scroll_lines(51);
        app.on_page_scrolled();
        assert_eq!(app.nav_theme(), NavTheme::Opaque);

        app.page.scroll_lines(-1);
        app.on_page_scrolled();
        assert_eq!(app.nav_theme(), NavTheme::Transparent);
    }

    #[test]
    fn leaving_landing_releases_the_scroll_listener() {
        let (mut app, _) = app_with_session(None);
        app.update(&Msg::RouteChanged(Route::About));
        assert!(!app.ctx.subscriptions.is_active(ListenerKind::Scroll));
        assert_eq!(app.nav_theme(), NavTheme::Opaque);

        app.update(&Msg::Scrolled(0));
        assert_eq!(app.nav_theme(), NavTheme::Opaque);
    }

    #[test]
    fn route_change_closes_both_menus() {
        let (mut app, _) = app_with_session(Some(SessionRecord::for_user("Asha")));
        app.user_menu.toggle();
        app.update(&Msg::Resize(80, 40));
        app.mobile_menu.toggle();
        app.update(&Msg::RouteChanged(Route::Contact));
        assert!(!app.user_menu.is_open());
        assert!(!app.mobile_menu.is_open());
    }

    #[test]
    fn resize_past_breakpoint_closes_the_mobile_menu() {
        let (mut app, _) = app_with_session(None);
        app.update(&Msg::Resize(80, 40));
        app.mobile_menu.toggle();
        app.update(&Msg::Resize(140, 40));
        assert!(!app.mobile_menu.is_open());
        assert!(app.is_wide());
    }

    #[test]
    fn pointer_down_outside_closes_the_user_menu() {
        let (mut app, _) = app_with_session(Some(SessionRecord::for_user("Asha")));
        app.user_menu.set_container_area(ratatui::layout::Rect::new(90, 1, 30, 1));
        app.user_menu.toggle();
        assert!(!app.dispatch_pointer_down(Position::new(95, 1)));
        assert!(app.user_menu.is_open());
        assert!(app.dispatch_pointer_down(Position::new(3, 20)));
        assert!(!app.user_menu.is_open());
    }

    #[test]
    fn session_change_to_authenticated_closes_the_login_modal() {
        let (mut app, store) = app_with_session(None);
        app.auth_modal.open(Modal::Login);
        store.write(&SessionRecord::for_user("Asha")).unwrap();
        app.update(&Msg::SessionChanged);
        assert!(!app.auth_modal.is_open());
        assert_eq!(app.identity().name(), Some("Asha"));
    }

    #[test]
    fn logout_completion_is_routed_to_the_flow() {
        let (mut app, _) = app_with_session(Some(SessionRecord::for_user("Asha")));
        assert!(app.logout.begin());
        let effects = app.update(&Msg::LogoutCompleted(LogoutOutcome::Failed("boom".into())));
        assert_eq!(effects, vec![Effect::Notify(Notification::error("Logout failed!"))]);
        assert!(!app.logout.is_pending());
    }

    #[test]
    fn reload_resets_view_state_and_rereads_the_session() {
        let (mut app, store) = app_with_session(Some(SessionRecord::for_user("Asha")));
        app.user_menu.toggle();
        app.auth_modal.open(Modal::Register);
        app.page.scroll_lines(70);
        app.on_page_scrolled();
        store.clear().unwrap();

        app.update(&Msg::Reload);
        assert!(!app.user_menu.is_open());
        assert!(!app.auth_modal.is_open());
        assert_eq!(app.page.offset(), 0);
        assert_eq!(app.nav_theme(), NavTheme::Transparent);
        assert_eq!(app.identity(), Identity::Anonymous);
    }
}
