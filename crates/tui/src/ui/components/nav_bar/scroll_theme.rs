//! Scroll-driven theming of the navigation bar.

use vassa_types::{NavTheme, Route};

use crate::ui::subscriptions::{ListenerKind, Subscription, Subscriptions};

/// Derives the bar theme from the active route and the page scroll offset.
///
/// On the landing route the bar is transparent until the page has scrolled
/// strictly past `threshold`; every other route is always opaque. A missing
/// offset counts as the top of the page.
pub fn compute_theme(route: &Route, scroll_offset: Option<u32>, threshold: u32) -> NavTheme {
    if !route.is_landing() {
        return NavTheme::Opaque;
    }
    if scroll_offset.unwrap_or(0) > threshold {
        NavTheme::Opaque
    } else {
        NavTheme::Transparent
    }
}

/// Holds the derived theme and the scroll subscription that feeds it.
///
/// The subscription exists only while the landing route is active.
#[derive(Debug)]
pub struct ScrollThemeState {
    route: Route,
    offset: u32,
    threshold: u32,
    theme: NavTheme,
    listener: Option<Subscription>,
}

impl ScrollThemeState {
    pub fn new(threshold: u32) -> Self {
        Self {
            route: Route::Landing,
            offset: 0,
            threshold,
            theme: compute_theme(&Route::Landing, None, threshold),
            listener: None,
        }
    }

    pub fn theme(&self) -> NavTheme {
        self.theme
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    /// Applies a route change: (re)acquires or releases the scroll listener
    /// and recomputes the theme for the new route at the top of the page.
    pub fn set_route(&mut self, route: &Route, subscriptions: &Subscriptions) {
        self.route = route.clone();
        self.offset = 0;
        if route.is_landing() {
            if self.listener.is_none() {
                self.listener = Some(subscriptions.acquire(ListenerKind::Scroll));
            }
        } else {
            self.listener = None;
        }
        self.recompute();
    }

    /// Delivers a scroll position. Ignored unless the listener is attached.
    pub fn on_scroll(&mut self, offset: u32) {
        if self.listener.is_none() {
            return;
        }
        self.offset = offset;
        self.recompute();
    }

    /// Drops the scroll listener (shell teardown).
    pub fn release(&mut self) {
        self.listener = None;
    }

    fn recompute(&mut self) {
        self.theme = compute_theme(&self.route, Some(self.offset), self.threshold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SCROLL_THRESHOLD;

    #[test]
    fn landing_is_transparent_up_to_the_threshold() {
        for offset in [0, 1, 25, 49, 50] {
            assert_eq!(compute_theme(&Route::Landing, Some(offset), 50), NavTheme::Transparent, "offset {offset}");
        }
        for offset in [51, 52, 500, u32::MAX] {
            assert_eq!(compute_theme(&Route::Landing, Some(offset), 50), NavTheme::Opaque, "offset {offset}");
        }
    }

    #[test]
    fn other_routes_are_always_opaque() {
        for route in Route::PRIMARY_LINKS.iter().chain([Route::Other("/blog".into())].iter()) {
            for offset in [None, Some(0), Some(50), Some(51)] {
                assert_eq!(compute_theme(route, offset, 50), NavTheme::Opaque);
            }
        }
    }

    #[test]
    fn missing_offset_counts_as_top() {
        assert_eq!(compute_theme(&Route::Landing, None, 50), NavTheme::Transparent);
    }

    #[test]
    fn listener_follows_the_landing_route() {
        let subscriptions = Subscriptions::new();
        let mut state = ScrollThemeState::new(DEFAULT_SCROLL_THRESHOLD);

        state.set_route(&Route::Landing, &subscriptions);
        assert!(subscriptions.is_active(ListenerKind::Scroll));

        state.set_route(&Route::About, &subscriptions);
        assert!(!subscriptions.is_active(ListenerKind::Scroll));
        assert_eq!(state.theme(), NavTheme::Opaque);

        state.on_scroll(0);
        assert_eq!(state.theme(), NavTheme::Opaque);
    }

    #[test]
    fn scrolling_the_landing_page_flips_the_theme() {
        let subscriptions = Subscriptions::new();
        let mut state = ScrollThemeState::new(DEFAULT_SCROLL_THRESHOLD);
        state.set_route(&Route::Landing, &subscriptions);

        state.on_scroll(51);
        assert_eq!(state.theme(), NavTheme::Opaque);
        state.on_scroll(50);
        assert_eq!(state.theme(), NavTheme::Transparent);
    }

    #[test]
    fn returning_to_landing_resets_to_the_top() {
        let subscriptions = Subscriptions::new();
        let mut state = ScrollThemeState::new(DEFAULT_SCROLL_THRESHOLD);
        state.set_route(&Route::Landing, &subscriptions);
        state.on_scroll(80);
        state.set_route(&Route::Contact, &subscriptions);
        state.set_route(&Route::Landing, &subscriptions);

        assert_eq!(state.offset(), 0);
        assert_eq!(state.theme(), NavTheme::Transparent);
        assert_eq!(subscriptions.active_count(), 1);
    }
}
