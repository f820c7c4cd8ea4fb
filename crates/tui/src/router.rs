//! In-process router: the current location plus a back stack.

use tracing::debug;
use vassa_types::Route;

#[derive(Debug, Clone, Default)]
pub struct RouterState {
    current: Route,
    history: Vec<Route>,
}

impl RouterState {
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn current_path(&self) -> &str {
        self.current.path()
    }

    /// Moves to `route`, pushing the previous location. Navigating to the
    /// current location is a no-op and returns `false`.
    pub fn navigate(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        debug!(from = %self.current, to = %route, "navigate");
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
        true
    }

    /// Pops the back stack. Returns the new location, if there was one to return to.
    pub fn back(&mut self) -> Option<&Route> {
        let previous = self.history.pop()?;
        self.current = previous;
        Some(&self.current)
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}
