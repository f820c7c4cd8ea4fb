//! Scoped event subscriptions.
//!
//! Host-wide input listeners (page scroll, pointer-down anywhere on screen)
//! are modelled as guards: [`Subscriptions::acquire`] registers interest and
//! returns a [`Subscription`]; dropping the guard releases it. The input
//! router only delivers an event class while at least one guard for it is
//! alive, so a component cannot keep receiving events after it deactivates.
//!
//! The registry is single-threaded (`Rc<RefCell<_>>`); all events are
//! delivered serially by the runtime loop.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

/// Classes of host events a component can listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Page scroll position changes.
    Scroll,
    /// Pointer-down events anywhere on screen.
    OutsidePointer,
}

#[derive(Debug, Default)]
struct Registry {
    counts: HashMap<ListenerKind, usize>,
}

/// Shared registry of live subscriptions.
#[derive(Debug, Clone, Default)]
pub struct Subscriptions {
    registry: Rc<RefCell<Registry>>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns the guard that keeps it alive.
    pub fn acquire(&self, kind: ListenerKind) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let count = registry.counts.entry(kind).or_insert(0);
        *count += 1;
        trace!(?kind, count = *count, "listener acquired");
        Subscription {
            kind,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Whether any guard for `kind` is alive.
    pub fn is_active(&self, kind: ListenerKind) -> bool {
        self.registry.borrow().counts.get(&kind).copied().unwrap_or(0) > 0
    }

    /// Total number of live guards across all kinds.
    pub fn active_count(&self) -> usize {
        self.registry.borrow().counts.values().sum()
    }
}

/// RAII guard for a registered listener.
pub struct Subscription {
    kind: ListenerKind,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("kind", &self.kind).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = registry.borrow_mut();
        if let Some(count) = registry.counts.get_mut(&self.kind) {
            *count = count.saturating_sub(1);
            trace!(kind = ?self.kind, count = *count, "listener released");
            if *count == 0 {
                registry.counts.remove(&self.kind);
            }
        }
    }
}
