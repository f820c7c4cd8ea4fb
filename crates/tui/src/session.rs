//! Session snapshot held by the shell.
//!
//! The store is read once at startup and again whenever it reports a change
//! (or a reload is requested); rendering only ever looks at the snapshot.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;
use vassa_types::{Identity, SessionRecord};
use vassa_util::SessionStore;

#[derive(Debug)]
pub struct SessionContext {
    store: Arc<SessionStore>,
    snapshot: Option<SessionRecord>,
}

impl SessionContext {
    pub fn new(store: Arc<SessionStore>) -> Self {
        let snapshot = store.read();
        Self { store, snapshot }
    }

    /// Re-reads the store. Returns whether the authenticated identity changed.
    pub fn refresh(&mut self) -> bool {
        let before = self.identity();
        self.snapshot = self.store.read();
        let after = self.identity();
        let changed = before != after;
        debug!(authenticated = after.is_authenticated(), changed, "session refreshed");
        changed
    }

    pub fn identity(&self) -> Identity {
        Identity::from_session(self.snapshot.as_ref())
    }

    pub fn snapshot(&self) -> Option<&SessionRecord> {
        self.snapshot.as_ref()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.store.subscribe()
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }
}
