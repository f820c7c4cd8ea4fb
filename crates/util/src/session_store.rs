//! Session persistence for the Vassa navigation shell.
//!
//! The login flow writes the authenticated user's record to a small JSON file
//! in the standard configuration directory (`~/.config/vassa/session.json` on
//! most platforms). The shell only reads it, and subscribes to change
//! notifications so it can refresh its snapshot after login or logout instead
//! of polling the file.
//!
//! Reads are lenient: a missing file, unreadable JSON, or a payload that is
//! not an object all read as "no session".

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use dirs_next::config_dir;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, warn};
use vassa_types::SessionRecord;

use crate::expand_tilde;

/// Environment variable allowing callers to override the session file path.
pub const SESSION_PATH_ENV: &str = "VASSA_SESSION_PATH";

/// Default filename for the JSON payload.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Error surfaced when writing or clearing the session fails.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("session I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization failure.
    #[error("session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Session store backed by a JSON file, or by memory when ephemeral.
///
/// Every successful `write` or `clear` bumps a generation counter that
/// subscribers observe through a `watch` channel.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    persist_to_disk: bool,
    memory: Mutex<Option<Value>>,
    changes: watch::Sender<u64>,
}

impl SessionStore {
    /// Create a store at the default location (env override or config dir).
    pub fn new() -> Self {
        Self::at_path(default_session_path())
    }

    /// Create a store rooted at the provided path.
    pub fn at_path(path: PathBuf) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            path,
            persist_to_disk: true,
            memory: Mutex::new(None),
            changes,
        }
    }

    /// Build an in-memory store used when the config directory cannot be accessed and in tests.
    pub fn ephemeral() -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            path: PathBuf::new(),
            persist_to_disk: false,
            memory: Mutex::new(None),
            changes,
        }
    }

    /// Path to the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current session record, if any.
    ///
    /// Never fails: malformed content is logged and treated as absent.
    pub fn read(&self) -> Option<SessionRecord> {
        let raw = if self.persist_to_disk {
            load_value(&self.path)?
        } else {
            self.memory.lock().unwrap_or_else(PoisonError::into_inner).clone()?
        };
        let record = SessionRecord::from_value(raw);
        if record.is_none() {
            warn!(path = %self.path.display(), "Session payload has an unexpected shape; treating as anonymous");
        }
        record
    }

    /// Persists a session record and notifies subscribers.
    pub fn write(&self, record: &SessionRecord) -> Result<(), SessionStoreError> {
        let value = serde_json::to_value(record)?;
        if self.persist_to_disk {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_string_pretty(&value)?)?;
        } else {
            *self.memory.lock().unwrap_or_else(PoisonError::into_inner) = Some(value);
        }
        self.notify();
        Ok(())
    }

    /// Persists raw JSON as-is. Used to simulate records written by other clients.
    pub fn write_raw(&self, value: Value) -> Result<(), SessionStoreError> {
        if self.persist_to_disk {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_string_pretty(&value)?)?;
        } else {
            *self.memory.lock().unwrap_or_else(PoisonError::into_inner) = Some(value);
        }
        self.notify();
        Ok(())
    }

    /// Removes the session and notifies subscribers. Clearing an absent session is not an error.
    pub fn clear(&self) -> Result<(), SessionStoreError> {
        if self.persist_to_disk {
            match fs::remove_file(&self.path) {
                Ok(()) => {}
                Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
                Err(error) => return Err(SessionStoreError::Io(error)),
            }
        } else {
            *self.memory.lock().unwrap_or_else(PoisonError::into_inner) = None;
        }
        self.notify();
        Ok(())
    }

    /// Subscribes to change notifications. The value is a generation counter.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    fn notify(&self) {
        self.changes.send_modify(|generation| *generation += 1);
        debug!(generation = *self.changes.borrow(), "session changed");
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn default_session_path() -> PathBuf {
    if let Ok(path) = env::var(SESSION_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vassa")
        .join(SESSION_FILE_NAME)
}

fn load_value(path: &Path) -> Option<Value> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse session file; treating as anonymous"
                );
                None
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => None,
        Err(error) => {
            warn!(path = %path.display(), error = %error, "Failed to read session file; treating as anonymous");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;
    use vassa_types::Identity;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at_path(dir.path().join("session.json"));
        assert!(store.read().is_none());
    }

    #[test]
    fn written_record_is_read_back() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at_path(dir.path().join("nested").join("session.json"));
        store.write(&SessionRecord::for_user("Asha")).unwrap();

        let identity = Identity::from_session(store.read().as_ref());
        assert_eq!(identity.name(), Some("Asha"));
    }

    #[test]
    fn invalid_json_reads_as_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let store = SessionStore::at_path(path);
        assert!(store.read().is_none());
    }

    #[test]
    fn object_without_user_is_anonymous() {
        let store = SessionStore::ephemeral();
        store.write_raw(json!({})).unwrap();
        let identity = Identity::from_session(store.read().as_ref());
        assert_eq!(identity, Identity::Anonymous);
    }

    #[test]
    fn numeric_contact_on_disk_keeps_the_user() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"user":{"name":"Asha","contact":9800000000},"token":7}"#).unwrap();

        let store = SessionStore::at_path(path);
        let identity = Identity::from_session(store.read().as_ref());
        assert_eq!(identity.name(), Some("Asha"));
    }

    #[test]
    fn clear_is_idempotent_and_notifies() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at_path(dir.path().join("session.json"));
        let receiver = store.subscribe();

        store.write(&SessionRecord::for_user("Asha")).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();

        assert!(store.read().is_none());
        assert_eq!(*receiver.borrow(), 3);
    }

    #[test]
    fn default_path_honors_env_override() {
        let override_path = "~/custom/session.json";
        temp_env::with_var(SESSION_PATH_ENV, Some(override_path), || {
            let path = default_session_path();
            assert_eq!(path, expand_tilde(override_path));
        });
    }
}
