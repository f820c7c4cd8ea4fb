//! Authentication collaborator used by the navigation shell.
//!
//! The shell never talks HTTP itself; it calls [`AuthService::logout`] and
//! reacts to the outcome. The HTTP implementation owns the session: on a
//! successful logout it clears the local session store, which in turn notifies
//! every subscriber that the session changed.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Method, StatusCode, header};
use thiserror::Error;
use tracing::{debug, info, warn};
use vassa_util::{SessionStore, SessionStoreError, redact_sensitive};

use crate::ApiClient;

/// API-relative path of the logout endpoint.
pub const LOGOUT_PATH: &str = "/api/user/logout";

/// Failures reported by the auth collaborator.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend answered with a non-success status.
    #[error("logout rejected with status {0}")]
    Rejected(StatusCode),
    /// The request never completed (DNS, connect, TLS, body read).
    #[error("logout request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend accepted the logout but the local session could not be cleared.
    #[error("failed to clear local session: {0}")]
    Session(#[from] SessionStoreError),
}

/// Session-mutating operations the shell depends on.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Ends the current session. A single call, no parameters, no retries.
    async fn logout(&self) -> Result<(), AuthError>;
}

/// [`AuthService`] backed by the HTTP API and the local session store.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: ApiClient,
    session_store: Arc<SessionStore>,
}

impl HttpAuthService {
    pub fn new(client: ApiClient, session_store: Arc<SessionStore>) -> Self {
        Self { client, session_store }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn logout(&self) -> Result<(), AuthError> {
        let mut request = self.client.request(Method::POST, LOGOUT_PATH);
        if let Some(token) = self.session_store.read().and_then(|record| record.token) {
            let authorization = format!("Bearer {token}");
            debug!(header = %redact_sensitive(&authorization), "attaching session token");
            request = request.header(header::AUTHORIZATION, authorization);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "logout rejected by backend");
            return Err(AuthError::Rejected(status));
        }

        self.session_store.clear()?;
        info!("logout accepted; local session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vassa_types::SessionRecord;

    #[tokio::test(flavor = "current_thread")]
    async fn transport_failure_keeps_the_session() {
        let store = Arc::new(SessionStore::ephemeral());
        store.write(&SessionRecord::for_user("Asha")).unwrap();

        // Port 9 (discard) is not expected to accept HTTP connections.
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let auth = HttpAuthService::new(client, Arc::clone(&store));

        let result = auth.logout().await;
        assert!(matches!(result, Err(AuthError::Transport(_))));
        assert!(store.read().is_some());
    }
}
