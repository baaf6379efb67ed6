//! Session lifecycle: check, login, logout.
//!
//! ERROR HANDLING
//! ==============
//! `refresh` and `logout` never fail from the caller's point of view. A
//! non-2xx status, a transport fault, and a malformed body all collapse to
//! the same observable outcome: the store reads as logged out. Failures are
//! logged at debug level and otherwise swallowed.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::{ApiError, SessionApi};
use crate::state::auth::AuthStore;

/// Status message shown after logout.
pub const LOGOUT_STATUS: &str = "You have been logged out.";

/// Session client tying the HTTP API to the observable auth store.
#[derive(Debug, Clone)]
pub struct SessionClient {
    api: SessionApi,
    store: AuthStore,
}

impl SessionClient {
    #[must_use]
    pub fn new(api: SessionApi) -> Self {
        Self { api, store: AuthStore::new() }
    }

    #[must_use]
    pub fn store(&self) -> &AuthStore {
        &self.store
    }

    #[must_use]
    pub fn api(&self) -> &SessionApi {
        &self.api
    }

    /// Re-check the session and update the store. Side effect only: a 2xx
    /// response with a parseable `user` field sets the user; any failure
    /// clears it.
    pub async fn refresh(&self) {
        match self.api.fetch_me().await {
            Ok(user) => self.store.set_user(user),
            Err(error) => {
                tracing::debug!(%error, "session check failed; treating as logged out");
                self.store.clear();
            }
        }
    }

    /// Authenticate and populate the store.
    ///
    /// The login endpoint does not return the user record, so a successful
    /// login is followed by a session check — the store is only ever set
    /// from a parseable `/me` body.
    ///
    /// # Errors
    ///
    /// Returns `RejectedCredentials` for a 401, or the underlying HTTP
    /// error. The store reads as logged out in every error case.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        match self.api.login(username, password).await {
            Ok(()) => {
                self.refresh().await;
                Ok(())
            }
            Err(error) => {
                self.store.clear();
                Err(error)
            }
        }
    }

    /// Log out, optimistically.
    ///
    /// The server is told via `POST /logout`, but local state is cleared no
    /// matter what it answers — the original client never checked the
    /// response either, and that asymmetry is kept on purpose.
    pub async fn logout(&self) {
        if let Err(error) = self.api.logout().await {
            tracing::debug!(%error, "logout request failed; clearing local session anyway");
        }
        self.store.clear_with_status(LOGOUT_STATUS);
    }
}
