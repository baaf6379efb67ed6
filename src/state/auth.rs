//! Observable authentication state.
//!
//! DESIGN
//! ======
//! `AuthStore` wraps a `tokio::sync::watch` channel: one shared slot of
//! `AuthState`, any number of subscribers notified on each write. Updates
//! are whole-state replacements from the single active request's completion
//! path, so last write wins — there is no partial mutation to guard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use tokio::sync::watch;

use crate::net::types::User;

/// Authentication state tracking the current user and an optional
/// status message (set on logout, cleared by the next mutation).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub status: Option<String>,
}

/// Shared observable container for [`AuthState`].
///
/// Process-wide and in-memory only: state resets when the process exits.
#[derive(Clone, Debug)]
pub struct AuthStore {
    tx: watch::Sender<AuthState>,
}

impl AuthStore {
    /// Create a store in the unauthenticated state.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(AuthState::default());
        Self { tx }
    }

    /// Subscribe to state changes. The receiver yields the current state
    /// immediately and is marked changed on every subsequent write.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.tx.subscribe()
    }

    /// Current state, cloned out of the slot.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.tx.borrow().clone()
    }

    /// Record a successful session check or login.
    pub fn set_user(&self, user: User) {
        self.tx.send_replace(AuthState { user: Some(user), status: None });
    }

    /// Drop back to the unauthenticated state.
    pub fn clear(&self) {
        self.tx.send_replace(AuthState::default());
    }

    /// Drop back to the unauthenticated state with a status message.
    pub fn clear_with_status(&self, status: impl Into<String>) {
        self.tx.send_replace(AuthState { user: None, status: Some(status.into()) });
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}
