//! Pre-render route guards.
//!
//! DESIGN
//! ======
//! Guards gate page access on a valid session and resolve to a
//! discriminated outcome: render with data, or redirect to the login page.
//! Every guard call re-verifies the session against the network instead of
//! trusting the in-memory store, so a page load always reflects the
//! server's view — at the cost of one `/me` round trip per navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::api::SessionApi;
use crate::net::types::{Items, User};

/// Path of the login page; the redirect target for every failed check.
pub const LOGIN_PATH: &str = "/login";

/// Result of a route guard: render the page with its data, or redirect.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome<T> {
    Allow(T),
    Redirect(&'static str),
}

/// Page data for the home page: the user plus the inventory listing.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeData {
    pub user: User,
    pub items: Items,
}

/// Shared session check used by every guard. Any failure — bad status,
/// transport fault, malformed body — reads as "no session".
async fn require_user(api: &SessionApi) -> Option<User> {
    match api.fetch_me().await {
        Ok(user) => Some(user),
        Err(error) => {
            tracing::debug!(%error, "guard session check failed");
            None
        }
    }
}

/// Layout-level guard run before rendering any page.
///
/// The login page itself is never gated (no network call, no data);
/// every other path requires a live session or redirects to `/login`.
pub async fn load_layout(api: &SessionApi, path: &str) -> GuardOutcome<Option<User>> {
    if path == LOGIN_PATH {
        return GuardOutcome::Allow(None);
    }
    match require_user(api).await {
        Some(user) => GuardOutcome::Allow(Some(user)),
        None => GuardOutcome::Redirect(LOGIN_PATH),
    }
}

/// Home page guard: session check plus the inventory listing.
///
/// Redirects if either fetch fails — the page never renders with the user
/// but no items.
pub async fn load_home(api: &SessionApi) -> GuardOutcome<HomeData> {
    let Some(user) = require_user(api).await else {
        return GuardOutcome::Redirect(LOGIN_PATH);
    };
    match api.fetch_items().await {
        Ok(items) => GuardOutcome::Allow(HomeData { user, items }),
        Err(error) => {
            tracing::debug!(%error, "items fetch failed after valid session");
            GuardOutcome::Redirect(LOGIN_PATH)
        }
    }
}
