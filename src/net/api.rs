//! REST helpers for the inventory session API.
//!
//! ARCHITECTURE
//! ============
//! Every request is credentialed: the underlying `reqwest::Client` carries a
//! cookie jar, so the server's session cookie rides along automatically once
//! `POST /login` succeeds. Callers that already hold a session cookie (the
//! CLI) inject a pre-configured client instead.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::json;

use super::types::{Items, LoginRejection, MeResponse, User};
use crate::config::ClientConfig;

/// Fallback shown when the server rejects credentials without a message body.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("login rejected: {message}")]
    RejectedCredentials { message: String },
}

/// Typed client for the session API endpoints.
#[derive(Debug, Clone)]
pub struct SessionApi {
    client: reqwest::Client,
    base_url: String,
}

impl SessionApi {
    /// Build a client with its own cookie jar for the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Build around an existing client (e.g. one carrying a session cookie
    /// header). The client must still have a cookie jar enabled if `login`
    /// is going to be called on it.
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self { client, base_url: config.base_url.clone() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Check the current session via `GET /me` and return the `user` field.
    ///
    /// # Errors
    ///
    /// Returns an error on transport faults, non-2xx statuses, or a body
    /// that does not contain a `user` field.
    pub async fn fetch_me(&self) -> Result<User, ApiError> {
        let response = self.client.get(self.url("/me")).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint: "/me", status: status.as_u16() });
        }
        let body: MeResponse = response.json().await?;
        Ok(body.user)
    }

    /// Authenticate via `POST /login`.
    ///
    /// # Errors
    ///
    /// Returns `RejectedCredentials` on HTTP 401 (carrying the server's
    /// error message when the body has one), `Status` on other non-2xx
    /// responses, and `Http` on transport faults.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("/login"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            let message = match response.json::<LoginRejection>().await {
                Ok(rejection) => rejection.error,
                Err(_) => INVALID_CREDENTIALS.to_string(),
            };
            return Err(ApiError::RejectedCredentials { message });
        }
        if !status.is_success() {
            return Err(ApiError::Status { endpoint: "/login", status: status.as_u16() });
        }
        Ok(())
    }

    /// End the server-side session via `POST /logout`. The response body is
    /// ignored; only transport faults and non-2xx statuses are reported so
    /// the caller can decide whether to care.
    ///
    /// # Errors
    ///
    /// Returns an error on transport faults or non-2xx statuses.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self.client.post(self.url("/logout")).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint: "/logout", status: status.as_u16() });
        }
        Ok(())
    }

    /// Fetch the inventory listing via `GET /items`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport faults, non-2xx statuses, or a
    /// non-JSON body.
    pub async fn fetch_items(&self) -> Result<Items, ApiError> {
        let response = self.client.get(self.url("/items")).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint: "/items", status: status.as_u16() });
        }
        let items: Items = response.json().await?;
        Ok(items)
    }
}
