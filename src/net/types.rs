//! Wire types for the session API.
//!
//! DESIGN
//! ======
//! The server owns the shape of users and items; this client passes them
//! through without interpreting fields. Both are transparent wrappers over
//! raw JSON so the UI layer decides what to render.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Opaque user record returned by the session endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(pub serde_json::Value);

/// Opaque item listing returned by `/items` (a JSON array in practice).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Items(pub serde_json::Value);

/// Envelope returned by `GET /me`.
#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

/// Error envelope returned by `POST /login` on rejected credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRejection {
    pub error: String,
}
