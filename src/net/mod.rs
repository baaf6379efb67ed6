//! HTTP layer for the inventory session API.

pub mod api;
pub mod types;
