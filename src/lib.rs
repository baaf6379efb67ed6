//! # stockroom
//!
//! Session and data-loading client for the inventory web application.
//! Replaces the browser-side auth glue with a Rust-native library layer:
//! a credentialed HTTP session API, an observable auth store, and
//! pre-render route guards that gate pages on a valid session.
//!
//! ERROR HANDLING
//! ==============
//! The session refresh and logout paths never surface errors to callers —
//! every HTTP failure, transport fault, or malformed body collapses to
//! "logged out" state. Everything else returns typed `ApiError` values.

pub mod config;
pub mod guard;
pub mod net;
pub mod session;
pub mod state;
