//! Movie discovery client core.
//!
//! Wraps The Movie Database REST API and layers the browsing state machine,
//! shared favorites, transient notifications and the login flow on top of it.
//! The `cinescope` binary is a thin terminal front-end over these pieces.

pub mod args;
pub mod config;
pub mod favorites;
pub mod logging;
pub mod session;
pub mod tmdb;
pub mod ui;
