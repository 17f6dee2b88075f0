//! Intents for the login view.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    /// Credentials submitted and accepted for sending.
    Submitted,
    /// Session obtained and persisted.
    Succeeded,
    /// Attempt rejected, before or after the network call.
    Failed(String),
    /// Session cleared.
    LoggedOut,
}

impl Intent for LoginIntent {}
