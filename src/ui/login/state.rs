//! State for the login view.

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginState {
    #[default]
    Idle,
    /// A login attempt is in flight.
    Submitting,
    Authenticated,
    /// Last attempt failed; `message` is shown inline.
    Failed { message: String },
}

impl UiState for LoginState {}

impl LoginState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, LoginState::Submitting)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, LoginState::Authenticated)
    }

    /// Inline error text, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoginState::Failed { message } => Some(message),
            _ => None,
        }
    }
}
