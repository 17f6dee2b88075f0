//! Login flow: credentials in, persisted session out.

use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;

use crate::tmdb::{Authenticator, TmdbError};
use crate::ui::login::{LoginIntent, LoginReducer, LoginState};
use crate::ui::mvi::Reducer;

use super::{SessionStore, StorageError};

/// Shown when an error carries no text of its own.
pub const UNEXPECTED_LOGIN_ERROR: &str = "An unexpected error occurred during login.";

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Please enter both username and password.")]
    MissingFields,

    #[error("A login attempt is already in progress.")]
    InProgress,

    #[error("Invalid session ID received from server")]
    InvalidSession,

    #[error("Local storage is not available. Are you in private browsing mode?")]
    StorageUnavailable,

    #[error("Local storage is full. Please clear some browser data and try again.")]
    StorageFull(#[source] StorageError),

    #[error("Failed to save session. Please check your browser settings or try a different browser.")]
    SaveFailed(#[source] StorageError),

    #[error(transparent)]
    Remote(#[from] TmdbError),
}

impl LoginError {
    /// Text shown inline under the login form.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNEXPECTED_LOGIN_ERROR.to_string()
        } else {
            message
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            LoginError::MissingFields => "missing_fields",
            LoginError::InProgress => "in_progress",
            LoginError::InvalidSession => "invalid_session",
            LoginError::StorageUnavailable => "storage_unavailable",
            LoginError::StorageFull(_) => "storage_full",
            LoginError::SaveFailed(_) => "save_failed",
            LoginError::Remote(e) => e.error_type(),
        }
    }
}

impl From<StorageError> for LoginError {
    fn from(err: StorageError) -> Self {
        if err.is_full() {
            LoginError::StorageFull(err)
        } else {
            LoginError::SaveFailed(err)
        }
    }
}

/// Runs the login state machine against an [`Authenticator`] and a
/// [`SessionStore`].
pub struct LoginFlow<A: Authenticator + ?Sized> {
    authenticator: Arc<A>,
    session: SessionStore,
    state: Mutex<LoginState>,
}

impl<A: Authenticator + ?Sized> LoginFlow<A> {
    /// Starts out `Authenticated` when a session is already stored.
    pub fn new(authenticator: Arc<A>, session: SessionStore) -> Self {
        let state = if session.is_authenticated() {
            LoginState::Authenticated
        } else {
            LoginState::Idle
        };
        Self {
            authenticator,
            session,
            state: Mutex::new(state),
        }
    }

    pub fn state(&self) -> LoginState {
        self.state.lock().clone()
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn dispatch(&self, intent: LoginIntent) {
        let mut state = self.state.lock();
        *state = LoginReducer::reduce(std::mem::take(&mut *state), intent);
    }

    /// Authenticate and persist the session id.
    ///
    /// On failure the state moves to `Failed` with the user-facing message
    /// and the error is returned as well.
    ///
    /// While another attempt is in flight every call returns
    /// [`LoginError::InProgress`] and leaves the state untouched, including
    /// calls with missing fields.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, LoginError> {
        {
            let mut state = self.state.lock();
            if state.is_submitting() {
                tracing::debug!("Login skipped: already submitting");
                return Err(LoginError::InProgress);
            }
            if username.is_empty() || password.is_empty() {
                let err = LoginError::MissingFields;
                tracing::warn!(error_type = err.error_type(), error = %err, "Login failed");
                *state = LoginReducer::reduce(
                    std::mem::take(&mut *state),
                    LoginIntent::Failed(err.user_message()),
                );
                return Err(err);
            }
            *state = LoginReducer::reduce(std::mem::take(&mut *state), LoginIntent::Submitted);
        }

        tracing::info!(username, "Logging in");
        match self.attempt(username, password).await {
            Ok(session_id) => {
                self.dispatch(LoginIntent::Succeeded);
                tracing::info!(username, "Login succeeded");
                Ok(session_id)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    async fn attempt(&self, username: &str, password: &str) -> Result<String, LoginError> {
        let session_id = self.authenticator.authenticate(username, password).await?;
        if session_id.is_empty() {
            return Err(LoginError::InvalidSession);
        }
        if !self.session.storage().is_available() {
            return Err(LoginError::StorageUnavailable);
        }
        self.session.persist(&session_id)?;
        Ok(session_id)
    }

    fn fail(&self, err: LoginError) -> LoginError {
        tracing::warn!(error_type = err.error_type(), error = %err, "Login failed");
        self.dispatch(LoginIntent::Failed(err.user_message()));
        err
    }

    pub fn logout(&self) -> Result<(), StorageError> {
        self.session.logout()?;
        self.dispatch(LoginIntent::LoggedOut);
        Ok(())
    }
}
