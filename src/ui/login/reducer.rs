//! Reducer for the login view.

use crate::ui::mvi::Reducer;

use super::intent::LoginIntent;
use super::state::LoginState;

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::Submitted => {
                if state.is_submitting() {
                    return state;
                }
                LoginState::Submitting
            }
            LoginIntent::Succeeded => LoginState::Authenticated,
            // Validation failures land here without passing through Submitting.
            LoginIntent::Failed(message) => LoginState::Failed { message },
            LoginIntent::LoggedOut => LoginState::Idle,
        }
    }
}
