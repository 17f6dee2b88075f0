mod intent;
mod reducer;
mod state;

pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use state::LoginState;
