mod controller;
mod dispatch;
mod intent;
mod reducer;
mod state;

pub use controller::{BrowseController, FetchOutcome};
pub use dispatch::{
    failure_message, found_message, query_too_short_message, recommendation_message,
    recommended, CatalogRequest, EMPTY_RESULTS_MESSAGE, GENERIC_FAILURE_MESSAGE,
    MISSING_CREDENTIAL_MESSAGE, UNAUTHORIZED_MESSAGE,
};
pub use intent::BrowseIntent;
pub use reducer::BrowseReducer;
pub use state::{BrowsePhase, BrowseState};
