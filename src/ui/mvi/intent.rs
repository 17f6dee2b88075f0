//! Marker trait for intents.

/// A user action (submit, next page) or a system event (fetch finished)
/// fed to a reducer.
pub trait Intent: Send + 'static {}
