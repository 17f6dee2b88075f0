//! Marker trait for view state.

/// View state: cloned to produce the next state, compared to detect changes,
/// and defaulted when a view is reset.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
