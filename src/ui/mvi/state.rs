//! Base trait for screen state.

/// Marker trait for state snapshots.
///
/// States are cloned into observers and compared to skip redundant
/// notifications, so they must be `Clone + PartialEq`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
