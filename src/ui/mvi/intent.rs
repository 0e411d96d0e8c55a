//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents cover user edits in the filter sheet, list navigation, and
/// results arriving from the news API.
pub trait Intent: Send + 'static {}
