//! Base trait for intents in the MVI layer.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User interactions (page, sort, filter, selection changes)
/// - Fetch lifecycle events (scheduled, loaded, failed)
pub trait Intent: Send + 'static {}
