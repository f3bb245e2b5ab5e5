//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (fetch a list, rate a gallery)
/// - Lifecycle events (app became inactive)
/// - Completions of asynchronous operations, carrying their `Result`
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
