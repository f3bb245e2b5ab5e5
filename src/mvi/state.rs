//! Base trait for UI state in MVI architecture.

/// Marker trait for state objects.
///
/// States should be:
/// - Cloneable (observers may keep snapshots)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
