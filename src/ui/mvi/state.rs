//! Base trait for UI state in the MVI architecture.

/// Marker trait for UI state objects.
///
/// States are immutable values: transitions clone-and-replace rather
/// than mutate, carry everything the view needs, and compare with
/// `PartialEq` so the controller can detect a rejected transition.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
