//! Base trait for intents in the MVI architecture.

/// Marker trait for intent objects.
///
/// An intent is a user action (key press), a system event (decode or
/// request completion) or a timer tick, processed by a reducer to
/// produce the next state.
pub trait Intent: Send + 'static {}
