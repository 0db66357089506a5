//! Base trait for intents (field updates and other state-changing actions).

/// Marker trait for intent objects.
///
/// An intent describes one requested state transition: a selector field
/// update, a decomposed date arriving from the outside, a focus move.
/// Intents carry data only; reducers decide what they mean.
pub trait Intent: Send + 'static {}
