//! Base trait for reducer-owned UI state.

/// Marker trait for state objects.
///
/// A state value is:
/// - replaced, not mutated (reducers take it by value and return a new one)
/// - self-contained (everything the view projects from)
/// - comparable (`PartialEq` is how value transitions are observed)
/// - constructible empty (`Default` is the mount state)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
