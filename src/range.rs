//! Integer ranges backing the selector option lists.

/// Inclusive ascending sequence `start, start+1, ..., end`.
///
/// Descending bounds yield the empty sequence. Month and day option ranges
/// are fixed by the widget; year bounds come from configuration and are
/// validated there before reaching this function.
pub fn range(start: i32, end: i32) -> Vec<i32> {
    if start > end {
        return Vec::new();
    }
    (start..=end).collect()
}

/// The same range rendered as the labels a selector displays.
pub fn range_labels(start: i32, end: i32) -> Vec<String> {
    range(start, end).into_iter().map(|i| i.to_string()).collect()
}
