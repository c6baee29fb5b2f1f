//! Identifier allocation for lists and todos.

/// Returns the next id for a collection: one past the largest existing id, or `1` when empty.
///
/// Gaps left by deletions are never filled; only ids above the current maximum are handed out.
/// Returns `None` once the largest id is `i32::MAX`.
pub fn next_id<I>(existing: I) -> Option<i32>
where
    I: IntoIterator<Item = i32>,
{
    match existing.into_iter().max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
