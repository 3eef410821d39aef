//! Core matching: a file belongs to a row when its lowercase name contains
//! every one of the row's attribute values as a contiguous substring.

use crate::index::FileIndex;

/// Return every remaining file whose lowercase name contains all of `values`.
///
/// `values` must already be trimmed, lowercased and non-empty; blank cells
/// contribute no constraint and are filtered out before this point. An empty
/// slice therefore matches every remaining file: a row with no usable
/// attributes constrains nothing. Callers must guard against overly generic
/// schemas, not this function.
///
/// All qualifying candidates are returned, not just one, since several photos
/// may belong to a single catalog row. Results follow the index iteration
/// order, which fixes the numeric suffix assigned downstream.
pub fn find_matches(values: &[String], index: &FileIndex) -> Vec<String> {
    index
        .entries()
        .filter(|(_, lower)| values.iter().all(|v| lower.contains(v.as_str())))
        .map(|(name, _)| name.to_string())
        .collect()
}
