//! In-memory registry of the photo files still available for matching.

use std::collections::BTreeMap;

/// Index of candidate files, keyed by original name with a cached lowercase
/// form. Once a row consumes a file it is removed and never comes back within
/// the run.
#[derive(Debug, Default)]
pub struct FileIndex {
    entries: BTreeMap<String, String>,
}

impl FileIndex {
    /// Build the index from a directory listing already filtered to the
    /// configured extension. Names are unique within a single listing.
    pub fn build<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let entries = names
            .into_iter()
            .map(|name| {
                let lower = name.to_lowercase();
                (name, lower)
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Remove a consumed file. Removing a name that is already gone is a no-op.
    pub fn remove(&mut self, name: &str) {
        self.entries.remove(name);
    }

    /// Remaining entries as (original name, lowercase name) pairs, in a
    /// deterministic (lexicographic) order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, l)| (n.as_str(), l.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> FileIndex {
        FileIndex::build(
            ["B-Photo.JPG", "a-photo.jpg", "c-photo.jpg"]
                .into_iter()
                .map(String::from),
        )
    }

    #[test]
    fn test_build_caches_lowercase() {
        let index = sample_index();
        assert_eq!(index.len(), 3);

        let entry = index.entries().find(|(n, _)| *n == "B-Photo.JPG").unwrap();
        assert_eq!(entry.1, "b-photo.jpg");
    }

    #[test]
    fn test_entries_deterministic_order() {
        let index = sample_index();
        let first: Vec<&str> = index.entries().map(|(n, _)| n).collect();
        let second: Vec<&str> = index.entries().map(|(n, _)| n).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut index = sample_index();
        index.remove("a-photo.jpg");
        assert_eq!(index.len(), 2);
        assert!(!index.contains("a-photo.jpg"));

        // Second removal of the same name must not change anything
        index.remove("a-photo.jpg");
        assert_eq!(index.len(), 2);

        index.remove("never-existed.jpg");
        assert_eq!(index.len(), 2);
    }
}
