//! Exclusive consumption of matched files.

use crate::index::FileIndex;
use std::path::Path;

/// Rename `files` in place under `folder`, numbering them `{ean}-0`,
/// `{ean}-1`, ... with each file's original extension preserved.
///
/// Every file handed in is removed from the index whether or not its rename
/// succeeds: a failed rename is logged, never retried, and must not be seen
/// again by later rows. Returns how many renames actually succeeded.
pub fn assign_files(
    ean: &str,
    files: &[String],
    folder: &Path,
    index: &mut FileIndex,
) -> usize {
    println!("Renaming {} file(s) with EAN {}...", files.len(), ean);
    let mut renamed = 0;

    for (i, old_name) in files.iter().enumerate() {
        let extension = old_name
            .rfind('.')
            .map(|at| &old_name[at..])
            .unwrap_or_default();
        let new_name = format!("{}-{}{}", ean, i, extension);
        let old_path = folder.join(old_name);
        let new_path = folder.join(&new_name);

        match std::fs::rename(&old_path, &new_path) {
            Ok(()) => renamed += 1,
            Err(e) => println!("Error renaming file {}: {}", old_name, e),
        }
        index.remove(old_name);
    }

    renamed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_rename_preserves_extension_and_numbers_from_zero() {
        let dir = tempdir().unwrap();
        let names = vec![
            "ab1-red-1.jpg".to_string(),
            "ab1-red-2.JPG".to_string(),
            "ab1-red-3.jpg".to_string(),
        ];
        for name in &names {
            File::create(dir.path().join(name)).unwrap();
        }
        let mut index = FileIndex::build(names.iter().cloned());

        let renamed = assign_files("1234567890123", &names, dir.path(), &mut index);

        assert_eq!(renamed, 3);
        assert!(dir.path().join("1234567890123-0.jpg").exists());
        assert!(dir.path().join("1234567890123-1.JPG").exists());
        assert!(dir.path().join("1234567890123-2.jpg").exists());
        assert!(index.is_empty());
    }

    #[test]
    fn test_failed_rename_is_skipped_but_still_consumed() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("first.jpg")).unwrap();
        File::create(dir.path().join("third.jpg")).unwrap();

        // "missing.jpg" is in the batch but not on disk, so its rename fails
        let names = vec![
            "first.jpg".to_string(),
            "missing.jpg".to_string(),
            "third.jpg".to_string(),
        ];
        let mut index = FileIndex::build(names.iter().cloned());

        let renamed = assign_files("400638857881", &names, dir.path(), &mut index);

        assert_eq!(renamed, 2);
        assert!(dir.path().join("400638857881-0.jpg").exists());
        assert!(!dir.path().join("400638857881-1.jpg").exists());
        assert!(dir.path().join("400638857881-2.jpg").exists());

        // Consumption is unconditional, even for the failed entry
        assert!(index.is_empty());
    }
}
