use crate::error::{RenamerError, Result};
use crate::schema::FILE_EXTENSION;
use std::path::Path;
use walkdir::WalkDir;

/// List the photo files directly inside `folder`, filtered to the configured
/// extension (case-insensitive). Names are sorted so that downstream suffix
/// assignment is deterministic.
pub fn scan_photo_folder(folder: &Path) -> Result<Vec<String>> {
    if !folder.is_dir() {
        return Err(RenamerError::FolderNotFound(folder.display().to_string()));
    }

    let mut names = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1) // direct children only, no recursion
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.to_lowercase().ends_with(FILE_EXTENSION) {
                names.push(name.to_string());
            }
        }
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_photo_folder(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(RenamerError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_empty() {
        let dir = tempdir().unwrap();
        let names = scan_photo_folder(dir.path()).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_scan_filters_extension_case_insensitively() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("shoe.jpg")).unwrap();
        File::create(dir.path().join("BAG.JPG")).unwrap();
        File::create(dir.path().join("scarf.Jpg")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        File::create(dir.path().join("photo.png")).unwrap();

        let names = scan_photo_folder(dir.path()).unwrap();
        assert_eq!(names, vec!["BAG.JPG", "scarf.Jpg", "shoe.jpg"]);
    }

    #[test]
    fn test_scan_is_not_recursive() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        File::create(dir.path().join("nested").join("inner.jpg")).unwrap();
        File::create(dir.path().join("top.jpg")).unwrap();

        let names = scan_photo_folder(dir.path()).unwrap();
        assert_eq!(names, vec!["top.jpg"]);
    }
}
