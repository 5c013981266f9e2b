// src/scan/walk.rs
// =============================================================================
// This module walks a directory tree and yields markdown files.
//
// How it works:
// 1. Verify the root exists and is a directory (fails fast otherwise)
// 2. Walk every subdirectory with `walkdir`
// 3. Keep regular files (symlinks followed) whose name ends in ".md"
//
// Errors below the root (an unreadable subdirectory, a vanished file) are
// logged and skipped so one bad entry never aborts the whole scan.
//
// Rust concepts:
// - impl Iterator: the caller gets a lazy sequence without knowing its type
// - filter_map: skip entries that don't qualify in a single pass
// =============================================================================

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::error::ValidateError;

// The extension that marks a documentation file
const DOC_EXTENSION: &str = ".md";

// A discovered documentation file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    pub path: PathBuf,
}

// Returns a lazy iterator over every markdown file under `root`
//
// Parameters:
//   root: the documentation root directory
//
// Returns: Err(DirectoryNotFound) if root is missing, otherwise the iterator.
// Nothing is read from disk beyond the root check until the iterator is driven.
pub fn markdown_files(
    root: &Path,
) -> Result<impl Iterator<Item = DocumentFile>, ValidateError> {
    if !root.exists() {
        return Err(ValidateError::DirectoryNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ValidateError::NotADirectory(root.to_path_buf()));
    }

    let files = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| is_markdown_name(&entry.file_name().to_string_lossy()))
        // Follows symlinks: linked files are kept, linked directories dropped
        .filter(|entry| entry.path().is_file())
        .map(|entry| DocumentFile {
            path: entry.into_path(),
        });

    Ok(files)
}

// Case-sensitive, like the extension check on the file name itself
fn is_markdown_name(name: &str) -> bool {
    name.ends_with(DOC_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sorted_names(root: &Path) -> Vec<String> {
        let mut names: Vec<String> = markdown_files(root)
            .unwrap()
            .map(|f| {
                f.path
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_finds_markdown_recursively() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("guide/deep")).unwrap();
        fs::write(dir.path().join("index.md"), "").unwrap();
        fs::write(dir.path().join("guide/intro.md"), "").unwrap();
        fs::write(dir.path().join("guide/deep/more.md"), "").unwrap();
        fs::write(dir.path().join("guide/notes.txt"), "").unwrap();

        assert_eq!(
            sorted_names(dir.path()),
            vec!["guide/deep/more.md", "guide/intro.md", "index.md"]
        );
    }

    #[test]
    fn test_extension_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("UPPER.MD"), "").unwrap();
        fs::write(dir.path().join("lower.md"), "").unwrap();

        assert_eq!(sorted_names(dir.path()), vec!["lower.md"]);
    }

    #[test]
    fn test_directory_named_like_markdown_is_not_yielded() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("folder.md")).unwrap();
        fs::write(dir.path().join("folder.md/page.md"), "").unwrap();

        assert_eq!(sorted_names(dir.path()), vec!["folder.md/page.md"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_not_a_document() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        fs::write(dir.path().join("real/p.md"), "").unwrap();
        fs::write(dir.path().join("target.txt"), "").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link.md")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("target.txt"), dir.path().join("alias.md"))
            .unwrap();

        assert_eq!(sorted_names(dir.path()), vec!["alias.md", "real/p.md"]);
    }

    #[test]
    fn test_missing_root_fails_before_scanning() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = markdown_files(&missing).err().unwrap();
        assert!(matches!(err, ValidateError::DirectoryNotFound(p) if p == missing));
    }

    #[test]
    fn test_file_as_root_is_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("readme.md");
        fs::write(&file, "").unwrap();
        assert!(matches!(
            markdown_files(&file).err().unwrap(),
            ValidateError::NotADirectory(_)
        ));
    }
}
