// src/checker/local.rs
// =============================================================================
// This module checks links that point at files inside the documentation tree.
//
// Resolution rules:
// - Fragment-only targets (#section) are always valid; nothing is checked
// - Targets starting with '/' are rooted at the documentation root
// - Everything else is relative to the directory of the file containing it
//
// A resolved path is valid when it is a file, or a directory that contains an
// index.md. Fragments are never verified against headings.
//
// Paths are normalized lexically ("." dropped, ".." pops a component), the
// same way for every link, so two spellings of the same file always agree.
// Symlinks are not resolved.
// =============================================================================

use std::path::{Component, Path, PathBuf};

use super::classify::{Category, LocalTarget};
use super::outcome::ValidationOutcome;

// The file that makes a directory a valid link target
const DIRECTORY_INDEX: &str = "index.md";

// Checks one local target
//
// Parameters:
//   target:      the classified target (path part and fragment)
//   source_file: the markdown file that contains the link
//   docs_root:   the documentation root passed to the scanner
pub fn check_local(target: &LocalTarget, source_file: &Path, docs_root: &Path) -> ValidationOutcome {
    if target.path.is_empty() {
        return ValidationOutcome::valid(Category::Local, "fragment only");
    }

    let resolved = resolve_local_path(&target.path, source_file, docs_root);

    if resolved.is_file() {
        return ValidationOutcome::valid(Category::Local, "file exists");
    }

    if resolved.is_dir() && resolved.join(DIRECTORY_INDEX).is_file() {
        return ValidationOutcome::valid(Category::Local, "directory with index.md");
    }

    ValidationOutcome::invalid(
        Category::Local,
        format!("File not found: {}", resolved.display()),
    )
}

// Turns the path part of a local target into an absolute, normalized path
//
// Examples (source file /docs/guide/a.md, root /docs):
//   "b.md"         -> /docs/guide/b.md
//   "../index.md"  -> /docs/index.md
//   "/api/x.md"    -> /docs/api/x.md
pub fn resolve_local_path(path: &str, source_file: &Path, docs_root: &Path) -> PathBuf {
    let joined = if path.starts_with('/') {
        docs_root.join(path.trim_start_matches('/'))
    } else {
        source_file
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(path)
    };

    normalize(&absolute(&joined))
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

// Lexical normalization: no filesystem access
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // ".." at the root stays at the root
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
