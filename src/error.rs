// src/error.rs
// =============================================================================
// Error types for the validation pipeline.
//
// Only failures that stop a run live here. A broken link is NOT an error:
// it is recorded as an invalid outcome in the report and scanning continues.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidateError {
    /// The documentation root does not exist. Checked before any scanning.
    #[error("Directory '{}' does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The documentation root exists but is a regular file.
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The shared HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
